use api::ApiError;
use dioxus::prelude::*;

use crate::components::BannerKind;

mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod sidebar_layout;
pub use sidebar_layout::SidebarLayoutView;

mod login;
pub use login::LoginView;

mod root;
pub use root::RootView;

mod dashboard;
pub use dashboard::DashboardView;

mod products;
pub use products::ProductsView;

mod upload;
pub use upload::{ClientUploadView, UploadView};

mod clients;
pub use clients::ClientsView;

mod phone_numbers;
pub use phone_numbers::PhoneNumbersView;

mod notifications;
pub use notifications::NotificationsView;

mod ai_chat;
pub use ai_chat::AiChatView;

/// Outcome of a page action, shown as a [`Banner`](crate::components::Banner).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ActionResult {
    pub kind: BannerKind,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: String) -> Self {
        Self {
            kind: BannerKind::Success,
            message,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.to_string(),
        }
    }

    pub fn from_error(error: &ApiError, fallback: &str) -> Self {
        tracing::warn!("Action failed: {}", error);
        Self::error(&error.user_message(fallback))
    }
}

/// Inline load failure. A 401 renders nothing: the shell is already
/// redirecting to login.
#[component]
pub(crate) fn QueryError(error: ApiError, fallback: String) -> Element {
    if error.is_unauthorized() {
        return rsx! {};
    }
    let message = error.user_message(&fallback);
    rsx! {
        p { class: "error-text", "{message}" }
    }
}
