use dioxus::prelude::*;
use ui::views::{LoginView, RootView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}

/// Redirect `/` to the dashboard or the login page.
#[component]
pub fn Root() -> Element {
    let nav = use_navigator();
    rsx! {
        RootView {
            on_resolved: move |authenticated: bool| {
                if authenticated {
                    nav.replace(Route::Dashboard {});
                } else {
                    nav.replace(Route::Login {});
                }
            },
        }
    }
}
