use dioxus::prelude::*;
use ui::views::{
    AiChatView, ClientUploadView, ClientsView, DashboardView, NotificationsView,
    PhoneNumbersView, ProductsView, UploadView,
};

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
pub fn Products() -> Element {
    rsx! { ProductsView {} }
}

#[component]
pub fn Upload() -> Element {
    rsx! { UploadView {} }
}

#[component]
pub fn Clients() -> Element {
    rsx! { ClientsView {} }
}

#[component]
pub fn ClientUpload() -> Element {
    rsx! { ClientUploadView {} }
}

#[component]
pub fn PhoneNumbers() -> Element {
    rsx! { PhoneNumbersView {} }
}

#[component]
pub fn Notifications() -> Element {
    rsx! { NotificationsView {} }
}

#[component]
pub fn AiChat() -> Element {
    rsx! { AiChatView {} }
}
