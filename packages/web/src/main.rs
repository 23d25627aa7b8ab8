use std::sync::Arc;

use dioxus::prelude::*;
use store::{MonitorConfig, SharedStorage};
use ui::{MonitorProvider, NavItem, StorageHandle};
use views::{
    AiChat, ClientUpload, Clients, Dashboard, Login, Notifications, PhoneNumbers, Products, Root,
    Shell, Upload,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/products")]
        Products {},
        #[route("/dashboard/upload")]
        Upload {},
        #[route("/dashboard/clients")]
        Clients {},
        #[route("/dashboard/client-upload")]
        ClientUpload {},
        #[route("/dashboard/phone-numbers")]
        PhoneNumbers {},
        #[route("/dashboard/notifications")]
        Notifications {},
        #[route("/dashboard/ai")]
        AiChat {},
}

impl Route {
    /// Menu entry highlighted for this route.
    fn nav_item(&self) -> NavItem {
        match self {
            Route::Products {} => NavItem::Products,
            Route::Upload {} => NavItem::Upload,
            Route::Clients {} => NavItem::Clients,
            Route::ClientUpload {} => NavItem::ClientUpload,
            Route::PhoneNumbers {} => NavItem::PhoneNumbers,
            Route::Notifications {} => NavItem::Notifications,
            Route::AiChat {} => NavItem::Ai,
            Route::Root {} | Route::Login {} | Route::Dashboard {} => NavItem::Dashboard,
        }
    }
}

impl From<NavItem> for Route {
    fn from(item: NavItem) -> Self {
        match item {
            NavItem::Dashboard => Route::Dashboard {},
            NavItem::Products => Route::Products {},
            NavItem::Upload => Route::Upload {},
            NavItem::Clients => Route::Clients {},
            NavItem::ClientUpload => Route::ClientUpload {},
            NavItem::PhoneNumbers => Route::PhoneNumbers {},
            NavItem::Notifications => Route::Notifications {},
            NavItem::Ai => Route::AiChat {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

fn make_storage() -> SharedStorage {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(store::LocalStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::MemoryStorage::new())
    }
}

#[component]
fn App() -> Element {
    let storage = use_hook(|| StorageHandle(make_storage()));
    let config =
        use_hook(|| MonitorConfig::default().with_api_override(api::config::env_override()));

    rsx! {
        document::Title { "Akram Monitor" }
        document::Stylesheet { href: ui::THEME_CSS }
        document::Stylesheet { href: ui::COMPONENTS_CSS }

        MonitorProvider {
            storage,
            config,
            Router::<Route> {}
        }
    }
}
