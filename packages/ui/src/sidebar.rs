use dioxus::prelude::*;
use store::User;

use store::Theme;

use crate::icons::{
    FaBell, FaBox, FaBrain, FaChartPie, FaCloudArrowUp, FaMoon, FaPhone, FaRightFromBracket,
    FaSun, FaUpload, FaUsers, FaXmark,
};
use crate::session::{toggle_theme, use_session, use_theme};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Sections of the dashboard shell, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    Dashboard,
    Products,
    Upload,
    Clients,
    ClientUpload,
    PhoneNumbers,
    Notifications,
    Ai,
}

impl NavItem {
    pub const ALL: [NavItem; 8] = [
        NavItem::Dashboard,
        NavItem::Products,
        NavItem::Upload,
        NavItem::Clients,
        NavItem::ClientUpload,
        NavItem::PhoneNumbers,
        NavItem::Notifications,
        NavItem::Ai,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Products => "Produtos",
            NavItem::Upload => "Upload Produtos",
            NavItem::Clients => "Clientes",
            NavItem::ClientUpload => "Upload Clientes",
            NavItem::PhoneNumbers => "Telefones",
            NavItem::Notifications => "Notificações",
            NavItem::Ai => "IA / RAG",
        }
    }
}

fn nav_icon(item: NavItem) -> Element {
    match item {
        NavItem::Dashboard => rsx! { Icon { icon: FaChartPie, width: 16, height: 16 } },
        NavItem::Products => rsx! { Icon { icon: FaBox, width: 16, height: 16 } },
        NavItem::Upload => rsx! { Icon { icon: FaUpload, width: 16, height: 16 } },
        NavItem::Clients => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavItem::ClientUpload => rsx! { Icon { icon: FaCloudArrowUp, width: 16, height: 16 } },
        NavItem::PhoneNumbers => rsx! { Icon { icon: FaPhone, width: 16, height: 16 } },
        NavItem::Notifications => rsx! { Icon { icon: FaBell, width: 16, height: 16 } },
        NavItem::Ai => rsx! { Icon { icon: FaBrain, width: 16, height: 16 } },
    }
}

/// Navigation menu with the user card and logout at the bottom.
///
/// On narrow screens the sidebar is off-canvas; `open` slides it in and
/// `on_close` is called by the backdrop and the close button.
#[component]
pub fn AppSidebar(
    active: NavItem,
    user: Option<User>,
    open: bool,
    on_navigate: EventHandler<NavItem>,
    on_logout: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        if open {
            div { class: "sidebar-backdrop", onclick: move |_| on_close.call(()) }
        }

        aside {
            class: if open { "sidebar sidebar--open" } else { "sidebar" },

            div {
                class: "sidebar-brand",
                div { class: "sidebar-logo", Icon { icon: FaBox, width: 14, height: 14 } }
                div {
                    span { class: "sidebar-brand-name", "Akram" }
                    p { class: "sidebar-brand-sub", "Monitor" }
                }
                button {
                    class: "sidebar-close",
                    title: "Fechar menu",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }

            nav {
                class: "sidebar-nav",
                p { class: "sidebar-section", "Menu" }
                for item in NavItem::ALL {
                    button {
                        key: "{item.label()}",
                        class: if item == active { "nav-item active" } else { "nav-item" },
                        onclick: move |_| on_navigate.call(item),
                        {nav_icon(item)}
                        span { "{item.label()}" }
                    }
                }
            }

            div {
                class: "sidebar-user",
                if let Some(u) = user {
                    div { class: "sidebar-avatar", "{u.initial()}" }
                    div {
                        class: "sidebar-user-info",
                        p { class: "sidebar-user-name", "{u.name}" }
                        p { class: "sidebar-user-role", "{u.role}" }
                    }
                }
                button {
                    class: "sidebar-logout",
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    span { "Sair" }
                }
            }
        }
    }
}

/// Light/dark switch for the top bar. Shows the icon of the theme it
/// switches to.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let session = use_session();

    let (title, icon) = match theme() {
        Theme::Dark => ("Tema claro", rsx! { Icon { icon: FaSun, width: 14, height: 14 } }),
        Theme::Light => ("Tema escuro", rsx! { Icon { icon: FaMoon, width: 14, height: 14 } }),
    };

    rsx! {
        button {
            class: "theme-toggle",
            title,
            onclick: move |_| {
                let storage = session.peek().store.storage().clone();
                toggle_theme(theme, &storage);
            },
            {icon}
        }
    }
}
