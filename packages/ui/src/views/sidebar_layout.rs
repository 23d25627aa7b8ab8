use dioxus::prelude::*;

use crate::icons::FaBars;
use crate::query::{use_api, use_query_client};
use crate::session::{logout, use_session};
use crate::{AppSidebar, Icon, NavItem, ThemeToggle};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Authenticated shell around every dashboard page.
///
/// Reads the persisted session once on mount and shows a placeholder until
/// then. Afterwards a missing session, a logout or a 401 anywhere in the app
/// calls `on_unauthenticated`; the platform crate decides where that goes.
#[component]
pub fn SidebarLayoutView(
    /// Section highlighted in the menu and named in the top bar.
    active: NavItem,
    /// The router outlet for child routes.
    children: Element,
    on_navigate: EventHandler<NavItem>,
    on_unauthenticated: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let queries = use_query_client();
    let api = use_api();
    let mut sidebar_open = use_signal(|| false);

    use_effect(move || {
        if !session.peek().mounted {
            session.write().hydrate();
        }
    });

    use_effect(move || {
        let state = session.read();
        if state.mounted && !state.is_authenticated() {
            on_unauthenticated.call(());
        }
    });

    // A 401 has already removed the persisted keys; drop what is left in
    // memory so the effect above redirects.
    use_hook(move || {
        let mut events = api.session_events();
        spawn(async move {
            while events.changed().await.is_ok() {
                tracing::warn!("Session rejected by the server");
                session.write().store.clear_memory();
                queries.clear();
            }
        });
    });

    let state = session.read();
    if !state.mounted || !state.is_authenticated() {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            div { class: "loading-screen", "Carregando..." }
        };
    }
    let user = state.user();
    drop(state);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "shell",

            AppSidebar {
                active,
                user,
                open: sidebar_open(),
                on_navigate: move |item| {
                    sidebar_open.set(false);
                    on_navigate.call(item);
                },
                on_logout: move |_| logout(session, queries),
                on_close: move |_| sidebar_open.set(false),
            }

            div {
                class: "shell-main",
                header {
                    class: "topbar",
                    button {
                        class: "topbar-menu",
                        title: "Abrir menu",
                        onclick: move |_| sidebar_open.set(true),
                        Icon { icon: FaBars, width: 16, height: 16 }
                    }
                    h1 { class: "topbar-title", "{active.label()}" }
                    div {
                        class: "topbar-actions",
                        ThemeToggle {}
                        span {
                            class: "online-pill",
                            span { class: "online-dot" }
                            "Online"
                        }
                    }
                }
                main {
                    class: "shell-content",
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use dioxus_core::VirtualDom;
    use store::session::{TOKEN_KEY, USER_KEY};
    use store::{KeyValueStore, MemoryStorage, MonitorConfig};

    use super::*;
    use crate::testing::{run_for, signed_in_storage, storage_handle};
    use crate::{MonitorProvider, StorageHandle};

    /// Backend whose only route answers `/api/auth/me` with 401.
    async fn rejecting_backend() -> String {
        let app = Router::new().route("/api/auth/me", get(|| async { StatusCode::UNAUTHORIZED }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Page {
        Idle,
        CallsMe,
    }

    // One slot per test so parallel tests keep separate counters.
    static MOUNTS: [AtomicUsize; 3] = [AtomicUsize::new(0), AtomicUsize::new(0), AtomicUsize::new(0)];
    static REDIRECTS: [AtomicUsize; 3] = [AtomicUsize::new(0), AtomicUsize::new(0), AtomicUsize::new(0)];

    #[component]
    fn CurrentUserPage(page: Page, slot: usize) -> Element {
        let api = use_api();
        use_hook(move || {
            MOUNTS[slot].fetch_add(1, Ordering::SeqCst);
            if page == Page::CallsMe {
                spawn(async move {
                    let _ = api.me().await;
                });
            }
        });
        rsx! { "conteúdo" }
    }

    #[component]
    fn ShellApp(storage: StorageHandle, config: MonitorConfig, page: Page, slot: usize) -> Element {
        rsx! {
            MonitorProvider {
                storage,
                config,
                SidebarLayoutView {
                    active: NavItem::Dashboard,
                    on_navigate: |_| {},
                    on_unauthenticated: move |_| {
                        REDIRECTS[slot].fetch_add(1, Ordering::SeqCst);
                    },
                    CurrentUserPage { page, slot }
                }
            }
        }
    }

    async fn run_shell(storage: &MemoryStorage, base_url: &str, page: Page, slot: usize) {
        let mut dom = VirtualDom::new_with_props(
            ShellApp,
            ShellAppProps {
                storage: storage_handle(storage),
                config: MonitorConfig::new(base_url),
                page,
                slot,
            },
        );
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_millis(300)).await;
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_stored_session_renders_page_without_redirect() {
        let storage = signed_in_storage();
        run_shell(&storage, "http://127.0.0.1:9", Page::Idle, 0).await;

        assert_eq!(MOUNTS[0].load(Ordering::SeqCst), 1);
        assert_eq!(REDIRECTS[0].load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_missing_session_redirects_after_hydration() {
        let storage = MemoryStorage::new();
        run_shell(&storage, "http://127.0.0.1:9", Page::Idle, 1).await;

        assert_eq!(MOUNTS[1].load(Ordering::SeqCst), 0);
        assert!(REDIRECTS[1].load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_unauthorized_response_ends_session() {
        let base_url = rejecting_backend().await;
        let storage = signed_in_storage();
        run_shell(&storage, &base_url, Page::CallsMe, 2).await;

        assert_eq!(MOUNTS[2].load(Ordering::SeqCst), 1);
        assert!(REDIRECTS[2].load(Ordering::SeqCst) >= 1);
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    }
}
