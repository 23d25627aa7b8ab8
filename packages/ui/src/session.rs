//! Session and service contexts for the UI.
//!
//! [`MonitorProvider`] wires the services every page needs into context:
//! the [`ApiClient`], the [`QueryClient`] cache, the [`MonitorConfig`], a
//! `Signal<SessionState>`, the product filters and the [`ThemeSignal`]. Launchers wrap their
//! router with it.

use std::sync::Arc;

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;
use store::{MonitorConfig, ProductFilters, SessionStore, SharedStorage, Theme, User};

use crate::query::QueryClient;

/// Current session plus the `mounted` flag: protected pages must not redirect
/// before storage has been read once.
#[derive(Clone)]
pub struct SessionState {
    pub store: SessionStore,
    pub mounted: bool,
}

impl SessionState {
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            store: SessionStore::new(storage),
            mounted: false,
        }
    }

    /// Read the persisted session the first time only.
    pub fn hydrate(&mut self) {
        if !self.mounted {
            self.store.load_from_storage();
            self.mounted = true;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.store.user().cloned()
    }
}

/// Durable storage handed to [`MonitorProvider`]. Equality is identity.
#[derive(Clone)]
pub struct StorageHandle(pub SharedStorage);

impl PartialEq for StorageHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Product-list filters. Held for the lifetime of the app, never persisted.
pub fn use_filters() -> Signal<ProductFilters> {
    use_context::<Signal<ProductFilters>>()
}

/// Active colour scheme, loaded from storage when the provider mounts.
pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Point the document's `data-theme` attribute at `theme`.
pub fn apply_theme(theme: Theme) {
    let js = format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        theme.as_str()
    );
    let _ = document::eval(&js);
}

/// Flip the theme and remember the choice.
pub fn toggle_theme(mut theme: ThemeSignal, storage: &SharedStorage) -> Theme {
    let next = theme.peek().toggled();
    next.save(storage.as_ref());
    theme.set(next);
    tracing::debug!("Theme set to {}", next.as_str());
    next
}

pub fn use_config() -> MonitorConfig {
    use_context::<MonitorConfig>()
}

#[component]
pub fn MonitorProvider(storage: StorageHandle, config: MonitorConfig, children: Element) -> Element {
    let api_config = ApiConfig::from(&config);
    use_context_provider(|| {
        tracing::info!("Using API at {}", api_config.base_url);
        ApiClient::new(&api_config, storage.0.clone())
    });
    use_context_provider(|| config.clone());
    use_context_provider(QueryClient::new);
    use_context_provider(|| Signal::new(SessionState::new(storage.0.clone())));
    use_context_provider(|| Signal::new(ProductFilters::default()));
    let theme: ThemeSignal =
        use_context_provider(|| Signal::new(Theme::load(storage.0.as_ref())));
    use_effect(move || apply_theme(theme()));

    rsx! {
        {children}
    }
}

/// End the session locally: storage keys, memory and cached responses.
pub fn logout(mut session: Signal<SessionState>, queries: QueryClient) {
    session.write().store.logout();
    queries.clear();
    tracing::info!("Logged out");
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use dioxus_core::VirtualDom;
    use store::session::TOKEN_KEY;
    use store::theme::THEME_KEY;
    use store::{KeyValueStore, MemoryStorage};

    use super::*;
    use crate::testing::{run_for, signed_in_storage, storage_handle};

    #[test]
    fn test_hydrate_reads_storage_once() {
        let storage = signed_in_storage();
        let mut state = SessionState::new(Arc::new(storage.clone()));
        assert!(!state.mounted);
        assert!(!state.is_authenticated());

        state.hydrate();
        assert!(state.mounted);
        assert!(state.is_authenticated());
        assert_eq!(state.user().unwrap().name, "Admin");

        storage.remove(TOKEN_KEY);
        state.hydrate();
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_hydrate_without_session() {
        let mut state = SessionState::new(Arc::new(MemoryStorage::new()));
        state.hydrate();
        assert!(state.mounted);
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    // 1 = light was loaded, 2 = toggled to dark afterwards.
    static THEME_STEPS: AtomicUsize = AtomicUsize::new(0);

    #[component]
    fn ThemeReader() -> Element {
        let theme = use_theme();
        let session = use_session();
        use_hook(move || {
            if *theme.peek() == Theme::Light {
                THEME_STEPS.store(1, Ordering::SeqCst);
            }
            spawn(async move {
                let storage = session.peek().store.storage().clone();
                if toggle_theme(theme, &storage) == Theme::Dark {
                    THEME_STEPS.fetch_add(1, Ordering::SeqCst);
                }
            });
        });
        rsx! {}
    }

    #[component]
    fn ThemeApp(storage: StorageHandle) -> Element {
        rsx! {
            MonitorProvider { storage, config: MonitorConfig::default(), ThemeReader {} }
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_theme_loads_and_toggle_persists() {
        let storage = MemoryStorage::new();
        storage.set(THEME_KEY, "light");

        let mut dom = VirtualDom::new_with_props(
            ThemeApp,
            ThemeAppProps {
                storage: storage_handle(&storage),
            },
        );
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_millis(50)).await;

        assert_eq!(THEME_STEPS.load(Ordering::SeqCst), 2);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
