use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::prelude::*;
use store::{FileStorage, MonitorConfig};
use tracing_subscriber::EnvFilter;
use ui::{MonitorProvider, NavItem, StorageHandle};
use views::{
    AiChat, ClientUpload, Clients, Dashboard, Login, Notifications, PhoneNumbers, Products, Root,
    Shell, Upload,
};

mod views;

const APP_DIR: &str = "akram-monitor";

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
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    dioxus::launch(App);
}

/// Session files live under the platform data dir, e.g.
/// `~/.local/share/akram-monitor/` on Linux.
fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// `akram-monitor.toml` from the platform config dir, then the
/// `AKRAM_API_URL` override.
fn load_config(dir: &Path) -> MonitorConfig {
    read_config_file(dir).with_api_override(api::config::env_override())
}

/// The config file alone. A missing file means defaults; an unreadable one
/// is logged and ignored.
fn read_config_file(dir: &Path) -> MonitorConfig {
    let path = dir.join(MonitorConfig::filename());
    match std::fs::read_to_string(&path) {
        Ok(text) => match MonitorConfig::from_toml(&text) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                MonitorConfig::default()
            }
        },
        Err(_) => MonitorConfig::default(),
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[component]
fn App() -> Element {
    let storage = use_hook(|| {
        let base = data_dir();
        tracing::debug!("Session storage at {}", base.display());
        StorageHandle(Arc::new(FileStorage::new(base)))
    });
    let config = use_hook(|| load_config(&config_dir()));

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_entry_has_a_route() {
        for item in NavItem::ALL {
            assert_eq!(Route::from(item).nav_item(), item);
        }
    }

    #[test]
    fn test_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("akram-monitor.toml"),
            "[api]\nbase_url = \"http://10.0.0.5:8000\"\n\n[products]\npage_size = 50\n",
        )
        .unwrap();
        let config = read_config_file(dir.path());
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.products.page_size, 50);
        assert_eq!(config.polling.whatsapp_secs, 5);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("akram-monitor.toml"), "[api\nbroken").unwrap();
        assert_eq!(read_config_file(dir.path()), MonitorConfig::default());
    }

    #[test]
    fn test_missing_config_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_config_file(dir.path()), MonitorConfig::default());
    }

    #[test]
    fn test_override_replaces_file_url() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("akram-monitor.toml"),
            "[api]\nbase_url = \"http://10.0.0.5:8000\"\n",
        )
        .unwrap();
        let config = read_config_file(dir.path())
            .with_api_override(Some("https://monitor.akram.com.br".to_string()));
        assert_eq!(config.api.base_url, "https://monitor.akram.com.br");
    }
}
