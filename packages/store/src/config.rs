//! # Client configuration: `akram-monitor.toml`
//!
//! Optional TOML file read by the desktop launcher from the platform config
//! directory (filename: [`MonitorConfig::filename`]). The web build uses the
//! defaults plus the compile-time `AKRAM_API_URL` override.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [polling]
//! dashboard_secs = 60   # dashboard, clients, scheduler badge
//! whatsapp_secs = 5     # Evolution connection status and QR code
//!
//! [products]
//! page_size = 30
//! ```
//!
//! A missing or empty file is equivalent to [`MonitorConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::filters::DEFAULT_PAGE_SIZE;
use crate::query::{DASHBOARD_REFETCH, WHATSAPP_REFETCH};

/// Environment variable that overrides [`ApiSection::base_url`].
pub const API_URL_ENV: &str = "AKRAM_API_URL";

/// API origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub products: ProductsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_dashboard_secs")]
    pub dashboard_secs: u64,
    #[serde(default = "default_whatsapp_secs")]
    pub whatsapp_secs: u64,
}

fn default_dashboard_secs() -> u64 {
    DASHBOARD_REFETCH.as_secs()
}

fn default_whatsapp_secs() -> u64 {
    WHATSAPP_REFETCH.as_secs()
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            dashboard_secs: default_dashboard_secs(),
            whatsapp_secs: default_whatsapp_secs(),
        }
    }
}

impl PollingConfig {
    pub fn dashboard(&self) -> Duration {
        Duration::from_secs(self.dashboard_secs.max(1))
    }

    pub fn whatsapp(&self) -> Duration {
        Duration::from_secs(self.whatsapp_secs.max(1))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductsConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl MonitorConfig {
    /// Create a config pointing at the given API origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiSection {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Replace the base URL when an override is present and non-empty.
    pub fn with_api_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "akram-monitor.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = MonitorConfig::from_toml("").unwrap();
        assert_eq!(config, MonitorConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.polling.dashboard(), Duration::from_secs(60));
        assert_eq!(config.polling.whatsapp(), Duration::from_secs(5));
        assert_eq!(config.products.page_size, 30);
    }

    #[test]
    fn test_partial_sections() {
        let config = MonitorConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.akram.example"

            [polling]
            whatsapp_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.akram.example");
        assert_eq!(config.polling.dashboard_secs, 60);
        assert_eq!(config.polling.whatsapp_secs, 10);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = MonitorConfig::new("http://10.0.0.5:8000");
        let text = config.to_toml().unwrap();
        assert_eq!(MonitorConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_api_override() {
        let config = MonitorConfig::default().with_api_override(Some(" http://api:9000 ".to_string()));
        assert_eq!(config.api.base_url, "http://api:9000");

        let config = MonitorConfig::default().with_api_override(Some("   ".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);

        let config = MonitorConfig::default().with_api_override(None);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = MonitorConfig::from_toml("[polling]\ndashboard_secs = 0").unwrap();
        assert_eq!(config.polling.dashboard(), Duration::from_secs(1));
    }
}
