//! API origin configuration.

use store::config::{API_URL_ENV, DEFAULT_API_URL};
use store::MonitorConfig;

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl From<&MonitorConfig> for ApiConfig {
    fn from(config: &MonitorConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from `AKRAM_API_URL`, defaulting to
    /// `http://localhost:8000`.
    ///
    /// Native builds read the variable at runtime (loading `.env` first);
    /// web builds bake it in at compile time.
    pub fn from_env() -> Self {
        Self::from(&MonitorConfig::default().with_api_override(env_override()))
    }
}

/// The `AKRAM_API_URL` override, if set.
#[cfg(not(target_arch = "wasm32"))]
pub fn env_override() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(API_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
pub fn env_override() -> Option<String> {
    let _ = API_URL_ENV;
    option_env!("AKRAM_API_URL").map(str::to_string)
}
