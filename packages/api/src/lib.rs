//! # API crate: typed client for the Akram Monitor REST backend
//!
//! Every page of the dashboard reaches the backend through [`ApiClient`]. The
//! crate owns the transport concerns so the UI only deals with typed results.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`: bearer token injection, 401 session invalidation, status classification |
//! | [`config`] | `ApiConfig`: API origin, with the `AKRAM_API_URL` override |
//! | [`error`] | `ApiError` taxonomy and the `detail` extraction used by error banners |
//! | [`models`] | Response and request bodies for every endpoint |
//! | [`upload`] | `SpreadsheetFile`: the `.xlsx`/`.csv` gate in front of the upload endpoints |
//!
//! The endpoint methods themselves (`login`, `products`, `trigger_notifications`,
//! ...) are inherent methods on `ApiClient`, defined in a private module.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod upload;

mod endpoints;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use upload::SpreadsheetFile;
