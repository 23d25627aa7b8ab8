//! Client-side application state for Akram Monitor.
//!
//! Everything in this crate is plain data plus update operations, so it can be
//! tested without a renderer or a network:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`storage`] | [`KeyValueStore`] trait for durable client storage |
//! | [`session`] | Bearer token + user profile, persisted under fixed keys |
//! | [`filters`] | Product-list filter criteria and pagination cursor |
//! | [`query`] | Keyed response cache with root-prefix invalidation |
//! | [`config`] | `akram-monitor.toml` configuration |
//! | [`theme`] | Persisted light/dark preference |

pub mod config;
pub mod filters;
pub mod models;
pub mod query;
pub mod session;
pub mod storage;
pub mod theme;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::MonitorConfig;
pub use filters::{FilterKey, ProductFilters};
pub use models::User;
pub use query::{QueryCache, QueryKey};
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStore, SharedStorage};
pub use theme::Theme;
