use std::sync::Arc;

/// Durable client-side key/value storage.
///
/// Mirrors the browser's `localStorage` contract: string keys, string values,
/// synchronous access. Backends swallow their own I/O errors; a failing store
/// behaves like an empty one.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

/// Shared handle to a storage backend. The session store and the HTTP client
/// hold clones of the same handle.
pub type SharedStorage = Arc<dyn KeyValueStore>;
