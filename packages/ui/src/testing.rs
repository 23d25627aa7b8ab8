//! Helpers for driving components in a headless `VirtualDom`.

use std::sync::Arc;
use std::time::Duration;

use dioxus_core::{NoOpMutations, VirtualDom};
use store::{KeyValueStore, MemoryStorage, SharedStorage};

use crate::StorageHandle;

pub fn storage_handle(storage: &MemoryStorage) -> StorageHandle {
    StorageHandle(Arc::new(storage.clone()) as SharedStorage)
}

pub fn signed_in_storage() -> MemoryStorage {
    let storage = MemoryStorage::new();
    storage.set(store::session::TOKEN_KEY, "tok-123");
    storage.set(
        store::session::USER_KEY,
        r#"{"id":1,"name":"Admin","email":"admin@akram.com","role":"admin"}"#,
    );
    storage
}

/// Keep polling tasks and effects until `duration` has elapsed.
pub async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    while tokio::time::timeout_at(deadline, dom.wait_for_work())
        .await
        .is_ok()
    {
        dom.render_immediate(&mut NoOpMutations);
    }
}
