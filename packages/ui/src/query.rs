//! # Query hooks
//!
//! [`use_api_query`] runs a fetch through the shared [`ApiClient`] and keeps
//! the result in the [`QueryClient`] cache under a [`QueryKey`]:
//!
//! - a key already in the cache is served without a request;
//! - [`QueryClient::invalidate`] drops every key under the given roots and
//!   re-runs the queries that read them;
//! - with [`QueryOptions::refetch_every`] the hook drops its key on a fixed
//!   interval for as long as the component is mounted.
//!
//! Mutations go through [`QueryClient::mutate`], which invalidates only after
//! the response came back successfully.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use api::{ApiClient, ApiResult};
use dioxus::prelude::*;
use store::{QueryCache, QueryKey};

use crate::timer::sleep;

/// Shared response cache plus one generation counter per query root.
///
/// A query reads only its own root's counter, so invalidating (or polling)
/// one root never restarts the queries of another.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: Signal<QueryCache<Rc<dyn Any>>>,
    generations: CopyValue<HashMap<String, Signal<u64>>>,
}

impl QueryClient {
    pub(crate) fn new() -> Self {
        Self {
            cache: Signal::new(QueryCache::new()),
            generations: CopyValue::new(HashMap::new()),
        }
    }

    fn generation(&self, root: &str) -> Signal<u64> {
        let existing = self.generations.read().get(root).copied();
        if let Some(generation) = existing {
            return generation;
        }
        // Owned by the root scope so a counter outlives the page that created it.
        let generation = Signal::new_in_scope(0, ScopeId::ROOT);
        let mut generations = self.generations;
        generations.write().insert(root.to_string(), generation);
        generation
    }

    fn subscribe(&self, root: &str) {
        let _ = (self.generation(root))();
    }

    fn cached<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        self.cache
            .peek()
            .get(key)
            .and_then(|value| value.downcast_ref::<T>().cloned())
    }

    fn store<T: 'static>(&self, key: QueryKey, value: T) {
        let mut cache = self.cache;
        cache.write().insert(key, Rc::new(value) as Rc<dyn Any>);
    }

    fn bump(&self, root: &str) {
        let mut generation = self.generation(root);
        *generation.write() += 1;
    }

    /// Mark every key under `roots` stale and re-run the queries under them.
    pub fn invalidate(&self, roots: &[&str]) {
        let mut cache = self.cache;
        let removed: usize = roots
            .iter()
            .map(|root| cache.write().invalidate_root(root))
            .sum();
        tracing::debug!("Invalidated {:?} ({} cached entries)", roots, removed);
        for root in roots {
            self.bump(root);
        }
    }

    pub fn invalidate_key(&self, key: &QueryKey) {
        let mut cache = self.cache;
        cache.write().invalidate_key(key);
        self.bump(key.root());
    }

    /// Drop everything, e.g. when the session ends.
    pub fn clear(&self) {
        let mut cache = self.cache;
        cache.write().clear();
        let roots: Vec<String> = self.generations.read().keys().cloned().collect();
        for root in &roots {
            self.bump(root);
        }
    }

    /// Await a mutation and invalidate `roots` only if it succeeded.
    pub async fn mutate<T>(
        &self,
        roots: &[&str],
        request: impl Future<Output = ApiResult<T>>,
    ) -> ApiResult<T> {
        let result = request.await;
        if result.is_ok() {
            self.invalidate(roots);
        }
        result
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QueryOptions {
    pub refetch_interval: Option<Duration>,
}

impl QueryOptions {
    pub fn refetch_every(interval: Duration) -> Self {
        Self {
            refetch_interval: Some(interval),
        }
    }
}

/// Cached, optionally polled backend query.
///
/// `key` is re-evaluated reactively: reading a signal inside it (filters, a
/// page number) makes the query follow that signal.
pub fn use_api_query<T, K, F, Fut>(key: K, fetch: F, options: QueryOptions) -> Resource<ApiResult<T>>
where
    T: Clone + 'static,
    K: Fn() -> QueryKey + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let client = use_query_client();
    let api = use_api();
    let key = use_hook(|| Rc::new(key));
    let fetch = use_hook(|| Rc::new(fetch));

    let resource = use_resource({
        let key = key.clone();
        move || {
            let key = key();
            client.subscribe(key.root());
            let fetch = fetch.clone();
            let api = api.clone();
            async move {
                if let Some(hit) = client.cached::<T>(&key) {
                    return Ok(hit);
                }
                let result = fetch(api).await;
                match &result {
                    Ok(value) => client.store(key, value.clone()),
                    Err(e) => tracing::warn!("Query {} failed: {}", key, e),
                }
                result
            }
        }
    });

    use_hook(move || {
        if let Some(interval) = options.refetch_interval {
            spawn(async move {
                loop {
                    sleep(interval).await;
                    client.invalidate_key(&key());
                }
            });
        }
    });

    resource
}
