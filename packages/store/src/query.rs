//! # Keyed response cache
//!
//! Every page query is identified by a [`QueryKey`]: a root (e.g.
//! `"products"`) plus the parameters the response depends on. Identical keys
//! hit the cache; invalidating a root drops every key under it, so a
//! mutation can mark all products pages stale at once.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Refetch interval for dashboard-like summaries and the scheduler badge.
pub const DASHBOARD_REFETCH: Duration = Duration::from_secs(60);

/// Refetch interval for the WhatsApp connection status and QR code.
pub const WHATSAPP_REFETCH: Duration = Duration::from_secs(5);

/// Query roots shared by the pages that read and invalidate them.
pub mod roots {
    pub const DASHBOARD: &str = "dashboard";
    pub const CLIENT_DASHBOARD: &str = "client-dashboard";
    pub const PRODUCTS: &str = "products";
    pub const FILTER_OPTIONS: &str = "filter-options";
    pub const UPLOADS: &str = "uploads";
    pub const CLIENT_UPLOADS: &str = "client-uploads";
    pub const PHONE_NUMBERS: &str = "phone-numbers";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const SCHEDULER_STATUS: &str = "scheduler-status";
    pub const EVOLUTION_STATUS: &str = "evolution-status";
    pub const EVOLUTION_QR: &str = "evolution-qr";
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    root: String,
    params: Vec<(String, String)>,
}

impl QueryKey {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    pub fn params<'a, I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        self.params
            .extend(params.into_iter().map(|(name, value)| (name.to_string(), value)));
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn param_list(&self) -> &[(String, String)] {
        &self.params
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={value}")?;
        }
        Ok(())
    }
}

/// Response cache keyed by [`QueryKey`].
#[derive(Debug, Clone)]
pub struct QueryCache<V> {
    entries: HashMap<QueryKey, V>,
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> QueryCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: QueryKey, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop one exact key. Returns whether it was cached.
    pub fn invalidate_key(&mut self, key: &QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop every key under `root`. Returns how many entries went away.
    pub fn invalidate_root(&mut self, root: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.root != root);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterKey, ProductFilters, DEFAULT_PAGE_SIZE};

    fn products_key(filters: &ProductFilters) -> QueryKey {
        QueryKey::new(roots::PRODUCTS).params(filters.query_params(DEFAULT_PAGE_SIZE))
    }

    #[test]
    fn test_identical_keys_hit_cache() {
        let mut cache = QueryCache::new();
        let filters = ProductFilters::default();
        cache.insert(products_key(&filters), "page one");

        assert_eq!(cache.get(&products_key(&filters)), Some(&"page one"));
    }

    #[test]
    fn test_different_params_miss() {
        let mut cache = QueryCache::new();
        let mut filters = ProductFilters::default();
        cache.insert(products_key(&filters), "unfiltered");

        filters.set_filter(FilterKey::Classe, "VENCIDO");
        assert!(cache.get(&products_key(&filters)).is_none());
    }

    #[test]
    fn test_invalidate_root_drops_all_params() {
        let mut cache = QueryCache::new();
        let mut filters = ProductFilters::default();
        cache.insert(products_key(&filters), 1);
        filters.set_page(2);
        cache.insert(products_key(&filters), 2);
        cache.insert(QueryKey::new(roots::UPLOADS), 3);

        assert_eq!(cache.invalidate_root(roots::PRODUCTS), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&QueryKey::new(roots::UPLOADS)));
    }

    #[test]
    fn test_invalidate_root_does_not_match_prefix_strings() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::new(roots::UPLOADS), 1);
        cache.insert(QueryKey::new(roots::CLIENT_UPLOADS), 2);

        assert_eq!(cache.invalidate_root(roots::UPLOADS), 1);
        assert!(cache.contains(&QueryKey::new(roots::CLIENT_UPLOADS)));
    }

    #[test]
    fn test_invalidate_key() {
        let mut cache = QueryCache::new();
        let key = QueryKey::new(roots::EVOLUTION_STATUS);
        cache.insert(key.clone(), "open");

        assert!(cache.invalidate_key(&key));
        assert!(!cache.invalidate_key(&key));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_display() {
        let key = QueryKey::new(roots::NOTIFICATIONS).param("page", 2).param("kind", "vendor");
        assert_eq!(key.to_string(), "notifications?page=2&kind=vendor");
        assert_eq!(QueryKey::new(roots::DASHBOARD).to_string(), "dashboard");
    }

    #[test]
    fn test_refetch_intervals() {
        assert_eq!(DASHBOARD_REFETCH.as_secs(), 60);
        assert_eq!(WHATSAPP_REFETCH.as_secs(), 5);
    }
}
