//! # Product-list filter state
//!
//! [`ProductFilters`] holds the criteria of the products page plus its
//! pagination cursor. Any filter change restarts the result set at page 1;
//! moving between pages never touches a filter. Filters are not persisted.

use std::fmt;

/// Rows per page on the products list.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// One filter dimension of the products list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Filial,
    Classe,
    Uf,
    Comprador,
    ValidadeStart,
    ValidadeEnd,
}

impl FilterKey {
    pub const ALL: [FilterKey; 6] = [
        FilterKey::Filial,
        FilterKey::Classe,
        FilterKey::Uf,
        FilterKey::Comprador,
        FilterKey::ValidadeStart,
        FilterKey::ValidadeEnd,
    ];

    /// Query-string name understood by `/api/products`.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Filial => "filial",
            FilterKey::Classe => "classe",
            FilterKey::Uf => "uf",
            FilterKey::Comprador => "comprador",
            FilterKey::ValidadeStart => "validade_start",
            FilterKey::ValidadeEnd => "validade_end",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter criteria and 1-based page of the products list.
///
/// An empty string means "no filter on this dimension".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilters {
    pub filial: String,
    pub classe: String,
    pub uf: String,
    pub comprador: String,
    pub validade_start: String,
    pub validade_end: String,
    pub page: u32,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            filial: String::new(),
            classe: String::new(),
            uf: String::new(),
            comprador: String::new(),
            validade_start: String::new(),
            validade_end: String::new(),
            page: 1,
        }
    }
}

impl ProductFilters {
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Filial => &self.filial,
            FilterKey::Classe => &self.classe,
            FilterKey::Uf => &self.uf,
            FilterKey::Comprador => &self.comprador,
            FilterKey::ValidadeStart => &self.validade_start,
            FilterKey::ValidadeEnd => &self.validade_end,
        }
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut String {
        match key {
            FilterKey::Filial => &mut self.filial,
            FilterKey::Classe => &mut self.classe,
            FilterKey::Uf => &mut self.uf,
            FilterKey::Comprador => &mut self.comprador,
            FilterKey::ValidadeStart => &mut self.validade_start,
            FilterKey::ValidadeEnd => &mut self.validade_end,
        }
    }

    /// Assign one filter and restart at page 1.
    pub fn set_filter(&mut self, key: FilterKey, value: impl Into<String>) {
        *self.slot_mut(key) = value.into();
        self.page = 1;
    }

    /// Move to `page` (clamped to 1) without touching any filter.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Restore the default criteria.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_filters(&self) -> bool {
        FilterKey::ALL.into_iter().any(|key| !self.get(key).is_empty())
    }

    /// Non-empty filters in declaration order.
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> + '_ {
        FilterKey::ALL
            .into_iter()
            .map(|key| (key, self.get(key)))
            .filter(|(_, value)| !value.is_empty())
    }

    /// Query parameters for `/api/products`: always `page` and `page_size`,
    /// then only the filters that are set.
    pub fn query_params(&self, page_size: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), ("page_size", page_size.to_string())];
        params.extend(self.active().map(|(key, value)| (key.as_str(), value.to_string())));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_three() -> ProductFilters {
        let mut filters = ProductFilters::default();
        filters.set_filter(FilterKey::Filial, "3B");
        filters.set_page(3);
        filters
    }

    #[test]
    fn test_every_filter_update_resets_page() {
        for key in FilterKey::ALL {
            let mut filters = on_page_three();
            filters.set_filter(key, "value");
            assert_eq!(filters.page, 1, "{key} did not reset the page");
            assert_eq!(filters.get(key), "value");
        }
    }

    #[test]
    fn test_set_page_leaves_filters_alone() {
        let mut filters = on_page_three();
        let before = filters.clone();
        filters.set_page(7);

        assert_eq!(filters.page, 7);
        for key in FilterKey::ALL {
            assert_eq!(filters.get(key), before.get(key));
        }
    }

    #[test]
    fn test_page_never_drops_below_one() {
        let mut filters = ProductFilters::default();
        filters.set_page(0);
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filters = on_page_three();
        filters.set_filter(FilterKey::ValidadeEnd, "2025-12-31");
        filters.set_page(9);
        filters.reset();
        assert_eq!(filters, ProductFilters::default());
        assert!(!filters.has_filters());
    }

    #[test]
    fn test_filter_keys_are_independent() {
        let mut filters = ProductFilters::default();
        filters.set_filter(FilterKey::Uf, "MT");
        filters.set_filter(FilterKey::Comprador, "JOAO");
        filters.set_filter(FilterKey::Uf, "");

        assert_eq!(filters.uf, "");
        assert_eq!(filters.comprador, "JOAO");
    }

    #[test]
    fn test_changing_classe_on_page_three_queries_page_one() {
        let mut filters = on_page_three();
        assert!(filters.query_params(DEFAULT_PAGE_SIZE).contains(&("page", "3".to_string())));

        filters.set_filter(FilterKey::Classe, "CRITICO");
        let params = filters.query_params(DEFAULT_PAGE_SIZE);

        assert!(params.contains(&("page", "1".to_string())));
        assert!(!params.contains(&("page", "3".to_string())));
        assert!(params.contains(&("classe", "CRITICO".to_string())));
    }

    #[test]
    fn test_query_params_skip_empty_filters() {
        let mut filters = ProductFilters::default();
        filters.set_filter(FilterKey::ValidadeStart, "2025-01-01");

        assert_eq!(
            filters.query_params(30),
            vec![
                ("page", "1".to_string()),
                ("page_size", "30".to_string()),
                ("validade_start", "2025-01-01".to_string()),
            ]
        );
    }

    #[test]
    fn test_key_names_roundtrip() {
        for key in FilterKey::ALL {
            assert_eq!(FilterKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(FilterKey::from_name("page"), None);
    }
}
