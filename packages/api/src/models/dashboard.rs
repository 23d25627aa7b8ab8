//! Dashboard and client summaries.
//!
//! The dashboard endpoint has shipped in two shapes: the current one nests
//! product data under `products` next to `clients` and `notifications`, the
//! legacy one puts `stats` and `charts` at the top level. [`DashboardSummary`]
//! accepts both and exposes the product half through
//! [`DashboardSummary::product_stats`] and [`DashboardSummary::product_charts`].

use std::collections::HashMap;

use serde::Deserialize;

use super::lenient_string;
use super::products::ProductStats;

/// One bar, slice or point of a chart. The label field name depends on the
/// chart, so every known name is an alias of `label`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartBucket {
    #[serde(
        default,
        alias = "classe",
        alias = "filial",
        alias = "date",
        alias = "faixa",
        alias = "estado",
        alias = "cidade",
        deserialize_with = "lenient_string"
    )]
    pub label: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductCharts {
    #[serde(default)]
    pub by_classe: Vec<ChartBucket>,
    #[serde(default)]
    pub by_filial: Vec<ChartBucket>,
    #[serde(default)]
    pub expiry_timeline: Vec<ChartBucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductSection {
    #[serde(default)]
    pub stats: ProductStats,
    #[serde(default)]
    pub charts: ProductCharts,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClientStats {
    #[serde(default)]
    pub total_clients: u64,
    #[serde(default)]
    pub inactive_30d: u64,
    #[serde(default)]
    pub inactive_60d: u64,
    #[serde(default)]
    pub inactive_90d: u64,
    #[serde(default)]
    pub sem_data: u64,
    #[serde(default)]
    pub estados: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClientCharts {
    #[serde(default)]
    pub inactivity_distribution: Vec<ChartBucket>,
    #[serde(default)]
    pub by_estado: Vec<ChartBucket>,
    #[serde(default)]
    pub by_cidade: Vec<ChartBucket>,
}

/// Body of `/api/clients/summary`, also nested in the dashboard summary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClientSummary {
    #[serde(default)]
    pub stats: ClientStats,
    #[serde(default)]
    pub charts: ClientCharts,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SentCount {
    #[serde(default)]
    pub sent: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NotificationStats {
    #[serde(default)]
    pub sent_today: u64,
    #[serde(default)]
    pub sent_7d: u64,
    #[serde(default)]
    pub failed_7d: u64,
    #[serde(default)]
    pub by_type: HashMap<String, SentCount>,
}

impl NotificationStats {
    pub fn sent_by_type(&self, kind: &str) -> u64 {
        self.by_type.get(kind).map(|c| c.sent).unwrap_or(0)
    }

    pub fn vendor_sent(&self) -> u64 {
        self.sent_by_type("vendor")
    }

    pub fn client_sent(&self) -> u64 {
        self.sent_by_type("client")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub products: Option<ProductSection>,
    #[serde(default)]
    pub clients: Option<ClientSummary>,
    #[serde(default)]
    pub notifications: Option<NotificationStats>,
    // Legacy flat shape.
    #[serde(default)]
    stats: Option<ProductStats>,
    #[serde(default)]
    charts: Option<ProductCharts>,
}

impl DashboardSummary {
    pub fn product_stats(&self) -> ProductStats {
        self.products
            .as_ref()
            .map(|p| p.stats.clone())
            .or_else(|| self.stats.clone())
            .unwrap_or_default()
    }

    pub fn product_charts(&self) -> ProductCharts {
        self.products
            .as_ref()
            .map(|p| p.charts.clone())
            .or_else(|| self.charts.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_summary() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{
                "products": {
                    "stats": {"total_products": 120, "total_muito_critico": 7,
                              "total_custo_muito_critico": 1530.5},
                    "charts": {
                        "by_classe": [{"classe": "CRITICO", "count": 4, "total_cost": 99.9}],
                        "by_filial": [{"filial": "3B", "count": 12}],
                        "expiry_timeline": [{"date": "2025-03-10", "count": 2}]
                    }
                },
                "clients": {
                    "stats": {"total_clients": 40, "inactive_90d": 3},
                    "charts": {"inactivity_distribution": [{"faixa": "Sem Data", "count": 5}]}
                },
                "notifications": {
                    "sent_today": 2, "sent_7d": 11, "failed_7d": 1,
                    "by_type": {"vendor": {"sent": 8}, "client": {"sent": 3}}
                }
            }"#,
        )
        .unwrap();

        let stats = summary.product_stats();
        assert_eq!(stats.total_products, 120);
        assert_eq!(stats.total_muito_critico, 7);

        let charts = summary.product_charts();
        assert_eq!(charts.by_classe[0].label, "CRITICO");
        assert_eq!(charts.by_classe[0].total_cost, 99.9);
        assert_eq!(charts.by_filial[0].label, "3B");
        assert_eq!(charts.expiry_timeline[0].label, "2025-03-10");

        let clients = summary.clients.unwrap();
        assert_eq!(clients.stats.total_clients, 40);
        assert_eq!(clients.charts.inactivity_distribution[0].label, "Sem Data");

        let notifications = summary.notifications.unwrap();
        assert_eq!(notifications.vendor_sent(), 8);
        assert_eq!(notifications.client_sent(), 3);
        assert_eq!(notifications.sent_by_type("other"), 0);
    }

    #[test]
    fn test_legacy_flat_summary() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"stats": {"total_products": 9, "total_critico": 2},
                "charts": {"by_filial": [{"filial": 3, "count": 9}]}}"#,
        )
        .unwrap();

        assert_eq!(summary.product_stats().total_products, 9);
        assert_eq!(summary.product_charts().by_filial[0].label, "3");
        assert!(summary.clients.is_none());
    }

    #[test]
    fn test_empty_summary() {
        let summary: DashboardSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.product_stats(), ProductStats::default());
        assert!(summary.product_charts().by_classe.is_empty());
    }
}
