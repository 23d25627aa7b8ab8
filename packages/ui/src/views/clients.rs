use api::models::dashboard::ClientSummary;
use dioxus::prelude::*;
use store::query::roots;
use store::QueryKey;

use crate::charts::{inactivity_data, palette_data, BarChart, DonutChart};
use crate::components::{Card, Skeleton, StatCard};
use crate::format::format_count;
use crate::query::{use_api_query, QueryOptions};
use crate::session::use_config;

use super::dashboard::LOAD_ERROR;
use super::QueryError;

const TOP_CITIES: usize = 10;

#[component]
pub fn ClientsView() -> Element {
    let config = use_config();
    let summary = use_api_query(
        || QueryKey::new(roots::CLIENT_DASHBOARD),
        |api| async move { api.clients_summary().await },
        QueryOptions::refetch_every(config.polling.dashboard()),
    );

    let body = match &*summary.read() {
        None => rsx! {
            div {
                class: "grid grid-4",
                for i in 0..4 {
                    Skeleton { key: "{i}", class: "skeleton-stat" }
                }
            }
        },
        Some(Err(e)) => rsx! { QueryError { error: e.clone(), fallback: LOAD_ERROR } },
        Some(Ok(summary)) => rsx! { ClientsBody { summary: summary.clone() } },
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { class: "page-title", "Clientes" }
                    p { class: "muted", "Monitoramento de clientes e atividade de compras" }
                }
            }
            {body}
        }
    }
}

#[component]
fn ClientsBody(summary: ClientSummary) -> Element {
    let stats = &summary.stats;
    let charts = &summary.charts;
    let cities: Vec<_> = charts.by_cidade.iter().take(TOP_CITIES).cloned().collect();

    rsx! {
        div {
            class: "grid grid-4",
            StatCard { title: "Total Clientes", value: format_count(stats.total_clients), accent: "#3b82f6" }
            StatCard { title: "Inativos +30 Dias", value: format_count(stats.inactive_30d), accent: "#eab308" }
            StatCard { title: "Inativos +60 Dias", value: format_count(stats.inactive_60d), accent: "#ef4444" }
            StatCard { title: "Inativos +90 Dias", value: format_count(stats.inactive_90d), accent: "#09090b" }
        }
        div {
            class: "grid grid-2",
            Card {
                title: "Distribuição por Atividade",
                DonutChart {
                    data: inactivity_data(&charts.inactivity_distribution),
                    center_label: format!("{} clientes", format_count(stats.total_clients)),
                }
            }
            Card {
                title: "Clientes por Estado",
                BarChart { data: palette_data(&charts.by_estado) }
            }
        }
        Card {
            title: "Top 10 Cidades",
            BarChart { data: palette_data(&cities) }
        }
    }
}
