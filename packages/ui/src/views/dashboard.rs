use api::models::dashboard::{ChartBucket, DashboardSummary};
use dioxus::prelude::*;
use store::query::roots;
use store::QueryKey;

use crate::charts::{classe_data, inactivity_data, palette_data, AreaChart, BarChart, ChartDatum, DonutChart};
use crate::components::{Card, Skeleton, StatCard};
use crate::format::{format_count, format_currency_whole};
use crate::query::{use_api_query, QueryOptions};
use crate::session::use_config;

use super::QueryError;

pub(crate) const LOAD_ERROR: &str = "Erro ao carregar dados. Verifique se o backend está rodando.";

fn cost_by_classe(buckets: &[ChartBucket]) -> Vec<ChartDatum> {
    classe_data(buckets)
        .into_iter()
        .zip(buckets)
        .map(|(datum, bucket)| ChartDatum {
            value: bucket.total_cost,
            ..datum
        })
        .collect()
}

/// Unified overview: products, clients and notification counters.
#[component]
pub fn DashboardView() -> Element {
    let config = use_config();
    let summary = use_api_query(
        || QueryKey::new(roots::DASHBOARD),
        |api| async move { api.dashboard_summary().await },
        QueryOptions::refetch_every(config.polling.dashboard()),
    );

    let body = match &*summary.read() {
        None => rsx! { DashboardSkeleton {} },
        Some(Err(e)) => rsx! { QueryError { error: e.clone(), fallback: LOAD_ERROR } },
        Some(Ok(data)) => rsx! { DashboardBody { data: data.clone() } },
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { class: "page-title", "Akram Monitor" }
                    p { class: "muted", "Painel unificado: Produtos · Clientes · Notificações" }
                }
                span { class: "pill", "Atualizado a cada {config.polling.dashboard_secs}s" }
            }
            {body}
        }
    }
}

#[component]
fn DashboardSkeleton() -> Element {
    rsx! {
        div {
            class: "grid grid-4",
            for i in 0..4 {
                Skeleton { key: "{i}", class: "skeleton-stat" }
            }
        }
        div {
            class: "grid grid-3",
            for i in 0..3 {
                Skeleton { key: "{i}", class: "skeleton-chart" }
            }
        }
    }
}

#[component]
fn DashboardBody(data: DashboardSummary) -> Element {
    let stats = data.product_stats();
    let charts = data.product_charts();
    let clients = data.clients.clone().unwrap_or_default();
    let notifications = data.notifications.clone().unwrap_or_default();
    let classified: u64 = charts.by_classe.iter().map(|b| b.count).sum();

    rsx! {
        div {
            class: "grid grid-6",
            StatCard { title: "Total Produtos", value: format_count(stats.total_products), accent: "#3b82f6" }
            StatCard { title: "Muito Crítico", value: format_count(stats.total_muito_critico), accent: "#09090b" }
            StatCard { title: "Crítico", value: format_count(stats.total_critico), accent: "#ef4444" }
            StatCard { title: "Atenção", value: format_count(stats.total_atencao), accent: "#eab308" }
            StatCard { title: "Custo MC", value: format_currency_whole(stats.total_custo_muito_critico), accent: "#22c55e" }
            StatCard { title: "Clientes Total", value: format_count(clients.stats.total_clients), accent: "#8b5cf6" }
        }

        SectionHeader { title: "Produtos", subtitle: "Classificação de risco e distribuição por filial" }
        div {
            class: "grid grid-2",
            Card {
                title: "Distribuição por Classe",
                DonutChart {
                    data: classe_data(&charts.by_classe),
                    center_label: format!("{} produtos", format_count(classified)),
                }
            }
            Card {
                title: "Produtos por Filial",
                BarChart { data: palette_data(&charts.by_filial) }
            }
            Card {
                title: "Vencimentos: Próximos 30 dias",
                AreaChart { data: charts.expiry_timeline.clone(), color: "#06b6d4" }
            }
            Card {
                title: "Custo Total por Classe",
                BarChart { data: cost_by_classe(&charts.by_classe), currency: true }
            }
        }

        SectionHeader { title: "Clientes", subtitle: "Atividade de compra e distribuição geográfica" }
        div {
            class: "grid grid-5",
            StatCard { title: "Inativos +30d", value: format_count(clients.stats.inactive_30d), accent: "#eab308" }
            StatCard { title: "Inativos +60d", value: format_count(clients.stats.inactive_60d), accent: "#ef4444" }
            StatCard { title: "Inativos +90d", value: format_count(clients.stats.inactive_90d), accent: "#09090b" }
            StatCard { title: "Sem Data", value: format_count(clients.stats.sem_data), accent: "#6b7280" }
            StatCard { title: "Estados", value: format_count(clients.stats.estados), accent: "#06b6d4" }
        }
        div {
            class: "grid grid-2",
            Card {
                title: "Distribuição por Atividade",
                DonutChart {
                    data: inactivity_data(&clients.charts.inactivity_distribution),
                    center_label: format!("{} clientes", format_count(clients.stats.total_clients)),
                }
            }
            Card {
                title: "Clientes por Estado",
                BarChart { data: palette_data(&clients.charts.by_estado) }
            }
        }

        SectionHeader { title: "Notificações", subtitle: "Status de envio para vendedores e clientes" }
        div {
            class: "grid grid-4",
            StatCard { title: "Enviadas Hoje", value: format_count(notifications.sent_today), accent: "#22c55e" }
            StatCard { title: "Enviadas (7 dias)", value: format_count(notifications.sent_7d), accent: "#3b82f6" }
            StatCard { title: "Falhas (7 dias)", value: format_count(notifications.failed_7d), accent: "#ef4444" }
            Card {
                title: "Por Tipo (7d)",
                dl {
                    class: "kv",
                    dt { "Empresas" }
                    dd { "{format_count(notifications.vendor_sent())}" }
                    dt { "Clientes" }
                    dd { "{format_count(notifications.client_sent())}" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn SectionHeader(title: String, subtitle: String) -> Element {
    rsx! {
        div {
            class: "section-header",
            h3 { class: "section-title", "{title}" }
            p { class: "muted", "{subtitle}" }
        }
    }
}
