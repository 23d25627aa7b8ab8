use api::models::products::{FilterOptions, ProductPage};
use dioxus::prelude::*;
use store::query::roots;
use store::{FilterKey, QueryKey};

use crate::components::{Button, ButtonVariant, Card, ClasseBadge, Input, Select, Skeleton};
use crate::format::{format_count, format_currency, format_optional_date, format_optional_number};
use crate::query::{use_api_query, QueryOptions};
use crate::session::{use_config, use_filters};

use super::dashboard::LOAD_ERROR;
use super::QueryError;

/// Filterable, paginated product table.
#[component]
pub fn ProductsView() -> Element {
    let mut filters = use_filters();
    let page_size = use_config().products.page_size;

    let options = use_api_query(
        || QueryKey::new(roots::FILTER_OPTIONS),
        |api| async move { api.filter_options().await },
        QueryOptions::default(),
    );
    let products = use_api_query(
        move || QueryKey::new(roots::PRODUCTS).params(filters.read().query_params(page_size)),
        move |api| {
            let current = filters();
            async move { api.products(&current, page_size).await }
        },
        QueryOptions::default(),
    );

    let options = match &*options.read() {
        Some(Ok(options)) => options.clone(),
        _ => FilterOptions::default(),
    };
    let current = filters();

    let select = move |key: FilterKey| {
        move |value: String| {
            filters.write().set_filter(key, value);
        }
    };

    let table = match &*products.read() {
        None => rsx! { Skeleton { class: "skeleton-table" } },
        Some(Err(e)) => rsx! { QueryError { error: e.clone(), fallback: LOAD_ERROR } },
        Some(Ok(page)) => rsx! {
            ProductTable { page: page.clone() }
            Pagination {
                page: page.clone(),
                on_page: move |page: u32| filters.write().set_page(page),
            }
        },
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { class: "page-title", "Produtos" }
                    if let Some(Ok(page)) = &*products.read() {
                        p { class: "muted", "{format_count(page.total)} produtos encontrados" }
                    }
                }
                if current.has_filters() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| filters.write().reset(),
                        "Limpar filtros"
                    }
                }
            }

            Card {
                div {
                    class: "filters",
                    Select {
                        value: current.filial.clone(),
                        placeholder: "Todas Filiais",
                        options: options.filiais.clone(),
                        onchange: select(FilterKey::Filial),
                    }
                    Select {
                        value: current.classe.clone(),
                        placeholder: "Todas Classes",
                        options: options.classes.clone(),
                        onchange: select(FilterKey::Classe),
                    }
                    Select {
                        value: current.uf.clone(),
                        placeholder: "Todas UFs",
                        options: options.ufs.clone(),
                        onchange: select(FilterKey::Uf),
                    }
                    Select {
                        value: current.comprador.clone(),
                        placeholder: "Todos Compradores",
                        options: options.compradores.clone(),
                        onchange: select(FilterKey::Comprador),
                    }
                    Input {
                        r#type: "date",
                        placeholder: "De",
                        value: current.validade_start.clone(),
                        oninput: move |evt: FormEvent| {
                            filters.write().set_filter(FilterKey::ValidadeStart, evt.value())
                        },
                    }
                    Input {
                        r#type: "date",
                        placeholder: "Até",
                        value: current.validade_end.clone(),
                        oninput: move |evt: FormEvent| {
                            filters.write().set_filter(FilterKey::ValidadeEnd, evt.value())
                        },
                    }
                }
            }

            {table}
        }
    }
}

#[component]
fn ProductTable(page: ProductPage) -> Element {
    rsx! {
        Card {
            class: "table-card",
            table {
                class: "table",
                thead {
                    tr {
                        th { "Código" }
                        th { class: "col-wide", "Descrição" }
                        th { "Embalagem" }
                        th { "Estoque" }
                        th { "Qtd." }
                        th { "Validade" }
                        th { "Classe" }
                        th { "Valor Unit." }
                        th { "UF" }
                    }
                }
                tbody {
                    for p in page.items.iter() {
                        tr {
                            key: "{p.id}",
                            td { class: "mono", "{p.codigo}" }
                            td { "{p.descricao}" }
                            td { {p.embalagem.clone().unwrap_or_else(|| "-".to_string())} }
                            td { {format_optional_number(p.estoque)} }
                            td { {format_optional_number(p.quantidade)} }
                            td { {format_optional_date(p.validade.as_deref())} }
                            td { ClasseBadge { classe: p.classe.clone() } }
                            td { {p.preco_com_st.map(format_currency).unwrap_or_else(|| "-".to_string())} }
                            td { {p.uf.clone().unwrap_or_else(|| "-".to_string())} }
                        }
                    }
                    if page.items.is_empty() {
                        tr {
                            td { colspan: "9", class: "empty", "Nenhum produto encontrado" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Pagination(page: ProductPage, on_page: EventHandler<u32>) -> Element {
    if page.total_pages <= 1 {
        return rsx! {};
    }
    let current = page.page;
    rsx! {
        div {
            class: "pagination",
            span {
                class: "muted",
                "Página {current} de {page.total_pages} ({format_count(page.total)} produtos)"
            }
            div {
                class: "pagination-buttons",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !page.has_previous(),
                    onclick: move |_| on_page.call(current.saturating_sub(1)),
                    "Anterior"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !page.has_next(),
                    onclick: move |_| on_page.call(current + 1),
                    "Próxima"
                }
            }
        }
    }
}
