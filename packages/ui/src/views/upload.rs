//! Spreadsheet import pages for products and clients.
//!
//! Both pages share [`UploadPanel`]; [`UploadKind`] decides which endpoints
//! it talks to and which queries a successful import invalidates.

use api::models::uploads::{UploadRecord, UploadStatus};
use api::upload::{is_accepted, ACCEPT_ATTRIBUTE, REJECTED_MESSAGE};
use api::{ApiClient, ApiResult, SpreadsheetFile};
use dioxus::prelude::*;
use store::query::roots;
use store::QueryKey;

use crate::components::{Badge, BadgeTone, Banner, BannerKind, Button, ButtonVariant, Card};
use crate::format::{format_count, format_datetime};
use crate::icons::{FaFileExcel, FaRotate, FaTrashCan};
use crate::query::{use_api, use_api_query, use_query_client, QueryOptions};
use crate::Icon;

use super::modal_overlay::ConfirmDialog;
use super::{ActionResult, QueryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Products,
    Clients,
}

impl UploadKind {
    fn title(self) -> &'static str {
        match self {
            UploadKind::Products => "Upload de Planilha",
            UploadKind::Clients => "Upload de Clientes",
        }
    }

    fn description(self) -> &'static str {
        match self {
            UploadKind::Products => "Envie arquivos .xlsx ou .csv para importar produtos",
            UploadKind::Clients => "Envie arquivos .xlsx ou .csv para importar clientes",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            UploadKind::Products => "Aceita .xlsx e .csv • Máximo 50MB",
            UploadKind::Clients => {
                "Aceita .xlsx e .csv • Planilha de clientes (Cod. Cliente, Razão Social, etc.)"
            }
        }
    }

    fn rows_header(self) -> &'static str {
        match self {
            UploadKind::Products => "Linhas",
            UploadKind::Clients => "Clientes",
        }
    }

    fn history_root(self) -> &'static str {
        match self {
            UploadKind::Products => roots::UPLOADS,
            UploadKind::Clients => roots::CLIENT_UPLOADS,
        }
    }

    /// Queries made stale by a successful import.
    pub fn invalidates(self) -> &'static [&'static str] {
        match self {
            UploadKind::Products => &[roots::UPLOADS, roots::DASHBOARD, roots::PRODUCTS],
            UploadKind::Clients => &[roots::CLIENT_UPLOADS, roots::CLIENT_DASHBOARD],
        }
    }

    /// Only product uploads can be deleted or trigger a reclassification.
    fn manages_products(self) -> bool {
        self == UploadKind::Products
    }

    async fn history(self, api: ApiClient) -> ApiResult<Vec<UploadRecord>> {
        match self {
            UploadKind::Products => api.uploads().await,
            UploadKind::Clients => api.client_uploads().await,
        }
    }

    async fn upload(self, api: &ApiClient, file: SpreadsheetFile) -> ApiResult<String> {
        let response = match self {
            UploadKind::Products => api.upload_products(file).await?,
            UploadKind::Clients => api.upload_clients(file).await?,
        };
        Ok(response.message)
    }
}

fn status_tone(status: UploadStatus) -> BadgeTone {
    match status {
        UploadStatus::Completed => BadgeTone::Success,
        UploadStatus::Failed => BadgeTone::Danger,
        UploadStatus::Processing => BadgeTone::Warning,
    }
}

/// Banner for a file refused by its extension, before any of it is read.
fn rejection(name: &str) -> Option<ActionResult> {
    (!is_accepted(name)).then(|| ActionResult::error(REJECTED_MESSAGE))
}

#[component]
pub fn UploadView() -> Element {
    rsx! { UploadPanel { kind: UploadKind::Products } }
}

#[component]
pub fn ClientUploadView() -> Element {
    rsx! { UploadPanel { kind: UploadKind::Clients } }
}

#[component]
fn UploadPanel(kind: UploadKind) -> Element {
    let api = use_api();
    let queries = use_query_client();
    let mut uploading = use_signal(|| false);
    let mut recalculating = use_signal(|| false);
    let mut deleting = use_signal(|| Option::<i64>::None);
    let mut confirm_delete = use_signal(|| Option::<UploadRecord>::None);
    let mut result = use_signal(|| Option::<ActionResult>::None);

    let history = use_api_query(
        move || QueryKey::new(kind.history_root()),
        move |api| kind.history(api),
        QueryOptions::default(),
    );

    let on_file = {
        let api = api.clone();
        move |evt: FormEvent| {
            let api = api.clone();
            async move {
                let Some(file) = evt.files().into_iter().next() else {
                    return;
                };
                result.set(None);
                // Rejected files are neither read nor sent.
                let name = file.name();
                if let Some(rejected) = rejection(&name) {
                    result.set(Some(rejected));
                    return;
                }
                let bytes = match file.read_bytes().await {
                    Ok(bytes) => bytes.to_vec(),
                    Err(e) => {
                        tracing::error!("Failed to read {}: {}", name, e);
                        result.set(Some(ActionResult::error("Erro ao processar arquivo")));
                        return;
                    }
                };
                let file = match SpreadsheetFile::new(name, bytes) {
                    Ok(file) => file,
                    Err(e) => {
                        result.set(Some(ActionResult::from_error(&e, "Erro ao processar arquivo")));
                        return;
                    }
                };
                uploading.set(true);
                match queries.mutate(kind.invalidates(), kind.upload(&api, file)).await {
                    Ok(message) => {
                        result.set(Some(ActionResult::success(message)));
                    }
                    Err(e) => {
                        tracing::error!("Upload failed: {}", e);
                        result.set(Some(ActionResult::from_error(&e, "Erro ao processar arquivo")));
                    }
                }
                uploading.set(false);
            }
        }
    };

    let on_recalculate = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            async move {
                recalculating.set(true);
                result.set(None);
                let recalculated = queries
                    .mutate(&[roots::DASHBOARD, roots::PRODUCTS], api.recalculate_classes())
                    .await;
                match recalculated {
                    Ok(done) => {
                        result.set(Some(ActionResult::success(done.summary())));
                    }
                    Err(e) => {
                        result.set(Some(ActionResult::from_error(
                            &e,
                            "Erro ao recalcular classificações",
                        )));
                    }
                }
                recalculating.set(false);
            }
        }
    };

    let on_confirm_delete = move |_| {
        let Some(record) = confirm_delete() else {
            return;
        };
        confirm_delete.set(None);
        let api = api.clone();
        spawn(async move {
            deleting.set(Some(record.id));
            result.set(None);
            match queries.mutate(kind.invalidates(), api.delete_upload(record.id)).await {
                Ok(response) => {
                    result.set(Some(ActionResult::success(response.message)));
                }
                Err(e) => {
                    result.set(Some(ActionResult::from_error(&e, "Erro ao deletar upload")));
                }
            }
            deleting.set(None);
        });
    };

    let rows = match &*history.read() {
        None => rsx! {},
        Some(Err(e)) => rsx! { QueryError { error: e.clone(), fallback: "Erro ao carregar histórico" } },
        Some(Ok(records)) => rsx! {
            for record in records.iter().cloned() {
                tr {
                    key: "{record.id}",
                    td {
                        class: "file-cell",
                        Icon { icon: FaFileExcel, width: 12, height: 12 }
                        "{record.original_name}"
                    }
                    td { {record.row_count.map(format_count).unwrap_or_default()} }
                    td { {record.uploaded_by.clone().unwrap_or_else(|| "-".to_string())} }
                    td {
                        Badge { tone: status_tone(record.status()), "{record.status().label()}" }
                    }
                    td { {format_datetime(record.created_at.as_deref())} }
                    if kind.manages_products() {
                        td {
                            class: "actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Deletar",
                                disabled: deleting() == Some(record.id),
                                onclick: {
                                    let record = record.clone();
                                    move |_| confirm_delete.set(Some(record.clone()))
                                },
                                Icon { icon: FaTrashCan, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
            if records.is_empty() {
                tr { td { colspan: "6", class: "empty", "Nenhum upload realizado" } }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { class: "page-title", "{kind.title()}" }
                    p { class: "muted", "{kind.description()}" }
                }
                if kind.manages_products() {
                    Button {
                        disabled: recalculating(),
                        onclick: on_recalculate,
                        Icon { icon: FaRotate, width: 14, height: 14 }
                        "Recalcular Classes"
                    }
                }
            }

            Card {
                label {
                    class: "dropzone",
                    if uploading() {
                        p { "Processando arquivo..." }
                    } else {
                        Icon { icon: FaFileExcel, width: 32, height: 32 }
                        p { class: "dropzone-title", "Arraste um arquivo aqui ou clique para selecionar" }
                        p { class: "muted", "{kind.hint()}" }
                        input {
                            r#type: "file",
                            class: "dropzone-input",
                            accept: ACCEPT_ATTRIBUTE,
                            onchange: on_file,
                        }
                    }
                }
                if let Some(outcome) = result() {
                    Banner {
                        kind: outcome.kind,
                        message: outcome.message,
                        on_dismiss: move |_| result.set(None),
                    }
                }
            }

            Card {
                title: "Histórico de Uploads",
                class: "table-card",
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Arquivo" }
                            th { "{kind.rows_header()}" }
                            th { "Enviado por" }
                            th { "Status" }
                            th { "Data" }
                            if kind.manages_products() {
                                th { class: "actions", "Ações" }
                            }
                        }
                    }
                    tbody { {rows} }
                }
            }
        }

        if let Some(record) = confirm_delete() {
            ConfirmDialog {
                title: "Deletar upload",
                message: format!(
                    "Tem certeza que deseja deletar \"{}\"? Isso irá remover todos os produtos associados a esta planilha.",
                    record.original_name
                ),
                confirm_label: "Deletar",
                on_confirm: on_confirm_delete,
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidation_sets() {
        assert_eq!(
            UploadKind::Products.invalidates(),
            &[roots::UPLOADS, roots::DASHBOARD, roots::PRODUCTS]
        );
        assert_eq!(
            UploadKind::Clients.invalidates(),
            &[roots::CLIENT_UPLOADS, roots::CLIENT_DASHBOARD]
        );
    }

    #[test]
    fn test_rejection_happens_on_the_name_alone() {
        let rejected = rejection("relatorio.pdf").unwrap();
        assert_eq!(rejected.kind, BannerKind::Error);
        assert_eq!(rejected.message, REJECTED_MESSAGE);
        assert!(rejection("sem_extensao").is_some());

        assert!(rejection("estoque.xlsx").is_none());
        assert!(rejection("clientes.CSV").is_none());
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone(UploadStatus::parse("completed")), BadgeTone::Success);
        assert_eq!(status_tone(UploadStatus::parse("failed")), BadgeTone::Danger);
        assert_eq!(status_tone(UploadStatus::parse("processing")), BadgeTone::Warning);
    }
}
