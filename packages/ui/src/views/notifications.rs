//! Notification center: scheduler state, manual triggers, a test message,
//! the WhatsApp connection and the send history.

use api::models::notifications::{EvolutionQr, NotificationLog, TriggerResult};
use api::{ApiClient, ApiResult};
use dioxus::prelude::*;
use store::query::roots;
use store::QueryKey;

use crate::components::{Badge, BadgeTone, Banner, Button, ButtonVariant, Card, Input};
use crate::format::format_datetime;
use crate::icons::{FaBell, FaCircleCheck, FaPaperPlane};
use crate::query::{use_api, use_api_query, use_query_client, QueryOptions};
use crate::session::use_config;
use crate::Icon;

use super::{ActionResult, QueryError};

/// Who a manual trigger sends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Audience {
    Vendors,
    Clients,
}

impl Audience {
    async fn trigger(self, api: &ApiClient, force: bool) -> ApiResult<TriggerResult> {
        match self {
            Audience::Vendors => api.trigger_notifications(force).await,
            Audience::Clients => api.trigger_client_notifications(force).await,
        }
    }
}

fn status_tone(status: &str) -> BadgeTone {
    match status {
        "sent" => BadgeTone::Success,
        "failed" => BadgeTone::Danger,
        _ => BadgeTone::Warning,
    }
}

#[component]
pub fn NotificationsView() -> Element {
    let api = use_api();
    let queries = use_query_client();
    let config = use_config();
    let mut sending = use_signal(|| Option::<Audience>::None);
    let mut testing = use_signal(|| false);
    let mut test_phone = use_signal(String::new);
    let mut result = use_signal(|| Option::<ActionResult>::None);

    let history = use_api_query(
        || QueryKey::new(roots::NOTIFICATIONS).param("page", 1),
        |api| async move { api.notifications(1).await },
        QueryOptions::default(),
    );
    let scheduler = use_api_query(
        || QueryKey::new(roots::SCHEDULER_STATUS),
        |api| async move { api.scheduler_status().await },
        QueryOptions::refetch_every(config.polling.dashboard()),
    );

    let trigger = {
        let api = api.clone();
        move |audience: Audience, force: bool| {
            let api = api.clone();
            spawn(async move {
                sending.set(Some(audience));
                result.set(None);
                let sent = queries
                    .mutate(
                        &[roots::NOTIFICATIONS, roots::SCHEDULER_STATUS],
                        audience.trigger(&api, force),
                    )
                    .await;
                match sent {
                    Ok(done) => {
                        result.set(Some(ActionResult::success(done.summary())));
                    }
                    Err(e) => {
                        tracing::error!("Manual trigger failed: {}", e);
                        result.set(Some(ActionResult::from_error(&e, "Erro ao enviar")));
                    }
                }
                sending.set(None);
            });
        }
    };

    let on_test = {
        let api = api.clone();
        move |_| {
            let phone = test_phone().trim().to_string();
            if phone.is_empty() {
                result.set(Some(ActionResult::error("Digite um número")));
                return;
            }
            let api = api.clone();
            spawn(async move {
                testing.set(true);
                let sent = queries
                    .mutate(&[roots::NOTIFICATIONS], api.test_notification(&phone))
                    .await;
                match sent {
                    Ok(()) => {
                        result.set(Some(ActionResult::success(
                            "Teste enviado! Verifique o WhatsApp.".to_string(),
                        )));
                        test_phone.set(String::new());
                    }
                    Err(e) => {
                        let detail = e.user_message(&e.to_string());
                        result.set(Some(ActionResult::error(&format!("Erro no teste: {detail}"))));
                    }
                }
                testing.set(false);
            });
        }
    };

    let (running, next_run) = match &*scheduler.read() {
        Some(Ok(status)) => (status.running, status.next_run().map(str::to_string)),
        _ => (false, None),
    };

    let (total, rows) = match &*history.read() {
        None => (0, rsx! {}),
        Some(Err(e)) => (
            0,
            rsx! {
                tr { td { colspan: "5", QueryError { error: e.clone(), fallback: "Erro ao carregar histórico" } } }
            },
        ),
        Some(Ok(page)) => (
            page.total,
            rsx! {
                for log in page.items.iter().cloned() {
                    HistoryRow { key: "{log.id}", log }
                }
                if page.items.is_empty() {
                    tr { td { colspan: "5", class: "empty", "Nenhum registro encontrado" } }
                }
            },
        ),
    };

    let busy = sending().is_some();
    let scheduler_tone = if running {
        BadgeTone::Success
    } else {
        BadgeTone::Danger
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { class: "page-title", "Central de Notificações" }
                    p { class: "muted", "Gerencie o envio de alertas automáticos e manuais" }
                }
                div {
                    class: "header-badges",
                    Badge {
                        tone: scheduler_tone,
                        span { class: if running { "dot dot--pulse" } else { "dot" } }
                        if running { "Scheduler Ativo" } else { "Parado" }
                    }
                    if let Some(next) = next_run {
                        Badge { tone: BadgeTone::Neutral, "Próximo: {next}" }
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

            div {
                class: "grid grid-2",
                WhatsAppCard {}

                Card {
                    title: "Disparo Manual",
                    p {
                        class: "muted small",
                        "Envie alertas de produtos \"Muito Críticos\" agora. O sistema verifica automaticamente se já foi enviado hoje para evitar duplicidade."
                    }
                    TriggerButtons {
                        busy,
                        active: sending() == Some(Audience::Vendors),
                        label: "Disparar (Padrão)",
                        on_trigger: {
                            let trigger = trigger.clone();
                            move |force| trigger(Audience::Vendors, force)
                        },
                    }
                }

                Card {
                    title: "Alertas de Clientes",
                    p {
                        class: "muted small",
                        "Avise os vendedores sobre clientes inativos. Clientes já notificados hoje são ignorados."
                    }
                    TriggerButtons {
                        busy,
                        active: sending() == Some(Audience::Clients),
                        label: "Disparar Clientes",
                        on_trigger: move |force| trigger(Audience::Clients, force),
                    }
                }

                Card {
                    title: "Testar Conexão",
                    div {
                        class: "form-row",
                        Input {
                            placeholder: "5565999999999",
                            value: test_phone(),
                            oninput: move |evt: FormEvent| test_phone.set(evt.value()),
                        }
                        Button {
                            disabled: testing(),
                            onclick: on_test,
                            if testing() { "Enviando..." } else { "Testar" }
                        }
                    }
                    p { class: "muted small", "* Digite o número com DDI e DDD (ex: 5565...)" }
                }
            }

            Card {
                class: "table-card",
                header {
                    class: "card-header card-header--inline",
                    Icon { icon: FaBell, width: 16, height: 16 }
                    h3 { class: "card-title", "Histórico de Envios" }
                    Badge { tone: BadgeTone::Neutral, "{total}" }
                }
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Telefone" }
                            th { "Tipo" }
                            th { "Status" }
                            th { class: "wide", "Mensagem" }
                            th { "Data" }
                        }
                    }
                    tbody { {rows} }
                }
            }
        }
    }
}

#[component]
fn TriggerButtons(busy: bool, active: bool, label: String, on_trigger: EventHandler<bool>) -> Element {
    rsx! {
        div {
            class: "button-row",
            Button {
                class: "grow",
                disabled: busy,
                onclick: move |_| on_trigger.call(false),
                Icon { icon: FaPaperPlane, width: 12, height: 12 }
                if active { "Enviando..." } else { "{label}" }
            }
            Button {
                class: "grow",
                variant: ButtonVariant::Destructive,
                disabled: busy,
                onclick: move |_| on_trigger.call(true),
                "Forçar Reenvio"
            }
        }
    }
}

#[component]
fn HistoryRow(log: NotificationLog) -> Element {
    let sent_at = format_datetime(log.sent_at.as_deref());
    rsx! {
        tr {
            td { class: "mono small", "{log.phone}" }
            td { Badge { tone: BadgeTone::Muted, {log.direction_label()} } }
            td { Badge { tone: status_tone(&log.status), "{log.status}" } }
            td { class: "muted small truncate", title: "{log.message}", "{log.message}" }
            td { class: "small nowrap", "{sent_at}" }
        }
    }
}

/// Evolution API connection: polls the instance state and, while it is not
/// open, the pairing QR code.
#[component]
fn WhatsAppCard() -> Element {
    let config = use_config();
    let interval = config.polling.whatsapp();

    let status = use_api_query(
        || QueryKey::new(roots::EVOLUTION_STATUS),
        |api| async move { api.evolution_status().await },
        QueryOptions::refetch_every(interval),
    );
    let connected = use_memo(move || matches!(&*status.read(), Some(Ok(s)) if s.is_connected()));
    let qr = use_api_query(
        move || QueryKey::new(roots::EVOLUTION_QR).param("connected", connected()),
        move |api| async move {
            if *connected.peek() {
                return Ok(EvolutionQr::default());
            }
            api.evolution_qr().await
        },
        QueryOptions::refetch_every(interval),
    );

    let (closed, instance) = match &*status.read() {
        Some(Ok(s)) => (s.is_closed(), s.instance_name().map(str::to_string)),
        _ => (false, None),
    };
    let image = match &*qr.read() {
        Some(Ok(code)) => code.image().map(str::to_string),
        _ => None,
    };
    let is_connected = connected();

    rsx! {
        Card {
            class: "span-2",
            header {
                class: "card-header card-header--inline",
                span { class: if is_connected { "dot dot--online" } else { "dot dot--offline" } }
                h3 { class: "card-title", "Status da Conexão WhatsApp" }
            }
            if is_connected {
                div {
                    class: "whatsapp-connected",
                    Icon { icon: FaCircleCheck, width: 32, height: 32 }
                    div {
                        h3 { class: "success-text", "Conectado com Sucesso!" }
                        p { class: "muted small", "O sistema está pronto para enviar notificações e responder via IA." }
                        p {
                            class: "muted small",
                            "Instância: "
                            span { class: "mono", {instance.unwrap_or_default()} }
                        }
                    }
                }
            } else {
                div {
                    class: "whatsapp-pairing",
                    div {
                        class: "qr-box",
                        if let Some(src) = image {
                            img { src: "{src}", alt: "QR Code" }
                        } else if closed {
                            span { "Instância desconectada" }
                        } else {
                            span { "Carregando QR Code..." }
                        }
                    }
                    div {
                        h3 { "Escaneie para conectar" }
                        ol {
                            class: "muted small",
                            li { "Abra o WhatsApp no seu celular" }
                            li { "Toque em Menu (⋮) ou Configurações" }
                            li { "Selecione " b { "Aparelhos Conectados" } }
                            li { "Toque em " b { "Conectar um Aparelho" } }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_status_tones() {
        assert_eq!(status_tone("sent"), BadgeTone::Success);
        assert_eq!(status_tone("failed"), BadgeTone::Danger);
        assert_eq!(status_tone("pending"), BadgeTone::Warning);
    }
}
