use api::models::phone_numbers::{
    encode_alert_types, toggle_alert_type, NewPhoneNumber, PhoneNumber,
    PhoneNumberUpdate, ALERT_TYPES, DEFAULT_ALERT_TYPE,
};
use dioxus::prelude::*;
use store::query::roots;
use store::QueryKey;

use crate::components::{Badge, BadgeTone, Banner, Button, ButtonVariant, Card, Input, Label};
use crate::icons::{FaPen, FaPlus, FaTrashCan};
use crate::query::{use_api, use_api_query, use_query_client, QueryOptions};
use crate::Icon;

use super::modal_overlay::{ConfirmDialog, ModalOverlay};
use super::{ActionResult, QueryError};

fn default_types() -> Vec<String> {
    vec![DEFAULT_ALERT_TYPE.to_string()]
}

#[derive(Debug, Clone, PartialEq)]
struct EditState {
    id: i64,
    number: String,
    name: String,
    types: Vec<String>,
}

/// WhatsApp recipients: who gets alerts, for which classes, and who may
/// query the AI.
#[component]
pub fn PhoneNumbersView() -> Element {
    let api = use_api();
    let queries = use_query_client();
    let mut new_number = use_signal(String::new);
    let mut new_name = use_signal(String::new);
    let mut new_types = use_signal(default_types);
    let mut adding = use_signal(|| false);
    let mut editing = use_signal(|| Option::<EditState>::None);
    let mut saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| Option::<i64>::None);
    let mut result = use_signal(|| Option::<ActionResult>::None);

    let numbers = use_api_query(
        || QueryKey::new(roots::PHONE_NUMBERS),
        |api| async move { api.phone_numbers().await },
        QueryOptions::default(),
    );

    let on_add = {
        let api = api.clone();
        move |_| {
            let number = new_number().trim().to_string();
            if number.is_empty() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                adding.set(true);
                result.set(None);
                let name = new_name().trim().to_string();
                let phone = NewPhoneNumber {
                    number,
                    name: (!name.is_empty()).then_some(name),
                    notification_types: encode_alert_types(&new_types()),
                };
                let created = queries
                    .mutate(&[roots::PHONE_NUMBERS], api.create_phone_number(&phone))
                    .await;
                match created {
                    Ok(_) => {
                        new_number.set(String::new());
                        new_name.set(String::new());
                        new_types.set(default_types());
                    }
                    Err(e) => {
                        result.set(Some(ActionResult::from_error(&e, "Erro ao cadastrar número")));
                    }
                }
                adding.set(false);
            });
        }
    };

    let update = {
        let api = api.clone();
        move |id: i64, update: PhoneNumberUpdate, fallback: &'static str| {
            let api = api.clone();
            async move {
                let updated = queries
                    .mutate(&[roots::PHONE_NUMBERS], api.update_phone_number(id, &update))
                    .await;
                match updated {
                    Ok(_) => true,
                    Err(e) => {
                        result.set(Some(ActionResult::from_error(&e, fallback)));
                        false
                    }
                }
            }
        }
    };

    let on_save_edit = {
        let update = update.clone();
        move |_| {
            let Some(edit) = editing() else {
                return;
            };
            let update = update.clone();
            spawn(async move {
                saving.set(true);
                let changes = PhoneNumberUpdate {
                    name: Some(edit.name.trim().to_string()),
                    notification_types: Some(encode_alert_types(&edit.types)),
                    ..Default::default()
                };
                if update(edit.id, changes, "Erro ao atualizar").await {
                    editing.set(None);
                }
                saving.set(false);
            });
        }
    };

    let on_confirm_delete = {
        let api = api.clone();
        move |_| {
            let Some(id) = confirm_delete() else {
                return;
            };
            confirm_delete.set(None);
            let api = api.clone();
            spawn(async move {
                let removed = queries
                    .mutate(&[roots::PHONE_NUMBERS], api.delete_phone_number(id))
                    .await;
                if let Err(e) = removed {
                    result.set(Some(ActionResult::from_error(&e, "Erro ao remover")));
                }
            });
        }
    };

    let rows = match &*numbers.read() {
        None => rsx! {},
        Some(Err(e)) => rsx! { QueryError { error: e.clone(), fallback: "Erro ao carregar números" } },
        Some(Ok(list)) => rsx! {
            for phone in list.iter().cloned() {
                PhoneRow {
                    key: "{phone.id}",
                    phone: phone.clone(),
                    on_toggle: {
                        let update = update.clone();
                        move |changes: PhoneNumberUpdate| {
                            let pending = update(phone.id, changes, "Erro ao atualizar");
                            spawn(async move {
                                pending.await;
                            });
                        }
                    },
                    on_edit: {
                        let phone = phone.clone();
                        move |_| {
                            editing.set(Some(EditState {
                                id: phone.id,
                                number: phone.number.clone(),
                                name: phone.name.clone().unwrap_or_default(),
                                types: phone.alert_types(),
                            }))
                        }
                    },
                    on_delete: move |_| confirm_delete.set(Some(phone.id)),
                }
            }
            if list.is_empty() {
                tr { td { colspan: "6", class: "empty", "Nenhum número cadastrado" } }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h2 { class: "page-title", "Telefones WhatsApp" }
                    p { class: "muted", "Gerencie os números que recebem notificações e os tipos de alerta" }
                }
            }

            if let Some(outcome) = result() {
                Banner {
                    kind: outcome.kind,
                    message: outcome.message,
                    on_dismiss: move |_| result.set(None),
                }
            }

            Card {
                title: "Adicionar Recorrente",
                div {
                    class: "form-row",
                    Input {
                        placeholder: "5565999999999",
                        value: new_number(),
                        oninput: move |evt: FormEvent| new_number.set(evt.value()),
                    }
                    Input {
                        placeholder: "Nome (opcional)",
                        value: new_name(),
                        oninput: move |evt: FormEvent| new_name.set(evt.value()),
                    }
                    Button {
                        disabled: adding() || new_number().trim().is_empty(),
                        onclick: on_add,
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "Adicionar"
                    }
                }
                AlertTypePicker {
                    selected: new_types(),
                    on_toggle: move |kind: String| toggle_alert_type(&mut new_types.write(), &kind),
                }
            }

            Card {
                class: "table-card",
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Número" }
                            th { "Nome" }
                            th { "Alertas Configurados" }
                            th { "Ativo" }
                            th { "IA" }
                            th { class: "actions", "Ações" }
                        }
                    }
                    tbody { {rows} }
                }
            }
        }

        if let Some(edit) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                div {
                    class: "modal-body",
                    h3 { class: "modal-title", "Editar Contato" }
                    div {
                        class: "field",
                        Label { "Número" }
                        Input { value: edit.number.clone(), disabled: true }
                    }
                    div {
                        class: "field",
                        Label { "Nome" }
                        Input {
                            value: edit.name.clone(),
                            oninput: move |evt: FormEvent| {
                                if let Some(edit) = editing.write().as_mut() {
                                    edit.name = evt.value();
                                }
                            },
                        }
                    }
                    AlertTypePicker {
                        selected: edit.types.clone(),
                        on_toggle: move |kind: String| {
                            if let Some(edit) = editing.write().as_mut() {
                                toggle_alert_type(&mut edit.types, &kind);
                            }
                        },
                    }
                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editing.set(None),
                            "Cancelar"
                        }
                        Button {
                            disabled: saving(),
                            onclick: on_save_edit,
                            if saving() { "Salvando..." } else { "Salvar" }
                        }
                    }
                }
            }
        }

        if confirm_delete().is_some() {
            ConfirmDialog {
                title: "Remover número",
                message: "Remover este número?",
                confirm_label: "Remover",
                on_confirm: on_confirm_delete,
                on_cancel: move |_| confirm_delete.set(None),
            }
        }
    }
}

#[component]
fn PhoneRow(
    phone: PhoneNumber,
    on_toggle: EventHandler<PhoneNumberUpdate>,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let is_active = phone.is_active;
    let can_query_ai = phone.can_query_ai;

    rsx! {
        tr {
            td { class: "mono", "{phone.number}" }
            td { {phone.name.clone().unwrap_or_else(|| "-".to_string())} }
            td {
                div {
                    class: "badge-list",
                    for kind in phone.alert_types() {
                        Badge { key: "{kind}", tone: BadgeTone::Neutral, "{kind}" }
                    }
                }
            }
            td {
                Switch {
                    checked: is_active,
                    on_change: move |_| on_toggle.call(PhoneNumberUpdate {
                        is_active: Some(!is_active),
                        ..Default::default()
                    }),
                }
            }
            td {
                Switch {
                    checked: can_query_ai,
                    on_change: move |_| on_toggle.call(PhoneNumberUpdate {
                        can_query_ai: Some(!can_query_ai),
                        ..Default::default()
                    }),
                }
            }
            td {
                class: "actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Editar",
                    onclick: move |_| on_edit.call(()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Remover",
                    onclick: move |_| on_delete.call(()),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                }
            }
        }
    }
}

#[component]
fn AlertTypePicker(selected: Vec<String>, on_toggle: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "alert-types",
            span { class: "muted", "Alertas:" }
            for kind in ALERT_TYPES {
                button {
                    key: "{kind}",
                    r#type: "button",
                    class: if selected.iter().any(|s| s == kind) { "chip chip--on" } else { "chip" },
                    onclick: move |_| on_toggle.call(kind.to_string()),
                    "{kind}"
                }
            }
        }
    }
}

#[component]
fn Switch(checked: bool, on_change: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            role: "switch",
            aria_checked: "{checked}",
            class: if checked { "switch switch--on" } else { "switch" },
            onclick: move |_| on_change.call(()),
            span { class: "switch-thumb" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::phone_numbers::parse_alert_types;

    #[test]
    fn test_new_form_defaults_to_most_critical() {
        assert_eq!(default_types(), vec!["MUITO CRÍTICO".to_string()]);
        assert_eq!(parse_alert_types(Some(&encode_alert_types(&default_types()))), default_types());
    }
}
