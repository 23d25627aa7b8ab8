//! Login form.

use dioxus::prelude::*;

use crate::components::{Banner, BannerKind, Button, Input, Label};
use crate::icons::{FaEye, FaEyeSlash, FaShieldHalved};
use crate::query::{use_api, use_query_client};
use crate::session::use_session;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let api = use_api();
    let queries = use_query_client();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            error.set(None);
            match api.login(&email(), &password()).await {
                Ok(response) => {
                    tracing::info!("Logged in as {}", response.user.email);
                    {
                        let mut state = session.write();
                        state.store.set_auth(response.access_token, response.user);
                        state.mounted = true;
                    }
                    queries.clear();
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.user_message("Erro ao fazer login")));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "login-page",
            div {
                class: "login-card",
                div {
                    class: "login-header",
                    div { class: "login-logo", Icon { icon: FaShieldHalved, width: 28, height: 28 } }
                    h1 { class: "login-title", "Akram Monitor" }
                    p { class: "muted", "Sistema Inteligente de Monitoramento de Validade" }
                }

                form {
                    class: "login-form",
                    onsubmit: on_submit,

                    if let Some(message) = error() {
                        Banner { kind: BannerKind::Error, message }
                    }

                    div {
                        class: "field",
                        Label { html_for: "email", "Email" }
                        Input {
                            id: "email",
                            r#type: "email",
                            placeholder: "admin@akram.com",
                            value: email(),
                            required: true,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "field",
                        Label { html_for: "password", "Senha" }
                        div {
                            class: "password-field",
                            Input {
                                id: "password",
                                r#type: if show_password() { "text".to_string() } else { "password".to_string() },
                                placeholder: "••••••••",
                                value: password(),
                                required: true,
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "password-toggle",
                                title: if show_password() { "Ocultar senha" } else { "Mostrar senha" },
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon { icon: FaEyeSlash, width: 14, height: 14 }
                                } else {
                                    Icon { icon: FaEye, width: 14, height: 14 }
                                }
                            }
                        }
                    }

                    Button {
                        r#type: "submit",
                        class: "btn-block",
                        disabled: loading(),
                        if loading() { "Entrando..." } else { "Entrar" }
                    }
                }

                p { class: "login-hint", "Credenciais padrão: admin@akram.com / admin123" }
            }
        }
    }
}
