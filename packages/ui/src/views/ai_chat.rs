use api::models::ai::SUGGESTIONS;
use dioxus::prelude::*;

use crate::components::{Button, Card, Input};
use crate::icons::{FaBrain, FaPaperPlane, FaRobot, FaUser, FaWandMagicSparkles};
use crate::markdown::render_markdown;
use crate::query::use_api;
use crate::Icon;

const FALLBACK_ANSWER: &str = "Erro ao processar pergunta. Verifique se há produtos importados.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq)]
struct ChatMessage {
    role: Role,
    content: String,
    time: String,
}

impl ChatMessage {
    fn new(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            time: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}

fn scroll_to_latest() {
    let _ = document::eval(
        "document.getElementById('chat-end')?.scrollIntoView({ behavior: 'smooth' });",
    );
}

/// Question answering over the imported products. The conversation lives
/// only as long as the page.
#[component]
pub fn AiChatView() -> Element {
    let api = use_api();
    let messages = use_signal(Vec::<ChatMessage>::new);
    let mut input = use_signal(String::new);
    let loading = use_signal(|| false);

    let send = move |question: Option<String>| {
        let (mut messages, mut input, mut loading) = (messages, input, loading);
        let question = question.unwrap_or_else(|| input().trim().to_string());
        if question.is_empty() || loading() {
            return;
        }
        let api = api.clone();
        messages.write().push(ChatMessage::new(Role::User, question.clone()));
        input.set(String::new());
        loading.set(true);
        scroll_to_latest();
        spawn(async move {
            let content = match api.ai_query(&question).await {
                Ok(answer) => answer.answer,
                Err(e) => {
                    tracing::warn!("AI query failed: {}", e);
                    e.user_message(FALLBACK_ANSWER)
                }
            };
            messages.write().push(ChatMessage::new(Role::Ai, content));
            loading.set(false);
            scroll_to_latest();
        });
    };

    let body = if messages.read().is_empty() {
        let send = send.clone();
        rsx! {
            div {
                class: "chat-empty",
                div { class: "chat-empty-icon", Icon { icon: FaBrain, width: 32, height: 32 } }
                h3 { "Assistente de Validade" }
                p {
                    class: "muted small",
                    "Pergunte sobre produtos, validades, custos e classificações. A IA utiliza os dados importados via planilha."
                }
                div {
                    class: "chat-suggestions",
                    for suggestion in SUGGESTIONS {
                        button {
                            key: "{suggestion}",
                            class: "chip",
                            onclick: {
                                let send = send.clone();
                                move |_| send(Some(suggestion.to_string()))
                            },
                            "{suggestion}"
                        }
                    }
                }
            }
        }
    } else {
        rsx! {
            for (i, msg) in messages.read().iter().cloned().enumerate() {
                MessageBubble { key: "{i}", message: msg }
            }
        }
    };

    rsx! {
        div {
            class: "page page--fill",
            div {
                h2 {
                    class: "page-title",
                    Icon { icon: FaWandMagicSparkles, width: 20, height: 20 }
                    "IA / RAG"
                }
                p { class: "muted", "Faça perguntas sobre os produtos usando inteligência artificial" }
            }

            Card {
                class: "chat-card",
                div {
                    class: "chat-messages",
                    {body}
                    if loading() {
                        div {
                            class: "chat-row chat-row--ai",
                            div { class: "chat-avatar chat-avatar--ai", Icon { icon: FaRobot, width: 14, height: 14 } }
                            div {
                                class: "chat-bubble chat-bubble--ai typing",
                                span {}
                                span {}
                                span {}
                            }
                        }
                    }
                    div { id: "chat-end" }
                }
                div {
                    class: "chat-input",
                    Input {
                        value: input(),
                        placeholder: "Pergunte sobre os produtos...",
                        disabled: loading(),
                        oninput: move |evt: FormEvent| input.set(evt.value()),
                        onkeydown: {
                            let send = send.clone();
                            move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter {
                                    send(None);
                                }
                            }
                        },
                    }
                    Button {
                        disabled: loading() || input().trim().is_empty(),
                        onclick: move |_| send(None),
                        Icon { icon: FaPaperPlane, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let is_user = message.role == Role::User;
    let html = (!is_user).then(|| render_markdown(&message.content));

    rsx! {
        div {
            class: if is_user { "chat-row chat-row--user" } else { "chat-row chat-row--ai" },
            if !is_user {
                div { class: "chat-avatar chat-avatar--ai", Icon { icon: FaRobot, width: 14, height: 14 } }
            }
            div {
                class: if is_user { "chat-bubble chat-bubble--user" } else { "chat-bubble chat-bubble--ai" },
                if let Some(html) = html {
                    div { class: "chat-markdown", dangerous_inner_html: "{html}" }
                } else {
                    div { class: "pre-wrap", "{message.content}" }
                }
                p { class: "chat-time", "{message.time}" }
            }
            if is_user {
                div { class: "chat-avatar chat-avatar--user", Icon { icon: FaUser, width: 14, height: 14 } }
            }
        }
    }
}
