use dioxus::prelude::*;

#[component]
pub fn Card(
    #[props(default)] title: Option<String>,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "card {class}",
            if let Some(title) = title {
                header {
                    class: "card-header",
                    h3 { class: "card-title", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "card-subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "card-body", {children} }
        }
    }
}

/// Headline figure with a colored accent.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default = "#3b82f6".to_string())] accent: String,
    #[props(default)] suffix: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "stat-card",
            style: "--accent: {accent}",
            p { class: "stat-title", "{title}" }
            p {
                class: "stat-value",
                "{value}"
                if let Some(suffix) = suffix {
                    span { class: "stat-suffix", "{suffix}" }
                }
            }
        }
    }
}

#[component]
pub fn Skeleton(#[props(default)] class: String) -> Element {
    rsx! {
        div { class: "skeleton {class}" }
    }
}
