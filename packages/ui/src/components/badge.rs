use api::models::products::ClasseTone;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Dark,
    Muted,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge-neutral",
            BadgeTone::Success => "badge-success",
            BadgeTone::Warning => "badge-warning",
            BadgeTone::Danger => "badge-danger",
            BadgeTone::Dark => "badge-dark",
            BadgeTone::Muted => "badge-muted",
        }
    }
}

impl From<ClasseTone> for BadgeTone {
    fn from(tone: ClasseTone) -> Self {
        match tone {
            ClasseTone::VeryCritical => BadgeTone::Dark,
            ClasseTone::Critical => BadgeTone::Danger,
            ClasseTone::Attention => BadgeTone::Warning,
            ClasseTone::Expired => BadgeTone::Muted,
            ClasseTone::Other => BadgeTone::Success,
            ClasseTone::None => BadgeTone::Neutral,
        }
    }
}

#[component]
pub fn Badge(#[props(default)] tone: BadgeTone, children: Element) -> Element {
    rsx! {
        span { class: "badge {tone.class()}", {children} }
    }
}

/// Risk class label colored by severity; `-` when the product has none.
#[component]
pub fn ClasseBadge(classe: Option<String>) -> Element {
    let tone = ClasseTone::of(classe.as_deref());
    match classe.filter(|_| tone != ClasseTone::None) {
        Some(label) => rsx! {
            Badge { tone: BadgeTone::from(tone), "{label}" }
        },
        None => rsx! {
            span { class: "muted", "-" }
        },
    }
}
