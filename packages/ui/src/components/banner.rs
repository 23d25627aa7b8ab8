use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Result message shown above a form after a mutation.
#[component]
pub fn Banner(kind: BannerKind, message: String, on_dismiss: Option<EventHandler<()>>) -> Element {
    let class = match kind {
        BannerKind::Success => "banner banner-success",
        BannerKind::Error => "banner banner-error",
    };
    rsx! {
        div {
            class,
            role: "status",
            span { "{message}" }
            if let Some(handler) = on_dismiss {
                button {
                    class: "banner-close",
                    title: "Fechar",
                    onclick: move |_| handler.call(()),
                    "×"
                }
            }
        }
    }
}
