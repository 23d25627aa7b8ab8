use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{r#type}",
            value: "{value}",
            placeholder: "{placeholder}",
            required,
            disabled,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
            onkeydown: move |evt| {
                if let Some(handler) = &onkeydown {
                    handler.call(evt);
                }
            },
        }
    }
}

/// Select with an empty "all" option first; choosing it yields `""`.
#[component]
pub fn Select(
    value: String,
    placeholder: String,
    options: Vec<String>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "input select",
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            option { value: "", selected: value.is_empty(), "{placeholder}" }
            for opt in options {
                option {
                    key: "{opt}",
                    value: "{opt}",
                    selected: opt == value,
                    "{opt}"
                }
            }
        }
    }
}
