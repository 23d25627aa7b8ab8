use dioxus::prelude::*;

use crate::session::use_session;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Entry point: reads the persisted session, then reports whether the user
/// is signed in so the router can pick the dashboard or the login page.
#[component]
pub fn RootView(on_resolved: EventHandler<bool>) -> Element {
    let mut session = use_session();

    use_effect(move || {
        session.write().hydrate();
        on_resolved.call(session.peek().is_authenticated());
    });

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        div { class: "loading-screen", "Carregando..." }
    }
}
