use dioxus::prelude::*;
use ui::views::SidebarLayoutView;
use ui::NavItem;

use crate::Route;

#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        SidebarLayoutView {
            active: route.nav_item(),
            on_navigate: move |item: NavItem| {
                nav.push(Route::from(item));
            },
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
