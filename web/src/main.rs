use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Briefing, Crunch};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Crunch {},
    #[route("/briefing")]
    Briefing {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn nav_crunch(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Crunch {},
        "{label}"
    })
}
fn nav_briefing(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Briefing {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared language code; AppNavbar updates it and views subscribe to it.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    // One crunch session for the whole app, above the router.
    ui::crunch::use_crunch_session();

    register_nav(NavBuilder {
        crunch: nav_crunch,
        briefing: nav_briefing,
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web router layout around the shared navbar.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
