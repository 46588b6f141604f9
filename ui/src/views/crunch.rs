use dioxus::prelude::*;

use crate::crunch::CrunchView;

#[component]
pub fn Crunch() -> Element {
    // Subscribe to the global language code (if provided) so the board
    // re-renders immediately when the locale changes in the navbar.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-crunch",
            CrunchView {}
        }
    }
}
