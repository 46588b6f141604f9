use dioxus::prelude::*;
use dioxus::logger::tracing::debug;

use crate::crunch::DAYS;
use crate::i18n;
use crate::t;

#[component]
pub fn Briefing() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string());

    debug!(lang = %lang_current, "briefing render");

    rsx! {
        section { class: "page page-briefing",
            h1 { {t!("briefing-title")} }
            p { {t!("briefing-intro")} }

            h2 { {t!("briefing-week-heading")} }
            ol { class: "page-briefing__week",
                for descriptor in DAYS.iter() {
                    li { key: "{descriptor.id}",
                        strong { {i18n::lookup(descriptor.title_key)} }
                        span { " · " }
                        span { {i18n::lookup(descriptor.description_key)} }
                    }
                }
            }

            h2 { {t!("briefing-metrics-heading")} }
            ul { class: "page-briefing__metrics",
                li { {t!("briefing-metric-gain")} }
                li { {t!("briefing-metric-bandwidth")} }
                li { {t!("briefing-metric-eye")} }
                li { {t!("briefing-metric-power")} }
            }

            p { class: "page-briefing__cta", {t!("briefing-cta")} }
        }
    }
}
