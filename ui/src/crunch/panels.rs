use dioxus::prelude::*;

use crate::core::format;
use crate::t;

use super::days::DayPanel;
use super::engine::TaskState;
use super::layout::{LayoutNote, LayoutView, ACTIVE_FINS};
use super::metrics::{Metrics, POWER_BUDGET_MW};
use super::quality::{BadgeVerdicts, Quality, Verdict};

/// Extra block a day shows above its brief.
#[component]
pub fn DayPanelView(panel: DayPanel, flags: TaskState, metrics: Metrics) -> Element {
    match panel {
        DayPanel::Alert => rsx! {
            div { class: "panel panel--alert",
                span { class: "panel__glyph", aria_hidden: "true", "⚠" }
                div {
                    h3 { class: "panel__title", {t!("alert-title")} }
                    p { class: "panel__body", {t!("alert-body")} }
                }
            }
        },
        DayPanel::PowerBudget => {
            let live_class = format!(
                "power-tile__value {}",
                if metrics.within_power_budget() {
                    Verdict::Pass.css_class()
                } else {
                    Verdict::Fail.css_class()
                }
            );
            rsx! {
                div { class: "panel panel--power",
                    div { class: "power-tile",
                        span { class: "power-tile__label", {t!("power-current")} }
                        span { class: "{live_class}", "{format::format_mw(metrics.power)}" }
                    }
                    div { class: "power-tile",
                        span { class: "power-tile__label", {t!("power-budget")} }
                        span { class: "power-tile__value power-tile__value--budget",
                            "{format::format_mw(POWER_BUDGET_MW)}"
                        }
                    }
                }
            }
        }
        DayPanel::Layout => rsx! {
            FinFetLayout { view: LayoutView::from_flags(&flags) }
        },
        DayPanel::EyeHeight => {
            let verdict = Quality::from_eye_height(metrics.eye_height).verdict();
            rsx! {
                div { class: "panel panel--eye {verdict.css_class()}",
                    div { class: "panel__big", "{format::format_mv(metrics.eye_height)}" }
                    div { class: "panel__caption", {t!("eye-height-passing")} }
                }
            }
        }
    }
}

#[component]
pub fn FinFetLayout(view: LayoutView) -> Element {
    let dummy_class = view.dummy_class();
    let contact_class = view.contact_class();
    let note = view.note().map(|note| {
        let text = match note {
            LayoutNote::LdeStress => t!("layout-note-stress"),
            LayoutNote::Optimized => t!("layout-note-optimized"),
        };
        (note.css_class(), text)
    });

    rsx! {
        div { class: "finfet",
            span { class: "finfet__label", {t!("layout-view-label")} }
            div { class: "finfet__row",
                div { class: dummy_class }
                for fin in 0..ACTIVE_FINS {
                    div { key: "fin-{fin}", class: "finfet__fin",
                        div { class: "finfet__gate" }
                        div { class: contact_class }
                    }
                }
                div { class: dummy_class }
            }
            if let Some((note_class, note_text)) = note {
                span { class: note_class, "{note_text}" }
            }
        }
    }
}

/// Gauges for the four tracked metrics.
#[component]
pub fn MetricsDeck(metrics: Metrics) -> Element {
    let verdicts = BadgeVerdicts::from_metrics(&metrics);
    let quality = Quality::from_eye_height(metrics.eye_height);

    rsx! {
        div { class: "metrics-deck",
            MetricGauge {
                label: t!("metric-gain"),
                value: format::format_db(metrics.gain),
                verdict: verdicts.gain,
                fill: metrics.gain_gauge_fill(),
            }
            MetricGauge {
                label: t!("metric-bandwidth"),
                value: format::format_ghz(metrics.bandwidth),
                verdict: verdicts.bandwidth,
                fill: metrics.bandwidth_gauge_fill(),
            }
            MetricGauge {
                label: t!("metric-eye"),
                value: format::format_mv(metrics.eye_height),
                verdict: verdicts.eye,
                fill: quality.value(),
            }
            MetricGauge {
                label: t!("metric-power"),
                value: format::format_mw(metrics.power),
                verdict: verdicts.power,
                fill: metrics.power_gauge_fill(),
            }
        }
    }
}

#[component]
fn MetricGauge(label: String, value: String, verdict: Verdict, fill: f64) -> Element {
    let width = format::format_css_percent(fill);
    let tone = verdict.css_class();

    rsx! {
        div { class: "card metric-gauge",
            span { class: "metric-gauge__label", "{label}" }
            strong { class: "metric-gauge__value {tone}", "{value}" }
            div { class: "metric-gauge__track",
                div { class: "metric-gauge__fill {tone}", style: "width: {width}" }
            }
        }
    }
}
