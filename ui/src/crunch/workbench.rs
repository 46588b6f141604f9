use dioxus::prelude::*;

use crate::t;

use super::eye::EyeDiagram;
use super::metrics::Metrics;
use super::quality::{Mood, Quality};

/// Right-hand column: the engineer, the scope and the bench controls.
#[component]
pub fn Workbench(metrics: Metrics, signed_off: bool) -> Element {
    let mood = Mood::from_metrics(&metrics);
    let quality = Quality::from_eye_height(metrics.eye_height);
    let switch_class = if signed_off {
        "switch switch--on"
    } else {
        "switch"
    };

    rsx! {
        section { class: "card workbench",
            div { class: "workbench__decor", aria_hidden: "true", "⚡" }

            EngineerAvatar { mood }

            div { class: "machine",
                div { class: "machine__header",
                    div { class: "machine__leds", aria_hidden: "true",
                        span { class: "led led--red" }
                        span { class: "led led--yellow" }
                        span { class: "led led--green" }
                    }
                    span { class: "machine__tool", {t!("workbench-tool")} }
                }

                EyeDiagram { quality }

                div { class: "machine__controls",
                    Knob {
                        label: t!("knob-gain"),
                        degrees: metrics.gain_knob_deg(),
                        needle: "knob__needle knob__needle--gain",
                    }
                    Knob {
                        label: t!("knob-peaking"),
                        degrees: metrics.peaking_knob_deg(),
                        needle: "knob__needle knob__needle--peaking",
                    }
                    div { class: "machine__control",
                        div { class: switch_class,
                            div { class: "switch__lever" }
                        }
                        span { class: "machine__label", {t!("switch-signoff")} }
                    }
                }
            }

            div { class: "workbench__footer",
                div { class: "workbench__env-label", {t!("sim-env-label")} }
                div { class: "workbench__env", {t!("sim-env-detail")} }
            }
        }
    }
}

#[component]
fn Knob(label: String, degrees: f64, needle: &'static str) -> Element {
    let transform = format!("transform: rotate({degrees:.0}deg)");

    rsx! {
        div { class: "machine__control",
            div { class: "knob",
                div { class: needle, style: "{transform}" }
            }
            span { class: "machine__label", "{label}" }
        }
    }
}

#[component]
fn EngineerAvatar(mood: Mood) -> Element {
    let mouth_class = match mood {
        Mood::Happy => "avatar__mouth avatar__mouth--happy",
        Mood::Neutral => "avatar__mouth",
    };

    rsx! {
        div { class: "avatar", aria_hidden: "true",
            div { class: "avatar__backdrop" }
            div { class: "avatar__body" }
            div { class: "avatar__head",
                div { class: "avatar__hair" }
                div { class: "avatar__glasses",
                    span { class: "avatar__lens" }
                    span { class: "avatar__bridge" }
                    span { class: "avatar__lens" }
                }
                div { class: mouth_class }
            }
            span { class: "avatar__badge", {t!("avatar-corner")} }
        }
    }
}
