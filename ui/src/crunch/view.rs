use dioxus::prelude::*;

use crate::i18n;
use crate::t;

use super::days::{Day, DayDescriptor, DAYS, DAY_COUNT};
use super::engine::{Action, CrunchEngine};
use super::panels::{DayPanelView, MetricsDeck};
use super::workbench::Workbench;

/// Full crunch board: stepper, the current day's card, metrics and workbench.
///
/// The session comes from context (see [`use_crunch_session`]) so it survives
/// route changes and remounts below the provider.
#[component]
pub fn CrunchView() -> Element {
    let engine = use_context::<Signal<CrunchEngine>>();
    let snapshot = engine();

    rsx! {
        div { class: "crunch",
            header { class: "crunch__header",
                div {
                    h2 { class: "crunch__title", {t!("crunch-title")} }
                    p { class: "crunch__subtitle", {t!("crunch-subtitle")} }
                }
                span { class: "crunch__sprint", {t!("sprint-label")} }
            }

            DayStepper { engine }

            div { class: "crunch__grid",
                div { class: "crunch__main",
                    TaskCard { engine }
                    MetricsDeck { metrics: snapshot.metrics() }
                }
                Workbench { metrics: snapshot.metrics(), signed_off: snapshot.flags().signed_off }
            }

            if snapshot.celebrating() {
                Celebration { engine }
            }
        }
    }
}

/// Creates the session signal and provides it to every descendant. Call once
/// from the root component, above the router.
pub fn use_crunch_session() -> Signal<CrunchEngine> {
    let session = use_signal(CrunchEngine::new);
    use_context_provider(|| session)
}

#[component]
fn DayStepper(engine: Signal<CrunchEngine>) -> Element {
    let snapshot = engine();

    rsx! {
        nav { class: "stepper", aria_label: t!("stepper-label"),
            for descriptor in DAYS.iter() {
                StepperButton {
                    key: "{descriptor.id}",
                    engine,
                    day: descriptor.day,
                    active: snapshot.day() == descriptor.day,
                    done: snapshot.flags().is_done(descriptor.day),
                    locked: !snapshot.can_go_to(descriptor.day),
                }
            }
        }
    }
}

#[component]
fn StepperButton(
    mut engine: Signal<CrunchEngine>,
    day: Day,
    active: bool,
    done: bool,
    locked: bool,
) -> Element {
    let descriptor = day.descriptor();
    let mut class = String::from("stepper__day");
    if active {
        class.push_str(" stepper__day--active");
    }
    if done {
        class.push_str(" stepper__day--done");
    }
    if locked {
        class.push_str(" stepper__day--locked");
    }
    let glyph = if done { "✓" } else { descriptor.glyph };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: locked,
            aria_current: if active { "step" } else { "false" },
            onclick: move |_| {
                engine.with_mut(|eng| eng.go_to_day(day));
            },
            span { class: "stepper__glyph", aria_hidden: "true", "{glyph}" }
            span { class: "stepper__title", {i18n::lookup(descriptor.title_key)} }
        }
    }
}

#[component]
fn TaskCard(engine: Signal<CrunchEngine>) -> Element {
    let snapshot = engine();
    let day = snapshot.day();
    let descriptor: &'static DayDescriptor = day.descriptor();
    let done = snapshot.current_done();
    let show_action = !done || descriptor.keep_action_when_done;
    let action = descriptor.action;

    rsx! {
        article { class: "card task-card task-card--{descriptor.id}",
            header { class: "task-card__header",
                h3 { class: "task-card__title", {i18n::lookup(descriptor.title_key)} }
                p { class: "task-card__desc", {i18n::lookup(descriptor.description_key)} }
            }

            div { class: "task-card__body",
                if let Some(panel) = descriptor.panel {
                    DayPanelView {
                        panel,
                        flags: snapshot.flags(),
                        metrics: snapshot.metrics(),
                    }
                }
                if let Some(brief) = descriptor.brief_key {
                    p { class: "task-card__brief", {i18n::lookup(brief)} }
                }
                if show_action {
                    button {
                        class: descriptor.variant.css_class(),
                        r#type: "button",
                        disabled: done,
                        onclick: move |_| run(engine, action),
                        {i18n::lookup(descriptor.action_label_key)}
                    }
                }
                if done {
                    if let Some(title) = descriptor.result_title_key {
                        div { class: "task-card__result",
                            strong { {i18n::lookup(title)} }
                            if let Some(detail) = descriptor.result_detail_key {
                                span { class: "task-card__result-detail", {i18n::lookup(detail)} }
                            }
                        }
                    }
                }
            }

            footer { class: "task-card__footer",
                span { class: "task-card__counter",
                    {t!("step-counter", current = (day.index() + 1), total = DAY_COUNT)}
                }
                if !day.is_last() {
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        disabled: !snapshot.can_advance(),
                        onclick: move |_| run(engine, Action::Advance),
                        {t!("nav-next-day")}
                    }
                }
            }
        }
    }
}

#[component]
fn Celebration(mut engine: Signal<CrunchEngine>) -> Element {
    rsx! {
        div { class: "celebration", role: "dialog", aria_modal: "true",
            div { class: "celebration__card",
                div { class: "celebration__glyph", aria_hidden: "true", "🎉" }
                h2 { class: "celebration__title", {t!("celebrate-title")} }
                button {
                    class: "button button--primary",
                    r#type: "button",
                    onclick: move |_| {
                        engine.with_mut(|eng| eng.dismiss_celebration());
                    },
                    {t!("celebrate-dismiss")}
                }
            }
        }
    }
}

fn run(mut engine: Signal<CrunchEngine>, action: Action) {
    engine.with_mut(|eng| eng.apply(action));
}
