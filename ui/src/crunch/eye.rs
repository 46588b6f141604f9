use dioxus::prelude::*;

use crate::t;

use super::quality::Quality;
use super::waveform::{grid_lines, scope_frame, SCOPE_HEIGHT, SCOPE_WIDTH};

/// Scope view. The frame is rebuilt only when `quality` changes.
#[component]
pub fn EyeDiagram(quality: ReadOnlySignal<Quality>) -> Element {
    let frame = use_memo(move || scope_frame(quality()));
    let frame = frame.read();
    let stroke = frame.stroke();
    let view_box = format!("0 0 {SCOPE_WIDTH} {SCOPE_HEIGHT}");

    rsx! {
        div {
            class: "scope",
            role: "img",
            aria_label: t!("eye-diagram-label"),
            div { class: "scope__scanlines" }
            svg {
                class: "scope__screen",
                view_box: "{view_box}",
                preserve_aspect_ratio: "none",
                rect {
                    class: "scope__phosphor",
                    x: "0",
                    y: "0",
                    width: "{frame.width}",
                    height: "{frame.height}",
                }
                for (i, ((x1, y1), (x2, y2))) in grid_lines().into_iter().enumerate() {
                    line {
                        key: "grid-{i}",
                        class: "scope__grid",
                        x1: "{x1}",
                        y1: "{y1}",
                        x2: "{x2}",
                        y2: "{y2}",
                    }
                }
                for (i, trace) in frame.traces.iter().enumerate() {
                    polyline {
                        key: "trace-{i}",
                        class: "scope__trace",
                        points: trace.svg_points(),
                        fill: "none",
                        stroke: stroke,
                        stroke_width: "2",
                    }
                }
                text { class: "scope__readout", x: "10", y: "20", "{frame.eye_label}" }
                text { class: "scope__readout", x: "10", y: "35", "{frame.jitter_label}" }
            }
        }
    }
}
