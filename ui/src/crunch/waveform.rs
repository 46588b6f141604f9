//! Decorative eye-diagram traces.
//!
//! [`render_waveform`] turns a quality score into a frame of polylines. The
//! random source is a parameter; [`scope_frame`] seeds it from the quality
//! itself, so a given eye always draws the same noise.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::quality::{Quality, Verdict};

pub const SCOPE_WIDTH: f64 = 280.0;
pub const SCOPE_HEIGHT: f64 = 180.0;

const X_STEP: usize = 2;
const PERSISTENCE_PASSES: usize = 15;
const NOISE_SCALE: f64 = 40.0;
const DRIFT_AMPLITUDE: f64 = 10.0;
const DRIFT_RATE: f64 = 0.05;

/// Samples per trace (`0..=width` every `X_STEP` px).
pub const POINTS_PER_TRACE: usize = SCOPE_WIDTH as usize / X_STEP + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    TopRail,
    BottomRail,
    Transition,
}

impl TraceKind {
    fn phase(self) -> f64 {
        match self {
            TraceKind::TopRail => FRAC_PI_2,
            TraceKind::BottomRail => 3.0 * FRAC_PI_2,
            TraceKind::Transition => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub kind: TraceKind,
    pub points: Vec<(f64, f64)>,
}

impl Trace {
    /// `points` attribute for an SVG `<polyline>`.
    pub fn svg_points(&self) -> String {
        let mut out = String::with_capacity(self.points.len() * 12);
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{x:.0},{y:.1}"));
        }
        out
    }
}

/// One full redraw of the scope.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformFrame {
    pub width: f64,
    pub height: f64,
    pub verdict: Verdict,
    pub traces: Vec<Trace>,
    pub eye_label: String,
    pub jitter_label: String,
}

impl WaveformFrame {
    pub fn stroke(&self) -> &'static str {
        self.verdict.stroke()
    }
}

/// Ideal (noise-free, drift-free) trace height at `x`.
pub fn ideal_y(kind: TraceKind, x: f64, quality: Quality) -> f64 {
    let nx = x / SCOPE_WIDTH * TAU;
    SCOPE_HEIGHT / 2.0 + (nx + kind.phase()).sin() * amplitude(quality) * (SCOPE_HEIGHT / 2.5)
}

fn amplitude(quality: Quality) -> f64 {
    quality.value() * 0.8 + 0.2
}

pub fn render_waveform<R: Rng + ?Sized>(quality: Quality, rng: &mut R) -> WaveformFrame {
    let jitter = quality.jitter();
    let drift = quality.has_dc_drift();

    let mut traces = Vec::with_capacity(PERSISTENCE_PASSES * 3);
    for _ in 0..PERSISTENCE_PASSES {
        traces.push(trace(TraceKind::TopRail, quality, jitter, drift, rng));
        traces.push(trace(TraceKind::BottomRail, quality, jitter, drift, rng));
        if rng.gen_bool(0.5) {
            traces.push(trace(TraceKind::Transition, quality, jitter, drift, rng));
        }
    }

    WaveformFrame {
        width: SCOPE_WIDTH,
        height: SCOPE_HEIGHT,
        verdict: quality.verdict(),
        traces,
        eye_label: format!("EYE_H: {:.1}mV", quality.eye_readout_mv()),
        jitter_label: format!("JITTER: {:.1}ps", quality.jitter_readout_ps()),
    }
}

fn trace<R: Rng + ?Sized>(
    kind: TraceKind,
    quality: Quality,
    jitter: f64,
    drift: bool,
    rng: &mut R,
) -> Trace {
    let points = (0..POINTS_PER_TRACE)
        .map(|i| {
            let x = (i * X_STEP) as f64;
            let noise = (rng.gen::<f64>() - 0.5) * jitter * NOISE_SCALE;
            let wander = if drift {
                (x * DRIFT_RATE).sin() * DRIFT_AMPLITUDE
            } else {
                0.0
            };
            (x, ideal_y(kind, x, quality) + noise + wander)
        })
        .collect();
    Trace { kind, points }
}

/// Frame shown on the scope for `quality`. Same quality, same frame.
pub fn scope_frame(quality: Quality) -> WaveformFrame {
    let mut rng = StdRng::seed_from_u64(quality.value().to_bits());
    render_waveform(quality, &mut rng)
}

/// Centre cross-hair drawn under the traces.
pub fn grid_lines() -> [((f64, f64), (f64, f64)); 2] {
    [
        ((0.0, SCOPE_HEIGHT / 2.0), (SCOPE_WIDTH, SCOPE_HEIGHT / 2.0)),
        ((SCOPE_WIDTH / 2.0, 0.0), (SCOPE_WIDTH / 2.0, SCOPE_HEIGHT)),
    ]
}
