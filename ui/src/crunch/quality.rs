//! Derived quality score and the pass/warn/fail classification shared by the
//! metric badges and the eye diagram.

use super::metrics::{Metrics, TARGETS};

/// Eye height (mV) that maps to a perfect score.
pub const FULL_EYE_MV: f64 = 60.0;

pub const PASS_THRESHOLD: f64 = 0.8;
pub const WARN_THRESHOLD: f64 = 0.5;

/// Below this score the waveform picks up a slow baseline wander.
pub const DC_DRIFT_THRESHOLD: f64 = 0.4;

/// Eye height above which the engineer cheers up.
pub const HAPPY_EYE_MV: f64 = 40.0;

/// Normalised eye opening in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Quality(f64);

impl Quality {
    pub fn from_eye_height(eye_height_mv: f64) -> Self {
        if !eye_height_mv.is_finite() {
            return Self(0.0);
        }
        Self((eye_height_mv / FULL_EYE_MV).clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Noise magnitude: the worse the eye, the more jitter.
    pub fn jitter(self) -> f64 {
        1.0 - self.0
    }

    pub fn verdict(self) -> Verdict {
        if self.0 >= PASS_THRESHOLD {
            Verdict::Pass
        } else if self.0 >= WARN_THRESHOLD {
            Verdict::Warn
        } else {
            Verdict::Fail
        }
    }

    pub fn has_dc_drift(self) -> bool {
        self.0 < DC_DRIFT_THRESHOLD
    }

    /// Scope readout for the eye height, in mV.
    pub fn eye_readout_mv(self) -> f64 {
        self.0 * 55.0
    }

    /// Scope readout for the jitter, in ps.
    pub fn jitter_readout_ps(self) -> f64 {
        self.jitter() * 4.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    /// Modifier class for badges, e.g. `verdict--pass`.
    pub fn css_class(self) -> &'static str {
        match self {
            Verdict::Pass => "verdict--pass",
            Verdict::Warn => "verdict--warn",
            Verdict::Fail => "verdict--fail",
        }
    }

    /// Stroke colour used on the scope.
    pub fn stroke(self) -> &'static str {
        match self {
            Verdict::Pass => "#4ade80",
            Verdict::Warn => "#facc15",
            Verdict::Fail => "#ef4444",
        }
    }

    /// Plain target check: meeting the target passes, anything else fails.
    pub fn against_target(value: f64, target: f64) -> Self {
        if value >= target {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Neutral,
    Happy,
}

impl Mood {
    pub fn from_metrics(metrics: &Metrics) -> Self {
        if metrics.eye_height > HAPPY_EYE_MV {
            Mood::Happy
        } else {
            Mood::Neutral
        }
    }
}

/// Badge colours for the metrics deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeVerdicts {
    pub gain: Verdict,
    pub bandwidth: Verdict,
    pub eye: Verdict,
    pub power: Verdict,
}

impl BadgeVerdicts {
    pub fn from_metrics(metrics: &Metrics) -> Self {
        Self {
            gain: Verdict::against_target(metrics.gain, TARGETS.gain),
            bandwidth: Verdict::against_target(metrics.bandwidth, TARGETS.bandwidth),
            eye: Quality::from_eye_height(metrics.eye_height).verdict(),
            power: if metrics.within_power_budget() {
                Verdict::Pass
            } else {
                Verdict::Fail
            },
        }
    }
}
