//! Metric definitions for the CTLE block under debug: baseline values, sign-off
//! targets and the per-day values swapped in by each fix.

/// The four tracked design parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Peaking gain in dB.
    pub gain: f64,
    /// Bandwidth in GHz.
    pub bandwidth: f64,
    /// Eye height in mV.
    pub eye_height: f64,
    /// Power in mW.
    pub power: f64,
}

/// Values reported by the first simulation at the SS/125°C corner.
pub const METRICS_BASE: Metrics = Metrics {
    gain: 8.5,
    bandwidth: 10.5,
    eye_height: 28.0,
    power: 4.2,
};

/// Sign-off targets.
pub const TARGETS: Metrics = Metrics {
    gain: 11.0,
    bandwidth: 14.0,
    eye_height: 50.0,
    power: 5.0,
};

/// Power budget shown next to the live power figure on the circuit-fix day.
pub const POWER_BUDGET_MW: f64 = 5.0;

/// Full-scale values of the metrics deck gauges.
pub const GAIN_GAUGE_FULL_SCALE_DB: f64 = 15.0;
pub const BANDWIDTH_GAUGE_FULL_SCALE_GHZ: f64 = 20.0;

// Per-action values.
pub(crate) const EXTRACTED_BANDWIDTH: f64 = 9.8;
pub(crate) const EXTRACTED_EYE_HEIGHT: f64 = 25.0;

pub(crate) const CIRCUIT_FIX_GAIN: f64 = 10.8;
pub(crate) const CIRCUIT_FIX_POWER: f64 = 4.8;
pub(crate) const CIRCUIT_FIX_EYE_HEIGHT: f64 = 40.0;

pub(crate) const LAYOUT_ECO_GAIN: f64 = 11.8;
pub(crate) const LAYOUT_ECO_BANDWIDTH: f64 = 15.2;
pub(crate) const LAYOUT_ECO_EYE_HEIGHT: f64 = 48.0;
pub(crate) const LAYOUT_ECO_POWER: f64 = 4.8;

impl Metrics {
    pub fn baseline() -> Self {
        METRICS_BASE
    }

    /// Post-extraction numbers: the parasitics make things look slightly worse.
    pub(crate) fn with_extraction(self) -> Self {
        Self {
            bandwidth: EXTRACTED_BANDWIDTH,
            eye_height: EXTRACTED_EYE_HEIGHT,
            ..self
        }
    }

    /// Split source cap + dummy poly. Gain recovers, power goes up.
    pub(crate) fn with_circuit_fix(self) -> Self {
        Self {
            gain: CIRCUIT_FIX_GAIN,
            power: CIRCUIT_FIX_POWER,
            eye_height: CIRCUIT_FIX_EYE_HEIGHT,
            ..self
        }
    }

    /// Widened M1 traces after the layout ECO.
    pub(crate) fn with_layout_eco(self) -> Self {
        Self {
            gain: LAYOUT_ECO_GAIN,
            bandwidth: LAYOUT_ECO_BANDWIDTH,
            eye_height: LAYOUT_ECO_EYE_HEIGHT,
            power: LAYOUT_ECO_POWER,
        }
    }

    pub fn gain_gauge_fill(&self) -> f64 {
        gauge_fill(self.gain, GAIN_GAUGE_FULL_SCALE_DB)
    }

    pub fn bandwidth_gauge_fill(&self) -> f64 {
        gauge_fill(self.bandwidth, BANDWIDTH_GAUGE_FULL_SCALE_GHZ)
    }

    /// Power against the budget, clamped to a full gauge.
    pub fn power_gauge_fill(&self) -> f64 {
        gauge_fill(self.power, POWER_BUDGET_MW)
    }

    /// Rotation of the workbench gain knob in degrees.
    pub fn gain_knob_deg(&self) -> f64 {
        self.gain * 20.0
    }

    /// Rotation of the workbench peaking knob in degrees.
    pub fn peaking_knob_deg(&self) -> f64 {
        self.bandwidth * 10.0
    }

    pub fn within_power_budget(&self) -> bool {
        self.power <= POWER_BUDGET_MW
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::baseline()
    }
}

fn gauge_fill(value: f64, full_scale: f64) -> f64 {
    if !value.is_finite() || full_scale <= 0.0 {
        return 0.0;
    }
    (value / full_scale).clamp(0.0, 1.0)
}
