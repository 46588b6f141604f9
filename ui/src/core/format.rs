//! Formatting helpers for presenting metrics.

pub fn format_db(value: f64) -> String {
    format!("{value:.1} dB")
}

pub fn format_ghz(value: f64) -> String {
    format!("{value:.1} GHz")
}

pub fn format_mv(value: f64) -> String {
    format!("{value:.0} mV")
}

pub fn format_mw(value: f64) -> String {
    format!("{value:.1} mW")
}

/// Fraction in [0, 1] as a CSS percentage, e.g. `"56.7%"`.
pub fn format_css_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction.clamp(0.0, 1.0) * 100.0)
}
