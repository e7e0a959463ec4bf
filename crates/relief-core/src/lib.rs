//! # relief-core
//!
//! Core chart value types for the humanitarian data dashboard.
//! Implements Strategy pattern for axis label formatting.

pub mod callable;
pub mod geometry;
pub mod scale;

pub use callable::*;
pub use geometry::*;
pub use scale::*;

use chrono::NaiveDate;

// ============================================================================
// STRATEGY PATTERN: Label Formatters
// ============================================================================

/// Strategy trait for numeric axis labels
pub trait LabelFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Compact formatter for large numbers (K, M, B suffixes)
#[derive(Debug, Clone, Default)]
pub struct CompactNumberFormatter;

impl LabelFormatter for CompactNumberFormatter {
    fn format(&self, num: f64) -> String {
        let abs = num.abs();
        let sign = if num < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{}B", sign, trim_fraction(abs / 1_000_000_000.0))
        } else if abs >= 1_000_000.0 {
            format!("{}{}M", sign, trim_fraction(abs / 1_000_000.0))
        } else if abs >= 1_000.0 {
            format!("{}{}K", sign, trim_fraction(abs / 1_000.0))
        } else {
            format!("{}{}", sign, trim_fraction(abs))
        }
    }
}

/// Two decimals, dropped entirely for whole numbers
fn trim_fraction(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.2}", rounded)
    }
}

/// Date labels for temporal axis ticks
#[derive(Debug, Clone)]
pub struct DateLabelFormatter {
    pub resolution: TemporalResolution,
}

impl DateLabelFormatter {
    pub fn new(resolution: TemporalResolution) -> Self {
        Self { resolution }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.resolution.label_format()).to_string()
    }
}

impl Default for DateLabelFormatter {
    fn default() -> Self {
        Self::new(TemporalResolution::Month)
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const PRIMARY: &str = "#f5333f";
    pub const TEXT_PRIMARY: &str = "#313131";
    pub const TEXT_MUTED: &str = "#767676";
    pub const GRID: &str = "#e0e0e0";
    pub const BORDER: &str = "#d7d7d7";
    pub const BG_PANEL: &str = "#ffffff";

    /// Risk severity, low to very high
    pub const SEVERITY: &[&str] = &["#c7d3e0", "#f5d6a2", "#f0a971", "#e8625f", "#c42a2f"];

    /// Single hue heat ramp
    pub const HEAT: &[&str] = &["#fde5e6", "#f5333f"];
}
