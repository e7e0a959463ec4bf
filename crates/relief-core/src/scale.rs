//! Scale variants and temporal resolutions

use serde::{Deserialize, Serialize};

/// Transfer function applied to a normalized domain value
///
/// Every variant operates on `t = (value - min) / (max - min)`, never on the
/// raw data value, so the same curve applies whether the data spans single
/// digits or millions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartScale {
    #[default]
    Linear,
    Exponential,
    Log10,
    Sqrt,
    Cbrt,
}

impl ChartScale {
    /// Apply the transfer function to a normalized value
    pub fn transfer(&self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Exponential => t.exp() / std::f64::consts::E,
            // Not a true log scale: t * log10(10t), zero at the origin.
            Self::Log10 => {
                if t == 0.0 {
                    0.0
                } else {
                    t * (t * 10.0).log10()
                }
            }
            Self::Sqrt => t.sqrt(),
            Self::Cbrt => t.cbrt(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Exponential => "Exponential",
            Self::Log10 => "Log10",
            Self::Sqrt => "Square root",
            Self::Cbrt => "Cube root",
        }
    }

    /// All scales
    pub fn all() -> &'static [Self] {
        &[Self::Linear, Self::Exponential, Self::Log10, Self::Sqrt, Self::Cbrt]
    }
}

impl std::fmt::Display for ChartScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Calendar step between temporal axis ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalResolution {
    #[default]
    Month,
    Year,
}

impl TemporalResolution {
    /// chrono format string for tick labels
    pub fn label_format(&self) -> &'static str {
        match self {
            Self::Month => "%b %Y",
            Self::Year => "%Y",
        }
    }
}
