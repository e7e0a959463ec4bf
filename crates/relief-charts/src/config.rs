//! Chart configuration

use crate::layout::ChartLayout;
use relief_core::{ChartScale, TemporalResolution};
use serde::{Deserialize, Serialize};

/// Temporal chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(flatten)]
    pub layout: ChartLayout,
    pub num_y_axis_ticks: usize,
    /// Force zero into the y domain
    pub y_value_starts_from_zero: bool,
    pub y_scale: ChartScale,
    pub resolution: TemporalResolution,
    pub point_radius: f64,
    pub stroke_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::standard(),
            num_y_axis_ticks: 5,
            y_value_starts_from_zero: true,
            y_scale: ChartScale::Linear,
            resolution: TemporalResolution::Month,
            point_radius: 3.0,
            stroke_width: 2.0,
        }
    }
}

impl ChartConfig {
    pub fn compact() -> Self {
        Self {
            layout: ChartLayout::compact(),
            num_y_axis_ticks: 0,
            point_radius: 2.0,
            stroke_width: 1.5,
            ..Self::default()
        }
    }

    /// Parse from JSON, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_resolution(mut self, resolution: TemporalResolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_y_scale(mut self, scale: ChartScale) -> Self {
        self.y_scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ChartConfig::from_json("{}").unwrap(), ChartConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = ChartConfig::from_json(
            r#"{"y_scale": "sqrt", "resolution": "year", "y_axis_width": 64, "margin": {"top": 4}}"#,
        )
        .unwrap();

        assert_eq!(config.y_scale, ChartScale::Sqrt);
        assert_eq!(config.resolution, TemporalResolution::Year);
        assert_eq!(config.layout.y_axis_width, 64.0);
        assert_eq!(config.layout.margin.top, 4.0);
        assert_eq!(config.layout.margin.left, 0.0);
        assert_eq!(config.num_y_axis_ticks, 5);
    }

    #[test]
    fn test_invalid_json() {
        assert!(ChartConfig::from_json(r#"{"y_scale": "cubic"}"#).is_err());
    }
}
