//! Drawable-area layout for charts with axes

use relief_core::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Fixed spacing around the data area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub margin: Rect,
    pub padding: Rect,
    /// Height reserved below the data area for x-axis labels
    pub x_axis_height: f64,
    /// Width reserved left of the data area for y-axis labels
    pub y_axis_width: f64,
}

impl ChartLayout {
    /// Standard chart layout
    pub const fn standard() -> Self {
        Self {
            margin: Rect::uniform(10.0),
            padding: Rect::uniform(10.0),
            x_axis_height: 24.0,
            y_axis_width: 48.0,
        }
    }

    /// No axes, minimal spacing (sparklines, legends)
    pub const fn compact() -> Self {
        Self {
            margin: Rect::uniform(2.0),
            padding: Rect::ZERO,
            x_axis_height: 0.0,
            y_axis_width: 0.0,
        }
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Size and position of the area data points are drawn into
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DataArea {
    pub size: Size,
    /// Distance from each edge of the chart to the data area
    pub offset: Rect,
}

impl DataArea {
    /// SVG transform for the data area origin
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.offset.left, self.offset.top)
    }

    /// Whether a chart-space point lies inside the data area
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.offset.left
            && point.x <= self.offset.left + self.size.width
            && point.y >= self.offset.top
            && point.y <= self.offset.top + self.size.height
    }
}

/// Data area for a chart of `chart_size` with `num_x_axis_ticks` ticks
///
/// Half a tick slot is kept free on each horizontal side so edge points
/// are not drawn against the axis labels. Sizes never go below zero.
pub fn get_chart_dimensions(layout: &ChartLayout, chart_size: Size, num_x_axis_ticks: usize) -> DataArea {
    let ChartLayout { margin, padding, x_axis_height, y_axis_width } = *layout;

    let initial_left_offset = margin.left + y_axis_width + padding.left;
    let initial_right_offset = margin.right + padding.right;
    let top_offset = margin.top + padding.top;
    let bottom_offset = margin.bottom + x_axis_height + padding.bottom;

    let renderable_width = chart_size.width - initial_left_offset - initial_right_offset;
    let additional_horizontal_offset = renderable_width.max(0.0) / (num_x_axis_ticks + 2) as f64;

    let width = (renderable_width - additional_horizontal_offset).max(0.0);
    let height = (chart_size.height - top_offset - bottom_offset).max(0.0);

    DataArea {
        size: Size::new(width, height),
        offset: Rect::new(
            top_offset,
            initial_right_offset + additional_horizontal_offset / 2.0,
            bottom_offset,
            initial_left_offset + additional_horizontal_offset / 2.0,
        ),
    }
}
