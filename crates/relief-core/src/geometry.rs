//! Plain geometry records shared by every chart

use serde::{Deserialize, Serialize};

// ============================================================================
// BOUNDS
// ============================================================================

/// Numeric domain or range (`max >= min` once normalized)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Span covered by the bounds
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Pixels reserved at the start and end of a scale range
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeOffset {
    pub start: f64,
    pub end: f64,
}

impl RangeOffset {
    pub const ZERO: RangeOffset = RangeOffset { start: 0.0, end: 0.0 };

    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn total(&self) -> f64 {
        self.start + self.end
    }
}

// ============================================================================
// SIZE / RECT
// ============================================================================

/// Pixel dimensions of a container or drawable area
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Four-sided spacing, used for both margins and padding
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect::uniform(0.0);

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

// ============================================================================
// POINTS
// ============================================================================

/// Fully defined chart coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Coordinate that may be missing either axis (an absent data sample)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UnsafePoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl UnsafePoint {
    pub const fn new(x: Option<f64>, y: Option<f64>) -> Self {
        Self { x, y }
    }

    /// Marker for a missing sample
    pub const fn gap() -> Self {
        Self { x: None, y: None }
    }

    pub fn is_gap(&self) -> bool {
        self.to_point().is_none()
    }

    /// Both coordinates, if defined
    pub fn to_point(&self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }
}

impl From<Point> for UnsafePoint {
    fn from(point: Point) -> Self {
        Self::new(Some(point.x), Some(point.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsafe_point_gap() {
        assert!(UnsafePoint::gap().is_gap());
        assert!(UnsafePoint::new(Some(1.0), None).is_gap());
        assert!(UnsafePoint::new(None, Some(1.0)).is_gap());
        assert_eq!(
            UnsafePoint::new(Some(1.0), Some(2.0)).to_point(),
            Some(Point::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_rect_partial_deserialize() {
        let rect: Rect = serde_json::from_str(r#"{"left": 12}"#).unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 0.0, 12.0));
        assert_eq!(rect.horizontal(), 12.0);
    }

    #[test]
    fn test_bounds_size() {
        let bounds = Bounds::new(-5.0, 15.0);
        assert_eq!(bounds.size(), 20.0);
        assert!(bounds.contains(0.0));
        assert!(!bounds.contains(16.0));
    }
}
