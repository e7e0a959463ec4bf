//! # chartkit
//!
//! Core chart primitives: domain bounds, scale functions, tick intervals and
//! even distribution of excess range.
//! Implements Strategy pattern for scale transfer functions.

use relief_core::{Bounds, ChartScale, RangeOffset};

/// Default number of breaks for pretty bounds
pub const DEFAULT_NUM_BREAKS: usize = 5;

/// Span forced onto a domain whose values are all equal
const DEGENERATE_SPAN: f64 = 5.0;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;
}

// ============================================================================
// BOUNDS
// ============================================================================

/// Safe bounds for a list of possibly missing values
///
/// `bounds` joins the candidate values, which lets callers force a value
/// such as zero into the domain. The result never has zero width.
pub fn get_bounds(values: &[Option<f64>], bounds: Option<Bounds>) -> Bounds {
    let defined: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|value| value.is_finite())
        .collect();

    if defined.is_empty() {
        let min = bounds.map_or(0.0, |b| b.min);
        let max = bounds.map_or(min + 1.0, |b| b.max);
        return Bounds::new(min, max);
    }

    let candidates = defined
        .into_iter()
        .chain(bounds.into_iter().flat_map(|b| [b.min, b.max]));

    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for value in candidates {
        min = min.min(value);
        max = max.max(value);
    }

    if max == min {
        tracing::trace!("Zero-width bounds at {}, widening by {}", min, DEGENERATE_SPAN);
        max = min + DEGENERATE_SPAN;
    }

    Bounds::new(min, max)
}

// ============================================================================
// SCALE FUNCTION
// ============================================================================

/// Domain to pixel mapping under a [`ChartScale`] transfer function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFunction {
    domain: Bounds,
    range: Bounds,
    offset: RangeOffset,
    inverted: bool,
    transfer: ChartScale,
}

impl ScaleFunction {
    pub fn new(domain: Bounds, range: Bounds, offset: RangeOffset) -> Self {
        Self {
            domain,
            range,
            offset,
            inverted: false,
            transfer: ChartScale::Linear,
        }
    }

    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn transfer(mut self, transfer: ChartScale) -> Self {
        self.transfer = transfer;
        self
    }

    pub fn domain(&self) -> Bounds {
        self.domain
    }

    /// Pixels available after both offsets are removed
    pub fn range_size(&self) -> f64 {
        self.range.size() - self.offset.total()
    }

    pub fn apply(&self, value: f64) -> f64 {
        let domain_size = self.domain.size();
        if domain_size == 0.0 {
            return self.domain.min;
        }

        let normalized = (value - self.domain.min) / domain_size;
        let scaled = self.transfer.transfer(normalized);
        let range_size = self.range_size();

        if self.inverted {
            (range_size + self.offset.start) - range_size * scaled
        } else {
            self.offset.start + range_size * scaled
        }
    }
}

impl Scale for ScaleFunction {
    fn scale(&self, value: f64) -> f64 {
        self.apply(value)
    }
}

/// Build a value to pixel mapping
///
/// A zero-width domain produces a constant function yielding `domain.min`.
pub fn get_scale_function(
    domain: Bounds,
    range: Bounds,
    offset: RangeOffset,
    inverted: bool,
    scale: ChartScale,
) -> ScaleFunction {
    if domain.size() == 0.0 {
        tracing::debug!("Zero-width domain at {}, scale is constant", domain.min);
    }

    ScaleFunction::new(domain, range, offset)
        .inverted(inverted)
        .transfer(scale)
}

// ============================================================================
// INTERVALS
// ============================================================================

/// `num_points` evenly spaced values starting at `bounds.min`
pub fn get_intervals(bounds: Bounds, num_points: usize) -> Vec<f64> {
    if num_points == 0 {
        return Vec::new();
    }

    if num_points == 1 {
        return vec![bounds.min];
    }

    // FIXME: all-zero data has a legitimate zero max but gets no ticks here.
    if bounds.max == 0.0 {
        return Vec::new();
    }

    let step = bounds.size() / (num_points - 1) as f64;
    (0..num_points).map(|i| bounds.min + step * i as f64).collect()
}

/// Widen `bounds.max` so the span splits into `num_breaks` whole-number gaps
pub fn get_pretty_breakable_bounds(bounds: Bounds, num_breaks: usize) -> Bounds {
    if num_breaks == 0 {
        return bounds;
    }

    let breaks = num_breaks as f64;
    let potential_gap = (bounds.size() / breaks).ceil();

    Bounds::new(bounds.min, bounds.min + potential_gap * breaks)
}

// ============================================================================
// EVEN DISTRIBUTION
// ============================================================================

/// Padding to add on each side of a span
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Distribution {
    pub left: f64,
    pub right: f64,
}

impl Distribution {
    pub fn total(&self) -> f64 {
        self.left + self.right
    }
}

/// Split `excess` into two halves, the smaller one on the left
pub fn get_evenly_distributed_excess(excess: f64) -> Distribution {
    let left = (excess / 2.0).floor();
    Distribution {
        left,
        right: excess - left,
    }
}

/// Padding that makes `max - min` an exact multiple of `distribution`
pub fn get_even_distribution(min: f64, max: f64, distribution: f64) -> Distribution {
    if distribution <= 0.0 || !distribution.is_finite() {
        return Distribution::default();
    }

    let remainder = (max - min).rem_euclid(distribution);
    if remainder == 0.0 {
        return Distribution::default();
    }

    get_evenly_distributed_excess(distribution - remainder)
}

/// Bounds padded out to a multiple of `num_breaks`
pub fn get_evenly_distributible_bounds(bounds: Bounds, num_breaks: usize) -> Bounds {
    let distribution = get_even_distribution(bounds.min, bounds.max, num_breaks as f64);
    Bounds::new(bounds.min - distribution.left, bounds.max + distribution.right)
}

// ============================================================================
// TESTS
// ============================================================================
