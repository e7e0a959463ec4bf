//! SVG path data for point sequences, split around missing samples

use relief_core::{Point, UnsafePoint};

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for path generation
pub trait PathGenerator: Send + Sync {
    /// `None` when the points cannot form a path
    fn generate(&self, points: &[Point]) -> Option<String>;
}

/// Straight segments between consecutive points
#[derive(Debug, Clone, Default)]
pub struct LinePath;

impl PathGenerator for LinePath {
    fn generate(&self, points: &[Point]) -> Option<String> {
        if points.len() < 2 {
            return None;
        }

        let segments: Vec<String> = points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let command = if i == 0 { 'M' } else { 'L' };
                format!("{}{} {}", command, format_coord(point.x), format_coord(point.y))
            })
            .collect();

        Some(segments.join(" "))
    }
}

/// Shortest round-trip form; `-0` is written as `0`
fn format_coord(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// `M x0 y0 L x1 y1 ...`, or `None` for fewer than two points
pub fn get_path_data(points: &[Point]) -> Option<String> {
    LinePath.generate(points)
}

// ============================================================================
// GAP SPLITTING
// ============================================================================

/// Split `items` on every separator, dropping empty runs
pub fn split_list<T, I, F>(items: I, is_separator: F) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> bool,
{
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for item in items {
        if is_separator(&item) {
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(item);
        }
    }

    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// Contiguous runs of fully defined points, in input order
pub fn get_discrete_point_lists(points: &[UnsafePoint]) -> Vec<Vec<Point>> {
    split_list(points.iter().map(UnsafePoint::to_point), Option::is_none)
        .into_iter()
        .map(|run| run.into_iter().flatten().collect())
        .collect()
}

/// One path per contiguous run; single-point runs yield `None`
pub fn get_discrete_path_data_list(points: &[UnsafePoint]) -> Vec<Option<String>> {
    get_discrete_point_lists(points)
        .iter()
        .map(|run| get_path_data(run))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
