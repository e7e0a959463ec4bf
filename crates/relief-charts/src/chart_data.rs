//! Chart data assembly: raw items and selectors in, pixel geometry out
//!
//! This is the single entry point chart views call on every render or
//! resize. Everything is recomputed from the arguments; nothing is cached.

use crate::{
    chartkit::{
        DEFAULT_NUM_BREAKS, ScaleFunction, get_bounds, get_intervals,
        get_pretty_breakable_bounds, get_scale_function,
    },
    config::ChartConfig,
    dates::get_temporal_ticks,
    layout::{DataArea, get_chart_dimensions},
    path::get_discrete_path_data_list,
};
use chrono::{Datelike, NaiveDate};
use relief_core::{
    Bounds, ChartScale, CompactNumberFormatter, DateLabelFormatter, LabelFormatter, RangeOffset,
    Size, UnsafePoint,
};

/// One input item positioned in chart space
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Position of the item in the input
    pub index: usize,
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
    pub point: UnsafePoint,
}

/// Axis tick with its pixel position along the axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// Everything a chart view needs to draw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub chart_size: Size,
    pub data_area: DataArea,
    pub y_bounds: Bounds,
    pub data_points: Vec<ChartPoint>,
    pub x_axis_ticks: Vec<AxisTick>,
    pub y_axis_ticks: Vec<AxisTick>,
    /// One entry per contiguous run of points; `None` for single-point runs
    pub paths: Vec<Option<String>>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }

    /// Points with both coordinates defined
    pub fn drawable_points(&self) -> impl Iterator<Item = &ChartPoint> {
        self.data_points.iter().filter(|p| !p.point.is_gap())
    }
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Pixel range whose size equals the data area extent along one axis
fn axis_range(before: f64, extent: f64, after: f64) -> Bounds {
    Bounds::new(0.0, before + extent + after)
}

/// Compute chart geometry for a temporal series
///
/// Items without a date or value stay in `data_points` as gaps, splitting
/// the line into separate `paths`.
pub fn temporal_chart_data<T, D, V>(
    items: &[T],
    date_selector: D,
    value_selector: V,
    config: &ChartConfig,
    chart_size: Size,
) -> ChartData
where
    D: Fn(&T) -> Option<NaiveDate>,
    V: Fn(&T) -> Option<f64>,
{
    let dates: Vec<Option<NaiveDate>> = items.iter().map(|item| date_selector(item)).collect();
    let values: Vec<Option<f64>> = items
        .iter()
        .map(|item| value_selector(item).filter(|v| v.is_finite()))
        .collect();

    // X axis ticks from the covered date range
    let first_date = dates.iter().flatten().min().copied();
    let last_date = dates.iter().flatten().max().copied();
    let tick_dates = match first_date.zip(last_date) {
        Some((start, end)) => get_temporal_ticks(start, end, config.resolution),
        None => Vec::new(),
    };

    let data_area = get_chart_dimensions(&config.layout, chart_size, tick_dates.len());
    let offset = data_area.offset;

    // Samples may fall after the last tick (mid-month, or later in the final year)
    let covered_days: Vec<Option<f64>> = tick_dates
        .iter()
        .copied()
        .map(Some)
        .chain(dates.iter().copied())
        .map(|d| d.map(day_number))
        .collect();
    let x_scale = get_scale_function(
        get_bounds(&covered_days, None),
        axis_range(offset.left, data_area.size.width, offset.right),
        RangeOffset::new(offset.left, offset.right),
        false,
        ChartScale::Linear,
    );

    // Y axis domain, widened to round tick values
    let has_values = values.iter().any(Option::is_some);
    let zero_hint = (config.y_value_starts_from_zero && has_values).then_some(Bounds::new(0.0, 0.0));
    let num_breaks = match config.num_y_axis_ticks {
        0 | 1 => DEFAULT_NUM_BREAKS,
        n => n - 1,
    };
    let y_bounds = get_pretty_breakable_bounds(get_bounds(&values, zero_hint), num_breaks);
    let y_scale = get_scale_function(
        y_bounds,
        axis_range(offset.top, data_area.size.height, offset.bottom),
        RangeOffset::new(offset.top, offset.bottom),
        true,
        config.y_scale,
    );

    let data_points: Vec<ChartPoint> = dates
        .iter()
        .zip(values.iter())
        .enumerate()
        .map(|(index, (date, value))| ChartPoint {
            index,
            date: *date,
            value: *value,
            point: UnsafePoint::new(
                date.map(|d| x_scale.apply(day_number(d))),
                value.map(|v| y_scale.apply(v)),
            ),
        })
        .collect();

    let points: Vec<UnsafePoint> = data_points.iter().map(|p| p.point).collect();
    let paths = get_discrete_path_data_list(&points);

    let date_formatter = DateLabelFormatter::new(config.resolution);
    let x_axis_ticks = tick_dates
        .iter()
        .map(|date| {
            let value = day_number(*date);
            AxisTick {
                value,
                position: x_scale.apply(value),
                label: date_formatter.format(*date),
            }
        })
        .collect();

    let y_axis_ticks = numeric_ticks(&y_scale, y_bounds, config.num_y_axis_ticks);

    tracing::trace!(
        "Chart data: {} points, {} paths, {} x ticks",
        data_points.len(),
        paths.len(),
        tick_dates.len()
    );

    ChartData {
        chart_size,
        data_area,
        y_bounds,
        data_points,
        x_axis_ticks,
        y_axis_ticks,
        paths,
    }
}

fn numeric_ticks(scale: &ScaleFunction, bounds: Bounds, count: usize) -> Vec<AxisTick> {
    let formatter = CompactNumberFormatter;
    get_intervals(bounds, count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position: scale.apply(value),
            label: formatter.format(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_core::{Rect, TemporalResolution};

    struct Sample {
        date: Option<NaiveDate>,
        value: Option<f64>,
    }

    fn sample(y: i32, m: u32, value: Option<f64>) -> Sample {
        Sample {
            date: NaiveDate::from_ymd_opt(y, m, 1),
            value,
        }
    }

    fn sample_on(y: i32, m: u32, d: u32, value: Option<f64>) -> Sample {
        Sample {
            date: NaiveDate::from_ymd_opt(y, m, d),
            value,
        }
    }

    fn assert_x_inside(data: &ChartData) {
        let area = data.data_area;
        for point in data.drawable_points() {
            let x = point.point.x.unwrap();
            assert!(x >= area.offset.left - 1e-9, "{x} left of data area");
            assert!(x <= area.offset.left + area.size.width + 1e-9, "{x} right of data area");
        }
    }

    fn config() -> ChartConfig {
        let mut config = ChartConfig::default();
        config.layout.margin = Rect::ZERO;
        config.layout.padding = Rect::ZERO;
        config.layout.x_axis_height = 20.0;
        config.layout.y_axis_width = 40.0;
        config
    }

    fn compute(items: &[Sample], config: &ChartConfig) -> ChartData {
        temporal_chart_data(items, |s| s.date, |s| s.value, config, Size::new(440.0, 220.0))
    }

    #[test]
    fn test_empty_series() {
        let data = compute(&[], &config());
        assert!(data.is_empty());
        assert!(data.x_axis_ticks.is_empty());
        assert!(data.paths.is_empty());
        assert_eq!(data.y_bounds, Bounds::new(0.0, 4.0));
        assert_eq!(data.y_axis_ticks.len(), 5);
        assert_eq!(data.data_area.size.height, 200.0);
    }

    #[test]
    fn test_y_ticks_are_pretty() {
        let items = [
            sample(2021, 1, Some(3.0)),
            sample(2021, 2, Some(17.0)),
            sample(2021, 3, Some(9.0)),
        ];
        let data = compute(&items, &config());

        assert_eq!(data.y_bounds, Bounds::new(0.0, 20.0));
        let labels: Vec<&str> = data.y_axis_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "5", "10", "15", "20"]);

        // zero at the bottom of the data area, max at the top
        assert_eq!(data.y_axis_ticks[0].position, 200.0);
        assert_eq!(data.y_axis_ticks[4].position, 0.0);
    }

    #[test]
    fn test_x_ticks_follow_months() {
        let items = [
            sample(2021, 1, Some(3.0)),
            sample(2021, 2, Some(17.0)),
            sample(2021, 3, Some(9.0)),
        ];
        let data = compute(&items, &config());

        let labels: Vec<&str> = data.x_axis_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 2021", "Feb 2021", "Mar 2021"]);

        // 400 renderable, 80 reserved: ticks span [80, 400]
        assert_eq!(data.x_axis_ticks[0].position, 80.0);
        assert_eq!(data.x_axis_ticks[2].position, 400.0);
        assert_eq!(data.data_points[0].point.x, Some(80.0));
    }

    #[test]
    fn test_gap_splits_paths() {
        let items = [
            sample(2020, 1, Some(1.0)),
            sample(2020, 2, Some(2.0)),
            sample(2020, 3, None),
            sample(2020, 4, Some(4.0)),
            sample(2020, 5, Some(5.0)),
        ];
        let data = compute(&items, &config());

        assert_eq!(data.data_points.len(), 5);
        assert!(data.data_points[2].point.is_gap());
        assert_eq!(data.paths.len(), 2);
        assert!(data.paths.iter().all(Option::is_some));
        assert_eq!(data.drawable_points().count(), 4);
    }

    #[test]
    fn test_year_resolution() {
        let items = [sample(2018, 6, Some(10.0)), sample(2020, 2, Some(20.0))];
        let config = config().with_resolution(TemporalResolution::Year);
        let data = compute(&items, &config);

        let labels: Vec<&str> = data.x_axis_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["2018", "2019", "2020"]);
    }

    #[test]
    fn test_mid_month_samples_stay_inside() {
        let items = [
            sample_on(2021, 1, 15, Some(4.0)),
            sample_on(2021, 3, 28, Some(9.0)),
        ];
        let data = compute(&items, &config());

        assert_eq!(data.x_axis_ticks.len(), 3);
        assert_x_inside(&data);
        // the latest sample sits on the right edge, past the last tick
        let last = data.data_points[1].point.x.unwrap();
        assert!((last - (data.data_area.offset.left + data.data_area.size.width)).abs() < 1e-9);
        assert!(data.x_axis_ticks[2].position < last);
    }

    #[test]
    fn test_single_month_late_sample_stays_inside() {
        let items = [
            sample_on(2022, 6, 2, Some(1.0)),
            sample_on(2022, 6, 20, Some(2.0)),
        ];
        let data = compute(&items, &config());

        assert_eq!(data.x_axis_ticks.len(), 1);
        assert_x_inside(&data);
    }

    #[test]
    fn test_year_resolution_late_month_stays_inside() {
        let items = [sample(2018, 1, Some(1.0)), sample(2020, 11, Some(2.0))];
        let config = config().with_resolution(TemporalResolution::Year);
        let data = compute(&items, &config);

        let labels: Vec<&str> = data.x_axis_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["2018", "2019", "2020"]);
        assert_x_inside(&data);
    }
}
