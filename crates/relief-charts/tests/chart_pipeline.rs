use chrono::NaiveDate;
use relief_charts::{
    ChartConfig, get_bounds, get_chart_dimensions, get_color_scale_function,
    get_discrete_path_data_list, get_intervals, get_pretty_breakable_bounds, get_scale_function,
    temporal_chart_data,
};
use relief_core::{Bounds, ChartScale, RangeOffset, Rect, Size, TemporalResolution, UnsafePoint, colors};

struct Appeal {
    month: Option<NaiveDate>,
    people_targeted: Option<f64>,
}

fn appeal(year: i32, month: u32, people: Option<f64>) -> Appeal {
    Appeal {
        month: NaiveDate::from_ymd_opt(year, month, 1),
        people_targeted: people,
    }
}

#[test]
fn test_manual_pipeline_matches_chart_data() {
    let values = [Some(120.0), Some(430.0), None, Some(260.0)];
    let bounds = get_bounds(&values, Some(Bounds::new(0.0, 0.0)));
    assert_eq!(bounds, Bounds::new(0.0, 430.0));

    let pretty = get_pretty_breakable_bounds(bounds, 4);
    assert_eq!(pretty, Bounds::new(0.0, 432.0));
    assert_eq!(get_intervals(pretty, 5), vec![0.0, 108.0, 216.0, 324.0, 432.0]);

    let items: Vec<Appeal> = values
        .iter()
        .enumerate()
        .map(|(i, v)| appeal(2023, i as u32 + 1, *v))
        .collect();

    let data = temporal_chart_data(
        &items,
        |a| a.month,
        |a| a.people_targeted,
        &ChartConfig::default(),
        Size::new(640.0, 320.0),
    );

    assert_eq!(data.y_bounds, pretty);
    let tick_values: Vec<f64> = data.y_axis_ticks.iter().map(|t| t.value).collect();
    assert_eq!(tick_values, get_intervals(pretty, 5));
    assert_eq!(data.paths.len(), 2);
    assert_eq!(data.paths[1], None);
}

#[test]
fn test_points_stay_inside_data_area() {
    let items: Vec<Appeal> = (1..=12)
        .map(|m| appeal(2022, m, Some((m * m) as f64 * 1_000.0)))
        .collect();

    // log10 dips below zero for normalized values under 0.1
    let scales = [ChartScale::Linear, ChartScale::Exponential, ChartScale::Sqrt, ChartScale::Cbrt];
    for scale in scales {
        let config = ChartConfig::default().with_y_scale(scale);
        let data = temporal_chart_data(
            &items,
            |a| a.month,
            |a| a.people_targeted,
            &config,
            Size::new(800.0, 400.0),
        );

        let area = data.data_area;
        for point in data.drawable_points() {
            let y = point.point.y.unwrap();
            assert!(y >= area.offset.top - 1e-9, "{scale}: {y} above data area");
            assert!(y <= area.offset.top + area.size.height + 1e-9, "{scale}: {y} below data area");
        }
    }
}

#[test]
fn test_tiny_container_is_safe() {
    let items = vec![appeal(2021, 1, Some(5.0)), appeal(2021, 2, Some(6.0))];
    let data = temporal_chart_data(
        &items,
        |a| a.month,
        |a| a.people_targeted,
        &ChartConfig::default().with_resolution(TemporalResolution::Year),
        Size::new(10.0, 10.0),
    );

    assert_eq!(data.data_area.size, Size::new(0.0, 0.0));
    for point in data.drawable_points() {
        assert!(point.point.x.unwrap().is_finite());
        assert!(point.point.y.unwrap().is_finite());
    }
}

#[test]
fn test_layout_feeds_scale() {
    let layout = relief_charts::ChartLayout {
        margin: Rect::ZERO,
        padding: Rect::ZERO,
        x_axis_height: 0.0,
        y_axis_width: 0.0,
    };
    let area = get_chart_dimensions(&layout, Size::new(120.0, 60.0), 4);
    assert_eq!(area.size.width, 100.0);

    let scale = get_scale_function(
        Bounds::new(0.0, 4.0),
        Bounds::new(0.0, 120.0),
        RangeOffset::new(area.offset.left, area.offset.right),
        false,
        ChartScale::Linear,
    );
    assert_eq!(scale.apply(0.0), 10.0);
    assert_eq!(scale.apply(4.0), 110.0);

    let paths = get_discrete_path_data_list(&[
        UnsafePoint::new(Some(scale.apply(0.0)), Some(30.0)),
        UnsafePoint::new(Some(scale.apply(1.0)), Some(20.0)),
    ]);
    assert_eq!(paths, vec![Some("M10 30 L35 20".to_string())]);
}

#[test]
fn test_severity_palette_is_valid() {
    let scale = get_color_scale_function(Bounds::new(0.0, 100.0), colors::SEVERITY).unwrap();
    assert_eq!(scale.color(0.0, None, None), colors::SEVERITY[0]);
    assert_eq!(scale.color(100.0, None, None), colors::SEVERITY[4]);
    assert_eq!(scale.color(25.0, None, None), colors::SEVERITY[1]);
}
