//! Time-series line chart
//!
//! Draws one line segment per contiguous run of samples, so missing samples
//! show up as breaks instead of lines bridging the gap.

use crate::{chart_data::temporal_chart_data, colors, config::ChartConfig};
use chrono::NaiveDate;
use leptos::prelude::*;
use relief_core::Size;

/// Single dated observation; `None` marks a missing sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesSample {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl TimeSeriesSample {
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

/// Time-series chart component
#[component]
pub fn TimeSeriesChart(
    #[prop(into)] samples: Signal<Vec<TimeSeriesSample>>,
    #[prop(default = Size::new(600.0, 240.0))] size: Size,
    #[prop(optional)] config: Option<ChartConfig>,
    #[prop(default = colors::PRIMARY)] color: &'static str,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let layout = config.layout;
    let point_r = config.point_radius;
    let stroke_w = config.stroke_width;

    let y_label_x = layout.margin.left + layout.y_axis_width;

    let chart_data = move || {
        let data = samples.get();
        temporal_chart_data(&data, |s| Some(s.date), |s| s.value, &config, size)
    };

    view! {
        <svg
            class="time-series-chart"
            viewBox=size.viewbox()
            preserveAspectRatio="xMidYMid meet"
            style="width: 100%; height: 100%;"
        >
            {move || {
                let data = chart_data();
                let area = data.data_area;
                let grid_x1 = area.offset.left;
                let grid_x2 = area.offset.left + area.size.width;
                let x_label_y = area.offset.top
                    + area.size.height
                    + layout.padding.bottom
                    + layout.x_axis_height / 2.0;

                view! {
                    <>
                        // Y-axis grid and labels
                        <g class="y-axis">
                            {data.y_axis_ticks.into_iter().map(move |tick| {
                                view! {
                                    <g>
                                        <line
                                            x1=grid_x1 y1=tick.position
                                            x2=grid_x2 y2=tick.position
                                            stroke=colors::GRID
                                            stroke-width="1"
                                        />
                                        <text
                                            x=y_label_x
                                            y=tick.position
                                            dx="-4"
                                            dy="0.32em"
                                            text-anchor="end"
                                            fill=colors::TEXT_MUTED
                                            font-size="10"
                                        >
                                            {tick.label}
                                        </text>
                                    </g>
                                }
                            }).collect_view()}
                        </g>

                        // X-axis labels
                        <g class="x-axis">
                            {data.x_axis_ticks.into_iter().map(move |tick| {
                                view! {
                                    <text
                                        x=tick.position
                                        y=x_label_y
                                        dy="0.32em"
                                        text-anchor="middle"
                                        fill=colors::TEXT_MUTED
                                        font-size="10"
                                    >
                                        {tick.label}
                                    </text>
                                }
                            }).collect_view()}
                        </g>

                        // Line segments
                        <g class="series">
                            {data.paths.into_iter().flatten().map(move |d| {
                                view! {
                                    <path
                                        d=d
                                        fill="none"
                                        stroke=color
                                        stroke-width=stroke_w
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                    />
                                }
                            }).collect_view()}

                            {data.data_points.into_iter().filter_map(|p| p.point.to_point()).map(move |point| {
                                view! {
                                    <circle
                                        cx=point.x
                                        cy=point.y
                                        r=point_r
                                        fill=color
                                    />
                                }
                            }).collect_view()}
                        </g>
                    </>
                }
            }}
        </svg>
    }
}
