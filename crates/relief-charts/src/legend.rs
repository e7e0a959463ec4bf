//! Severity legend: a stepped gradient across a color scale

use crate::{color::get_color_scale_function, colors};
use leptos::prelude::*;
use relief_core::{Bounds, CompactNumberFormatter, LabelFormatter};

/// One legend cell
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub x: f64,
    pub width: f64,
    pub value: f64,
    pub color: String,
}

/// `steps` equal-width cells spanning `width`, colored across `domain`
///
/// An unusable palette yields no cells.
pub fn legend_swatches(domain: Bounds, palette: &[&str], steps: usize, width: f64) -> Vec<Swatch> {
    let scale = match get_color_scale_function(domain, palette) {
        Ok(scale) => scale,
        Err(e) => {
            tracing::warn!("Cannot build legend: {}", e);
            return Vec::new();
        }
    };

    if steps == 0 {
        return Vec::new();
    }

    let cell_width = width / steps as f64;
    let value_step = if steps > 1 {
        domain.size() / (steps - 1) as f64
    } else {
        0.0
    };

    (0..steps)
        .map(|i| {
            let value = domain.min + value_step * i as f64;
            Swatch {
                x: cell_width * i as f64,
                width: cell_width,
                value,
                color: scale.color(value, None, None),
            }
        })
        .collect()
}

/// Severity legend component
#[component]
pub fn SeverityLegend(
    #[prop(default = Bounds::new(0.0, 1.0))] domain: Bounds,
    #[prop(default = colors::SEVERITY)] palette: &'static [&'static str],
    #[prop(default = 10)] steps: usize,
    #[prop(default = 200.0)] width: f64,
    #[prop(default = 12.0)] height: f64,
) -> impl IntoView {
    let swatches = legend_swatches(domain, palette, steps, width);
    let formatter = CompactNumberFormatter;
    let min_label = formatter.format(domain.min);
    let max_label = formatter.format(domain.max);
    let total_height = height + 14.0;

    view! {
        <svg
            class="severity-legend"
            viewBox=format!("0 0 {} {}", width, total_height)
            style="width: 100%; height: 100%;"
        >
            {swatches.into_iter().map(|swatch| {
                view! {
                    <rect
                        x=swatch.x
                        y="0"
                        width=swatch.width
                        height=height
                        fill=swatch.color
                    />
                }
            }).collect_view()}

            <text x="0" y=total_height fill=colors::TEXT_MUTED font-size="10">
                {min_label}
            </text>
            <text x=width y=total_height text-anchor="end" fill=colors::TEXT_MUTED font-size="10">
                {max_label}
            </text>
        </svg>
    }
}
