//! # SVG charts
//!
//! Three small chart components drawn as inline SVG: [`DonutChart`],
//! [`BarChart`] and [`AreaChart`]. Layout math lives in plain functions so
//! it can be tested without rendering.

use std::f64::consts::PI;

use api::models::dashboard::ChartBucket;
use api::models::products::ClasseTone;
use dioxus::prelude::*;

use crate::format::{format_count, format_currency_whole, format_day_month};

/// Fallback palette for charts without semantic colors.
pub const CHART_COLORS: [&str; 7] = [
    "#3b82f6", "#8b5cf6", "#06b6d4", "#22c55e", "#eab308", "#ef4444", "#ec4899",
];

/// One labelled value with its color.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Buckets colored by position in [`CHART_COLORS`].
pub fn palette_data(buckets: &[ChartBucket]) -> Vec<ChartDatum> {
    buckets
        .iter()
        .enumerate()
        .map(|(i, b)| ChartDatum::new(&b.label, b.count as f64, CHART_COLORS[i % CHART_COLORS.len()]))
        .collect()
}

/// Risk-class buckets colored by severity.
pub fn classe_data(buckets: &[ChartBucket]) -> Vec<ChartDatum> {
    buckets
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let color = ClasseTone::of(Some(&b.label))
                .color()
                .unwrap_or(CHART_COLORS[i % CHART_COLORS.len()]);
            ChartDatum::new(&b.label, b.count as f64, color)
        })
        .collect()
}

/// Inactivity ranges: green for active through black for the oldest.
pub fn inactivity_color(label: &str) -> &'static str {
    match label {
        "Ativo (< 30d)" => "#22c55e",
        "Inativo 30-60d" => "#eab308",
        "Inativo 60-90d" => "#ef4444",
        "Inativo > 90d" => "#09090b",
        _ => "#6b7280",
    }
}

pub fn inactivity_data(buckets: &[ChartBucket]) -> Vec<ChartDatum> {
    buckets
        .iter()
        .map(|b| ChartDatum::new(&b.label, b.count as f64, inactivity_color(&b.label)))
        .collect()
}

/// Start and end angle (radians, clockwise from 12 o'clock) of each slice.
/// Zero and negative values get an empty slice.
pub fn donut_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = if total > 0.0 && *v > 0.0 {
                v / total * 2.0 * PI
            } else {
                0.0
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path for a ring segment. A full turn is drawn slightly short of 360°
/// because an arc whose endpoints coincide renders nothing.
pub fn ring_segment(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let end = end.min(start + 2.0 * PI - 1e-4);
    let large = if end - start > PI { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);
    let (x2, y2) = polar(cx, cy, inner, end);
    let (x3, y3) = polar(cx, cy, inner, start);
    format!(
        "M {x0:.2} {y0:.2} A {outer} {outer} 0 {large} 1 {x1:.2} {y1:.2} \
         L {x2:.2} {y2:.2} A {inner} {inner} 0 {large} 0 {x3:.2} {y3:.2} Z"
    )
}

/// Bar heights scaled so the largest value fills `height`.
pub fn bar_heights(values: &[f64], height: f64) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| if max > 0.0 { v.max(0.0) / max * height } else { 0.0 })
        .collect()
}

/// Line and filled-area paths through evenly spaced points.
pub fn area_paths(values: &[f64], width: f64, height: f64) -> (String, String) {
    if values.is_empty() {
        return (String::new(), String::new());
    }
    let heights = bar_heights(values, height);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let points: Vec<(f64, f64)> = heights
        .iter()
        .enumerate()
        .map(|(i, h)| (i as f64 * step, height - h))
        .collect();
    let line = points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{} {x:.2} {y:.2}", if i == 0 { "M" } else { "L" }))
        .collect::<Vec<_>>()
        .join(" ");
    let last_x = points.last().map(|(x, _)| *x).unwrap_or(0.0);
    let area = format!("{line} L {last_x:.2} {height:.2} L 0 {height:.2} Z");
    (line, area)
}

const CHARTS_CSS: Asset = asset!("/assets/styling/charts.css");

#[component]
pub fn DonutChart(data: Vec<ChartDatum>, #[props(default)] center_label: Option<String>) -> Element {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let angles = donut_angles(&values);

    rsx! {
        document::Stylesheet { href: CHARTS_CSS }
        div {
            class: "chart chart-donut",
            svg {
                view_box: "0 0 200 200",
                width: "200",
                height: "200",
                for (i, (datum, (start, end))) in data.iter().zip(angles).enumerate() {
                    if end > start {
                        path {
                            key: "{i}",
                            d: ring_segment(100.0, 100.0, 90.0, 58.0, start, end),
                            fill: "{datum.color}",
                            title { "{datum.label}: {format_count(datum.value as u64)}" }
                        }
                    }
                }
                if let Some(label) = center_label {
                    text {
                        x: "100",
                        y: "106",
                        text_anchor: "middle",
                        class: "chart-center-label",
                        "{label}"
                    }
                }
            }
            ul {
                class: "chart-legend",
                for datum in data.iter() {
                    li {
                        key: "{datum.label}",
                        span { class: "legend-swatch", style: "background: {datum.color}" }
                        span { class: "legend-label", "{datum.label}" }
                        span { class: "legend-value", "{format_count(datum.value as u64)}" }
                    }
                }
            }
        }
    }
}

fn display_value(value: f64, currency: bool) -> String {
    if currency {
        format_currency_whole(value)
    } else {
        format_count(value.max(0.0) as u64)
    }
}

/// Vertical bars with labels underneath.
#[component]
pub fn BarChart(
    data: Vec<ChartDatum>,
    #[props(default = 180.0)] height: f64,
    /// Tooltips show money instead of counts.
    #[props(default)]
    currency: bool,
) -> Element {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let heights = bar_heights(&values, height);
    let slot = 48.0;
    let width = (data.len() as f64 * slot).max(slot);

    rsx! {
        document::Stylesheet { href: CHARTS_CSS }
        div {
            class: "chart chart-bar",
            svg {
                view_box: "0 0 {width} {height + 24.0}",
                width: "100%",
                preserve_aspect_ratio: "none",
                for (i, (datum, h)) in data.iter().zip(heights).enumerate() {
                    g {
                        key: "{i}",
                        rect {
                            x: "{i as f64 * slot + 8.0}",
                            y: "{height - h}",
                            width: "{slot - 16.0}",
                            height: "{h}",
                            rx: "4",
                            fill: "{datum.color}",
                            title { "{datum.label}: {display_value(datum.value, currency)}" }
                        }
                        text {
                            x: "{i as f64 * slot + slot / 2.0}",
                            y: "{height + 16.0}",
                            text_anchor: "middle",
                            class: "chart-axis-label",
                            "{datum.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Filled line chart over dated buckets.
#[component]
pub fn AreaChart(
    data: Vec<ChartBucket>,
    #[props(default = "#3b82f6".to_string())] color: String,
) -> Element {
    let width = 600.0;
    let height = 180.0;
    let values: Vec<f64> = data.iter().map(|b| b.count as f64).collect();
    let (line, area) = area_paths(&values, width, height);
    let step = if data.len() > 1 { width / (data.len() - 1) as f64 } else { 0.0 };
    // Roughly eight axis labels regardless of the series length.
    let every = (data.len() / 8).max(1);

    rsx! {
        document::Stylesheet { href: CHARTS_CSS }
        div {
            class: "chart chart-area",
            svg {
                view_box: "0 0 {width} {height + 24.0}",
                width: "100%",
                preserve_aspect_ratio: "none",
                path { d: "{area}", fill: "{color}", fill_opacity: "0.15" }
                path { d: "{line}", fill: "none", stroke: "{color}", stroke_width: "2" }
                for (i, bucket) in data.iter().enumerate().filter(|(i, _)| i % every == 0) {
                    text {
                        key: "{i}",
                        x: "{i as f64 * step}",
                        y: "{height + 16.0}",
                        text_anchor: "middle",
                        class: "chart-axis-label",
                        "{format_day_month(&bucket.label)}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(label: &str, count: u64) -> ChartBucket {
        ChartBucket {
            label: label.to_string(),
            count,
            total_cost: 0.0,
        }
    }

    #[test]
    fn test_donut_angles_cover_full_turn() {
        let angles = donut_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(angles[0], (0.0, PI / 2.0));
        assert_eq!(angles[1], (PI / 2.0, PI));
        assert!((angles[2].1 - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_donut_angles_skip_empty_values() {
        let angles = donut_angles(&[0.0, 3.0]);
        assert_eq!(angles[0].0, angles[0].1);
        assert!((angles[1].1 - 2.0 * PI).abs() < 1e-9);
        assert!(donut_angles(&[0.0, 0.0]).iter().all(|(s, e)| s == e));
    }

    #[test]
    fn test_single_slice_ring_is_drawable() {
        let path = ring_segment(100.0, 100.0, 90.0, 58.0, 0.0, 2.0 * PI);
        assert!(path.starts_with("M 100.00 10.00"));
        // Endpoint must differ from the start point or the arc vanishes.
        assert!(!path.contains("1 1 100.00 10.00"));
        assert!(path.contains(" 1 1 "));
    }

    #[test]
    fn test_bar_heights_scale_to_max() {
        assert_eq!(bar_heights(&[5.0, 10.0, 0.0], 100.0), vec![50.0, 100.0, 0.0]);
        assert_eq!(bar_heights(&[0.0, 0.0], 100.0), vec![0.0, 0.0]);
        assert!(bar_heights(&[], 100.0).is_empty());
    }

    #[test]
    fn test_area_paths() {
        let (line, area) = area_paths(&[0.0, 10.0], 100.0, 50.0);
        assert_eq!(line, "M 0.00 50.00 L 100.00 0.00");
        assert_eq!(area, "M 0.00 50.00 L 100.00 0.00 L 100.00 50.00 L 0 50.00 Z");
        assert_eq!(area_paths(&[], 100.0, 50.0), (String::new(), String::new()));
    }

    #[test]
    fn test_classe_colors() {
        let data = classe_data(&[bucket("MUITO CRITICO", 2), bucket("CRITICO", 3), bucket("ATENÇÃO", 1)]);
        assert_eq!(data[0].color, "#09090b");
        assert_eq!(data[1].color, "#ef4444");
        assert_eq!(data[2].color, "#eab308");
        assert_eq!(data[1].value, 3.0);
    }

    #[test]
    fn test_inactivity_colors() {
        assert_eq!(inactivity_color("Ativo (< 30d)"), "#22c55e");
        assert_eq!(inactivity_color("Inativo > 90d"), "#09090b");
        assert_eq!(inactivity_color("Sem Data"), "#6b7280");
    }
}
