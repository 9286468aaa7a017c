//! Dependency-free SVG charts.
//!
//! Geometry is computed by plain functions over a fixed view box so it can be
//! tested without a DOM; the components only turn the numbers into markup.
//! Axis labels are rendered as HTML below the SVG, not as `<text>` nodes.

use leptos::*;

use crate::pages::dashboard::{repository::ChannelShare, utils::format_count};

pub const VIEW_WIDTH: f64 = 600.0;
pub const VIEW_HEIGHT: f64 = 240.0;
pub const PADDING: f64 = 16.0;
const BAR_FILL_RATIO: f64 = 0.6;
const DONUT_RADIUS: f64 = 40.0;
const DONUT_STROKE: f64 = 18.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Places `values` left to right, scaled so the largest touches the top.
/// Negative values sit on the baseline.
pub fn scale_points(values: &[f64], width: f64, height: f64, padding: f64) -> Vec<Point> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let inner_width = (width - 2.0 * padding).max(0.0);
    let inner_height = (height - 2.0 * padding).max(0.0);
    let step = if values.len() > 1 {
        inner_width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = if values.len() == 1 {
                width / 2.0
            } else {
                padding + step * idx as f64
            };
            let ratio = if max > 0.0 { value.max(0.0) / max } else { 0.0 };
            Point {
                x,
                y: height - padding - ratio * inner_height,
            }
        })
        .collect()
}

pub fn line_path(points: &[Point]) -> String {
    let mut path = String::new();
    for (idx, point) in points.iter().enumerate() {
        let command = if idx == 0 { "M" } else { " L" };
        path.push_str(&format!("{} {:.2},{:.2}", command, point.x, point.y));
    }
    path
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn bar_geometry(values: &[f64], width: f64, height: f64, padding: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let inner_height = (height - 2.0 * padding).max(0.0);
    let slot = (width - 2.0 * padding).max(0.0) / values.len() as f64;
    let bar_width = slot * BAR_FILL_RATIO;
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let ratio = if max > 0.0 { value.max(0.0) / max } else { 0.0 };
            let bar_height = ratio * inner_height;
            Bar {
                x: padding + slot * idx as f64 + (slot - bar_width) / 2.0,
                y: height - padding - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

/// One arc of the donut, drawn as a dashed circle stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    pub name: String,
    pub color: String,
    pub percent: f64,
    pub length: f64,
    pub offset: f64,
    pub circumference: f64,
}

impl DonutSegment {
    pub fn dash_array(&self) -> String {
        format!("{:.2} {:.2}", self.length, self.circumference - self.length)
    }

    pub fn dash_offset(&self) -> String {
        format!("{:.2}", 0.0 - self.offset)
    }
}

pub fn donut_segments(shares: &[ChannelShare], radius: f64) -> Vec<DonutSegment> {
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let total: f64 = shares.iter().map(|share| f64::from(share.value)).sum();
    let mut offset = 0.0;
    shares
        .iter()
        .map(|share| {
            let fraction = if total > 0.0 {
                f64::from(share.value) / total
            } else {
                0.0
            };
            let length = fraction * circumference;
            let segment = DonutSegment {
                name: share.name.clone(),
                color: share.color.clone(),
                percent: fraction * 100.0,
                length,
                offset,
                circumference,
            };
            offset += length;
            segment
        })
        .collect()
}

/// Hover text for one data point, e.g. `"Mar: $52,310"`.
pub fn value_tooltip(label: Option<&str>, value: f64, prefix: &str) -> String {
    let amount = format!("{}{}", prefix, format_count(value.max(0.0).round() as u64));
    match label {
        Some(label) => format!("{}: {}", label, amount),
        None => amount,
    }
}

impl DonutSegment {
    pub fn tooltip(&self) -> String {
        format!("{}: {:.0}%", self.name, self.percent)
    }
}

fn view_box() -> String {
    format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
}

#[component]
fn ChartPlaceholder() -> impl IntoView {
    view! {
        <div class="h-60 flex items-center justify-center text-sm text-gray-500 dark:text-gray-400">
            "No data available"
        </div>
    }
}

#[component]
fn AxisLabels(labels: Vec<String>) -> impl IntoView {
    view! {
        <div class="mt-2 flex justify-between px-4 text-xs text-gray-500 dark:text-gray-400">
            {labels.into_iter().map(|label| view! { <span>{label}</span> }).collect_view()}
        </div>
    }
}

#[component]
fn GridLines() -> impl IntoView {
    (0..=4)
        .map(|step| {
            let y = PADDING + (VIEW_HEIGHT - 2.0 * PADDING) * step as f64 / 4.0;
            view! {
                <line
                    x1=PADDING
                    x2={VIEW_WIDTH - PADDING}
                    y1=y
                    y2=y
                    class="stroke-gray-200 dark:stroke-gray-700"
                    stroke-dasharray="4 4"
                />
            }
        })
        .collect_view()
}

#[component]
pub fn LineChart(
    labels: Vec<String>,
    #[prop(into)] values: Signal<Vec<f64>>,
    #[prop(default = "#3b82f6")] color: &'static str,
    #[prop(optional)] value_prefix: &'static str,
) -> impl IntoView {
    let tip_labels = labels.clone();
    view! {
        <Show when=move || values.with(|v| !v.is_empty()) fallback=|| view! { <ChartPlaceholder/> }>
            {
                let tip_labels = tip_labels.clone();
                move || {
                let tips: Vec<String> = values.with(|v| {
                    v.iter()
                        .enumerate()
                        .map(|(idx, value)| {
                            value_tooltip(tip_labels.get(idx).map(String::as_str), *value, value_prefix)
                        })
                        .collect()
                });
                let points = scale_points(&values.get(), VIEW_WIDTH, VIEW_HEIGHT, PADDING);
                view! {
                    <svg viewBox=view_box() class="w-full h-60" preserveAspectRatio="none" role="img">
                        <GridLines/>
                        <path
                            d=line_path(&points)
                            fill="none"
                            stroke=color
                            stroke-width="3"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        />
                        {points
                            .iter()
                            .zip(tips)
                            .map(|(p, tip)| view! {
                                <circle cx=p.x cy=p.y r="4" fill=color>
                                    <title>{tip}</title>
                                </circle>
                            })
                            .collect_view()}
                    </svg>
                }
            }}
            <AxisLabels labels=labels.clone()/>
        </Show>
    }
}

#[component]
pub fn BarChart(
    labels: Vec<String>,
    #[prop(into)] values: Signal<Vec<f64>>,
    #[prop(default = "#8b5cf6")] color: &'static str,
    #[prop(optional)] value_prefix: &'static str,
) -> impl IntoView {
    let tip_labels = labels.clone();
    view! {
        <Show when=move || values.with(|v| !v.is_empty()) fallback=|| view! { <ChartPlaceholder/> }>
            {
                let tip_labels = tip_labels.clone();
                move || {
                let series = values.get();
                let tips = series.iter().enumerate().map(|(idx, value)| {
                    value_tooltip(tip_labels.get(idx).map(String::as_str), *value, value_prefix)
                });
                let bars = bar_geometry(&series, VIEW_WIDTH, VIEW_HEIGHT, PADDING);
                view! {
                    <svg viewBox=view_box() class="w-full h-60" preserveAspectRatio="none" role="img">
                        <GridLines/>
                        {bars
                            .iter()
                            .zip(tips)
                            .map(|(bar, tip)| view! {
                                <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="4" fill=color>
                                    <title>{tip}</title>
                                </rect>
                            })
                            .collect_view()}
                    </svg>
                }
            }}
            <AxisLabels labels=labels.clone()/>
        </Show>
    }
}

#[component]
pub fn DonutChart(shares: Vec<ChannelShare>) -> impl IntoView {
    if shares.is_empty() {
        return view! { <ChartPlaceholder/> }.into_view();
    }
    let segments = donut_segments(&shares, DONUT_RADIUS);
    let arcs = segments
        .iter()
        .map(|segment| {
            view! {
                <circle
                    cx="60"
                    cy="60"
                    r=DONUT_RADIUS
                    fill="none"
                    stroke=segment.color.clone()
                    stroke-width=DONUT_STROKE
                    stroke-dasharray=segment.dash_array()
                    stroke-dashoffset=segment.dash_offset()
                    transform="rotate(-90 60 60)"
                >
                    <title>{segment.tooltip()}</title>
                </circle>
            }
        })
        .collect_view();
    let legend = segments
        .into_iter()
        .map(|segment| {
            view! {
                <li class="flex items-center justify-between text-sm">
                    <span class="flex items-center gap-2 text-gray-700 dark:text-gray-300">
                        <span class="h-3 w-3 rounded-full" style=format!("background-color: {}", segment.color)></span>
                        {segment.name}
                    </span>
                    <span class="font-medium text-gray-900 dark:text-white">
                        {format!("{:.0}%", segment.percent)}
                    </span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col items-center gap-4">
            <svg viewBox="0 0 120 120" class="h-48 w-48" role="img">
                <circle cx="60" cy="60" r=DONUT_RADIUS fill="none" class="stroke-gray-100 dark:stroke-gray-800" stroke-width=DONUT_STROKE/>
                {arcs}
            </svg>
            <ul class="w-full space-y-2">{legend}</ul>
        </div>
    }
    .into_view()
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::dashboard::repository::channel_shares;
    use crate::test_support::ssr::render_to_string;

    fn months() -> Vec<String> {
        vec!["Jan".into(), "Feb".into(), "Mar".into()]
    }

    #[test]
    fn line_chart_renders_path_points_and_labels() {
        let html = render_to_string(move || {
            view! { <LineChart labels=months() values=Signal::derive(|| vec![1.0, 3.0, 2.0])/> }
        });
        assert!(html.contains("<path"));
        assert_eq!(html.matches("<circle").count(), 3);
        assert!(html.contains("Feb"));
        assert!(html.contains("<title>Feb: 3</title>"));
    }

    #[test]
    fn bar_chart_renders_one_rect_per_value() {
        let html = render_to_string(move || {
            view! { <BarChart labels=months() values=Signal::derive(|| vec![5.0, 6.0, 7.0])/> }
        });
        assert_eq!(html.matches("<rect").count(), 3);
        assert_eq!(html.matches("<title>").count(), 3);
        assert!(html.contains("<title>Mar: 7</title>"));
    }

    #[test]
    fn empty_series_shows_placeholder() {
        let html = render_to_string(move || {
            view! { <LineChart labels=vec![] values=Signal::derive(Vec::new)/> }
        });
        assert!(html.contains("No data available"));
        assert!(!html.contains("<path"));
    }

    #[test]
    fn donut_chart_renders_legend() {
        let html = render_to_string(move || view! { <DonutChart shares=channel_shares()/> });
        assert!(html.contains("Google Ads"));
        assert!(html.contains("45%"));
        assert!(html.contains("stroke-dasharray"));
        assert!(html.contains("<title>Google Ads: 45%</title>"));
        assert_eq!(html.matches("<li").count(), 5);
    }
}
