use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 24.0;

/// One labelled sample of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(rename = "name")]
    pub label: String,
    pub value: f64,
}

/// Scales `data` into a `width` x `height` box with y growing downwards:
/// the largest value sits at the top, the smallest at the bottom, and a
/// flat series runs through the middle.
pub fn chart_points(data: &[ChartPoint], width: f64, height: f64) -> Vec<(f64, f64)> {
    let (min, max) = data.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.value), hi.max(p.value))
    });
    let range = max - min;
    let step = match data.len() {
        0 | 1 => 0.0,
        n => width / (n - 1) as f64,
    };

    data.iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if data.len() == 1 { width / 2.0 } else { i as f64 * step };
            let y = if range > 0.0 {
                height - (p.value - min) / range * height
            } else {
                height / 2.0
            };
            (x, y)
        })
        .collect()
}

pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{x:.1},{y:.1}", if i == 0 { "M" } else { "L" }))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The line path closed along the bottom edge at `baseline`.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    match (points.first(), points.last()) {
        (Some((first_x, _)), Some((last_x, _))) => format!(
            "{} L{last_x:.1},{baseline:.1} L{first_x:.1},{baseline:.1} Z",
            line_path(points)
        ),
        _ => String::new(),
    }
}

#[component]
pub fn AreaChart(
    data: Vec<ChartPoint>,
    #[props(into, default = "#3b82f6".to_string())] color: String,
) -> Element {
    let points: Vec<(f64, f64)> = chart_points(&data, WIDTH - 2.0 * PAD, HEIGHT - 2.0 * PAD)
        .into_iter()
        .map(|(x, y)| (x + PAD, y + PAD))
        .collect();
    let line = line_path(&points);
    let area = area_path(&points, HEIGHT - PAD);
    let gradient_id = format!("gradient-{}", color.trim_start_matches('#'));
    let right = WIDTH - PAD;
    let label_y = HEIGHT - 4.0;
    let grid_lines: Vec<f64> = (0..=4).map(|i| PAD + i as f64 * (HEIGHT - 2.0 * PAD) / 4.0).collect();

    rsx! {
        div { class: "chart",
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                preserve_aspect_ratio: "none",
                class: "chart-svg",
                defs {
                    linearGradient { id: "{gradient_id}", x1: "0", y1: "0", x2: "0", y2: "1",
                        stop { offset: "5%", stop_color: "{color}", stop_opacity: "0.3" }
                        stop { offset: "95%", stop_color: "{color}", stop_opacity: "0.05" }
                    }
                }
                for (i, y) in grid_lines.into_iter().enumerate() {
                    line {
                        key: "{i}",
                        class: "chart-grid",
                        x1: "{PAD}",
                        x2: "{right}",
                        y1: "{y}",
                        y2: "{y}",
                    }
                }
                path { d: "{area}", fill: "url(#{gradient_id})" }
                path { d: "{line}", fill: "none", stroke: "{color}", stroke_width: "3" }
                for (i, ((x, y), point)) in points.iter().zip(data.iter()).enumerate() {
                    g { key: "{i}",
                        circle { cx: "{x}", cy: "{y}", r: "4", fill: "{color}", stroke: "white", stroke_width: "2",
                            title { "{point.label}: {point.value}" }
                        }
                        text {
                            class: "chart-label",
                            x: "{x}",
                            y: "{label_y}",
                            text_anchor: "middle",
                            "{point.label}"
                        }
                    }
                }
            }
        }
    }
}
