//! Chart series shaping and SVG rendering for the dashboard.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::db::models::WeightEntry;

const CHART_WIDTH: f64 = 840.0;
const CHART_HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;

const PALETTE: &[&str] = &[
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
];

/// One bar series: a workout name and its per-day weights, oldest day first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<(NaiveDate, f64)>,
}

/// Groups log history into one series per workout name, keyed by calendar
/// day. Several logs in the same (name, day) cell chart the heaviest weight.
/// Series come back ordered by name, so rendering is deterministic.
pub fn group_by_workout(entries: &[WeightEntry]) -> Vec<ChartSeries> {
    let mut grouped: BTreeMap<&str, BTreeMap<NaiveDate, f64>> = BTreeMap::new();

    for entry in entries {
        let day = entry.workout_date.date();
        let cell = grouped
            .entry(entry.workout_name.as_str())
            .or_default()
            .entry(day)
            .or_insert(entry.weight);
        if entry.weight > *cell {
            *cell = entry.weight;
        }
    }

    grouped
        .into_iter()
        .map(|(name, days)| ChartSeries {
            name: name.to_string(),
            points: days.into_iter().collect(),
        })
        .collect()
}

fn chart_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn format_value(value: f64) -> String {
    if value.abs() < 0.001 && value != 0.0 {
        format!("{:.2e}", value)
    } else if value.abs() >= 1000.0 {
        format!("{:.2e}", value)
    } else if value.abs() >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.4}", value)
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Renders the grouped series as a self-contained SVG bar chart fragment.
/// Bars are grouped per calendar day with one color per series; an empty
/// history produces a placeholder fragment rather than an error.
pub fn render_bar_chart(series: &[ChartSeries]) -> String {
    if series.is_empty() {
        return render_empty();
    }

    let mut days: Vec<NaiveDate> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(day, _)| *day))
        .collect();
    days.sort();
    days.dedup();

    let mut y_max = f64::MIN;
    for s in series {
        for (_, weight) in &s.points {
            if *weight > y_max {
                y_max = *weight;
            }
        }
    }
    if y_max <= 0.0 {
        y_max = 1.0;
    }
    // Bars rise from zero; only the top gets headroom.
    y_max *= 1.05;

    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let group_w = plot_w / days.len() as f64;
    let bar_w = group_w / (series.len() as f64 + 1.0);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {CHART_WIDTH} {CHART_HEIGHT}" font-family="sans-serif" font-size="12">"#
    );
    let _ = write!(
        svg,
        r#"<text x="{}" y="24" font-size="16" text-anchor="middle">Workout Performance</text>"#,
        MARGIN_LEFT + plot_w / 2.0
    );

    // Axes
    let x0 = MARGIN_LEFT;
    let y0 = MARGIN_TOP + plot_h;
    let _ = write!(
        svg,
        r##"<line x1="{x0}" y1="{MARGIN_TOP}" x2="{x0}" y2="{y0}" stroke="#444"/>"##
    );
    let _ = write!(
        svg,
        r##"<line x1="{x0}" y1="{y0}" x2="{}" y2="{y0}" stroke="#444"/>"##,
        x0 + plot_w
    );

    // Three y labels: bottom, middle, top.
    for (fraction, value) in [(0.0, 0.0), (0.5, y_max / 2.0), (1.0, y_max)] {
        let y = y0 - plot_h * fraction;
        let _ = write!(
            svg,
            r#"<text x="{}" y="{:.1}" text-anchor="end">{}</text>"#,
            x0 - 8.0,
            y + 4.0,
            format_value(value)
        );
    }

    // First, middle and last day labels.
    let mut label_indices = vec![0];
    if days.len() > 2 {
        label_indices.push(days.len() / 2);
    }
    if days.len() > 1 {
        label_indices.push(days.len() - 1);
    }
    for i in label_indices {
        let x = x0 + group_w * (i as f64 + 0.5);
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{}" text-anchor="middle">{}</text>"#,
            x,
            y0 + 20.0,
            days[i].format("%Y-%m-%d")
        );
    }

    // Bars, one color per series, grouped by day.
    for (series_index, s) in series.iter().enumerate() {
        let color = chart_color(series_index);
        for (day, weight) in &s.points {
            let day_index = days.binary_search(day).unwrap_or(0);
            let x = x0
                + group_w * day_index as f64
                + bar_w * (series_index as f64 + 0.5);
            let h = plot_h * (weight / y_max);
            let _ = write!(
                svg,
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                x,
                y0 - h,
                bar_w,
                h,
                color
            );
        }
    }

    // Legend
    let legend_x = MARGIN_LEFT + plot_w + 20.0;
    for (series_index, s) in series.iter().enumerate() {
        let y = MARGIN_TOP + 18.0 * series_index as f64;
        let _ = write!(
            svg,
            r#"<rect x="{legend_x}" y="{y:.1}" width="12" height="12" fill="{}"/>"#,
            chart_color(series_index)
        );
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}">{}</text>"#,
            legend_x + 18.0,
            y + 10.0,
            escape_text(&s.name)
        );
    }

    svg.push_str("</svg>");
    svg
}

fn render_empty() -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            r##"<text x="{x}" y="{y}" font-size="16" text-anchor="middle" fill="#888">No data available</text>"##,
            "</svg>"
        ),
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
        x = CHART_WIDTH / 2.0,
        y = CHART_HEIGHT / 2.0,
    )
}
