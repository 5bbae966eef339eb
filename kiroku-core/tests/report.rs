use chrono::NaiveDate;
use kiroku::db::models::WeightEntry;
use kiroku::report::{group_by_workout, render_bar_chart};

fn entry(name: &str, date: (i32, u32, u32), hour: u32, weight: f64) -> WeightEntry {
    WeightEntry {
        workout_name: name.to_string(),
        workout_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap(),
        weight,
    }
}

#[test]
fn grouping_is_per_name_per_day() {
    let series = group_by_workout(&[
        entry("Squat", (2026, 5, 1), 9, 100.0),
        entry("Bench Press", (2026, 5, 1), 10, 70.0),
        entry("Squat", (2026, 5, 3), 9, 105.0),
    ]);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name, "Bench Press");
    assert_eq!(series[1].name, "Squat");
    assert_eq!(series[1].points.len(), 2);
    assert_eq!(
        series[1].points[0],
        (NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(), 100.0)
    );
}

#[test]
fn same_day_logs_chart_the_max_weight() {
    let series = group_by_workout(&[
        entry("Squat", (2026, 5, 1), 9, 100.0),
        entry("Squat", (2026, 5, 1), 18, 110.0),
        entry("Squat", (2026, 5, 1), 20, 95.0),
    ]);

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].points.len(), 1);
    assert_eq!(series[0].points[0].1, 110.0);
}

#[test]
fn series_order_is_deterministic() {
    let logs = [
        entry("Row", (2026, 5, 2), 9, 60.0),
        entry("Deadlift", (2026, 5, 1), 9, 140.0),
        entry("Curl", (2026, 5, 3), 9, 20.0),
    ];
    let names: Vec<String> = group_by_workout(&logs)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["Curl", "Deadlift", "Row"]);
}

#[test]
fn chart_has_one_legend_entry_and_color_per_series() {
    let series = group_by_workout(&[
        entry("Squat", (2026, 5, 1), 9, 100.0),
        entry("Bench Press", (2026, 5, 2), 9, 70.0),
    ]);
    let svg = render_bar_chart(&series);

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(">Bench Press</text>"));
    assert!(svg.contains(">Squat</text>"));
    // First two palette colors, one per series, each for a bar and a swatch.
    assert_eq!(svg.matches("#636efa").count(), 2);
    assert_eq!(svg.matches("#ef553b").count(), 2);
}

#[test]
fn legend_names_are_escaped() {
    let series = group_by_workout(&[entry("Pull<up>", (2026, 5, 1), 9, 10.0)]);
    let svg = render_bar_chart(&series);
    assert!(svg.contains("Pull&lt;up&gt;"));
    assert!(!svg.contains("Pull<up>"));
}

#[test]
fn empty_history_renders_placeholder() {
    let svg = render_bar_chart(&[]);
    assert!(svg.contains("No data available"));
    assert!(!svg.contains("<rect"));
}
