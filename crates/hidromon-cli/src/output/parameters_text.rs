use std::io;

use chrono::NaiveDateTime;
use serde_json::Value;

use super::format::{Align, Column, key_value_rows, render_table_or_blocks, terminal_width};

const DASHBOARD_TITLE: &str = "SISTEM MONITORING HIDRO DFT";

const GAUGE_COLUMNS: [Column<'static>; 5] = [
    Column {
        name: "Gauge",
        align: Align::Left,
    },
    Column {
        name: "Value",
        align: Align::Right,
    },
    Column {
        name: "Safe range",
        align: Align::Left,
    },
    Column {
        name: "Fill",
        align: Align::Right,
    },
    Column {
        name: "Status",
        align: Align::Left,
    },
];

pub fn render_parameters(data: &Value, now: &NaiveDateTime) -> io::Result<String> {
    render_parameters_with_width(data, now, terminal_width())
}

fn render_parameters_with_width(
    data: &Value,
    now: &NaiveDateTime,
    max_width: usize,
) -> io::Result<String> {
    let gauges = data
        .get("gauges")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("parameters output requires gauges"))?;

    let mut lines = vec![
        DASHBOARD_TITLE.to_string(),
        now.format("%A, %d %B %Y").to_string().to_uppercase(),
        now.format("%H:%M:%S").to_string(),
        String::new(),
        "Gauges:".to_string(),
    ];

    let rows = gauges.iter().map(gauge_row).collect::<Vec<Vec<String>>>();
    lines.extend(render_table_or_blocks(&GAUGE_COLUMNS, &rows, max_width, "Gauge"));

    let warnings = gauges
        .iter()
        .filter_map(|gauge| gauge.get("message").and_then(Value::as_str))
        .collect::<Vec<&str>>();

    lines.push(String::new());
    lines.push("Alerts:".to_string());
    if warnings.is_empty() {
        lines.push("  None. All readings are inside their safe ranges.".to_string());
    } else {
        let entries = warnings
            .iter()
            .map(|message| ("PERINGATAN:", (*message).to_string()))
            .collect::<Vec<(&str, String)>>();
        lines.extend(key_value_rows(&entries, 2));
    }

    Ok(lines.join("\n"))
}

fn gauge_row(gauge: &Value) -> Vec<String> {
    let number = |key: &str| gauge.get(key).and_then(Value::as_f64).unwrap_or(0.0);
    let alert = gauge.get("alert").and_then(Value::as_bool).unwrap_or(false);

    vec![
        gauge
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        number("value").to_string(),
        format!("{} - {}", number("min"), number("max")),
        format!("{:.0}%", number("progress") * 100.0),
        if alert { "PERINGATAN" } else { "OK" }.to_string(),
    ]
}
