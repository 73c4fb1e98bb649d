use std::io;

use serde_json::Value;

use super::format::{Align, Column, render_table_or_blocks, terminal_width};

const HISTORY_COLUMNS: [Column<'static>; 5] = [
    Column {
        name: "No",
        align: Align::Right,
    },
    Column {
        name: "Time",
        align: Align::Left,
    },
    Column {
        name: "Component",
        align: Align::Left,
    },
    Column {
        name: "Value",
        align: Align::Right,
    },
    Column {
        name: "Note",
        align: Align::Left,
    },
];

pub fn render_history(data: &Value) -> io::Result<String> {
    render_history_with_width(data, terminal_width())
}

fn render_history_with_width(data: &Value, max_width: usize) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("history output requires rows"))?;
    let from = string_field(data, "from");
    let to = string_field(data, "to");
    let total = data
        .get("total_records")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let mut lines = vec![
        format!(
            "History from {from} to {to} ({} of {total} records):",
            rows.len()
        ),
        String::new(),
    ];

    if rows.is_empty() {
        lines.push("  No history in that date range.".to_string());
        return Ok(lines.join("\n"));
    }

    let table_rows = rows.iter().map(history_row).collect::<Vec<Vec<String>>>();
    lines.extend(render_table_or_blocks(
        &HISTORY_COLUMNS,
        &table_rows,
        max_width,
        "Event",
    ));
    Ok(lines.join("\n"))
}

fn history_row(row: &Value) -> Vec<String> {
    vec![
        row.get("sequence_number")
            .and_then(Value::as_u64)
            .map(|value| value.to_string())
            .unwrap_or_default(),
        string_field(row, "timestamp"),
        string_field(row, "pump_type"),
        parameter_value_text(row.get("parameter_value")),
        string_field(row, "description"),
    ]
}

fn parameter_value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(|float| float.to_string())
            .unwrap_or_else(|| number.to_string()),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
