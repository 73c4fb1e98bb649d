use serde_json::{Map, Value};
use tracing::debug;

use crate::history::types::{EPOCH_TIMESTAMP, HistoryRecord, NOT_AVAILABLE, ParameterValue};

/// Builds the canonical record list from a raw `/history` snapshot.
///
/// Entries are visited in the store's key order, or index order when the
/// children were exported as an array. An entry is dropped only when its
/// `time` is missing altogether (`null` counts as missing, as it does
/// everywhere in the store); a present but falsy `time` is kept and stamped
/// with the epoch fallback. Sequence numbers are dense over survivors.
pub fn normalize(snapshot: Option<&Value>) -> Vec<HistoryRecord> {
    let entries = match snapshot {
        Some(Value::Object(children)) => children.values().collect::<Vec<&Value>>(),
        Some(Value::Array(children)) => children.iter().collect::<Vec<&Value>>(),
        _ => return Vec::new(),
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in &entries {
        let Some(fields) = entry.as_object() else {
            continue;
        };
        let Some(time) = fields.get("time").filter(|value| !value.is_null()) else {
            continue;
        };

        records.push(HistoryRecord {
            sequence_number: (records.len() as u64) + 1,
            timestamp: timestamp_or_epoch(time),
            pump_type: text_or_not_available(fields, "pumpType"),
            description: text_or_not_available(fields, "description"),
            parameter_value: parameter_value_or_not_available(fields.get("parameterValue")),
        });
    }

    debug!(
        kept = records.len(),
        dropped = entries.len() - records.len(),
        "normalized history snapshot"
    );
    records
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn timestamp_or_epoch(time: &Value) -> String {
    if !is_truthy(time) {
        return EPOCH_TIMESTAMP.to_string();
    }
    display_text(time)
}

fn text_or_not_available(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(value) if is_truthy(value) => display_text(value),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn parameter_value_or_not_available(value: Option<&Value>) -> ParameterValue {
    let Some(current) = value.filter(|candidate| is_truthy(candidate)) else {
        return ParameterValue::not_available();
    };

    if let Some(number) = current.as_f64() {
        return ParameterValue::Number(number);
    }
    ParameterValue::Text(display_text(current))
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
