use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_NUTRIENT: f64 = 0.0;
pub const DEFAULT_WATER_LEVEL: f64 = 0.0;
/// Neutral pH.
pub const DEFAULT_PH: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiveParameters {
    pub nutrient: f64,
    pub water_level: f64,
    pub ph: f64,
}

impl Default for LiveParameters {
    fn default() -> Self {
        Self {
            nutrient: DEFAULT_NUTRIENT,
            water_level: DEFAULT_WATER_LEVEL,
            ph: DEFAULT_PH,
        }
    }
}

impl LiveParameters {
    /// Reads `TDS`, `WaterLevel` and `pH` from a `/parameters` snapshot. Each
    /// field falls back to its own default when absent or not numeric.
    pub fn from_snapshot(snapshot: Option<&Value>) -> Self {
        Self {
            nutrient: coerce_number(field(snapshot, "TDS")).unwrap_or(DEFAULT_NUTRIENT),
            water_level: coerce_number(field(snapshot, "WaterLevel"))
                .unwrap_or(DEFAULT_WATER_LEVEL),
            ph: coerce_number(field(snapshot, "pH")).unwrap_or(DEFAULT_PH),
        }
    }
}

fn field<'a>(snapshot: Option<&'a Value>, name: &str) -> Option<&'a Value> {
    snapshot?.get(name)
}

/// Loose numeric coercion for telemetry fields: numeric strings count,
/// blank strings read as zero, booleans as 0/1. `null` is an absent value in
/// the store.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Null => return None,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Array(_) | Value::Object(_) => return None,
    };

    number.is_finite().then_some(number)
}
