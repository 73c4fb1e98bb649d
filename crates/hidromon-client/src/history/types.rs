use std::fmt;

use serde::Serialize;

pub const NOT_AVAILABLE: &str = "Tidak tersedia";
pub const EPOCH_TIMESTAMP: &str = "1970-01-01 00:00:00";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(f64),
    Text(String),
}

impl ParameterValue {
    pub fn not_available() -> Self {
        Self::Text(NOT_AVAILABLE.to_string())
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    pub sequence_number: u64,
    /// `YYYY-MM-DD HH:mm:ss` as stored upstream; never empty.
    pub timestamp: String,
    pub pump_type: String,
    pub description: String,
    pub parameter_value: ParameterValue,
}
