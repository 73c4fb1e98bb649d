use serde::Serialize;

use crate::history::HistoryRecord;
use crate::live::{AlertFlags, GaugeReading, LiveParameters};

#[derive(Debug, Clone, Serialize)]
pub struct ParametersData {
    pub snapshot_path: String,
    pub parameters: LiveParameters,
    pub alerts: AlertFlags,
    pub gauges: Vec<GaugeReading>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryData {
    pub snapshot_path: String,
    pub from: String,
    pub to: String,
    pub total_records: usize,
    pub matched_records: usize,
    pub rows: Vec<HistoryRecord>,
}
