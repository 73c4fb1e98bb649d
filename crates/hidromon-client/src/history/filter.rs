use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::history::date::{
    end_of_day, parse_calendar_day_strict, parse_record_timestamp, start_of_day,
};
use crate::history::types::HistoryRecord;
use crate::{ClientError, ClientResult};

const FILTER_COMMAND: &str = "history";

/// Closed calendar-day range. `end` covers its whole day up to `23:59:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn parse(start_day: Option<&str>, end_day: Option<&str>) -> ClientResult<Self> {
        let (Some(start_value), Some(end_value)) = (start_day, end_day) else {
            return Err(ClientError::missing_date_range(start_day, end_day));
        };

        let start = parse_calendar_day_strict(start_value, "from", FILTER_COMMAND)?;
        let end = parse_calendar_day_strict(end_value, "to", FILTER_COMMAND)?;
        Ok(Self { start, end })
    }

    pub fn start_instant(&self) -> NaiveDateTime {
        start_of_day(self.start)
    }

    pub fn end_instant(&self) -> NaiveDateTime {
        end_of_day(self.end)
    }

    pub fn contains(&self, instant: &NaiveDateTime) -> bool {
        self.start_instant() <= *instant && *instant <= self.end_instant()
    }

    /// Keeps records whose timestamp parses and falls inside the range, in
    /// input order. A reversed range simply matches nothing.
    pub fn apply(&self, records: &[HistoryRecord]) -> Vec<HistoryRecord> {
        let filtered = records
            .iter()
            .filter(|record| {
                parse_record_timestamp(&record.timestamp)
                    .is_some_and(|instant| self.contains(&instant))
            })
            .cloned()
            .collect::<Vec<HistoryRecord>>();

        debug!(
            from = %self.start,
            to = %self.end,
            matched = filtered.len(),
            total = records.len(),
            "filtered history by date range"
        );
        filtered
    }
}

pub fn filter_by_range(
    records: &[HistoryRecord],
    start_day: Option<&str>,
    end_day: Option<&str>,
) -> ClientResult<Vec<HistoryRecord>> {
    let range = DateRange::parse(start_day, end_day)?;
    Ok(range.apply(records))
}
