use chrono::NaiveDate;

use crate::history::date::{format_calendar_day, parse_calendar_day_strict};
use crate::history::filter::DateRange;
use crate::history::types::HistoryRecord;
use crate::{ClientError, ClientResult};

const SEARCH_COMMAND: &str = "history";

/// Where the history screen is between picking dates and showing results.
///
/// The results table only exists in `Searched`, so a visible table without a
/// complete range cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    NoRangeSelected {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    RangeSelected {
        range: DateRange,
    },
    Searched {
        range: DateRange,
        results: Vec<HistoryRecord>,
    },
}

impl Default for SearchState {
    fn default() -> Self {
        Self::NoRangeSelected {
            start: None,
            end: None,
        }
    }
}

impl SearchState {
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            Self::NoRangeSelected { start, .. } => *start,
            Self::RangeSelected { range } | Self::Searched { range, .. } => Some(range.start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            Self::NoRangeSelected { end, .. } => *end,
            Self::RangeSelected { range } | Self::Searched { range, .. } => Some(range.end),
        }
    }

    fn with_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Self::RangeSelected {
                range: DateRange::new(start, end),
            },
            _ => Self::NoRangeSelected { start, end },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistorySearch {
    state: SearchState,
}

impl HistorySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn select_start(&mut self, day: &str) -> ClientResult<()> {
        let start = parse_calendar_day_strict(day, "from", SEARCH_COMMAND)?;
        self.state = SearchState::with_bounds(Some(start), self.state.end());
        Ok(())
    }

    pub fn select_end(&mut self, day: &str) -> ClientResult<()> {
        let end = parse_calendar_day_strict(day, "to", SEARCH_COMMAND)?;
        self.state = SearchState::with_bounds(self.state.start(), Some(end));
        Ok(())
    }

    /// Runs the range filter over `records` as they are right now. Without both
    /// bounds the state is left untouched.
    pub fn search(&mut self, records: &[HistoryRecord]) -> ClientResult<&[HistoryRecord]> {
        let range = match &self.state {
            SearchState::NoRangeSelected { start, end } => {
                let start_day = start.as_ref().map(format_calendar_day);
                let end_day = end.as_ref().map(format_calendar_day);
                return Err(ClientError::missing_date_range(
                    start_day.as_deref(),
                    end_day.as_deref(),
                ));
            }
            SearchState::RangeSelected { range } | SearchState::Searched { range, .. } => *range,
        };

        self.state = SearchState::Searched {
            range,
            results: range.apply(records),
        };
        Ok(self.visible_table().unwrap_or_default())
    }

    pub fn visible_table(&self) -> Option<&[HistoryRecord]> {
        match &self.state {
            SearchState::Searched { results, .. } => Some(results.as_slice()),
            _ => None,
        }
    }

    pub fn start_day(&self) -> Option<String> {
        self.state.start().as_ref().map(format_calendar_day)
    }

    pub fn end_day(&self) -> Option<String> {
        self.state.end().as_ref().map(format_calendar_day)
    }
}
