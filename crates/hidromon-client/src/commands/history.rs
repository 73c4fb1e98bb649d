use std::path::Path;

use crate::ClientResult;
use crate::config::resolve_snapshot_path;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::HistoryData;
use crate::history::DateRange;
use crate::history::date::format_calendar_day;
use crate::screens::HistoryScreen;
use crate::store::SnapshotStore;

#[derive(Debug, Default)]
pub struct HistoryRunOptions<'a> {
    pub from: Option<String>,
    pub to: Option<String>,
    pub snapshot_override: Option<&'a Path>,
}

pub fn run(from: Option<&str>, to: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(HistoryRunOptions {
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        snapshot_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: HistoryRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    // Range problems are reported before touching the snapshot file.
    let range = DateRange::parse(options.from.as_deref(), options.to.as_deref())?;

    let snapshot_path = resolve_snapshot_path(options.snapshot_override)?;
    let store = SnapshotStore::load(&snapshot_path)?;

    let mut screen = HistoryScreen::mount(&store);
    screen.select_start(&format_calendar_day(&range.start))?;
    screen.select_end(&format_calendar_day(&range.end))?;
    let rows = screen.search()?.to_vec();
    let total_records = screen.record_count();
    screen.unmount();

    let data = HistoryData {
        snapshot_path: snapshot_path.display().to_string(),
        from: format_calendar_day(&range.start),
        to: format_calendar_day(&range.end),
        total_records,
        matched_records: rows.len(),
        rows,
    };

    success("history", data)
}
