pub mod date;
pub mod filter;
pub mod normalize;
pub mod search;
pub mod types;

pub use filter::{DateRange, filter_by_range};
pub use normalize::normalize;
pub use search::{HistorySearch, SearchState};
pub use types::{HistoryRecord, ParameterValue};

/// Store path holding the raw history entries.
pub const HISTORY_PATH: &str = "/history";
