use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::ClientResult;
use crate::history::{HISTORY_PATH, HistoryRecord, HistorySearch, SearchState, normalize};
use crate::store::{SnapshotStore, Subscription};

/// History screen: keeps the normalized record list in step with `/history`
/// and runs date-range searches against it on demand.
pub struct HistoryScreen {
    records: Rc<RefCell<Vec<HistoryRecord>>>,
    search: HistorySearch,
    subscription: Subscription,
}

impl HistoryScreen {
    pub fn mount(store: &SnapshotStore) -> Self {
        let records = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&records);
        let subscription = store.subscribe(HISTORY_PATH, move |snapshot| {
            if let Some(value) = snapshot
                && !value.is_object()
                && !value.is_array()
            {
                warn!(
                    path = HISTORY_PATH,
                    "history snapshot has no child entries; showing no rows"
                );
            }
            *sink.borrow_mut() = normalize(snapshot);
        });

        Self {
            records,
            search: HistorySearch::new(),
            subscription,
        }
    }

    pub fn records(&self) -> Vec<HistoryRecord> {
        self.records.borrow().clone()
    }

    pub fn record_count(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn select_start(&mut self, day: &str) -> ClientResult<()> {
        self.search.select_start(day)
    }

    pub fn select_end(&mut self, day: &str) -> ClientResult<()> {
        self.search.select_end(day)
    }

    pub fn search(&mut self) -> ClientResult<&[HistoryRecord]> {
        let records = self.records.borrow();
        self.search.search(&records)
    }

    pub fn state(&self) -> &SearchState {
        self.search.state()
    }

    pub fn visible_table(&self) -> Option<&[HistoryRecord]> {
        self.search.visible_table()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn unmount(mut self) {
        self.subscription.cancel();
    }
}
