use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::rc::{Rc, Weak};

use serde_json::{Map, Value};
use tracing::debug;

use crate::{ClientError, ClientResult};

type Listener = Rc<RefCell<dyn FnMut(Option<&Value>)>>;

struct ListenerEntry {
    id: u64,
    segments: Vec<String>,
    callback: Listener,
}

struct StoreInner {
    root: Value,
    listeners: Vec<ListenerEntry>,
    next_id: u64,
    /// Paths written but not yet delivered to subscribers.
    queued_writes: VecDeque<Vec<String>>,
    delivering: bool,
}

/// In-memory stand-in for the real-time database.
///
/// Values live in one JSON tree addressed by `/`-separated paths. Subscribers
/// always receive the full value at their path, once on subscribe and again
/// after every write that touches it.
pub struct SnapshotStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()))
    }
}

impl SnapshotStore {
    pub fn new(root: Value) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                root,
                listeners: Vec::new(),
                next_id: 1,
                queued_writes: VecDeque::new(),
                delivering: false,
            })),
        }
    }

    /// Loads a JSON export of the whole database. The top level must be an
    /// object.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let body = fs::read_to_string(path)
            .map_err(|error| ClientError::snapshot_not_found(path, &error.to_string()))?;
        let root = serde_json::from_str::<Value>(&body)
            .map_err(|error| ClientError::snapshot_invalid(path, &error.to_string()))?;
        if !root.is_object() {
            return Err(ClientError::snapshot_invalid(
                path,
                "top-level value must be an object",
            ));
        }

        debug!(path = %path.display(), "loaded store snapshot");
        Ok(Self::new(root))
    }

    pub fn snapshot(&self, path: &str) -> Option<Value> {
        let inner = self.inner.borrow();
        resolve(&inner.root, &split_path(path)).cloned()
    }

    /// Replaces the value at `path`; `null` deletes it. Every subscriber whose
    /// path overlaps the write receives its new snapshot.
    ///
    /// A write made from inside a subscriber callback is applied at once but
    /// delivered only after the current round of callbacks has finished.
    pub fn set(&self, path: &str, value: Value) {
        let segments = split_path(path);
        let nested = {
            let mut inner = self.inner.borrow_mut();
            write(&mut inner.root, &segments, value);
            inner.queued_writes.push_back(segments);
            let nested = inner.delivering;
            inner.delivering = true;
            nested
        };

        if nested {
            debug!(path, "queued write made during delivery");
            return;
        }
        self.deliver_queued();
    }

    /// Drains queued writes, invoking callbacks with the store unborrowed so
    /// they may read, write, subscribe or cancel.
    fn deliver_queued(&self) {
        loop {
            let deliveries = {
                let mut inner = self.inner.borrow_mut();
                let Some(segments) = inner.queued_writes.pop_front() else {
                    inner.delivering = false;
                    return;
                };

                let pending = inner
                    .listeners
                    .iter()
                    .filter(|entry| overlaps(&entry.segments, &segments))
                    .map(|entry| {
                        (
                            Rc::clone(&entry.callback),
                            resolve(&inner.root, &entry.segments).cloned(),
                        )
                    })
                    .collect::<Vec<(Listener, Option<Value>)>>();
                pending
            };

            for (callback, snapshot) in deliveries {
                invoke(&callback, snapshot.as_ref());
            }
        }
    }

    pub fn subscribe<F>(&self, path: &str, on_update: F) -> Subscription
    where
        F: FnMut(Option<&Value>) + 'static,
    {
        let segments = split_path(path);
        let callback: Listener = Rc::new(RefCell::new(on_update));
        let (id, initial, nested) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let initial = resolve(&inner.root, &segments).cloned();
            inner.listeners.push(ListenerEntry {
                id,
                segments,
                callback: Rc::clone(&callback),
            });
            let nested = inner.delivering;
            inner.delivering = true;
            (id, initial, nested)
        };

        debug!(path, id, "subscribed to store path");
        invoke(&callback, initial.as_ref());
        if !nested {
            self.deliver_queued();
        }

        Subscription {
            id,
            path: path.to_string(),
            store: Some(Rc::downgrade(&self.inner)),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Handle for one live subscription. Cancelling more than once is a no-op, and
/// dropping the handle cancels it.
pub struct Subscription {
    id: u64,
    path: String,
    store: Option<Weak<RefCell<StoreInner>>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        let Some(inner) = self.store.as_ref().and_then(Weak::upgrade) else {
            return false;
        };
        let active = inner
            .borrow()
            .listeners
            .iter()
            .any(|entry| entry.id == self.id);
        active
    }

    pub fn cancel(&mut self) {
        let Some(store) = self.store.take() else {
            return;
        };
        if let Some(inner) = store.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|entry| entry.id != self.id);
            debug!(path = %self.path, id = self.id, "cancelled store subscription");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn invoke(callback: &Listener, snapshot: Option<&Value>) {
    match callback.try_borrow_mut() {
        Ok(mut on_update) => (&mut *on_update)(snapshot),
        // A callback that is still running is never re-entered.
        Err(_) => debug!("skipped delivery to a callback that is still running"),
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn resolve<'a>(root: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    if current.is_null() {
        return None;
    }
    Some(current)
}

fn write(root: &mut Value, segments: &[String], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        *root = if value.is_null() {
            Value::Object(Map::new())
        } else {
            value
        };
        return;
    };

    let mut current = root;
    for segment in parents {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Some(object) = current.as_object_mut() else {
            return;
        };
        current = object
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    if let Some(object) = current.as_object_mut() {
        if value.is_null() {
            object.shift_remove(last);
        } else {
            object.insert(last.clone(), value);
        }
    }
}

fn overlaps(left: &[String], right: &[String]) -> bool {
    left.iter().zip(right.iter()).all(|(a, b)| a == b)
}
