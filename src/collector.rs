//! Order restoration for parallel filtering
//!
//! Workers finish in scheduling order, so survivors arrive tagged with the
//! position they held in the input. The collector is an append-only arena;
//! once the batch barrier has passed, a sort by tag restores input order.

use parking_lot::Mutex;

/// A value tagged with its input position.
#[derive(Debug)]
struct Indexed<T> {
    index: usize,
    value: T,
}

/// Append-only arena for index-tagged survivors.
pub(crate) struct IndexedCollector<T> {
    entries: Mutex<Vec<Indexed<T>>>,
}

impl<T> IndexedCollector<T> {
    /// Arena sized for at most `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    /// Append one survivor. Tags are unique, so arrival order is irrelevant.
    pub(crate) fn push(&self, index: usize, value: T) {
        self.entries.lock().push(Indexed { index, value });
    }

    /// Sort by tag and strip the tags. Runs after the batch barrier.
    pub(crate) fn into_ordered(self) -> Vec<T> {
        let mut entries = self.entries.into_inner();
        entries.sort_by_key(|entry| entry.index);
        entries.into_iter().map(|entry| entry.value).collect()
    }
}
