//! Per-millisecond sequence table
//!
//! Maps each timestamp to the highest sequence issued for it. Every read and
//! write goes through one exclusive lock so the check-then-increment step is
//! indivisible.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::Mutex;

use crate::layout::MAX_SEQUENCE;

#[derive(Debug, Default)]
pub(crate) struct SequenceTable {
    entries: Mutex<HashMap<u64, u16>>,
}

impl SequenceTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Claim the next sequence for `timestamp`
    ///
    /// Returns `None` once 4096 sequences have been issued for it. The stored
    /// value is left untouched in that case.
    pub(crate) fn next(&self, timestamp: u64) -> Option<u16> {
        let mut entries = self.entries.lock();
        match entries.entry(timestamp) {
            Entry::Vacant(slot) => {
                slot.insert(0);
                Some(0)
            }
            Entry::Occupied(mut slot) => {
                let last = *slot.get();
                if last >= MAX_SEQUENCE {
                    return None;
                }
                let next = last + 1;
                slot.insert(next);
                Some(next)
            }
        }
    }

    /// Drop every entry, releasing the map's memory. Returns how many were dropped
    pub(crate) fn clear(&self) -> usize {
        std::mem::take(&mut *self.entries.lock()).len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
