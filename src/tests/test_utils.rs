//! Shared test utilities for SnowID tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{SnowID, SnowIDConfig, SnowIDGenerator, TimeSource};

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(now_millis: i64) -> Arc<Self> {
        Arc::new(Self {
            now: AtomicI64::new(now_millis),
        })
    }

    pub fn set(&self, now_millis: i64) {
        self.now.store(now_millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Generator on a manual clock that starts `start_ms` after `epoch`
pub fn manual_generator(
    datacenter_id: i32,
    machine_id: i32,
    epoch: DateTime<Utc>,
    start_ms: i64,
) -> (SnowIDGenerator<Arc<ManualClock>>, Arc<ManualClock>) {
    let config = SnowIDConfig::new(datacenter_id, machine_id, epoch).unwrap();
    let clock = ManualClock::new(epoch.timestamp_millis() + start_ms);
    (SnowIDGenerator::with_clock(config, Arc::clone(&clock)), clock)
}

/// Current wall-clock milliseconds since `epoch`
pub fn wall_clock_ms(epoch: DateTime<Utc>) -> i64 {
    Utc::now().timestamp_millis() - epoch.timestamp_millis()
}

/// Assert that all IDs in the collection have distinct (timestamp, sequence) pairs
pub fn assert_unique_ids(ids: &[SnowID], expected_count: usize) {
    let set: HashSet<_> = ids.iter().map(|id| (id.timestamp(), id.sequence())).collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the given order
pub fn assert_ids_monotonic(ids: &[SnowID]) {
    for pair in ids.windows(2) {
        assert!(
            pair[1] > pair[0],
            "ID {} is not greater than previous ID {}",
            pair[1],
            pair[0]
        );
    }
}

/// Assert collection has expected unique count and is strictly increasing once sorted
pub fn assert_unique_and_monotonic(mut ids: Vec<SnowID>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    ids.sort_unstable();
    assert_ids_monotonic(&ids);
}
