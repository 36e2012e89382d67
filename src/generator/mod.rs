//! Core SnowID generator implementation
//!
//! Split into modules for testability:
//! - `state` - Lock-guarded per-millisecond sequence table
//! - `time` - Time sources
//! - `wait` - Spin and backoff while a millisecond is exhausted
//! - `reset` - Scheduled clearing of the sequence table
//! - `generate` - ID generation logic

mod generate;
mod reset;
mod state;
mod time;
mod wait;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::config::SnowIDConfig;
use crate::error::SnowIDError;
use crate::id::SnowID;

use reset::AutoReset;
use state::SequenceTable;
pub use time::{SystemClock, TimeSource};

/// Concurrency-safe SnowID allocator
///
/// Owns its configuration, a clock and the sequence table. Share it between
/// threads behind an [`Arc`]; every method takes `&self`.
#[derive(Debug)]
pub struct SnowIDGenerator<T = SystemClock> {
    config: SnowIDConfig,
    clock: T,
    table: Arc<SequenceTable>,
    auto_reset: Mutex<Option<AutoReset>>,
}

impl SnowIDGenerator<SystemClock> {
    /// Create a generator using the system clock
    ///
    /// # Arguments
    ///
    /// * `datacenter_id` - Datacenter ID (0-31)
    /// * `machine_id` - Machine ID (0-31)
    /// * `epoch` - Instant timestamps are measured from. Not validated
    ///
    /// # Returns
    /// * `Result<SnowIDGenerator, SnowIDError>` - `OutOfRange` if either id is outside 0-31
    pub fn new(datacenter_id: i32, machine_id: i32, epoch: DateTime<Utc>) -> Result<Self, SnowIDError> {
        Ok(Self::with_config(SnowIDConfig::new(datacenter_id, machine_id, epoch)?))
    }

    /// Create a generator from an already validated configuration
    pub fn with_config(config: SnowIDConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<T: TimeSource> SnowIDGenerator<T> {
    /// Create a generator reading time from `clock`
    pub fn with_clock(config: SnowIDConfig, clock: T) -> Self {
        debug!(
            datacenter_id = config.datacenter_id(),
            machine_id = config.machine_id(),
            epoch = %config.epoch(),
            "created SnowID generator"
        );
        Self {
            config,
            clock,
            table: Arc::new(SequenceTable::new()),
            auto_reset: Mutex::new(None),
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &SnowIDConfig {
        &self.config
    }

    #[inline(always)]
    pub fn datacenter_id(&self) -> u8 {
        self.config.datacenter_id()
    }

    #[inline(always)]
    pub fn machine_id(&self) -> u8 {
        self.config.machine_id()
    }

    #[inline(always)]
    pub fn epoch(&self) -> DateTime<Utc> {
        self.config.epoch()
    }

    /// Wall-clock instant an ID's timestamp represents
    pub fn datetime(&self, id: &SnowID) -> DateTime<Utc> {
        id.datetime()
    }

    /// Number of distinct timestamps currently held in the sequence table
    pub fn tracked_timestamps(&self) -> usize {
        self.table.len()
    }

    /// Clear the sequence table
    ///
    /// Runs under the same lock as generation, so concurrent calls see either
    /// the whole table or an empty one.
    pub fn reset(&self) {
        let cleared = self.table.clear();
        debug!(cleared, "reset sequence table");
    }

    /// Clear the sequence table once per `interval` on a background thread
    ///
    /// Replaces any schedule already running. The worker stops on
    /// [`stop_auto_reset`](Self::stop_auto_reset) or when the generator is
    /// dropped.
    pub fn auto_reset(&self, interval: Duration) -> Result<(), SnowIDError> {
        let worker = AutoReset::spawn(Arc::downgrade(&self.table), interval)?;
        // The previous worker, if any, is stopped and joined here
        *self.auto_reset.lock() = Some(worker);
        Ok(())
    }

    /// Stop the scheduled reset. Returns false if none was running
    pub fn stop_auto_reset(&self) -> bool {
        self.auto_reset.lock().take().is_some()
    }

    /// Interval of the running scheduled reset
    pub fn auto_reset_interval(&self) -> Option<Duration> {
        self.auto_reset.lock().as_ref().map(AutoReset::interval)
    }
}
