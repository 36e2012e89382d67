//! ID generation logic
//!
//! Per timestamp the sequence moves `absent -> 0 -> 1 -> ... -> 4095 -> exhausted`.
//! A new timestamp starts again from absent.

use tracing::{debug, instrument, warn};

use super::time::{millis_since, TimeSource};
use super::wait::{sleep_until_next_ms, spin_wait};
use super::SnowIDGenerator;
use crate::error::SnowIDError;
use crate::id::SnowID;
use crate::layout::MAX_TIMESTAMP;

impl<T: TimeSource> SnowIDGenerator<T> {
    /// Generate a new SnowID for the current millisecond
    ///
    /// # Returns
    /// * `Result<SnowID, SnowIDError>` - `SequenceExhausted` once 4096 IDs were issued
    ///   in this millisecond, `TimestampOutOfRange` if the clock is before the epoch or
    ///   more than 2^41 - 1 ms past it
    #[inline]
    pub fn generate(&self) -> Result<SnowID, SnowIDError> {
        self.generate_at(self.now_ms())
    }

    /// Generate a SnowID for a caller-supplied timestamp in ms since the epoch
    ///
    /// Shares the sequence table with [`generate`](Self::generate).
    #[instrument(level = "trace", skip(self))]
    pub fn generate_at(&self, timestamp: i64) -> Result<SnowID, SnowIDError> {
        let ts = match u64::try_from(timestamp) {
            Ok(ts) if ts <= MAX_TIMESTAMP => ts,
            _ => {
                warn!(timestamp, epoch = %self.epoch(), "timestamp does not fit in 41 bits");
                return Err(SnowIDError::TimestampOutOfRange { timestamp });
            }
        };

        match self.table.next(ts) {
            Some(sequence) => Ok(SnowID::from_valid(
                ts,
                self.datacenter_id(),
                self.machine_id(),
                sequence,
                self.epoch(),
            )),
            None => {
                debug!(timestamp = ts, "sequence exhausted");
                Err(SnowIDError::SequenceExhausted { timestamp: ts })
            }
        }
    }

    /// Generate a SnowID, waiting out exhausted milliseconds
    ///
    /// Spins briefly, then sleeps with backoff until the clock reaches a fresh
    /// millisecond. Every error other than `SequenceExhausted` is returned as is.
    pub fn generate_blocking(&self) -> Result<SnowID, SnowIDError> {
        loop {
            match self.generate() {
                Err(SnowIDError::SequenceExhausted { timestamp }) => {
                    self.wait_next_millis(timestamp as i64);
                }
                result => return result,
            }
        }
    }

    /// Milliseconds since the configured epoch according to the clock
    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        millis_since(self.config.epoch_millis(), self.clock.now_millis())
    }

    pub(crate) fn wait_next_millis(&self, from_ts: i64) -> i64 {
        if let Some(new_ts) = spin_wait(from_ts, || self.now_ms()) {
            return new_ts;
        }
        sleep_until_next_ms(from_ts, || self.now_ms())
    }
}
