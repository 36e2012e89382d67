//! Time sources for SnowID generation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use std::sync::Arc;

use chrono::Utc;

/// A source of the current time in milliseconds since the Unix epoch
///
/// The generator subtracts its configured epoch from this reading, so a source
/// only has to agree with how that epoch is expressed. Tests plug in a manual
/// clock to drive the sequence table deterministically.
pub trait TimeSource {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Milliseconds elapsed between `epoch_millis` and `now_millis`, negative for a future epoch
#[inline(always)]
pub(crate) fn millis_since(epoch_millis: i64, now_millis: i64) -> i64 {
    now_millis.saturating_sub(epoch_millis)
}
