//! Waiting out an exhausted millisecond
//!
//! Spins briefly, then sleeps with exponential backoff until the clock moves
//! past the exhausted timestamp.

use std::thread;
use std::time::Duration;

/// Spin iterations attempted before falling back to sleep
pub const SPIN_LOOPS: u32 = 64;

/// Yield to the scheduler every N spin iterations
pub const SPIN_YIELD_EVERY: u32 = 16;

/// Maximum backoff duration in milliseconds
pub const MAX_BACKOFF_MS: u64 = 100;

/// Spin until `get_time` exceeds `from_timestamp`
///
/// Returns Some(new_ts) if the timestamp advanced, None if the spin budget ran out
#[inline]
pub fn spin_wait<F>(from_timestamp: i64, get_time: F) -> Option<i64>
where
    F: Fn() -> i64,
{
    for i in 0..SPIN_LOOPS {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return Some(new_ts);
        }

        std::hint::spin_loop();

        if i % SPIN_YIELD_EVERY == SPIN_YIELD_EVERY - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep with exponential backoff, returning the new timestamp once advanced
#[inline]
pub fn sleep_until_next_ms<F>(from_timestamp: i64, get_time: F) -> i64
where
    F: Fn() -> i64,
{
    let mut backoff_ms = 1;
    loop {
        thread::sleep(Duration::from_millis(backoff_ms));
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return new_ts;
        }
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Calculate next backoff duration with exponential growth capped at MAX_BACKOFF_MS
#[inline(always)]
pub const fn next_backoff(current: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > MAX_BACKOFF_MS {
        MAX_BACKOFF_MS
    } else {
        next
    }
}
