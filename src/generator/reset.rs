//! Scheduled clearing of the sequence table
//!
//! A named worker thread clears the table once per interval. It holds only a
//! weak reference to the table and exits when the owning [`AutoReset`] is
//! stopped or dropped, or when the table itself is gone.

use std::sync::Weak;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};
use tracing::{debug, trace, warn};

use super::state::SequenceTable;
use crate::error::SnowIDError;

#[derive(Debug)]
pub(crate) struct AutoReset {
    interval: Duration,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl AutoReset {
    pub(crate) fn spawn(table: Weak<SequenceTable>, interval: Duration) -> Result<Self, SnowIDError> {
        if interval.is_zero() {
            return Err(SnowIDError::InvalidResetInterval);
        }

        let (stop, stopped) = bounded::<()>(0);
        let handle = thread::Builder::new()
            .name("snowid-reset".into())
            .spawn(move || {
                let ticker = tick(interval);
                loop {
                    select! {
                        // A send or a dropped sender both end the loop
                        recv(stopped) -> _ => break,
                        recv(ticker) -> _ => {
                            let Some(table) = table.upgrade() else {
                                break;
                            };
                            let cleared = table.clear();
                            trace!(cleared, "scheduled sequence table reset");
                        }
                    }
                }
            })
            .map_err(|e| SnowIDError::ResetSpawn {
                reason: e.to_string(),
            })?;

        debug!(?interval, "started scheduled sequence table reset");
        Ok(Self {
            interval,
            stop: Some(stop),
            handle: Some(handle),
        })
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Signal the worker and wait for it to exit
    pub(crate) fn stop(&mut self) {
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("scheduled sequence table reset worker panicked");
            }
            debug!(interval = ?self.interval, "stopped scheduled sequence table reset");
        }
    }
}

impl Drop for AutoReset {
    fn drop(&mut self) {
        self.stop();
    }
}
