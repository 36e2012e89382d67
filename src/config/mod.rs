//! Configuration for SnowID generator

mod builder;

use chrono::{DateTime, TimeDelta, Utc};
use once_cell::sync::Lazy;

pub use builder::SnowIDConfigBuilder;
use builder::{DEFAULT_DATACENTER_ID, DEFAULT_MACHINE_ID};

use crate::error::SnowIDError;
use crate::layout::{check_range, Component};

/// Default epoch in milliseconds since Unix epoch (January 1, 2025 UTC)
pub const DEFAULT_EPOCH_MILLIS: i64 = 1_735_689_600_000;

/// Default epoch, January 1, 2025 UTC. Gives timestamps until roughly 2094
pub static DEFAULT_EPOCH: Lazy<DateTime<Utc>> =
    Lazy::new(|| DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(DEFAULT_EPOCH_MILLIS));

/// Configuration for SnowID generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowIDConfig {
    datacenter_id: u8,
    machine_id: u8,
    epoch: DateTime<Utc>,
    epoch_millis: i64,
}

impl SnowIDConfig {
    /// Create a validated configuration
    ///
    /// # Arguments
    /// * `datacenter_id` - Datacenter ID (0-31)
    /// * `machine_id` - Machine ID (0-31)
    /// * `epoch` - Instant the timestamp field counts from
    ///
    /// # Returns
    /// * `Result<SnowIDConfig, SnowIDError>` - `OutOfRange` if either id exceeds 5 bits
    pub fn new(datacenter_id: i32, machine_id: i32, epoch: DateTime<Utc>) -> Result<Self, SnowIDError> {
        let datacenter_id = check_range(Component::Datacenter, datacenter_id.into())? as u8;
        let machine_id = check_range(Component::Machine, machine_id.into())? as u8;
        Ok(Self::from_valid(datacenter_id, machine_id, epoch))
    }

    pub(crate) fn from_valid(datacenter_id: u8, machine_id: u8, epoch: DateTime<Utc>) -> Self {
        Self {
            datacenter_id,
            machine_id,
            epoch,
            epoch_millis: epoch.timestamp_millis(),
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowIDConfigBuilder {
        SnowIDConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn datacenter_id(&self) -> u8 {
        self.datacenter_id
    }

    #[inline(always)]
    pub const fn machine_id(&self) -> u8 {
        self.machine_id
    }

    #[inline(always)]
    pub const fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// Epoch in milliseconds since Unix epoch
    #[inline(always)]
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }
}

impl Default for SnowIDConfig {
    fn default() -> Self {
        Self::from_valid(DEFAULT_DATACENTER_ID, DEFAULT_MACHINE_ID, *DEFAULT_EPOCH)
    }
}
