//! SnowIDConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::{SnowIDConfig, DEFAULT_EPOCH};
use crate::error::SnowIDError;
use crate::layout::{check_range, Component};

/// Default configuration values
pub(super) const DEFAULT_DATACENTER_ID: u8 = 0;
pub(super) const DEFAULT_MACHINE_ID: u8 = 0;

/// Builder for SnowIDConfig
#[derive(Debug)]
pub struct SnowIDConfigBuilder {
    pub(super) datacenter_id: u8,
    pub(super) machine_id: u8,
    pub(super) epoch: DateTime<Utc>,
}

impl SnowIDConfigBuilder {
    /// Create a new SnowIDConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            datacenter_id: DEFAULT_DATACENTER_ID,
            machine_id: DEFAULT_MACHINE_ID,
            epoch: *DEFAULT_EPOCH,
        }
    }

    /// Set the datacenter ID (0-31)
    pub fn datacenter_id(mut self, id: i32) -> Result<Self, SnowIDError> {
        self.datacenter_id = check_range(Component::Datacenter, id.into())? as u8;
        Ok(self)
    }

    /// Set the machine ID (0-31)
    pub fn machine_id(mut self, id: i32) -> Result<Self, SnowIDError> {
        self.machine_id = check_range(Component::Machine, id.into())? as u8;
        Ok(self)
    }

    /// Set a custom epoch. Any instant is accepted, including one in the future
    pub fn epoch(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch = epoch;
        self
    }

    /// Build the final SnowIDConfig
    pub fn build(self) -> SnowIDConfig {
        SnowIDConfig::from_valid(self.datacenter_id, self.machine_id, self.epoch)
    }
}

impl Default for SnowIDConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
