//! Serde support for [`SnowID`]
//!
//! Serialized as a map of its components plus the epoch as RFC 3339.
//! Deserialization re-checks every field width.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::SnowID;

#[derive(Serialize, Deserialize)]
struct SnowIDRepr {
    timestamp: u64,
    datacenter_id: u8,
    machine_id: u8,
    sequence_number: u16,
    epoch: DateTime<Utc>,
}

impl Serialize for SnowID {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SnowIDRepr {
            timestamp: self.timestamp(),
            datacenter_id: self.datacenter_id(),
            machine_id: self.machine_id(),
            sequence_number: self.sequence(),
            epoch: self.epoch(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SnowID {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = SnowIDRepr::deserialize(deserializer)?;
        SnowID::from_parts(
            repr.timestamp,
            repr.datacenter_id,
            repr.machine_id,
            repr.sequence_number,
            repr.epoch,
        )
        .map_err(D::Error::custom)
    }
}
