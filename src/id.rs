//! Structured SnowID value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, TimeDelta, Utc};

use crate::codec;
use crate::error::SnowIDError;
use crate::extractor::SnowIDExtractor;
use crate::layout::{check_range, Component};

/// An issued identifier, split into its components
///
/// The epoch travels with the value so [`SnowID::datetime`] needs no outside
/// context. It is metadata only: it is not part of the 64-bit payload and does
/// not take part in equality, hashing or ordering.
#[derive(Debug, Clone, Copy)]
pub struct SnowID {
    timestamp: u64,
    datacenter_id: u8,
    machine_id: u8,
    sequence: u16,
    epoch: DateTime<Utc>,
}

impl SnowID {
    /// Build a SnowID from its components, checking each field width
    ///
    /// # Returns
    /// * `Result<SnowID, SnowIDError>` - `OutOfRange` naming the first component that does not fit
    pub fn from_parts(
        timestamp: u64,
        datacenter_id: u8,
        machine_id: u8,
        sequence: u16,
        epoch: DateTime<Utc>,
    ) -> Result<Self, SnowIDError> {
        let timestamp = check_range(Component::Timestamp, i64::try_from(timestamp).unwrap_or(i64::MAX))?;
        check_range(Component::Datacenter, datacenter_id.into())?;
        check_range(Component::Machine, machine_id.into())?;
        check_range(Component::Sequence, sequence.into())?;
        Ok(Self::from_valid(timestamp, datacenter_id, machine_id, sequence, epoch))
    }

    pub(crate) const fn from_valid(
        timestamp: u64,
        datacenter_id: u8,
        machine_id: u8,
        sequence: u16,
        epoch: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            datacenter_id,
            machine_id,
            sequence,
            epoch,
        }
    }

    /// Unpack a raw 64-bit payload. The reserved top bit is ignored
    pub fn from_u64(raw: u64, epoch: DateTime<Utc>) -> Self {
        let (timestamp, datacenter_id, machine_id, sequence) = SnowIDExtractor::decompose(raw);
        Self::from_valid(timestamp, datacenter_id, machine_id, sequence, epoch)
    }

    /// Packed 64-bit payload with the reserved bit cleared
    #[inline]
    pub const fn to_u64(&self) -> u64 {
        SnowIDExtractor::compose(self.timestamp, self.datacenter_id, self.machine_id, self.sequence)
    }

    /// Milliseconds since [`SnowID::epoch`]
    #[inline(always)]
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
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
    pub const fn sequence(&self) -> u16 {
        self.sequence
    }

    #[inline(always)]
    pub const fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// Same payload interpreted against another epoch
    pub fn with_epoch(self, epoch: DateTime<Utc>) -> Self {
        Self { epoch, ..self }
    }

    /// Wall-clock instant the timestamp field represents, `epoch + timestamp` ms
    ///
    /// Saturates at the latest representable instant for epochs near the end of
    /// chrono's range.
    pub fn datetime(&self) -> DateTime<Utc> {
        // 41-bit timestamps always fit in i64 milliseconds
        let elapsed = TimeDelta::milliseconds(self.timestamp as i64);
        self.epoch
            .checked_add_signed(elapsed)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Fixed-width 64 character binary form
    pub fn to_binary_string(&self) -> String {
        codec::encode_binary(self)
    }

    /// Base-10 form of the payload
    pub fn to_decimal_string(&self) -> String {
        codec::encode_decimal(self)
    }
}

impl PartialEq for SnowID {
    fn eq(&self, other: &Self) -> bool {
        self.to_u64() == other.to_u64()
    }
}

impl Eq for SnowID {}

impl Hash for SnowID {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_u64().hash(state);
    }
}

impl PartialOrd for SnowID {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SnowID {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_u64().cmp(&other.to_u64())
    }
}

impl fmt::Display for SnowID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u64())
    }
}

impl From<SnowID> for u64 {
    fn from(id: SnowID) -> Self {
        id.to_u64()
    }
}
