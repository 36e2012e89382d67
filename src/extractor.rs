use crate::layout::{
    DATACENTER_SHIFT, MACHINE_SHIFT, MAX_DATACENTER_ID, MAX_MACHINE_ID, MAX_SEQUENCE,
    MAX_TIMESTAMP, TIMESTAMP_SHIFT,
};

/// SnowID component extractor for raw 64-bit payloads
///
/// The reserved top bit is ignored.
#[derive(Debug, Copy, Clone, Default)]
pub struct SnowIDExtractor;

impl SnowIDExtractor {
    /// Extract timestamp component from a raw SnowID
    #[inline(always)]
    pub const fn timestamp(raw: u64) -> u64 {
        (raw >> TIMESTAMP_SHIFT) & MAX_TIMESTAMP
    }

    /// Extract datacenter component from a raw SnowID
    #[inline(always)]
    pub const fn datacenter(raw: u64) -> u8 {
        ((raw >> DATACENTER_SHIFT) & MAX_DATACENTER_ID as u64) as u8
    }

    /// Extract machine component from a raw SnowID
    #[inline(always)]
    pub const fn machine(raw: u64) -> u8 {
        ((raw >> MACHINE_SHIFT) & MAX_MACHINE_ID as u64) as u8
    }

    /// Extract sequence component from a raw SnowID
    #[inline(always)]
    pub const fn sequence(raw: u64) -> u16 {
        (raw & MAX_SEQUENCE as u64) as u16
    }

    /// Decompose a raw SnowID into timestamp, datacenter ID, machine ID and sequence
    #[inline]
    pub const fn decompose(raw: u64) -> (u64, u8, u8, u16) {
        (
            Self::timestamp(raw),
            Self::datacenter(raw),
            Self::machine(raw),
            Self::sequence(raw),
        )
    }

    /// Pack components into a raw SnowID. Components are masked to their field width
    #[inline(always)]
    pub const fn compose(timestamp: u64, datacenter: u8, machine: u8, sequence: u16) -> u64 {
        ((timestamp & MAX_TIMESTAMP) << TIMESTAMP_SHIFT)
            | (((datacenter & MAX_DATACENTER_ID) as u64) << DATACENTER_SHIFT)
            | (((machine & MAX_MACHINE_ID) as u64) << MACHINE_SHIFT)
            | ((sequence & MAX_SEQUENCE) as u64)
    }
}
