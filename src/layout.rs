//! Bit layout shared by the codec, the extractor and the generator
//!
//! ```text
//! | 1 reserved | 41 timestamp | 5 datacenter | 5 machine | 12 sequence |
//! ```

use std::fmt;

use crate::error::SnowIDError;

pub const PLACEHOLDER_BITS: u8 = 1;
pub const TIMESTAMP_BITS: u8 = 41;
pub const DATACENTER_BITS: u8 = 5;
pub const MACHINE_BITS: u8 = 5;
pub const SEQUENCE_BITS: u8 = 12;
pub const TOTAL_BITS: u8 =
    PLACEHOLDER_BITS + TIMESTAMP_BITS + DATACENTER_BITS + MACHINE_BITS + SEQUENCE_BITS;

pub const MACHINE_SHIFT: u8 = SEQUENCE_BITS;
pub const DATACENTER_SHIFT: u8 = MACHINE_SHIFT + MACHINE_BITS;
pub const TIMESTAMP_SHIFT: u8 = DATACENTER_SHIFT + DATACENTER_BITS;

pub const MAX_TIMESTAMP: u64 = (1 << TIMESTAMP_BITS) - 1;
pub const MAX_DATACENTER_ID: u8 = (1 << DATACENTER_BITS) - 1;
pub const MAX_MACHINE_ID: u8 = (1 << MACHINE_BITS) - 1;
pub const MAX_SEQUENCE: u16 = (1 << SEQUENCE_BITS) - 1;

/// A field of the identifier payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Timestamp,
    Datacenter,
    Machine,
    Sequence,
}

impl Component {
    /// All components in payload order, most significant first
    pub const ALL: [Component; 4] = [
        Component::Timestamp,
        Component::Datacenter,
        Component::Machine,
        Component::Sequence,
    ];

    /// Width of the field in bits
    pub const fn bits(self) -> u8 {
        match self {
            Component::Timestamp => TIMESTAMP_BITS,
            Component::Datacenter => DATACENTER_BITS,
            Component::Machine => MACHINE_BITS,
            Component::Sequence => SEQUENCE_BITS,
        }
    }

    /// Largest value the field can hold
    pub const fn max(self) -> u64 {
        (1u64 << self.bits()) - 1
    }

    /// Character offset of the field inside the 64-char binary form
    pub const fn offset(self) -> usize {
        let preceding = match self {
            Component::Timestamp => 0,
            Component::Datacenter => TIMESTAMP_BITS,
            Component::Machine => TIMESTAMP_BITS + DATACENTER_BITS,
            Component::Sequence => TIMESTAMP_BITS + DATACENTER_BITS + MACHINE_BITS,
        };
        (PLACEHOLDER_BITS + preceding) as usize
    }

    /// Character range of the field inside the 64-char binary form
    pub const fn span(self) -> std::ops::Range<usize> {
        self.offset()..self.offset() + self.bits() as usize
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Timestamp => "Timestamp",
            Component::Datacenter => "Datacenter ID",
            Component::Machine => "Machine ID",
            Component::Sequence => "Sequence",
        };
        f.write_str(name)
    }
}

/// Check that `value` fits in the field, returning it narrowed to `u64`
pub(crate) fn check_range(component: Component, value: i64) -> Result<u64, SnowIDError> {
    let max = component.max();
    match u64::try_from(value) {
        Ok(v) if v <= max => Ok(v),
        _ => Err(SnowIDError::OutOfRange {
            component,
            value,
            max,
        }),
    }
}
