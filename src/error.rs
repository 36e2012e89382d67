use thiserror::Error;

use crate::layout::Component;

/// Represents errors that can occur during SnowID operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowIDError {
    /// A datacenter, machine or other component value does not fit its field
    #[error("{component} {value} is invalid. Allowed range is 0 to {max}")]
    OutOfRange {
        component: Component,
        value: i64,
        max: u64,
    },
    /// Every sequence number of this millisecond has been issued
    #[error("Sequence exhausted for timestamp {timestamp}. Retry in the next millisecond")]
    SequenceExhausted { timestamp: u64 },
    /// The clock reading relative to the epoch does not fit in 41 bits
    #[error("Timestamp {timestamp} ms since epoch does not fit in 41 bits")]
    TimestampOutOfRange { timestamp: i64 },
    /// Scheduled reset interval of zero
    #[error("Reset interval must be greater than zero")]
    InvalidResetInterval,
    /// The scheduled reset worker thread could not be started
    #[error("Failed to start scheduled reset: {reason}")]
    ResetSpawn { reason: String },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors produced while parsing a textual SnowID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Binary form is not exactly 64 characters, or the decimal value exceeds 64 bits
    #[error("Invalid ID length {len}. The ID should be a 64-bit binary string")]
    InvalidLength { len: usize },
    /// A field segment contains something other than `0` or `1`
    #[error("{component} should be a binary number")]
    InvalidDigit { component: Component },
    /// Decimal form is not a base-10 integer
    #[error("The ID is not a number")]
    NotANumber,
}

/// How a caller exposing SnowIDs should surface an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad generator setup. Fatal at construction
    Configuration,
    /// Transient overload. Report as server busy and retry
    Busy,
    /// Malformed client input
    InvalidInput,
}

impl SnowIDError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SnowIDError::OutOfRange { .. }
            | SnowIDError::TimestampOutOfRange { .. }
            | SnowIDError::InvalidResetInterval
            | SnowIDError::ResetSpawn { .. } => ErrorKind::Configuration,
            SnowIDError::SequenceExhausted { .. } => ErrorKind::Busy,
            SnowIDError::Decode(_) => ErrorKind::InvalidInput,
        }
    }

    /// True when the same call may succeed once the clock advances
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Busy
    }
}
