//! Textual forms of a SnowID
//!
//! Two representations are supported:
//! - binary: exactly 64 characters of `0`/`1`, most significant bit first,
//!   leading reserved bit always `0`
//! - decimal: the 64-bit payload rendered in base 10
//!
//! Neither form carries the epoch, so decoding takes the epoch the ID was
//! produced with.

use std::num::IntErrorKind;

use chrono::{DateTime, Utc};

use crate::error::DecodeError;
use crate::id::SnowID;
use crate::layout::{Component, TOTAL_BITS};

/// Encode a SnowID as a 64 character binary string
pub fn encode_binary(id: &SnowID) -> String {
    format!(
        "0{:041b}{:05b}{:05b}{:012b}",
        id.timestamp(),
        id.datacenter_id(),
        id.machine_id(),
        id.sequence()
    )
}

/// Encode a SnowID as a base-10 string
pub fn encode_decimal(id: &SnowID) -> String {
    id.to_u64().to_string()
}

/// Decode a 64 character binary string
///
/// The first character is the reserved bit and is not inspected.
///
/// # Arguments
/// * `encoded` - Binary string produced by [`encode_binary`]
/// * `epoch` - Epoch the ID was generated with
///
/// # Returns
/// * `Result<SnowID, DecodeError>` - `InvalidLength` or `InvalidDigit` on malformed input
pub fn decode_binary(encoded: &str, epoch: DateTime<Utc>) -> Result<SnowID, DecodeError> {
    let bytes = encoded.as_bytes();
    if bytes.len() != TOTAL_BITS as usize {
        return Err(DecodeError::InvalidLength { len: bytes.len() });
    }

    let timestamp = parse_segment(bytes, Component::Timestamp)?;
    let datacenter_id = parse_segment(bytes, Component::Datacenter)?;
    let machine_id = parse_segment(bytes, Component::Machine)?;
    let sequence = parse_segment(bytes, Component::Sequence)?;

    // Segment widths bound every value to its field
    Ok(SnowID::from_valid(
        timestamp,
        datacenter_id as u8,
        machine_id as u8,
        sequence as u16,
        epoch,
    ))
}

/// Decode a base-10 string
///
/// # Arguments
/// * `encoded` - Decimal string produced by [`encode_decimal`]
/// * `epoch` - Epoch the ID was generated with
///
/// # Returns
/// * `Result<SnowID, DecodeError>` - `NotANumber` for non-integers, `InvalidLength`
///   for integers outside the unsigned 64-bit range
pub fn decode_decimal(encoded: &str, epoch: DateTime<Utc>) -> Result<SnowID, DecodeError> {
    let value = encoded.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeError::InvalidLength {
            len: encoded.len(),
        },
        _ => DecodeError::NotANumber,
    })?;

    // Negative values and values above u64::MAX have no 64-bit binary form
    let raw = u64::try_from(value).map_err(|_| {
        let width = if value < 0 { 128 } else { 128 - value.leading_zeros() as usize };
        DecodeError::InvalidLength { len: width }
    })?;

    decode_binary(&format!("{raw:064b}"), epoch)
}

fn parse_segment(bytes: &[u8], component: Component) -> Result<u64, DecodeError> {
    bytes[component.span()].iter().try_fold(0u64, |acc, &b| match b {
        b'0' => Ok(acc << 1),
        b'1' => Ok((acc << 1) | 1),
        _ => Err(DecodeError::InvalidDigit { component }),
    })
}
