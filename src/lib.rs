//! # SnowID
//!
//! A Rust implementation of a Snowflake-like ID generator with datacenter and
//! machine coordinates.
//!
//! ```text
//! | 1 reserved | 41 timestamp | 5 datacenter | 5 machine | 12 sequence |
//! ```
//!
//! Generate 64-bit unique identifiers that are:
//! - 📈 Time-sorted
//! - 🔒 Thread-safe, with up to 4096 IDs per millisecond per generator
//! - 🌐 Distributed-ready, with 32 datacenters x 32 machines
//! - 🔤 Convertible to and from decimal and fixed-width binary strings
//!
//! ```
//! use snowid::{codec, SnowIDGenerator, DEFAULT_EPOCH};
//!
//! let generator = SnowIDGenerator::new(1, 2, *DEFAULT_EPOCH).unwrap();
//! let id = generator.generate().unwrap();
//!
//! let decimal = id.to_decimal_string();
//! let parsed = codec::decode_decimal(&decimal, *DEFAULT_EPOCH).unwrap();
//! assert_eq!(parsed, id);
//! assert_eq!(parsed.machine_id(), 2);
//! ```

#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod error;
mod extractor;
mod generator;
mod id;
pub mod layout;
#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{SnowIDConfig, SnowIDConfigBuilder, DEFAULT_EPOCH, DEFAULT_EPOCH_MILLIS};
pub use error::{DecodeError, ErrorKind, SnowIDError};
pub use extractor::SnowIDExtractor;
pub use generator::{SnowIDGenerator, SystemClock, TimeSource};
pub use id::SnowID;
pub use layout::Component;
