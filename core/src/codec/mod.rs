//! codec/mod.rs
//! Primitive byte-layout codec.
//!
//! Responsibilities:
//! - Truncated-width big-endian integers (1..=8 bytes)
//! - IEEE 754 single/double in network byte order
//! - Unframed arrays of the above
//!
//! Non-responsibilities:
//! - Buffer sizing and growth
//! - Validity tracking
//! - Tags and lengths

pub mod types;
pub mod encode;
pub mod decode;

pub use types::WireInt;
pub use encode::*;
pub use decode::*;
