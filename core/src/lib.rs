//! bdex-core
//!
//! Platform-independent binary externalization streams.
//! Scalars and arrays in, portable big-endian bytes out, and back.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod utils;

// Byte layout
pub mod codec;
pub mod field_code;

// Stream layers
pub mod stream;
pub mod testing;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::field_code::FieldCode;
    pub use crate::stream::{ByteInStream, ByteOutStream, InStream, OutStream};
    pub use crate::testing::{InputLimitExhausted, TestInStream, TestOutStream};
}
