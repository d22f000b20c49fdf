//! Plain (untagged) externalization streams.
//!
//! Responsibilities:
//! - Append codec output to a growable buffer
//! - Read it back sequentially with bounds checks
//! - Track sticky validity
//!
//! Non-responsibilities:
//! - Type tags and shape verification (see `testing`)
//! - Per-type dispatch (callers use `OutStream`/`InStream`)

pub mod traits;
pub mod output;
pub mod input;

pub use traits::{InStream, OutStream};
pub use output::ByteOutStream;
pub use input::ByteInStream;
