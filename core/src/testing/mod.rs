//! Self-describing streams for testing externalization code.
//!
//! Responsibilities:
//! - Prefix every field with a field code (and arrays with a count)
//! - Verify codes, counts and the leading version on read
//! - Inject faults at chosen read boundaries
//!
//! The byte format is a test format only. Production code writes and reads
//! through `ByteOutStream`/`ByteInStream`.

pub mod types;
pub mod output;
pub mod input;
pub mod exhaustive;

pub use types::InputLimitExhausted;
pub use output::TestOutStream;
pub use input::TestInStream;
pub use exhaustive::{run_exhaustive, FaultReport};
