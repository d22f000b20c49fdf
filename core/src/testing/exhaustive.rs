//! testing/exhaustive.rs
//!
//! Exhaustive fault-injection driver.
//!
//! Replays one decode against the same `TestInStream` with input limits
//! `0, 1, 2, ...`. Attempt `n` is interrupted right before its `(n + 1)`-th read,
//! so a decode made of `K` reads is interrupted once at every read boundary and
//! completes at limit `K`. Use it to check that calling code leaves its values
//! in a sane state whenever a read bails out with `?`.

use tracing::{debug, trace};

use crate::constants::INPUT_LIMIT_DISABLED;
use crate::field_code::FieldCode;
use crate::testing::input::TestInStream;
use crate::testing::types::InputLimitExhausted;

/// Outcome of `run_exhaustive`.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultReport<T> {
    /// Value produced by the first attempt that ran to completion.
    pub value: T,
    /// Field code carried by each injected fault, in limit order
    /// (`faults[n]` interrupted the attempt with limit `n`).
    pub faults: Vec<FieldCode>,
}

impl<T> FaultReport<T> {
    /// Number of reads the completed decode performed.
    pub fn reads(&self) -> usize {
        self.faults.len()
    }

    /// Total decode attempts, including the successful one.
    pub fn attempts(&self) -> usize {
        self.faults.len() + 1
    }
}

/// Run `decode` with input limits `0, 1, 2, ...` until it returns `Ok`.
///
/// The stream is rewound (and revalidated) before every attempt, and its input
/// limit is disabled on return.
pub fn run_exhaustive<T, F>(stream: &mut TestInStream, mut decode: F) -> FaultReport<T>
where
    F: FnMut(&mut TestInStream) -> Result<T, InputLimitExhausted>,
{
    let mut faults = Vec::new();
    let mut limit: i32 = 0;

    loop {
        stream.reset();
        stream.set_input_limit(limit);

        match decode(stream) {
            Ok(value) => {
                stream.set_input_limit(INPUT_LIMIT_DISABLED);
                debug!(
                    target: "bdex::testing",
                    reads = faults.len(),
                    "decode completed under fault injection"
                );
                return FaultReport { value, faults };
            }
            Err(fault) => {
                trace!(
                    target: "bdex::testing",
                    limit,
                    field_code = %fault.data_type(),
                    "injected fault"
                );
                faults.push(fault.data_type());
                limit += 1;
            }
        }
    }
}
