//! testing/types.rs
//! Error raised by `TestInStream` when its input limit runs out.

use thiserror::Error;

use crate::field_code::FieldCode;

/// Injected fault: the read of `data_type()` was about to start when the
/// stream's input limit went negative. No bytes were consumed by that read.
///
/// Only produced when a test armed the limit with `set_input_limit`; callers
/// are expected to rewind, raise the limit and decode again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input limit exhausted before {code} read")]
pub struct InputLimitExhausted {
    code: FieldCode,
}

impl InputLimitExhausted {
    pub fn new(code: FieldCode) -> Self {
        Self { code }
    }

    /// Field code of the interrupted read.
    pub fn data_type(&self) -> FieldCode {
        self.code
    }
}
