//! testing/input.rs
//!
//! Self-describing input stream for tests.
//!
//! Every read runs, in order:
//! 1. the input-limit check (may return `InputLimitExhausted`, consuming nothing),
//! 2. the version check, on the first read only (`cursor() == 0`),
//! 3. field code, and for arrays the four-byte count, verification,
//! 4. a bounds check on the payload,
//! 5. the plain decode.
//!
//! Any failure in 2-4 invalidates the stream and leaves the destination
//! untouched. Mismatches are reported through `tracing` unless quiet; short
//! input is silent.

use std::fmt;
use num_enum::TryFromPrimitive;
use tracing::warn;

use crate::constants::{sizes, INPUT_LIMIT_DISABLED};
use crate::field_code::{field_code_name, FieldCode};
use crate::stream::ByteInStream;
use crate::testing::types::InputLimitExhausted;
use crate::utils::fmt_bytes;

const LOG_TARGET: &str = "bdex::testing";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInStream {
    imp: ByteInStream,
    quiet: bool,
    suppress_version_check: bool,
    input_limit: i32,
}

impl Default for TestInStream {
    fn default() -> Self {
        Self::from_imp(ByteInStream::new())
    }
}

impl TestInStream {
    /// Empty, valid stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Valid stream over a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_imp(ByteInStream::from_bytes(bytes))
    }

    fn from_imp(imp: ByteInStream) -> Self {
        Self {
            imp,
            quiet: false,
            suppress_version_check: false,
            input_limit: INPUT_LIMIT_DISABLED,
        }
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Silence mismatch diagnostics. Invalidation still happens.
    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    /// Skip the leading-version check on the first read.
    pub fn set_suppress_version_check(&mut self, suppress: bool) {
        self.suppress_version_check = suppress;
    }

    /// Number of reads allowed before `InputLimitExhausted` is returned.
    /// Negative disables fault injection.
    pub fn set_input_limit(&mut self, limit: i32) {
        self.input_limit = limit;
    }

    // -------------------------------------------------------------------------
    // Manipulators
    // -------------------------------------------------------------------------

    pub fn invalidate(&mut self) {
        self.imp.invalidate();
    }

    /// Rewind to the start and mark valid.
    pub fn reset(&mut self) {
        self.imp.reset();
    }

    /// Move the cursor to `offset` and mark valid.
    pub fn seek(&mut self, offset: usize) {
        self.imp.seek(offset);
    }

    /// Replace the contents with a copy of `bytes`, rewind and mark valid.
    pub fn reload(&mut self, bytes: &[u8]) {
        self.imp.reload(bytes);
    }

    /// Tagged compact length: field code `INT8` (one byte) or `INT32` (four bytes).
    pub fn get_length(&mut self, variable: &mut i32) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int32)?;

        if let Some(raw) = self.read_field_code() {
            let size = match FieldCode::try_from_primitive(raw) {
                Ok(FieldCode::Int8) => Some(sizes::INT8),
                Ok(FieldCode::Int32) => Some(sizes::INT32),
                _ => None,
            };
            match size {
                Some(size) if self.imp.remaining() >= size => {
                    self.imp.get_length(variable);
                }
                Some(_) => self.imp.invalidate(),
                None => {
                    self.report_field_code_mismatch("INT8 or INT32", raw);
                    self.imp.invalidate();
                }
            }
        }
        Ok(self)
    }

    pub fn get_version(&mut self, variable: &mut i32) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint8)?;
        self.check_scalar(FieldCode::Uint8);
        self.imp.get_version(variable);
        Ok(self)
    }

    pub fn get_int64(&mut self, variable: &mut i64) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int64)?;
        self.check_scalar(FieldCode::Int64);
        self.imp.get_int64(variable);
        Ok(self)
    }

    pub fn get_uint64(&mut self, variable: &mut u64) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint64)?;
        self.check_scalar(FieldCode::Uint64);
        self.imp.get_uint64(variable);
        Ok(self)
    }

    pub fn get_int56(&mut self, variable: &mut i64) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int56)?;
        self.check_scalar(FieldCode::Int56);
        self.imp.get_int56(variable);
        Ok(self)
    }

    pub fn get_uint56(&mut self, variable: &mut u64) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint56)?;
        self.check_scalar(FieldCode::Uint56);
        self.imp.get_uint56(variable);
        Ok(self)
    }

    pub fn get_int48(&mut self, variable: &mut i64) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int48)?;
        self.check_scalar(FieldCode::Int48);
        self.imp.get_int48(variable);
        Ok(self)
    }

    pub fn get_uint48(&mut self, variable: &mut u64) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint48)?;
        self.check_scalar(FieldCode::Uint48);
        self.imp.get_uint48(variable);
        Ok(self)
    }

    pub fn get_int40(&mut self, variable: &mut i64) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int40)?;
        self.check_scalar(FieldCode::Int40);
        self.imp.get_int40(variable);
        Ok(self)
    }

    pub fn get_uint40(&mut self, variable: &mut u64) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint40)?;
        self.check_scalar(FieldCode::Uint40);
        self.imp.get_uint40(variable);
        Ok(self)
    }

    pub fn get_int32(&mut self, variable: &mut i32) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int32)?;
        self.check_scalar(FieldCode::Int32);
        self.imp.get_int32(variable);
        Ok(self)
    }

    pub fn get_uint32(&mut self, variable: &mut u32) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint32)?;
        self.check_scalar(FieldCode::Uint32);
        self.imp.get_uint32(variable);
        Ok(self)
    }

    pub fn get_int24(&mut self, variable: &mut i32) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int24)?;
        self.check_scalar(FieldCode::Int24);
        self.imp.get_int24(variable);
        Ok(self)
    }

    pub fn get_uint24(&mut self, variable: &mut u32) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint24)?;
        self.check_scalar(FieldCode::Uint24);
        self.imp.get_uint24(variable);
        Ok(self)
    }

    pub fn get_int16(&mut self, variable: &mut i16) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int16)?;
        self.check_scalar(FieldCode::Int16);
        self.imp.get_int16(variable);
        Ok(self)
    }

    pub fn get_uint16(&mut self, variable: &mut u16) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint16)?;
        self.check_scalar(FieldCode::Uint16);
        self.imp.get_uint16(variable);
        Ok(self)
    }

    pub fn get_int8(&mut self, variable: &mut i8) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int8)?;
        self.check_scalar(FieldCode::Int8);
        self.imp.get_int8(variable);
        Ok(self)
    }

    pub fn get_uint8(&mut self, variable: &mut u8) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint8)?;
        self.check_scalar(FieldCode::Uint8);
        self.imp.get_uint8(variable);
        Ok(self)
    }

    pub fn get_float64(&mut self, variable: &mut f64) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Float64)?;
        self.check_scalar(FieldCode::Float64);
        self.imp.get_float64(variable);
        Ok(self)
    }

    pub fn get_float32(&mut self, variable: &mut f32) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Float32)?;
        self.check_scalar(FieldCode::Float32);
        self.imp.get_float32(variable);
        Ok(self)
    }

    /// Tagged length, then a tagged `UINT8` array of that many bytes.
    ///
    /// Counts as two reads against the input limit.
    pub fn get_string(&mut self, variable: &mut String) -> Result<&mut Self, InputLimitExhausted> {
        let mut length = 0i32;
        self.get_length(&mut length)?;
        if !self.imp.is_valid() {
            return Ok(self);
        }

        // Decoded lengths are never negative.
        let count = length as usize;
        self.begin_read(FieldCode::Uint8)?;
        self.check_array(FieldCode::Uint8, sizes::INT8, count);
        self.imp.get_utf8(variable, count);
        Ok(self)
    }

    // --- arrays (count is `values.len()` and must match the stored count) ---

    pub fn get_array_int64(
        &mut self,
        values: &mut [i64],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int64)?;
        self.check_array(FieldCode::Int64, sizes::INT64, values.len());
        self.imp.get_array_int64(values);
        Ok(self)
    }

    pub fn get_array_uint64(
        &mut self,
        values: &mut [u64],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint64)?;
        self.check_array(FieldCode::Uint64, sizes::INT64, values.len());
        self.imp.get_array_uint64(values);
        Ok(self)
    }

    pub fn get_array_int56(
        &mut self,
        values: &mut [i64],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int56)?;
        self.check_array(FieldCode::Int56, sizes::INT56, values.len());
        self.imp.get_array_int56(values);
        Ok(self)
    }

    pub fn get_array_uint56(
        &mut self,
        values: &mut [u64],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint56)?;
        self.check_array(FieldCode::Uint56, sizes::INT56, values.len());
        self.imp.get_array_uint56(values);
        Ok(self)
    }

    pub fn get_array_int48(
        &mut self,
        values: &mut [i64],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int48)?;
        self.check_array(FieldCode::Int48, sizes::INT48, values.len());
        self.imp.get_array_int48(values);
        Ok(self)
    }

    pub fn get_array_uint48(
        &mut self,
        values: &mut [u64],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint48)?;
        self.check_array(FieldCode::Uint48, sizes::INT48, values.len());
        self.imp.get_array_uint48(values);
        Ok(self)
    }

    pub fn get_array_int40(
        &mut self,
        values: &mut [i64],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int40)?;
        self.check_array(FieldCode::Int40, sizes::INT40, values.len());
        self.imp.get_array_int40(values);
        Ok(self)
    }

    pub fn get_array_uint40(
        &mut self,
        values: &mut [u64],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint40)?;
        self.check_array(FieldCode::Uint40, sizes::INT40, values.len());
        self.imp.get_array_uint40(values);
        Ok(self)
    }

    pub fn get_array_int32(
        &mut self,
        values: &mut [i32],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int32)?;
        self.check_array(FieldCode::Int32, sizes::INT32, values.len());
        self.imp.get_array_int32(values);
        Ok(self)
    }

    pub fn get_array_uint32(
        &mut self,
        values: &mut [u32],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint32)?;
        self.check_array(FieldCode::Uint32, sizes::INT32, values.len());
        self.imp.get_array_uint32(values);
        Ok(self)
    }

    pub fn get_array_int24(
        &mut self,
        values: &mut [i32],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int24)?;
        self.check_array(FieldCode::Int24, sizes::INT24, values.len());
        self.imp.get_array_int24(values);
        Ok(self)
    }

    pub fn get_array_uint24(
        &mut self,
        values: &mut [u32],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint24)?;
        self.check_array(FieldCode::Uint24, sizes::INT24, values.len());
        self.imp.get_array_uint24(values);
        Ok(self)
    }

    pub fn get_array_int16(
        &mut self,
        values: &mut [i16],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int16)?;
        self.check_array(FieldCode::Int16, sizes::INT16, values.len());
        self.imp.get_array_int16(values);
        Ok(self)
    }

    pub fn get_array_uint16(
        &mut self,
        values: &mut [u16],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint16)?;
        self.check_array(FieldCode::Uint16, sizes::INT16, values.len());
        self.imp.get_array_uint16(values);
        Ok(self)
    }

    pub fn get_array_int8(&mut self, values: &mut [i8]) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Int8)?;
        self.check_array(FieldCode::Int8, sizes::INT8, values.len());
        self.imp.get_array_int8(values);
        Ok(self)
    }

    pub fn get_array_uint8(&mut self, values: &mut [u8]) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Uint8)?;
        self.check_array(FieldCode::Uint8, sizes::INT8, values.len());
        self.imp.get_array_uint8(values);
        Ok(self)
    }

    pub fn get_array_float64(
        &mut self,
        values: &mut [f64],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Float64)?;
        self.check_array(FieldCode::Float64, sizes::FLOAT64, values.len());
        self.imp.get_array_float64(values);
        Ok(self)
    }

    pub fn get_array_float32(
        &mut self,
        values: &mut [f32],
    ) -> Result<&mut Self, InputLimitExhausted> {
        self.begin_read(FieldCode::Float32)?;
        self.check_array(FieldCode::Float32, sizes::FLOAT32, values.len());
        self.imp.get_array_float32(values);
        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.imp.is_valid()
    }

    /// `true` when every byte has been consumed. Only meaningful on a valid
    /// stream.
    pub fn is_empty(&self) -> bool {
        self.imp.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.imp.cursor()
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.imp.length()
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        self.imp.data()
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_suppress_version_check(&self) -> bool {
        self.suppress_version_check
    }

    pub fn input_limit(&self) -> i32 {
        self.input_limit
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Steps shared by every read before any byte is consumed.
    fn begin_read(&mut self, code: FieldCode) -> Result<(), InputLimitExhausted> {
        self.check_input_limit(code)?;
        self.check_version();
        Ok(())
    }

    /// Decrement an armed input limit; fault on the step from 0 to -1.
    fn check_input_limit(&mut self, code: FieldCode) -> Result<(), InputLimitExhausted> {
        if self.input_limit >= 0 {
            self.input_limit -= 1;
            if self.input_limit < 0 {
                return Err(InputLimitExhausted::new(code));
            }
        }
        Ok(())
    }

    /// At the start of the stream, require a leading `INT8`/`UINT8` field code
    /// followed by a positive version byte. Inspects without consuming.
    /// Never re-validates: an invalid stream stays invalid until `reset`, `seek`
    /// or `reload`.
    fn check_version(&mut self) {
        if self.suppress_version_check || !self.imp.is_valid() || self.imp.cursor() != 0 {
            return;
        }

        let head = match self.imp.data() {
            [code, version, ..] => Some((*code, *version as i8)),
            _ => None,
        };
        let Some((code, version)) = head else {
            if !self.quiet {
                warn!(
                    target: LOG_TARGET,
                    head = %fmt_bytes(self.imp.data()),
                    "missing version field"
                );
            }
            self.imp.invalidate();
            return;
        };

        if code != FieldCode::Int8.to_u8() && code != FieldCode::Uint8.to_u8() {
            if !self.quiet {
                warn!(
                    target: LOG_TARGET,
                    expected = "INT8 or UINT8",
                    found = field_code_name(code),
                    "version field code mismatch"
                );
            }
            self.imp.invalidate();
        } else if version <= 0 {
            if !self.quiet {
                warn!(target: LOG_TARGET, version, "version must be positive");
            }
            self.imp.invalidate();
        }
    }

    /// Consume one field code byte. `None` if the stream is or becomes invalid.
    fn read_field_code(&mut self) -> Option<u8> {
        if !self.imp.is_valid() {
            return None;
        }
        let mut raw = 0u8;
        self.imp.get_uint8(&mut raw);
        self.imp.is_valid().then_some(raw)
    }

    /// Consume a field code and require it to be `expected`.
    fn check_field_code(&mut self, expected: FieldCode) -> bool {
        let Some(raw) = self.read_field_code() else {
            return false;
        };
        if raw != expected.to_u8() {
            self.report_field_code_mismatch(expected.to_ascii(), raw);
            self.imp.invalidate();
            return false;
        }
        true
    }

    fn check_scalar(&mut self, expected: FieldCode) {
        let size = expected.payload_size().unwrap_or(0);
        if self.check_field_code(expected) && self.imp.remaining() < size {
            self.imp.invalidate();
        }
    }

    fn check_array(&mut self, expected: FieldCode, element_size: usize, count: usize) {
        if !self.check_field_code(expected) {
            return;
        }

        if self.imp.remaining() < sizes::ARRAY_LENGTH {
            self.imp.invalidate();
            return;
        }
        let mut stored = 0i32;
        self.imp.get_int32(&mut stored);
        if usize::try_from(stored).ok() != Some(count) {
            if !self.quiet {
                warn!(
                    target: LOG_TARGET,
                    field_code = %expected,
                    expected = count,
                    found = stored,
                    "array length mismatch"
                );
            }
            self.imp.invalidate();
            return;
        }

        if self.imp.remaining() < element_size * count {
            self.imp.invalidate();
        }
    }

    fn report_field_code_mismatch(&self, expected: &str, found: u8) {
        if !self.quiet {
            warn!(
                target: LOG_TARGET,
                expected,
                found = field_code_name(found),
                raw = found,
                "field code mismatch"
            );
        }
    }
}

impl fmt::Display for TestInStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.imp, f)
    }
}

crate::stream::traits::forward_in_stream!(
    TestInStream,
    InputLimitExhausted,
    std::convert::identity
);
