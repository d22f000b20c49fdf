//! testing/output.rs
//!
//! Self-describing output stream for tests.
//!
//! Layout (additive over `ByteOutStream`):
//!
//! ```text
//! scalar: [ field code (1) ][ payload ]
//! array:  [ field code (1) ][ count (4, big-endian) ][ payload x count ]
//! ```
//!
//! `make_next_invalid()` replaces the next field code with `INVALID`, which
//! lets tests build corrupted input on purpose.

use std::fmt;

use crate::constants::MAX_ONE_BYTE_LENGTH;
use crate::field_code::FieldCode;
use crate::stream::ByteOutStream;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestOutStream {
    imp: ByteOutStream,
    make_next_invalid: bool,
}

impl TestOutStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            imp: ByteOutStream::with_capacity(capacity),
            make_next_invalid: false,
        }
    }

    // -------------------------------------------------------------------------
    // Manipulators
    // -------------------------------------------------------------------------

    pub fn invalidate(&mut self) {
        self.imp.invalidate();
    }

    /// Write `INVALID` instead of the real field code on the next `put*` that
    /// actually writes.
    pub fn make_next_invalid(&mut self) {
        self.make_next_invalid = true;
    }

    pub fn remove_all(&mut self) {
        self.imp.remove_all();
    }

    pub fn reserve_capacity(&mut self, capacity: usize) {
        self.imp.reserve_capacity(capacity);
    }

    /// Tagged `INT8` for `0..=127`, tagged `INT32` otherwise, followed by the
    /// plain compact encoding.
    pub fn put_length(&mut self, length: i32) -> &mut Self {
        let code = if length > MAX_ONE_BYTE_LENGTH {
            FieldCode::Int32
        } else {
            FieldCode::Int8
        };
        self.put_field_code(code);
        self.imp.put_length(length);
        self
    }

    pub fn put_version(&mut self, version: i32) -> &mut Self {
        self.put_field_code(FieldCode::Uint8);
        self.imp.put_version(version);
        self
    }

    pub fn put_int64(&mut self, value: i64) -> &mut Self {
        self.put_field_code(FieldCode::Int64);
        self.imp.put_int64(value);
        self
    }

    pub fn put_uint64(&mut self, value: u64) -> &mut Self {
        self.put_field_code(FieldCode::Uint64);
        self.imp.put_uint64(value);
        self
    }

    pub fn put_int56(&mut self, value: i64) -> &mut Self {
        self.put_field_code(FieldCode::Int56);
        self.imp.put_int56(value);
        self
    }

    pub fn put_uint56(&mut self, value: u64) -> &mut Self {
        self.put_field_code(FieldCode::Uint56);
        self.imp.put_uint56(value);
        self
    }

    pub fn put_int48(&mut self, value: i64) -> &mut Self {
        self.put_field_code(FieldCode::Int48);
        self.imp.put_int48(value);
        self
    }

    pub fn put_uint48(&mut self, value: u64) -> &mut Self {
        self.put_field_code(FieldCode::Uint48);
        self.imp.put_uint48(value);
        self
    }

    pub fn put_int40(&mut self, value: i64) -> &mut Self {
        self.put_field_code(FieldCode::Int40);
        self.imp.put_int40(value);
        self
    }

    pub fn put_uint40(&mut self, value: u64) -> &mut Self {
        self.put_field_code(FieldCode::Uint40);
        self.imp.put_uint40(value);
        self
    }

    pub fn put_int32(&mut self, value: i32) -> &mut Self {
        self.put_field_code(FieldCode::Int32);
        self.imp.put_int32(value);
        self
    }

    pub fn put_uint32(&mut self, value: u32) -> &mut Self {
        self.put_field_code(FieldCode::Uint32);
        self.imp.put_uint32(value);
        self
    }

    pub fn put_int24(&mut self, value: i32) -> &mut Self {
        self.put_field_code(FieldCode::Int24);
        self.imp.put_int24(value);
        self
    }

    pub fn put_uint24(&mut self, value: u32) -> &mut Self {
        self.put_field_code(FieldCode::Uint24);
        self.imp.put_uint24(value);
        self
    }

    pub fn put_int16(&mut self, value: i16) -> &mut Self {
        self.put_field_code(FieldCode::Int16);
        self.imp.put_int16(value);
        self
    }

    pub fn put_uint16(&mut self, value: u16) -> &mut Self {
        self.put_field_code(FieldCode::Uint16);
        self.imp.put_uint16(value);
        self
    }

    pub fn put_int8(&mut self, value: i8) -> &mut Self {
        self.put_field_code(FieldCode::Int8);
        self.imp.put_int8(value);
        self
    }

    pub fn put_uint8(&mut self, value: u8) -> &mut Self {
        self.put_field_code(FieldCode::Uint8);
        self.imp.put_uint8(value);
        self
    }

    pub fn put_float64(&mut self, value: f64) -> &mut Self {
        self.put_field_code(FieldCode::Float64);
        self.imp.put_float64(value);
        self
    }

    pub fn put_float32(&mut self, value: f32) -> &mut Self {
        self.put_field_code(FieldCode::Float32);
        self.imp.put_float32(value);
        self
    }

    /// Tagged length, then the bytes as a tagged `UINT8` array.
    pub fn put_string(&mut self, value: &str) -> &mut Self {
        debug_assert!(value.len() <= i32::MAX as usize);
        self.put_length(value.len() as i32);
        self.put_array_uint8(value.as_bytes())
    }

    // --- arrays ---

    pub fn put_array_int64(&mut self, values: &[i64]) -> &mut Self {
        self.put_array_header(FieldCode::Int64, values.len());
        self.imp.put_array_int64(values);
        self
    }

    pub fn put_array_uint64(&mut self, values: &[u64]) -> &mut Self {
        self.put_array_header(FieldCode::Uint64, values.len());
        self.imp.put_array_uint64(values);
        self
    }

    pub fn put_array_int56(&mut self, values: &[i64]) -> &mut Self {
        self.put_array_header(FieldCode::Int56, values.len());
        self.imp.put_array_int56(values);
        self
    }

    pub fn put_array_uint56(&mut self, values: &[u64]) -> &mut Self {
        self.put_array_header(FieldCode::Uint56, values.len());
        self.imp.put_array_uint56(values);
        self
    }

    pub fn put_array_int48(&mut self, values: &[i64]) -> &mut Self {
        self.put_array_header(FieldCode::Int48, values.len());
        self.imp.put_array_int48(values);
        self
    }

    pub fn put_array_uint48(&mut self, values: &[u64]) -> &mut Self {
        self.put_array_header(FieldCode::Uint48, values.len());
        self.imp.put_array_uint48(values);
        self
    }

    pub fn put_array_int40(&mut self, values: &[i64]) -> &mut Self {
        self.put_array_header(FieldCode::Int40, values.len());
        self.imp.put_array_int40(values);
        self
    }

    pub fn put_array_uint40(&mut self, values: &[u64]) -> &mut Self {
        self.put_array_header(FieldCode::Uint40, values.len());
        self.imp.put_array_uint40(values);
        self
    }

    pub fn put_array_int32(&mut self, values: &[i32]) -> &mut Self {
        self.put_array_header(FieldCode::Int32, values.len());
        self.imp.put_array_int32(values);
        self
    }

    pub fn put_array_uint32(&mut self, values: &[u32]) -> &mut Self {
        self.put_array_header(FieldCode::Uint32, values.len());
        self.imp.put_array_uint32(values);
        self
    }

    pub fn put_array_int24(&mut self, values: &[i32]) -> &mut Self {
        self.put_array_header(FieldCode::Int24, values.len());
        self.imp.put_array_int24(values);
        self
    }

    pub fn put_array_uint24(&mut self, values: &[u32]) -> &mut Self {
        self.put_array_header(FieldCode::Uint24, values.len());
        self.imp.put_array_uint24(values);
        self
    }

    pub fn put_array_int16(&mut self, values: &[i16]) -> &mut Self {
        self.put_array_header(FieldCode::Int16, values.len());
        self.imp.put_array_int16(values);
        self
    }

    pub fn put_array_uint16(&mut self, values: &[u16]) -> &mut Self {
        self.put_array_header(FieldCode::Uint16, values.len());
        self.imp.put_array_uint16(values);
        self
    }

    pub fn put_array_int8(&mut self, values: &[i8]) -> &mut Self {
        self.put_array_header(FieldCode::Int8, values.len());
        self.imp.put_array_int8(values);
        self
    }

    pub fn put_array_uint8(&mut self, values: &[u8]) -> &mut Self {
        self.put_array_header(FieldCode::Uint8, values.len());
        self.imp.put_array_uint8(values);
        self
    }

    pub fn put_array_float64(&mut self, values: &[f64]) -> &mut Self {
        self.put_array_header(FieldCode::Float64, values.len());
        self.imp.put_array_float64(values);
        self
    }

    pub fn put_array_float32(&mut self, values: &[f32]) -> &mut Self {
        self.put_array_header(FieldCode::Float32, values.len());
        self.imp.put_array_float32(values);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.imp.is_valid()
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        self.imp.data()
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.imp.length()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// One-byte field code, consuming a pending `make_next_invalid`.
    /// An invalid stream writes nothing and leaves the pending flag armed.
    fn put_field_code(&mut self, code: FieldCode) {
        if !self.imp.is_valid() {
            return;
        }
        let code = if std::mem::take(&mut self.make_next_invalid) {
            FieldCode::Invalid
        } else {
            code
        };
        self.imp.put_uint8(code.to_u8());
    }

    /// Field code followed by a four-byte element count (not the compact form).
    fn put_array_header(&mut self, code: FieldCode, count: usize) {
        debug_assert!(count <= i32::MAX as usize, "array too long: {count}");
        self.put_field_code(code);
        self.imp.put_int32(count as i32);
    }
}

impl fmt::Display for TestOutStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.imp, f)
    }
}

crate::stream::traits::forward_out_stream!(TestOutStream);
