//! stream/output.rs
//!
//! Untagged, growable output byte stream.
//!
//! Design notes:
//! - Every `put*` appends the codec's big-endian encoding with no framing.
//! - Writing never fails. The stream only becomes invalid through an explicit
//!   `invalidate()`, after which every `put*` is a no-op.
//! - Backing storage is a `Vec<u8>`; allocation failure aborts as usual.

use std::fmt;

use crate::codec::{self, WireInt};
use crate::constants::{sizes, DEFAULT_CAPACITY, LENGTH_HIGH_BIT, MAX_ONE_BYTE_LENGTH};
use crate::utils::write_hex_dump;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteOutStream {
    buffer: Vec<u8>,
    valid: bool,
}

impl Default for ByteOutStream {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteOutStream {
    /// Empty, valid stream.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty, valid stream with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            valid: true,
        }
    }

    // -------------------------------------------------------------------------
    // Manipulators
    // -------------------------------------------------------------------------

    /// Mark this stream invalid. Sticky for the lifetime of the stream.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Drop all written bytes. Validity is unchanged.
    pub fn remove_all(&mut self) {
        self.buffer.clear();
    }

    /// Make room for at least `capacity` bytes in total.
    pub fn reserve_capacity(&mut self, capacity: usize) {
        self.buffer.reserve(capacity.saturating_sub(self.buffer.len()));
    }

    /// Compact length: one byte for `0..=127`, otherwise four bytes with the
    /// top bit set.
    ///
    /// `length` must be non-negative.
    pub fn put_length(&mut self, length: i32) -> &mut Self {
        debug_assert!(length >= 0, "negative length {length}");
        if length > MAX_ONE_BYTE_LENGTH {
            self.put_uint32(length as u32 | LENGTH_HIGH_BIT)
        } else {
            self.put_int8(length as i8)
        }
    }

    /// One unsigned byte. Only `0..=255` round-trips.
    pub fn put_version(&mut self, version: i32) -> &mut Self {
        self.put_uint8(version as u8)
    }

    pub fn put_int64(&mut self, value: i64) -> &mut Self {
        self.put_int(value, sizes::INT64)
    }

    pub fn put_uint64(&mut self, value: u64) -> &mut Self {
        self.put_int(value, sizes::INT64)
    }

    /// Low 7 bytes of `value`.
    pub fn put_int56(&mut self, value: i64) -> &mut Self {
        self.put_int(value, sizes::INT56)
    }

    pub fn put_uint56(&mut self, value: u64) -> &mut Self {
        self.put_int(value, sizes::INT56)
    }

    /// Low 6 bytes of `value`.
    pub fn put_int48(&mut self, value: i64) -> &mut Self {
        self.put_int(value, sizes::INT48)
    }

    pub fn put_uint48(&mut self, value: u64) -> &mut Self {
        self.put_int(value, sizes::INT48)
    }

    /// Low 5 bytes of `value`.
    pub fn put_int40(&mut self, value: i64) -> &mut Self {
        self.put_int(value, sizes::INT40)
    }

    pub fn put_uint40(&mut self, value: u64) -> &mut Self {
        self.put_int(value, sizes::INT40)
    }

    pub fn put_int32(&mut self, value: i32) -> &mut Self {
        self.put_int(value, sizes::INT32)
    }

    pub fn put_uint32(&mut self, value: u32) -> &mut Self {
        self.put_int(value, sizes::INT32)
    }

    /// Low 3 bytes of `value`.
    pub fn put_int24(&mut self, value: i32) -> &mut Self {
        self.put_int(value, sizes::INT24)
    }

    pub fn put_uint24(&mut self, value: u32) -> &mut Self {
        self.put_int(value, sizes::INT24)
    }

    pub fn put_int16(&mut self, value: i16) -> &mut Self {
        self.put_int(value, sizes::INT16)
    }

    pub fn put_uint16(&mut self, value: u16) -> &mut Self {
        self.put_int(value, sizes::INT16)
    }

    pub fn put_int8(&mut self, value: i8) -> &mut Self {
        self.put_int(value, sizes::INT8)
    }

    pub fn put_uint8(&mut self, value: u8) -> &mut Self {
        self.put_int(value, sizes::INT8)
    }

    pub fn put_float64(&mut self, value: f64) -> &mut Self {
        if self.valid {
            codec::put_float64(self.extend(sizes::FLOAT64), value);
        }
        self
    }

    pub fn put_float32(&mut self, value: f32) -> &mut Self {
        if self.valid {
            codec::put_float32(self.extend(sizes::FLOAT32), value);
        }
        self
    }

    /// Compact length followed by the raw UTF-8 bytes.
    pub fn put_string(&mut self, value: &str) -> &mut Self {
        debug_assert!(value.len() <= i32::MAX as usize);
        self.put_length(value.len() as i32);
        self.put_array_uint8(value.as_bytes())
    }

    // --- arrays (no framing) ---

    pub fn put_array_int64(&mut self, values: &[i64]) -> &mut Self {
        self.put_array_int(values, sizes::INT64)
    }

    pub fn put_array_uint64(&mut self, values: &[u64]) -> &mut Self {
        self.put_array_int(values, sizes::INT64)
    }

    pub fn put_array_int56(&mut self, values: &[i64]) -> &mut Self {
        self.put_array_int(values, sizes::INT56)
    }

    pub fn put_array_uint56(&mut self, values: &[u64]) -> &mut Self {
        self.put_array_int(values, sizes::INT56)
    }

    pub fn put_array_int48(&mut self, values: &[i64]) -> &mut Self {
        self.put_array_int(values, sizes::INT48)
    }

    pub fn put_array_uint48(&mut self, values: &[u64]) -> &mut Self {
        self.put_array_int(values, sizes::INT48)
    }

    pub fn put_array_int40(&mut self, values: &[i64]) -> &mut Self {
        self.put_array_int(values, sizes::INT40)
    }

    pub fn put_array_uint40(&mut self, values: &[u64]) -> &mut Self {
        self.put_array_int(values, sizes::INT40)
    }

    pub fn put_array_int32(&mut self, values: &[i32]) -> &mut Self {
        self.put_array_int(values, sizes::INT32)
    }

    pub fn put_array_uint32(&mut self, values: &[u32]) -> &mut Self {
        self.put_array_int(values, sizes::INT32)
    }

    pub fn put_array_int24(&mut self, values: &[i32]) -> &mut Self {
        self.put_array_int(values, sizes::INT24)
    }

    pub fn put_array_uint24(&mut self, values: &[u32]) -> &mut Self {
        self.put_array_int(values, sizes::INT24)
    }

    pub fn put_array_int16(&mut self, values: &[i16]) -> &mut Self {
        self.put_array_int(values, sizes::INT16)
    }

    pub fn put_array_uint16(&mut self, values: &[u16]) -> &mut Self {
        self.put_array_int(values, sizes::INT16)
    }

    pub fn put_array_int8(&mut self, values: &[i8]) -> &mut Self {
        self.put_array_int(values, sizes::INT8)
    }

    /// Raw bytes, copied as-is.
    pub fn put_array_uint8(&mut self, values: &[u8]) -> &mut Self {
        if self.valid {
            self.buffer.extend_from_slice(values);
        }
        self
    }

    pub fn put_array_float64(&mut self, values: &[f64]) -> &mut Self {
        if self.valid {
            codec::put_array_float64(self.extend(values.len() * sizes::FLOAT64), values);
        }
        self
    }

    pub fn put_array_float32(&mut self, values: &[f32]) -> &mut Self {
        if self.valid {
            codec::put_array_float32(self.extend(values.len() * sizes::FLOAT32), values);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Bytes written so far.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.buffer.len()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Grow the buffer by `size` zeroed bytes and hand back the new tail.
    fn extend(&mut self, size: usize) -> &mut [u8] {
        let start = self.buffer.len();
        self.buffer.resize(start + size, 0);
        &mut self.buffer[start..]
    }

    fn put_int<T: WireInt>(&mut self, value: T, size: usize) -> &mut Self {
        if self.valid {
            codec::put_int_n(self.extend(size), value, size);
        }
        self
    }

    fn put_array_int<T: WireInt>(&mut self, values: &[T], size: usize) -> &mut Self {
        if self.valid {
            codec::put_array_int_n(self.extend(values.len() * size), values, size);
        }
        self
    }
}

impl fmt::Display for ByteOutStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex_dump(f, &self.buffer)
    }
}

crate::stream::traits::forward_out_stream!(ByteOutStream);
