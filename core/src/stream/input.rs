//! stream/input.rs
//!
//! Untagged input byte stream over an owned copy of externalized bytes.
//!
//! Design notes:
//! - Reads consume exactly the bytes the matching `put*` wrote.
//! - Every read first checks that enough bytes remain. If not, the stream
//!   invalidates itself and the destination is left untouched. Nothing panics
//!   on short input.
//! - Once invalid, reads are no-ops until `reset`, `seek` or `reload`.

use std::fmt;

use crate::codec::{self, WireInt};
use crate::constants::{sizes, LENGTH_HIGH_BIT};
use crate::utils::write_hex_dump;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteInStream {
    buffer: Vec<u8>,
    cursor: usize,
    valid: bool,
}

impl Default for ByteInStream {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteInStream {
    /// Empty, valid stream.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
            valid: true,
        }
    }

    /// Valid stream over a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buffer: bytes.to_vec(),
            cursor: 0,
            valid: true,
        }
    }

    // -------------------------------------------------------------------------
    // Manipulators
    // -------------------------------------------------------------------------

    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Rewind to the start and mark valid.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.valid = true;
    }

    /// Move the cursor to `offset` and mark valid.
    ///
    /// `offset` must not exceed `length()`.
    pub fn seek(&mut self, offset: usize) {
        debug_assert!(offset <= self.buffer.len(), "seek past end: {offset}");
        self.cursor = offset.min(self.buffer.len());
        self.valid = true;
    }

    /// Replace the contents with a copy of `bytes`, rewind and mark valid.
    pub fn reload(&mut self, bytes: &[u8]) {
        self.buffer.clear();
        self.buffer.extend_from_slice(bytes);
        self.reset();
    }

    /// Inverse of `ByteOutStream::put_length`. The top bit of the next byte
    /// selects the one- or four-byte form.
    pub fn get_length(&mut self, variable: &mut i32) -> &mut Self {
        if !self.valid {
            return self;
        }
        let Some(&first) = self.buffer.get(self.cursor) else {
            self.invalidate();
            return self;
        };

        if first & 0x80 != 0 {
            let mut raw = 0u32;
            self.get_uint32(&mut raw);
            if self.valid {
                *variable = (raw & !LENGTH_HIGH_BIT) as i32;
            }
        } else {
            let mut raw = 0i8;
            self.get_int8(&mut raw);
            if self.valid {
                *variable = i32::from(raw);
            }
        }
        self
    }

    /// One unsigned byte.
    pub fn get_version(&mut self, variable: &mut i32) -> &mut Self {
        let mut raw = 0u8;
        self.get_uint8(&mut raw);
        if self.valid {
            *variable = i32::from(raw);
        }
        self
    }

    pub fn get_int64(&mut self, variable: &mut i64) -> &mut Self {
        self.get_int(variable, sizes::INT64)
    }

    pub fn get_uint64(&mut self, variable: &mut u64) -> &mut Self {
        self.get_int(variable, sizes::INT64)
    }

    /// 7 bytes, sign-extended.
    pub fn get_int56(&mut self, variable: &mut i64) -> &mut Self {
        self.get_int(variable, sizes::INT56)
    }

    /// 7 bytes, zero-extended.
    pub fn get_uint56(&mut self, variable: &mut u64) -> &mut Self {
        self.get_int(variable, sizes::INT56)
    }

    pub fn get_int48(&mut self, variable: &mut i64) -> &mut Self {
        self.get_int(variable, sizes::INT48)
    }

    pub fn get_uint48(&mut self, variable: &mut u64) -> &mut Self {
        self.get_int(variable, sizes::INT48)
    }

    pub fn get_int40(&mut self, variable: &mut i64) -> &mut Self {
        self.get_int(variable, sizes::INT40)
    }

    pub fn get_uint40(&mut self, variable: &mut u64) -> &mut Self {
        self.get_int(variable, sizes::INT40)
    }

    pub fn get_int32(&mut self, variable: &mut i32) -> &mut Self {
        self.get_int(variable, sizes::INT32)
    }

    pub fn get_uint32(&mut self, variable: &mut u32) -> &mut Self {
        self.get_int(variable, sizes::INT32)
    }

    /// 3 bytes, sign-extended.
    pub fn get_int24(&mut self, variable: &mut i32) -> &mut Self {
        self.get_int(variable, sizes::INT24)
    }

    /// 3 bytes, zero-extended.
    pub fn get_uint24(&mut self, variable: &mut u32) -> &mut Self {
        self.get_int(variable, sizes::INT24)
    }

    pub fn get_int16(&mut self, variable: &mut i16) -> &mut Self {
        self.get_int(variable, sizes::INT16)
    }

    pub fn get_uint16(&mut self, variable: &mut u16) -> &mut Self {
        self.get_int(variable, sizes::INT16)
    }

    pub fn get_int8(&mut self, variable: &mut i8) -> &mut Self {
        self.get_int(variable, sizes::INT8)
    }

    pub fn get_uint8(&mut self, variable: &mut u8) -> &mut Self {
        self.get_int(variable, sizes::INT8)
    }

    pub fn get_float64(&mut self, variable: &mut f64) -> &mut Self {
        if let Some(field) = self.take(sizes::FLOAT64) {
            *variable = codec::get_float64(field);
        }
        self
    }

    pub fn get_float32(&mut self, variable: &mut f32) -> &mut Self {
        if let Some(field) = self.take(sizes::FLOAT32) {
            *variable = codec::get_float32(field);
        }
        self
    }

    /// Compact length followed by that many bytes. Bytes that are not valid
    /// UTF-8 invalidate the stream.
    pub fn get_string(&mut self, variable: &mut String) -> &mut Self {
        let mut length = 0i32;
        self.get_length(&mut length);
        if self.valid {
            // `get_length` clears the long-form marker, so `length` is never negative.
            self.get_utf8(variable, length as usize);
        }
        self
    }

    // --- arrays (no framing; count is `values.len()`) ---

    pub fn get_array_int64(&mut self, values: &mut [i64]) -> &mut Self {
        self.get_array_int(values, sizes::INT64)
    }

    pub fn get_array_uint64(&mut self, values: &mut [u64]) -> &mut Self {
        self.get_array_int(values, sizes::INT64)
    }

    pub fn get_array_int56(&mut self, values: &mut [i64]) -> &mut Self {
        self.get_array_int(values, sizes::INT56)
    }

    pub fn get_array_uint56(&mut self, values: &mut [u64]) -> &mut Self {
        self.get_array_int(values, sizes::INT56)
    }

    pub fn get_array_int48(&mut self, values: &mut [i64]) -> &mut Self {
        self.get_array_int(values, sizes::INT48)
    }

    pub fn get_array_uint48(&mut self, values: &mut [u64]) -> &mut Self {
        self.get_array_int(values, sizes::INT48)
    }

    pub fn get_array_int40(&mut self, values: &mut [i64]) -> &mut Self {
        self.get_array_int(values, sizes::INT40)
    }

    pub fn get_array_uint40(&mut self, values: &mut [u64]) -> &mut Self {
        self.get_array_int(values, sizes::INT40)
    }

    pub fn get_array_int32(&mut self, values: &mut [i32]) -> &mut Self {
        self.get_array_int(values, sizes::INT32)
    }

    pub fn get_array_uint32(&mut self, values: &mut [u32]) -> &mut Self {
        self.get_array_int(values, sizes::INT32)
    }

    pub fn get_array_int24(&mut self, values: &mut [i32]) -> &mut Self {
        self.get_array_int(values, sizes::INT24)
    }

    pub fn get_array_uint24(&mut self, values: &mut [u32]) -> &mut Self {
        self.get_array_int(values, sizes::INT24)
    }

    pub fn get_array_int16(&mut self, values: &mut [i16]) -> &mut Self {
        self.get_array_int(values, sizes::INT16)
    }

    pub fn get_array_uint16(&mut self, values: &mut [u16]) -> &mut Self {
        self.get_array_int(values, sizes::INT16)
    }

    pub fn get_array_int8(&mut self, values: &mut [i8]) -> &mut Self {
        self.get_array_int(values, sizes::INT8)
    }

    pub fn get_array_uint8(&mut self, values: &mut [u8]) -> &mut Self {
        if let Some(field) = self.take(values.len()) {
            values.copy_from_slice(field);
        }
        self
    }

    pub fn get_array_float64(&mut self, values: &mut [f64]) -> &mut Self {
        if let Some(field) = self.take(values.len() * sizes::FLOAT64) {
            codec::get_array_float64(values, field);
        }
        self
    }

    pub fn get_array_float32(&mut self, values: &mut [f32]) -> &mut Self {
        if let Some(field) = self.take(values.len() * sizes::FLOAT32) {
            codec::get_array_float32(values, field);
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

    /// `true` when every byte has been consumed. Only meaningful on a valid
    /// stream.
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.valid, "is_empty() on an invalid stream");
        self.cursor == self.buffer.len()
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes between the cursor and the end.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Read exactly `count` raw bytes as UTF-8 into `variable`.
    pub(crate) fn get_utf8(&mut self, variable: &mut String, count: usize) -> &mut Self {
        let decoded = self
            .take(count)
            .map(|field| String::from_utf8(field.to_vec()));
        match decoded {
            Some(Ok(text)) => *variable = text,
            Some(Err(_)) => self.invalidate(),
            None => {}
        }
        self
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Consume `size` bytes, or invalidate if the stream is short.
    /// `None` whenever the stream is (or just became) invalid.
    fn take(&mut self, size: usize) -> Option<&[u8]> {
        if !self.valid {
            return None;
        }
        if self.remaining() < size {
            self.invalidate();
            return None;
        }
        let start = self.cursor;
        self.cursor += size;
        Some(&self.buffer[start..self.cursor])
    }

    fn get_int<T: WireInt>(&mut self, variable: &mut T, size: usize) -> &mut Self {
        if let Some(field) = self.take(size) {
            *variable = codec::get_int_n(field, size);
        }
        self
    }

    fn get_array_int<T: WireInt>(&mut self, values: &mut [T], size: usize) -> &mut Self {
        if let Some(field) = self.take(values.len() * size) {
            codec::get_array_int_n(values, field, size);
        }
        self
    }
}

impl fmt::Display for ByteInStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex_dump(f, &self.buffer)
    }
}

crate::stream::traits::forward_in_stream!(ByteInStream, std::convert::Infallible, Ok);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_invalidates_on_short_input() {
        let mut s = ByteInStream::from_bytes(&[1, 2]);
        assert!(s.take(3).is_none());
        assert!(!s.is_valid());
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn utf8_failure_invalidates_and_keeps_destination() {
        let mut s = ByteInStream::from_bytes(&[0xFF, 0xFE]);
        let mut text = String::from("keep");
        s.get_utf8(&mut text, 2);
        assert!(!s.is_valid());
        assert_eq!(text, "keep");
    }
}
