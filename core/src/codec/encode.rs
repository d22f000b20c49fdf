//! codec/encode.rs
//!
//! Host value -> big-endian wire bytes.
//!
//! Design notes:
//! - Every function writes into the front of a caller-sized slice; sizing is the
//!   stream layer's job. A short slice is a caller bug and panics.
//! - Truncated widths keep the least-significant `N` bytes of the two's-complement
//!   pattern, so signed and unsigned inputs encode identically.
//! - No framing: arrays are written back-to-back with no count or tag.

use byteorder::{BigEndian, ByteOrder};

use crate::codec::types::{low_bytes_mask, WireInt};
use crate::constants::sizes;

/// Write the low `size` bytes of `value` (1..=8) in big-endian order.
#[inline]
pub fn put_int_n<T: WireInt>(buffer: &mut [u8], value: T, size: usize) {
    debug_assert!((1..=8).contains(&size), "unsupported wire width {size}");
    let bits = value.to_wire_bits() & low_bytes_mask(size);
    BigEndian::write_uint(&mut buffer[..size], bits, size);
}

#[inline]
pub fn put_int64<T: WireInt>(buffer: &mut [u8], value: T) {
    put_int_n(buffer, value, sizes::INT64);
}

#[inline]
pub fn put_int56<T: WireInt>(buffer: &mut [u8], value: T) {
    put_int_n(buffer, value, sizes::INT56);
}

#[inline]
pub fn put_int48<T: WireInt>(buffer: &mut [u8], value: T) {
    put_int_n(buffer, value, sizes::INT48);
}

#[inline]
pub fn put_int40<T: WireInt>(buffer: &mut [u8], value: T) {
    put_int_n(buffer, value, sizes::INT40);
}

#[inline]
pub fn put_int32<T: WireInt>(buffer: &mut [u8], value: T) {
    put_int_n(buffer, value, sizes::INT32);
}

#[inline]
pub fn put_int24<T: WireInt>(buffer: &mut [u8], value: T) {
    put_int_n(buffer, value, sizes::INT24);
}

#[inline]
pub fn put_int16<T: WireInt>(buffer: &mut [u8], value: T) {
    put_int_n(buffer, value, sizes::INT16);
}

#[inline]
pub fn put_int8<T: WireInt>(buffer: &mut [u8], value: T) {
    put_int_n(buffer, value, sizes::INT8);
}

/// IEEE 754 double, most-significant byte first.
///
/// Rust's `f64` is IEEE 754 on every supported target, so this never loses
/// precision.
#[inline]
pub fn put_float64(buffer: &mut [u8], value: f64) {
    BigEndian::write_f64(&mut buffer[..sizes::FLOAT64], value);
}

/// IEEE 754 single, most-significant byte first.
#[inline]
pub fn put_float32(buffer: &mut [u8], value: f32) {
    BigEndian::write_f32(&mut buffer[..sizes::FLOAT32], value);
}

/// Write each element of `values` as a `size`-byte field, back-to-back.
pub fn put_array_int_n<T: WireInt>(buffer: &mut [u8], values: &[T], size: usize) {
    debug_assert!(buffer.len() >= values.len() * size);
    for (field, value) in buffer.chunks_exact_mut(size).zip(values) {
        put_int_n(field, *value, size);
    }
}

pub fn put_array_float64(buffer: &mut [u8], values: &[f64]) {
    debug_assert!(buffer.len() >= values.len() * sizes::FLOAT64);
    for (field, value) in buffer.chunks_exact_mut(sizes::FLOAT64).zip(values) {
        put_float64(field, *value);
    }
}

pub fn put_array_float32(buffer: &mut [u8], values: &[f32]) {
    debug_assert!(buffer.len() >= values.len() * sizes::FLOAT32);
    for (field, value) in buffer.chunks_exact_mut(sizes::FLOAT32).zip(values) {
        put_float32(field, *value);
    }
}
