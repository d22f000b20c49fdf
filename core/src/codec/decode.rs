//! codec/decode.rs
//!
//! Big-endian wire bytes -> host value.
//!
//! Design notes:
//! - Mirrors `encode.rs` field for field.
//! - A truncated read into a wider destination is sign-extended for signed
//!   destinations and zero-extended for unsigned ones, using the top bit of the
//!   first byte read.
//! - Callers guarantee `buffer` holds enough bytes.

use byteorder::{BigEndian, ByteOrder};

use crate::codec::types::WireInt;
use crate::constants::sizes;

/// Read a `size`-byte (1..=8) big-endian field into `T`.
#[inline]
pub fn get_int_n<T: WireInt>(buffer: &[u8], size: usize) -> T {
    debug_assert!((1..=8).contains(&size), "unsupported wire width {size}");
    debug_assert!(size <= T::WIDTH, "destination narrower than wire field");

    let field = &buffer[..size];
    let bits = if T::SIGNED {
        BigEndian::read_int(field, size) as u64
    } else {
        BigEndian::read_uint(field, size)
    };
    T::from_wire_bits(bits)
}

#[inline]
pub fn get_int64<T: WireInt>(buffer: &[u8]) -> T {
    get_int_n(buffer, sizes::INT64)
}

#[inline]
pub fn get_int56<T: WireInt>(buffer: &[u8]) -> T {
    get_int_n(buffer, sizes::INT56)
}

#[inline]
pub fn get_int48<T: WireInt>(buffer: &[u8]) -> T {
    get_int_n(buffer, sizes::INT48)
}

#[inline]
pub fn get_int40<T: WireInt>(buffer: &[u8]) -> T {
    get_int_n(buffer, sizes::INT40)
}

#[inline]
pub fn get_int32<T: WireInt>(buffer: &[u8]) -> T {
    get_int_n(buffer, sizes::INT32)
}

#[inline]
pub fn get_int24<T: WireInt>(buffer: &[u8]) -> T {
    get_int_n(buffer, sizes::INT24)
}

#[inline]
pub fn get_int16<T: WireInt>(buffer: &[u8]) -> T {
    get_int_n(buffer, sizes::INT16)
}

#[inline]
pub fn get_int8<T: WireInt>(buffer: &[u8]) -> T {
    get_int_n(buffer, sizes::INT8)
}

#[inline]
pub fn get_float64(buffer: &[u8]) -> f64 {
    BigEndian::read_f64(&buffer[..sizes::FLOAT64])
}

#[inline]
pub fn get_float32(buffer: &[u8]) -> f32 {
    BigEndian::read_f32(&buffer[..sizes::FLOAT32])
}

/// Fill `values` from back-to-back `size`-byte fields.
pub fn get_array_int_n<T: WireInt>(values: &mut [T], buffer: &[u8], size: usize) {
    debug_assert!(buffer.len() >= values.len() * size);
    for (value, field) in values.iter_mut().zip(buffer.chunks_exact(size)) {
        *value = get_int_n(field, size);
    }
}

pub fn get_array_float64(values: &mut [f64], buffer: &[u8]) {
    debug_assert!(buffer.len() >= values.len() * sizes::FLOAT64);
    for (value, field) in values.iter_mut().zip(buffer.chunks_exact(sizes::FLOAT64)) {
        *value = get_float64(field);
    }
}

pub fn get_array_float32(values: &mut [f32], buffer: &[u8]) {
    debug_assert!(buffer.len() >= values.len() * sizes::FLOAT32);
    for (value, field) in values.iter_mut().zip(buffer.chunks_exact(sizes::FLOAT32)) {
        *value = get_float32(field);
    }
}
