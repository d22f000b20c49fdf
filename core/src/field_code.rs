//! field_code.rs
//! One-byte wire type tags used by the tagged (test) stream layer.
//!
//! Codes are offset from `constants::FIELD_CODE_BASE` (0xE0) so a tag byte can never be
//! mistaken for 7-bit ASCII data elsewhere in a composite stream.

use std::fmt;
use num_enum::TryFromPrimitive;

use crate::constants::sizes;

/// Name reported for raw values outside the defined range.
pub const UNKNOWN_NAME: &str = "(* UNKNOWN *)";

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum FieldCode {
    Int8    = 0xE0,
    Uint8   = 0xE1,
    Int16   = 0xE2,
    Uint16  = 0xE3,
    Int24   = 0xE4,
    Uint24  = 0xE5,
    Int32   = 0xE6,
    Uint32  = 0xE7,
    Int40   = 0xE8,
    Uint40  = 0xE9,
    Int48   = 0xEA,
    Uint48  = 0xEB,
    Int56   = 0xEC,
    Uint56  = 0xED,
    Int64   = 0xEE,
    Uint64  = 0xEF,
    Float32 = 0xF0,
    Float64 = 0xF1,
    Invalid = 0xF2,
}

impl FieldCode {
    pub const ALL: [FieldCode; 19] = [
        FieldCode::Int8,
        FieldCode::Uint8,
        FieldCode::Int16,
        FieldCode::Uint16,
        FieldCode::Int24,
        FieldCode::Uint24,
        FieldCode::Int32,
        FieldCode::Uint32,
        FieldCode::Int40,
        FieldCode::Uint40,
        FieldCode::Int48,
        FieldCode::Uint48,
        FieldCode::Int56,
        FieldCode::Uint56,
        FieldCode::Int64,
        FieldCode::Uint64,
        FieldCode::Float32,
        FieldCode::Float64,
        FieldCode::Invalid,
    ];

    /// Canonical wire encoding (1 byte).
    #[inline(always)]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Fixed upper-case name of this code.
    pub const fn to_ascii(self) -> &'static str {
        match self {
            FieldCode::Int8    => "INT8",
            FieldCode::Uint8   => "UINT8",
            FieldCode::Int16   => "INT16",
            FieldCode::Uint16  => "UINT16",
            FieldCode::Int24   => "INT24",
            FieldCode::Uint24  => "UINT24",
            FieldCode::Int32   => "INT32",
            FieldCode::Uint32  => "UINT32",
            FieldCode::Int40   => "INT40",
            FieldCode::Uint40  => "UINT40",
            FieldCode::Int48   => "INT48",
            FieldCode::Uint48  => "UINT48",
            FieldCode::Int56   => "INT56",
            FieldCode::Uint56  => "UINT56",
            FieldCode::Int64   => "INT64",
            FieldCode::Uint64  => "UINT64",
            FieldCode::Float32 => "FLOAT32",
            FieldCode::Float64 => "FLOAT64",
            FieldCode::Invalid => "INVALID",
        }
    }

    /// Payload bytes following the tag for a scalar of this kind.
    /// `None` for `Invalid`, which carries no payload of its own.
    pub const fn payload_size(self) -> Option<usize> {
        match self {
            FieldCode::Int8 | FieldCode::Uint8     => Some(sizes::INT8),
            FieldCode::Int16 | FieldCode::Uint16   => Some(sizes::INT16),
            FieldCode::Int24 | FieldCode::Uint24   => Some(sizes::INT24),
            FieldCode::Int32 | FieldCode::Uint32   => Some(sizes::INT32),
            FieldCode::Int40 | FieldCode::Uint40   => Some(sizes::INT40),
            FieldCode::Int48 | FieldCode::Uint48   => Some(sizes::INT48),
            FieldCode::Int56 | FieldCode::Uint56   => Some(sizes::INT56),
            FieldCode::Int64 | FieldCode::Uint64   => Some(sizes::INT64),
            FieldCode::Float32                     => Some(sizes::FLOAT32),
            FieldCode::Float64                     => Some(sizes::FLOAT64),
            FieldCode::Invalid                     => None,
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_ascii())
    }
}

/// Name of a raw tag byte, or `"(* UNKNOWN *)"` when it is not a field code.
pub fn field_code_name(raw: u8) -> &'static str {
    match FieldCode::try_from_primitive(raw) {
        Ok(code) => code.to_ascii(),
        Err(_) => UNKNOWN_NAME,
    }
}
