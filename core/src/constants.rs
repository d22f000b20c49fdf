//! constants.rs
//! Wire sizes and stream defaults shared by every layer.

/// Field codes start here so tag bytes never collide with 7-bit ASCII data.
pub const FIELD_CODE_BASE: u8 = 0xE0;

/// Encoded sizes (in bytes) of each wire kind.
pub mod sizes {
    pub const INT64: usize = 8;
    pub const INT56: usize = 7;
    pub const INT48: usize = 6;
    pub const INT40: usize = 5;
    pub const INT32: usize = 4;
    pub const INT24: usize = 3;
    pub const INT16: usize = 2;
    pub const INT8: usize = 1;
    pub const FLOAT64: usize = 8;
    pub const FLOAT32: usize = 4;

    /// Tag byte preceding every field on the tagged layer.
    pub const FIELD_CODE: usize = 1;
    /// Element count preceding every array on the tagged layer.
    pub const ARRAY_LENGTH: usize = 4;
}

/// Largest length that fits the one-byte compact encoding.
pub const MAX_ONE_BYTE_LENGTH: i32 = 127;

/// Set on the four-byte compact length to mark the long form.
pub const LENGTH_HIGH_BIT: u32 = 0x8000_0000;

/// Initial buffer capacity for output streams created with `new()`.
pub const DEFAULT_CAPACITY: usize = 0;

/// Input limit value meaning "fault injection disabled".
pub const INPUT_LIMIT_DISABLED: i32 = -1;

/// Bytes per line in hex dumps produced by stream `Display` impls.
pub const HEX_DUMP_WIDTH: usize = 8;
