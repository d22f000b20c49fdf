//! codec/types.rs
//! Host integer types the codec can move to and from the wire.
//!
//! The codec only moves bit patterns. Signedness of the *destination* type
//! decides whether a truncated read is sign- or zero-extended.

mod sealed {
    pub trait Sealed {}
}

/// A host integer that can be written as, or read from, a truncated
/// big-endian field of 1..=8 bytes.
pub trait WireInt: Copy + sealed::Sealed {
    /// `true` when a truncated read into this type must be sign-extended.
    const SIGNED: bool;
    /// Native width in bytes.
    const WIDTH: usize;

    /// Two's-complement bit pattern, widened to 64 bits.
    fn to_wire_bits(self) -> u64;

    /// Keep the low `WIDTH` bytes of `bits`.
    fn from_wire_bits(bits: u64) -> Self;
}

macro_rules! impl_wire_int {
    ($($ty:ty => $signed:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl WireInt for $ty {
                const SIGNED: bool = $signed;
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline(always)]
                fn to_wire_bits(self) -> u64 {
                    self as u64
                }

                #[inline(always)]
                fn from_wire_bits(bits: u64) -> Self {
                    bits as $ty
                }
            }
        )*
    };
}

impl_wire_int! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
}

/// Mask selecting the low `size` bytes of a 64-bit pattern.
#[inline(always)]
pub(crate) const fn low_bytes_mask(size: usize) -> u64 {
    u64::MAX >> (64 - 8 * size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_match_native_sizes() {
        assert_eq!(i8::WIDTH, 1);
        assert_eq!(u16::WIDTH, 2);
        assert_eq!(i32::WIDTH, 4);
        assert_eq!(u64::WIDTH, 8);
    }

    #[test]
    fn signed_bits_are_sign_widened() {
        assert_eq!((-1i8).to_wire_bits(), u64::MAX);
        assert_eq!(0xFFu8.to_wire_bits(), 0xFF);
        assert_eq!(i16::from_wire_bits(0x1_FFFF), -1);
    }

    #[test]
    fn masks_cover_each_width() {
        assert_eq!(low_bytes_mask(1), 0xFF);
        assert_eq!(low_bytes_mask(3), 0xFF_FFFF);
        assert_eq!(low_bytes_mask(8), u64::MAX);
    }
}
