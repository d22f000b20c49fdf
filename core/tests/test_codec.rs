// Primitive codec: exact byte layout, sign/zero extension, floats, unframed arrays.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use bdex_core::codec;

// # ✅ 1. Big-endian layout

    #[test]
    fn int32_is_most_significant_byte_first() {
        let mut buf = [0u8; 4];
        codec::put_int32(&mut buf, 0x0A0B_0C0Di32);
        assert_eq!(buf, [0x0A, 0x0B, 0x0C, 0x0D]);

        let v: i32 = codec::get_int32(&buf);
        assert_eq!(v, 0x0A0B_0C0D);
    }

    #[test]
    fn int64_layout() {
        let mut buf = [0u8; 8];
        codec::put_int64(&mut buf, 0x0102_0304_0506_0708i64);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn truncation_keeps_low_bytes() {
        let mut buf = [0u8; 3];
        codec::put_int24(&mut buf, 0x1234_5678i32);
        assert_eq!(buf, [0x34, 0x56, 0x78]);

        let mut buf = [0u8; 5];
        codec::put_int40(&mut buf, 0x0099_1122_3344_5566u64);
        assert_eq!(buf, [0x22, 0x33, 0x44, 0x55, 0x66]);
    }

    #[test]
    fn writes_only_the_field_prefix() {
        let mut buf = [0xAAu8; 6];
        codec::put_int16(&mut buf, 0x0102i16);
        assert_eq!(buf, [0x01, 0x02, 0xAA, 0xAA, 0xAA, 0xAA]);
    }

    #[test]
    fn signed_and_unsigned_encode_identically() {
        let mut a = [0u8; 2];
        let mut b = [0u8; 2];
        codec::put_int16(&mut a, -2i16);
        codec::put_int16(&mut b, 0xFFFEu16);
        assert_eq!(a, b);
    }

// # ✅ 2. Sign / zero extension

    #[test]
    fn int24_minus_one_sign_extends() {
        let mut buf = [0u8; 3];
        codec::put_int24(&mut buf, -1i32);
        assert_eq!(buf, [0xFF, 0xFF, 0xFF]);

        let signed: i32 = codec::get_int24(&buf);
        assert_eq!(signed, -1);

        let wide: i64 = codec::get_int24(&buf);
        assert_eq!(wide, -1);

        let unsigned: u32 = codec::get_int24(&buf);
        assert_eq!(unsigned, 0x00FF_FFFF);
    }

    #[test]
    fn positive_top_byte_does_not_extend() {
        let buf = [0x7F, 0xFF, 0xFF, 0xFF, 0xFF];
        let v: i64 = codec::get_int40(&buf);
        assert_eq!(v, 0x7F_FFFF_FFFF);
    }

    #[test]
    fn every_width_extends_from_its_own_top_bit() {
        for size in 1..=8usize {
            let mut buf = [0u8; 8];
            codec::put_int_n(&mut buf, -2i64, size);

            let signed: i64 = codec::get_int_n(&buf, size);
            assert_eq!(signed, -2, "width {size}");

            let unsigned: u64 = codec::get_int_n(&buf, size);
            let expected = if size == 8 { u64::MAX - 1 } else { (1u64 << (8 * size)) - 2 };
            assert_eq!(unsigned, expected, "width {size}");
        }
    }

    #[test]
    fn int8_boundaries() {
        let buf = [0x80];
        let v: i8 = codec::get_int8(&buf);
        assert_eq!(v, i8::MIN);
        let u: u8 = codec::get_int8(&buf);
        assert_eq!(u, 0x80);
    }

// # ✅ 3. IEEE 754 floats

    #[test]
    fn float64_is_ieee_big_endian() {
        let mut buf = [0u8; 8];
        codec::put_float64(&mut buf, 1.0);
        assert_eq!(buf, [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(codec::get_float64(&buf), 1.0);
    }

    #[test]
    fn float32_is_ieee_big_endian() {
        let mut buf = [0u8; 4];
        codec::put_float32(&mut buf, -2.0);
        assert_eq!(buf, [0xC0, 0x00, 0x00, 0x00]);
        assert_eq!(codec::get_float32(&buf), -2.0);
    }

    #[test]
    fn float_special_values_survive() {
        let mut buf = [0u8; 8];
        for v in [f64::INFINITY, f64::NEG_INFINITY, f64::MIN_POSITIVE, -0.0] {
            codec::put_float64(&mut buf, v);
            assert_eq!(codec::get_float64(&buf).to_bits(), v.to_bits());
        }

        codec::put_float64(&mut buf, f64::NAN);
        assert!(codec::get_float64(&buf).is_nan());
    }

// # ✅ 4. Unframed arrays

    #[test]
    fn array_int24_is_back_to_back() {
        let values = [1i32, -1, 0x0012_3456];
        let mut buf = [0u8; 9];
        codec::put_array_int_n(&mut buf, &values, 3);
        assert_eq!(buf, [0, 0, 1, 0xFF, 0xFF, 0xFF, 0x12, 0x34, 0x56]);

        let mut out = [0i32; 3];
        codec::get_array_int_n(&mut out, &buf, 3);
        assert_eq!(out, values);
    }

    #[test]
    fn array_floats_roundtrip() {
        let values = [0.5f32, -1.25, 3.0e10];
        let mut buf = [0u8; 12];
        codec::put_array_float32(&mut buf, &values);

        let mut out = [0f32; 3];
        codec::get_array_float32(&mut out, &buf);
        assert_eq!(out, values);

        let values = [1.5f64, -0.0];
        let mut buf = [0u8; 16];
        codec::put_array_float64(&mut buf, &values);
        let mut out = [9f64; 2];
        codec::get_array_float64(&mut out, &buf);
        assert_eq!(out[0], 1.5);
        assert_eq!(out[1].to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn empty_array_touches_nothing() {
        let mut buf: [u8; 0] = [];
        codec::put_array_int_n::<i64>(&mut buf, &[], 8);
        let mut out: [i64; 0] = [];
        codec::get_array_int_n(&mut out, &buf, 8);
    }

// # ✅ 5. Property-based round-trips

    proptest! {
        #[test]
        fn prop_int24_roundtrip(v in -(1i32 << 23)..(1i32 << 23)) {
            let mut buf = [0u8; 3];
            codec::put_int24(&mut buf, v);
            let back: i32 = codec::get_int24(&buf);
            prop_assert_eq!(back, v);
        }

        #[test]
        fn prop_uint24_roundtrip(v in 0u32..(1u32 << 24)) {
            let mut buf = [0u8; 3];
            codec::put_int24(&mut buf, v);
            let back: u32 = codec::get_int24(&buf);
            prop_assert_eq!(back, v);
        }

        #[test]
        fn prop_int56_roundtrip(v in -(1i64 << 55)..(1i64 << 55)) {
            let mut buf = [0u8; 7];
            codec::put_int56(&mut buf, v);
            let back: i64 = codec::get_int56(&buf);
            prop_assert_eq!(back, v);
        }

        #[test]
        fn prop_truncated_width_keeps_low_bits(v in any::<u64>(), size in 1usize..=8) {
            let mut buf = [0u8; 8];
            codec::put_int_n(&mut buf, v, size);
            let back: u64 = codec::get_int_n(&buf, size);
            let mask = if size == 8 { u64::MAX } else { (1u64 << (8 * size)) - 1 };
            prop_assert_eq!(back, v & mask);
        }

        #[test]
        fn prop_float64_bits_roundtrip(bits in any::<u64>()) {
            let v = f64::from_bits(bits);
            prop_assume!(!v.is_nan());
            let mut buf = [0u8; 8];
            codec::put_float64(&mut buf, v);
            prop_assert_eq!(buf, bits.to_be_bytes());
        }
    }
}
