// These guarantee no silent drift in the field code registry.

#[cfg(test)]
mod tests {
    use num_enum::TryFromPrimitive;
    use bdex_core::constants::{sizes, FIELD_CODE_BASE};
    use bdex_core::field_code::{field_code_name, FieldCode, UNKNOWN_NAME};

    #[test]
    fn codes_are_consecutive_from_base() {
        for (offset, code) in FieldCode::ALL.iter().enumerate() {
            assert_eq!(code.to_u8(), FIELD_CODE_BASE + offset as u8, "{code}");
        }
    }

    #[test]
    fn codes_never_collide_with_ascii() {
        for code in FieldCode::ALL {
            assert!(code.to_u8() > 0x7F, "{code} is in the ASCII range");
        }
    }

    #[test]
    fn names_are_fixed() {
        assert_eq!(FieldCode::Int8.to_ascii(), "INT8");
        assert_eq!(FieldCode::Uint24.to_ascii(), "UINT24");
        assert_eq!(FieldCode::Int56.to_ascii(), "INT56");
        assert_eq!(FieldCode::Float32.to_ascii(), "FLOAT32");
        assert_eq!(FieldCode::Float64.to_ascii(), "FLOAT64");
        assert_eq!(FieldCode::Invalid.to_ascii(), "INVALID");
        assert_eq!(FieldCode::Uint64.to_string(), "UINT64");
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = FieldCode::ALL.iter().map(|c| c.to_ascii()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FieldCode::ALL.len());
    }

    #[test]
    fn raw_lookup_matches_enum() {
        for code in FieldCode::ALL {
            assert_eq!(FieldCode::try_from_primitive(code.to_u8()).unwrap(), code);
            assert_eq!(field_code_name(code.to_u8()), code.to_ascii());
        }
    }

    #[test]
    fn unknown_raw_values_have_default_name() {
        for raw in [0x00, 0x41, 0x7F, FIELD_CODE_BASE - 1, 0xF3, 0xFF] {
            assert!(FieldCode::try_from_primitive(raw).is_err());
            assert_eq!(field_code_name(raw), UNKNOWN_NAME);
        }
        assert_eq!(UNKNOWN_NAME, "(* UNKNOWN *)");
    }

    #[test]
    fn payload_sizes_follow_width() {
        assert_eq!(FieldCode::Int8.payload_size(), Some(sizes::INT8));
        assert_eq!(FieldCode::Uint24.payload_size(), Some(3));
        assert_eq!(FieldCode::Int40.payload_size(), Some(5));
        assert_eq!(FieldCode::Uint56.payload_size(), Some(7));
        assert_eq!(FieldCode::Float32.payload_size(), Some(4));
        assert_eq!(FieldCode::Float64.payload_size(), Some(8));
        assert_eq!(FieldCode::Invalid.payload_size(), None);
    }
}
