//! stream/traits.rs
//!
//! Stream interfaces consumed by higher-level externalization code.
//!
//! Both the plain (`ByteOutStream`/`ByteInStream`) and the tagged
//! (`TestOutStream`/`TestInStream`) streams implement these, so a value type can
//! write one `stream_out`/`stream_in` pair generic over the stream kind and be
//! exercised against the tagged streams in tests.
//!
//! The input side reports injected faults through `InStream::Error`. Plain
//! streams never fault (`Infallible`).

/// Sequential writer of externalized values.
pub trait OutStream {
    fn put_length(&mut self, length: i32) -> &mut Self;
    fn put_version(&mut self, version: i32) -> &mut Self;

    fn put_int64(&mut self, value: i64) -> &mut Self;
    fn put_uint64(&mut self, value: u64) -> &mut Self;
    fn put_int56(&mut self, value: i64) -> &mut Self;
    fn put_uint56(&mut self, value: u64) -> &mut Self;
    fn put_int48(&mut self, value: i64) -> &mut Self;
    fn put_uint48(&mut self, value: u64) -> &mut Self;
    fn put_int40(&mut self, value: i64) -> &mut Self;
    fn put_uint40(&mut self, value: u64) -> &mut Self;
    fn put_int32(&mut self, value: i32) -> &mut Self;
    fn put_uint32(&mut self, value: u32) -> &mut Self;
    fn put_int24(&mut self, value: i32) -> &mut Self;
    fn put_uint24(&mut self, value: u32) -> &mut Self;
    fn put_int16(&mut self, value: i16) -> &mut Self;
    fn put_uint16(&mut self, value: u16) -> &mut Self;
    fn put_int8(&mut self, value: i8) -> &mut Self;
    fn put_uint8(&mut self, value: u8) -> &mut Self;
    fn put_float64(&mut self, value: f64) -> &mut Self;
    fn put_float32(&mut self, value: f32) -> &mut Self;
    fn put_string(&mut self, value: &str) -> &mut Self;

    fn put_array_int64(&mut self, values: &[i64]) -> &mut Self;
    fn put_array_uint64(&mut self, values: &[u64]) -> &mut Self;
    fn put_array_int56(&mut self, values: &[i64]) -> &mut Self;
    fn put_array_uint56(&mut self, values: &[u64]) -> &mut Self;
    fn put_array_int48(&mut self, values: &[i64]) -> &mut Self;
    fn put_array_uint48(&mut self, values: &[u64]) -> &mut Self;
    fn put_array_int40(&mut self, values: &[i64]) -> &mut Self;
    fn put_array_uint40(&mut self, values: &[u64]) -> &mut Self;
    fn put_array_int32(&mut self, values: &[i32]) -> &mut Self;
    fn put_array_uint32(&mut self, values: &[u32]) -> &mut Self;
    fn put_array_int24(&mut self, values: &[i32]) -> &mut Self;
    fn put_array_uint24(&mut self, values: &[u32]) -> &mut Self;
    fn put_array_int16(&mut self, values: &[i16]) -> &mut Self;
    fn put_array_uint16(&mut self, values: &[u16]) -> &mut Self;
    fn put_array_int8(&mut self, values: &[i8]) -> &mut Self;
    fn put_array_uint8(&mut self, values: &[u8]) -> &mut Self;
    fn put_array_float64(&mut self, values: &[f64]) -> &mut Self;
    fn put_array_float32(&mut self, values: &[f32]) -> &mut Self;

    fn invalidate(&mut self);
    fn is_valid(&self) -> bool;
    fn data(&self) -> &[u8];
    fn length(&self) -> usize;
}

/// Sequential reader of externalized values.
///
/// Data-shape problems never surface as `Err`; they leave the stream invalid.
pub trait InStream {
    type Error: std::error::Error;

    fn get_length(&mut self, variable: &mut i32) -> Result<&mut Self, Self::Error>;
    fn get_version(&mut self, variable: &mut i32) -> Result<&mut Self, Self::Error>;

    fn get_int64(&mut self, variable: &mut i64) -> Result<&mut Self, Self::Error>;
    fn get_uint64(&mut self, variable: &mut u64) -> Result<&mut Self, Self::Error>;
    fn get_int56(&mut self, variable: &mut i64) -> Result<&mut Self, Self::Error>;
    fn get_uint56(&mut self, variable: &mut u64) -> Result<&mut Self, Self::Error>;
    fn get_int48(&mut self, variable: &mut i64) -> Result<&mut Self, Self::Error>;
    fn get_uint48(&mut self, variable: &mut u64) -> Result<&mut Self, Self::Error>;
    fn get_int40(&mut self, variable: &mut i64) -> Result<&mut Self, Self::Error>;
    fn get_uint40(&mut self, variable: &mut u64) -> Result<&mut Self, Self::Error>;
    fn get_int32(&mut self, variable: &mut i32) -> Result<&mut Self, Self::Error>;
    fn get_uint32(&mut self, variable: &mut u32) -> Result<&mut Self, Self::Error>;
    fn get_int24(&mut self, variable: &mut i32) -> Result<&mut Self, Self::Error>;
    fn get_uint24(&mut self, variable: &mut u32) -> Result<&mut Self, Self::Error>;
    fn get_int16(&mut self, variable: &mut i16) -> Result<&mut Self, Self::Error>;
    fn get_uint16(&mut self, variable: &mut u16) -> Result<&mut Self, Self::Error>;
    fn get_int8(&mut self, variable: &mut i8) -> Result<&mut Self, Self::Error>;
    fn get_uint8(&mut self, variable: &mut u8) -> Result<&mut Self, Self::Error>;
    fn get_float64(&mut self, variable: &mut f64) -> Result<&mut Self, Self::Error>;
    fn get_float32(&mut self, variable: &mut f32) -> Result<&mut Self, Self::Error>;
    fn get_string(&mut self, variable: &mut String) -> Result<&mut Self, Self::Error>;

    fn get_array_int64(&mut self, values: &mut [i64]) -> Result<&mut Self, Self::Error>;
    fn get_array_uint64(&mut self, values: &mut [u64]) -> Result<&mut Self, Self::Error>;
    fn get_array_int56(&mut self, values: &mut [i64]) -> Result<&mut Self, Self::Error>;
    fn get_array_uint56(&mut self, values: &mut [u64]) -> Result<&mut Self, Self::Error>;
    fn get_array_int48(&mut self, values: &mut [i64]) -> Result<&mut Self, Self::Error>;
    fn get_array_uint48(&mut self, values: &mut [u64]) -> Result<&mut Self, Self::Error>;
    fn get_array_int40(&mut self, values: &mut [i64]) -> Result<&mut Self, Self::Error>;
    fn get_array_uint40(&mut self, values: &mut [u64]) -> Result<&mut Self, Self::Error>;
    fn get_array_int32(&mut self, values: &mut [i32]) -> Result<&mut Self, Self::Error>;
    fn get_array_uint32(&mut self, values: &mut [u32]) -> Result<&mut Self, Self::Error>;
    fn get_array_int24(&mut self, values: &mut [i32]) -> Result<&mut Self, Self::Error>;
    fn get_array_uint24(&mut self, values: &mut [u32]) -> Result<&mut Self, Self::Error>;
    fn get_array_int16(&mut self, values: &mut [i16]) -> Result<&mut Self, Self::Error>;
    fn get_array_uint16(&mut self, values: &mut [u16]) -> Result<&mut Self, Self::Error>;
    fn get_array_int8(&mut self, values: &mut [i8]) -> Result<&mut Self, Self::Error>;
    fn get_array_uint8(&mut self, values: &mut [u8]) -> Result<&mut Self, Self::Error>;
    fn get_array_float64(&mut self, values: &mut [f64]) -> Result<&mut Self, Self::Error>;
    fn get_array_float32(&mut self, values: &mut [f32]) -> Result<&mut Self, Self::Error>;

    fn invalidate(&mut self);
    fn is_valid(&self) -> bool;
    fn cursor(&self) -> usize;
    fn length(&self) -> usize;
}

/// Implement `OutStream` for `$ty` by forwarding to its inherent methods.
macro_rules! forward_out_stream {
    (@impl $ty:ty; $($name:ident: $arg:ty),* $(,)?) => {
        impl $crate::stream::traits::OutStream for $ty {
            $(
                #[inline]
                fn $name(&mut self, value: $arg) -> &mut Self {
                    <$ty>::$name(self, value)
                }
            )*

            fn invalidate(&mut self) {
                <$ty>::invalidate(self)
            }

            fn is_valid(&self) -> bool {
                <$ty>::is_valid(self)
            }

            fn data(&self) -> &[u8] {
                <$ty>::data(self)
            }

            fn length(&self) -> usize {
                <$ty>::length(self)
            }
        }
    };
    ($ty:ty) => {
        $crate::stream::traits::forward_out_stream!(@impl $ty;
            put_length: i32, put_version: i32,
            put_int64: i64, put_uint64: u64, put_int56: i64, put_uint56: u64,
            put_int48: i64, put_uint48: u64, put_int40: i64, put_uint40: u64,
            put_int32: i32, put_uint32: u32, put_int24: i32, put_uint24: u32,
            put_int16: i16, put_uint16: u16, put_int8: i8, put_uint8: u8,
            put_float64: f64, put_float32: f32, put_string: &str,
            put_array_int64: &[i64], put_array_uint64: &[u64],
            put_array_int56: &[i64], put_array_uint56: &[u64],
            put_array_int48: &[i64], put_array_uint48: &[u64],
            put_array_int40: &[i64], put_array_uint40: &[u64],
            put_array_int32: &[i32], put_array_uint32: &[u32],
            put_array_int24: &[i32], put_array_uint24: &[u32],
            put_array_int16: &[i16], put_array_uint16: &[u16],
            put_array_int8: &[i8], put_array_uint8: &[u8],
            put_array_float64: &[f64], put_array_float32: &[f32],
        );
    };
}

/// Implement `InStream` for `$ty` by forwarding to its inherent methods.
/// `$lift` turns each inherent return value into `Result<&mut Self, $err>`.
macro_rules! forward_in_stream {
    (@impl $ty:ty, $err:ty, $lift:path; $($name:ident: $arg:ty),* $(,)?) => {
        impl $crate::stream::traits::InStream for $ty {
            type Error = $err;

            $(
                #[inline]
                fn $name(&mut self, variable: $arg) -> Result<&mut Self, Self::Error> {
                    $lift(<$ty>::$name(self, variable))
                }
            )*

            fn invalidate(&mut self) {
                <$ty>::invalidate(self)
            }

            fn is_valid(&self) -> bool {
                <$ty>::is_valid(self)
            }

            fn cursor(&self) -> usize {
                <$ty>::cursor(self)
            }

            fn length(&self) -> usize {
                <$ty>::length(self)
            }
        }
    };
    ($ty:ty, $err:ty, $lift:path) => {
        $crate::stream::traits::forward_in_stream!(@impl $ty, $err, $lift;
            get_length: &mut i32, get_version: &mut i32,
            get_int64: &mut i64, get_uint64: &mut u64, get_int56: &mut i64, get_uint56: &mut u64,
            get_int48: &mut i64, get_uint48: &mut u64, get_int40: &mut i64, get_uint40: &mut u64,
            get_int32: &mut i32, get_uint32: &mut u32, get_int24: &mut i32, get_uint24: &mut u32,
            get_int16: &mut i16, get_uint16: &mut u16, get_int8: &mut i8, get_uint8: &mut u8,
            get_float64: &mut f64, get_float32: &mut f32, get_string: &mut String,
            get_array_int64: &mut [i64], get_array_uint64: &mut [u64],
            get_array_int56: &mut [i64], get_array_uint56: &mut [u64],
            get_array_int48: &mut [i64], get_array_uint48: &mut [u64],
            get_array_int40: &mut [i64], get_array_uint40: &mut [u64],
            get_array_int32: &mut [i32], get_array_uint32: &mut [u32],
            get_array_int24: &mut [i32], get_array_uint24: &mut [u32],
            get_array_int16: &mut [i16], get_array_uint16: &mut [u16],
            get_array_int8: &mut [i8], get_array_uint8: &mut [u8],
            get_array_float64: &mut [f64], get_array_float32: &mut [f32],
        );
    };
}

pub(crate) use forward_in_stream;
pub(crate) use forward_out_stream;
