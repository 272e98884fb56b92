//! [`MsgPackWrite`]/[`MsgPackRead`] implementations for the primitive and
//! sequence types spec.md §4.6 requires every codec to support.

use crate::error::CodecError;
use crate::{MsgPackRead, MsgPackWrite, Reader, Writer};

impl MsgPackWrite for () {
    fn write(&self, writer: &mut Writer) -> Result<(), CodecError> {
        writer.write_nil();
        Ok(())
    }
}

impl MsgPackRead for () {
    fn read(reader: &mut Reader) -> Result<Self, CodecError> {
        reader.read_nil()
    }
}

impl MsgPackWrite for bool {
    fn write(&self, writer: &mut Writer) -> Result<(), CodecError> {
        writer.write_bool(*self);
        Ok(())
    }
}

impl MsgPackRead for bool {
    fn read(reader: &mut Reader) -> Result<Self, CodecError> {
        reader.read_bool()
    }
}

macro_rules! impl_uint {
    ($ty:ty, $write:ident, $read:ident) => {
        impl MsgPackWrite for $ty {
            fn write(&self, writer: &mut Writer) -> Result<(), CodecError> {
                writer.$write(*self);
                Ok(())
            }
        }
        impl MsgPackRead for $ty {
            fn read(reader: &mut Reader) -> Result<Self, CodecError> {
                reader.$read()
            }
        }
    };
}

impl_uint!(u8, write_u8, read_u8);
impl_uint!(u16, write_u16, read_u16);
impl_uint!(u32, write_u32, read_u32);
impl_uint!(u64, write_u64, read_u64);
impl_uint!(i8, write_i8, read_i8);
impl_uint!(i16, write_i16, read_i16);
impl_uint!(i32, write_i32, read_i32);
impl_uint!(i64, write_i64, read_i64);
impl_uint!(f32, write_f32, read_f32);
impl_uint!(f64, write_f64, read_f64);

impl MsgPackWrite for str {
    fn write(&self, writer: &mut Writer) -> Result<(), CodecError> {
        writer.write_str(self);
        Ok(())
    }
}

impl MsgPackWrite for String {
    fn write(&self, writer: &mut Writer) -> Result<(), CodecError> {
        writer.write_str(self);
        Ok(())
    }
}

impl MsgPackRead for String {
    fn read(reader: &mut Reader) -> Result<Self, CodecError> {
        reader.read_str()
    }
}

impl MsgPackWrite for [u8] {
    fn write(&self, writer: &mut Writer) -> Result<(), CodecError> {
        writer.write_bin(self);
        Ok(())
    }
}

impl MsgPackWrite for Vec<u8> {
    fn write(&self, writer: &mut Writer) -> Result<(), CodecError> {
        writer.write_bin(self);
        Ok(())
    }
}

impl MsgPackRead for Vec<u8> {
    fn read(reader: &mut Reader) -> Result<Self, CodecError> {
        reader.read_bin()
    }
}

/// `None`-able values: written as `nil` when absent, otherwise delegated to
/// the inner type. Mirrors `etl::optional`'s role in the reference
/// implementation's generic type list.
impl<T: MsgPackWrite> MsgPackWrite for Option<T> {
    fn write(&self, writer: &mut Writer) -> Result<(), CodecError> {
        match self {
            None => {
                writer.write_nil();
                Ok(())
            },
            Some(value) => value.write(writer),
        }
    }
}

impl<T: MsgPackRead> MsgPackRead for Option<T> {
    fn read(reader: &mut Reader) -> Result<Self, CodecError> {
        if reader.is_nil() {
            reader.read_nil()?;
            return Ok(None);
        }
        Ok(Some(T::read(reader)?))
    }
}

/// Writes a homogeneous array of values sharing one
/// [`MsgPackWrite`] implementation, matching the fixed-length-array entry in
/// spec.md §4.6. Free functions rather than a blanket `Vec<T>` impl, since
/// `Vec<u8>` already has its own dedicated `bin` encoding above and the two
/// would otherwise conflict.
pub fn write_array<T: MsgPackWrite>(writer: &mut Writer, items: &[T]) -> Result<(), CodecError> {
    writer.write_array_header(items.len());
    for item in items {
        item.write(writer)?;
    }
    Ok(())
}

/// Reads back an array written by [`write_array`].
pub fn read_array<T: MsgPackRead>(reader: &mut Reader) -> Result<Vec<T>, CodecError> {
    let len = reader.read_array_header()?;
    let mut items = Vec::with_capacity(len.min(4096));
    for _ in 0..len {
        items.push(T::read(reader)?);
    }
    Ok(items)
}
