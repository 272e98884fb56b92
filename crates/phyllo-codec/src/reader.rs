//! A type-dispatched MessagePack reader, the decoding half of [`crate::Writer`].
//!
//! Each `read_*` method is "expect"-style, matching `mpack_expect_u32` and
//! friends in the reference decoder: it accepts any encoding that carries a
//! value of the right class (any integer format for `read_u32`, not just
//! `uint32`) and fails with [`CodecError::OutOfRange`] only if the decoded
//! value can't be represented in the requested width.

use crate::error::CodecError;
use crate::format::*;

/// Reads MessagePack-encoded values out of a borrowed byte slice.
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes remaining to be read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Whether the next value is `nil`, without consuming it.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.peek_byte() == Some(NIL)
    }

    fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn take_byte(&mut self) -> Result<u8, CodecError> {
        let byte = self.peek_byte().ok_or(CodecError::Truncated)?;
        self.pos += 1;
        Ok(byte)
    }

    fn take_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < len {
            return Err(CodecError::Truncated);
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        self.take_bytes(N)?.try_into().map_err(|_| CodecError::Truncated)
    }

    /// Reads a `nil`.
    pub fn read_nil(&mut self) -> Result<(), CodecError> {
        match self.take_byte()? {
            NIL => Ok(()),
            byte => Err(CodecError::UnexpectedFormat { byte, expected: "nil" }),
        }
    }

    /// Reads a boolean.
    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        match self.take_byte()? {
            FALSE => Ok(false),
            TRUE => Ok(true),
            byte => Err(CodecError::UnexpectedFormat { byte, expected: "bool" }),
        }
    }

    fn read_uint_raw(&mut self) -> Result<u64, CodecError> {
        let byte = self.take_byte()?;
        if is_positive_fixint(byte) {
            return Ok(u64::from(byte));
        }
        match byte {
            UINT8 => Ok(u64::from(self.take_byte()?)),
            UINT16 => Ok(u64::from(u16::from_be_bytes(self.take_array()?))),
            UINT32 => Ok(u64::from(u32::from_be_bytes(self.take_array()?))),
            UINT64 => Ok(u64::from_be_bytes(self.take_array()?)),
            _ => Err(CodecError::UnexpectedFormat { byte, expected: "unsigned integer" }),
        }
    }

    /// Reads any unsigned integer format into a `u8`.
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        u8::try_from(self.read_uint_raw()?).map_err(|_| CodecError::OutOfRange)
    }

    /// Reads any unsigned integer format into a `u16`.
    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        u16::try_from(self.read_uint_raw()?).map_err(|_| CodecError::OutOfRange)
    }

    /// Reads any unsigned integer format into a `u32`.
    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        u32::try_from(self.read_uint_raw()?).map_err(|_| CodecError::OutOfRange)
    }

    /// Reads any unsigned integer format into a `u64`.
    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        self.read_uint_raw()
    }

    fn read_int_raw(&mut self) -> Result<i64, CodecError> {
        let byte = self.take_byte()?;
        if is_positive_fixint(byte) {
            return Ok(i64::from(byte));
        }
        if is_negative_fixint(byte) {
            return Ok(i64::from(byte as i8));
        }
        match byte {
            UINT8 => Ok(i64::from(self.take_byte()?)),
            UINT16 => Ok(i64::from(u16::from_be_bytes(self.take_array()?))),
            UINT32 => Ok(i64::from(u32::from_be_bytes(self.take_array()?))),
            UINT64 => i64::try_from(u64::from_be_bytes(self.take_array()?))
                .map_err(|_| CodecError::OutOfRange),
            INT8 => Ok(i64::from(self.take_byte()? as i8)),
            INT16 => Ok(i64::from(i16::from_be_bytes(self.take_array()?))),
            INT32 => Ok(i64::from(i32::from_be_bytes(self.take_array()?))),
            INT64 => Ok(i64::from_be_bytes(self.take_array()?)),
            _ => Err(CodecError::UnexpectedFormat { byte, expected: "signed integer" }),
        }
    }

    /// Reads any integer format into an `i8`.
    pub fn read_i8(&mut self) -> Result<i8, CodecError> {
        i8::try_from(self.read_int_raw()?).map_err(|_| CodecError::OutOfRange)
    }

    /// Reads any integer format into an `i16`.
    pub fn read_i16(&mut self) -> Result<i16, CodecError> {
        i16::try_from(self.read_int_raw()?).map_err(|_| CodecError::OutOfRange)
    }

    /// Reads any integer format into an `i32`.
    pub fn read_i32(&mut self) -> Result<i32, CodecError> {
        i32::try_from(self.read_int_raw()?).map_err(|_| CodecError::OutOfRange)
    }

    /// Reads any integer format into an `i64`.
    pub fn read_i64(&mut self) -> Result<i64, CodecError> {
        self.read_int_raw()
    }

    /// Reads an `f32`. Only the `float32` format is accepted; MessagePack
    /// does not define a lossless narrowing from `float64`.
    pub fn read_f32(&mut self) -> Result<f32, CodecError> {
        match self.take_byte()? {
            FLOAT32 => Ok(f32::from_be_bytes(self.take_array()?)),
            byte => Err(CodecError::UnexpectedFormat { byte, expected: "f32" }),
        }
    }

    /// Reads an `f64`, widening a `float32` if that's what's present.
    pub fn read_f64(&mut self) -> Result<f64, CodecError> {
        match self.take_byte()? {
            FLOAT32 => Ok(f64::from(f32::from_be_bytes(self.take_array()?))),
            FLOAT64 => Ok(f64::from_be_bytes(self.take_array()?)),
            byte => Err(CodecError::UnexpectedFormat { byte, expected: "f64" }),
        }
    }

    fn read_str_len(&mut self) -> Result<usize, CodecError> {
        let byte = self.take_byte()?;
        if is_fixstr(byte) {
            return Ok((byte - FIXSTR_TAG) as usize);
        }
        match byte {
            STR8 => Ok(self.take_byte()? as usize),
            STR16 => Ok(u16::from_be_bytes(self.take_array()?) as usize),
            STR32 => Ok(u32::from_be_bytes(self.take_array()?) as usize),
            _ => Err(CodecError::UnexpectedFormat { byte, expected: "string" }),
        }
    }

    /// Reads a UTF-8 string of any length-tagged string format.
    pub fn read_str(&mut self) -> Result<String, CodecError> {
        let len = self.read_str_len()?;
        let bytes = self.take_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8)
    }

    /// Reads a UTF-8 string, refusing one whose declared length exceeds
    /// `max_len`.
    pub fn read_str_bounded(&mut self, max_len: usize) -> Result<String, CodecError> {
        let len = self.read_str_len()?;
        if len > max_len {
            return Err(CodecError::LengthExceedsBound { length: len, limit: max_len });
        }
        let bytes = self.take_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8)
    }

    fn read_bin_len(&mut self) -> Result<usize, CodecError> {
        let byte = self.take_byte()?;
        match byte {
            BIN8 => Ok(self.take_byte()? as usize),
            BIN16 => Ok(u16::from_be_bytes(self.take_array()?) as usize),
            BIN32 => Ok(u32::from_be_bytes(self.take_array()?) as usize),
            _ => Err(CodecError::UnexpectedFormat { byte, expected: "binary" }),
        }
    }

    /// Reads a binary blob of any length-tagged bin format.
    pub fn read_bin(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read_bin_len()?;
        Ok(self.take_bytes(len)?.to_vec())
    }

    /// Reads a binary blob, refusing one whose declared length exceeds
    /// `max_len`.
    pub fn read_bin_bounded(&mut self, max_len: usize) -> Result<Vec<u8>, CodecError> {
        let len = self.read_bin_len()?;
        if len > max_len {
            return Err(CodecError::LengthExceedsBound { length: len, limit: max_len });
        }
        Ok(self.take_bytes(len)?.to_vec())
    }

    /// Reads an array header, returning the declared element count. The
    /// caller is responsible for reading exactly that many values next.
    pub fn read_array_header(&mut self) -> Result<usize, CodecError> {
        let byte = self.take_byte()?;
        if is_fixarray(byte) {
            return Ok((byte - FIXARRAY_TAG) as usize);
        }
        match byte {
            ARRAY16 => Ok(u16::from_be_bytes(self.take_array()?) as usize),
            ARRAY32 => Ok(u32::from_be_bytes(self.take_array()?) as usize),
            _ => Err(CodecError::UnexpectedFormat { byte, expected: "array" }),
        }
    }

    /// Reads a map header, returning the declared key/value pair count. The
    /// caller is responsible for reading exactly that many key-then-value
    /// pairs next.
    pub fn read_map_header(&mut self) -> Result<usize, CodecError> {
        let byte = self.take_byte()?;
        if is_fixmap(byte) {
            return Ok((byte - FIXMAP_TAG) as usize);
        }
        match byte {
            MAP16 => Ok(u16::from_be_bytes(self.take_array()?) as usize),
            MAP32 => Ok(u32::from_be_bytes(self.take_array()?) as usize),
            _ => Err(CodecError::UnexpectedFormat { byte, expected: "map" }),
        }
    }

    /// Delegates to a user type's own [`crate::MsgPackRead`] implementation,
    /// mirroring the reference `DocumentReader::readClass`.
    pub fn read_class<T: crate::MsgPackRead>(&mut self) -> Result<T, CodecError> {
        T::read(self)
    }

    /// Skips over the next complete value without decoding it, recursing
    /// into arrays and maps. Used to tolerate unknown fields in a user
    /// class's `read` implementation.
    pub fn skip_value(&mut self) -> Result<(), CodecError> {
        let byte = self.take_byte()?;
        if is_positive_fixint(byte) || is_negative_fixint(byte) {
            return Ok(());
        }
        if is_fixstr(byte) {
            self.take_bytes((byte - FIXSTR_TAG) as usize)?;
            return Ok(());
        }
        if is_fixarray(byte) {
            let len = (byte - FIXARRAY_TAG) as usize;
            for _ in 0..len {
                self.skip_value()?;
            }
            return Ok(());
        }
        if is_fixmap(byte) {
            let len = (byte - FIXMAP_TAG) as usize;
            for _ in 0..len * 2 {
                self.skip_value()?;
            }
            return Ok(());
        }
        match byte {
            NIL | FALSE | TRUE => Ok(()),
            UINT8 | INT8 => self.take_bytes(1).map(|_| ()),
            UINT16 | INT16 => self.take_bytes(2).map(|_| ()),
            UINT32 | INT32 | FLOAT32 => self.take_bytes(4).map(|_| ()),
            UINT64 | INT64 | FLOAT64 => self.take_bytes(8).map(|_| ()),
            STR8 | BIN8 => {
                let len = self.take_byte()? as usize;
                self.take_bytes(len).map(|_| ())
            },
            STR16 | BIN16 => {
                let len = u16::from_be_bytes(self.take_array()?) as usize;
                self.take_bytes(len).map(|_| ())
            },
            STR32 | BIN32 => {
                let len = u32::from_be_bytes(self.take_array()?) as usize;
                self.take_bytes(len).map(|_| ())
            },
            ARRAY16 => {
                let len = u16::from_be_bytes(self.take_array()?) as usize;
                for _ in 0..len {
                    self.skip_value()?;
                }
                Ok(())
            },
            ARRAY32 => {
                let len = u32::from_be_bytes(self.take_array()?) as usize;
                for _ in 0..len {
                    self.skip_value()?;
                }
                Ok(())
            },
            MAP16 => {
                let len = u16::from_be_bytes(self.take_array()?) as usize;
                for _ in 0..len * 2 {
                    self.skip_value()?;
                }
                Ok(())
            },
            MAP32 => {
                let len = u32::from_be_bytes(self.take_array()?) as usize;
                for _ in 0..len * 2 {
                    self.skip_value()?;
                }
                Ok(())
            },
            _ => Err(CodecError::UnexpectedFormat { byte, expected: "any value" }),
        }
    }
}
