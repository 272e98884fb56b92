//! A type-dispatched MessagePack writer, ported from the `mpack`-style
//! `DocumentWriter<MsgPack>` in the reference implementation: one method per
//! wire type rather than a single `serialize` entry point driven by trait
//! reflection.

use crate::error::CodecError;
use crate::format::*;

/// Appends a MessagePack encoding of each value written to it into an
/// owned byte buffer.
///
/// Each `write_*` method for a specific width (`write_u8`, `write_i32`, ...)
/// always emits that width's format byte, matching `mpack_write_u8` and
/// friends in the reference encoder. [`Writer::write_uint`] and
/// [`Writer::write_int`] instead pick the smallest format that fits, for
/// callers that don't care about the wire width.
#[derive(Debug, Default, Clone)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Consumes the writer, returning the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// The bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Writes a `nil`.
    pub fn write_nil(&mut self) {
        self.buf.push(NIL);
    }

    /// Writes a boolean.
    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(if value { TRUE } else { FALSE });
    }

    /// Writes an unsigned integer using the smallest format that fits.
    pub fn write_uint(&mut self, value: u64) {
        if value <= u64::from(POSITIVE_FIXINT_MAX) {
            self.buf.push(value as u8);
        } else if let Ok(v) = u8::try_from(value) {
            self.write_u8(v);
        } else if let Ok(v) = u16::try_from(value) {
            self.write_u16(v);
        } else if let Ok(v) = u32::try_from(value) {
            self.write_u32(v);
        } else {
            self.write_u64(value);
        }
    }

    /// Writes a `u8`, always as the `uint8` format.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(UINT8);
        self.buf.push(value);
    }

    /// Writes a `u16`, always as the `uint16` format.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.push(UINT16);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a `u32`, always as the `uint32` format.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.push(UINT32);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a `u64`, always as the `uint64` format.
    pub fn write_u64(&mut self, value: u64) {
        self.buf.push(UINT64);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a signed integer using the smallest format that fits.
    pub fn write_int(&mut self, value: i64) {
        if (-32..=i64::from(POSITIVE_FIXINT_MAX)).contains(&value) {
            self.buf.push(value as u8);
        } else if let Ok(v) = i8::try_from(value) {
            self.write_i8(v);
        } else if let Ok(v) = i16::try_from(value) {
            self.write_i16(v);
        } else if let Ok(v) = i32::try_from(value) {
            self.write_i32(v);
        } else {
            self.write_i64(value);
        }
    }

    /// Writes an `i8`, always as the `int8` format.
    pub fn write_i8(&mut self, value: i8) {
        self.buf.push(INT8);
        self.buf.push(value as u8);
    }

    /// Writes an `i16`, always as the `int16` format.
    pub fn write_i16(&mut self, value: i16) {
        self.buf.push(INT16);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes an `i32`, always as the `int32` format.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.push(INT32);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes an `i64`, always as the `int64` format.
    pub fn write_i64(&mut self, value: i64) {
        self.buf.push(INT64);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes an `f32`.
    pub fn write_f32(&mut self, value: f32) {
        self.buf.push(FLOAT32);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes an `f64`.
    pub fn write_f64(&mut self, value: f64) {
        self.buf.push(FLOAT64);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a UTF-8 string using the smallest string format that fits its
    /// byte length.
    pub fn write_str(&mut self, value: &str) {
        let bytes = value.as_bytes();
        self.write_str_header(bytes.len());
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a UTF-8 string, refusing to exceed `max_len` bytes.
    pub fn write_str_bounded(&mut self, value: &str, max_len: usize) -> Result<(), CodecError> {
        let len = value.as_bytes().len();
        if len > max_len {
            return Err(CodecError::LengthExceedsBound { length: len, limit: max_len });
        }
        self.write_str(value);
        Ok(())
    }

    fn write_str_header(&mut self, len: usize) {
        if len <= (FIXSTR_MAX - FIXSTR_TAG) as usize {
            self.buf.push(FIXSTR_TAG + len as u8);
        } else if let Ok(n) = u8::try_from(len) {
            self.buf.push(STR8);
            self.buf.push(n);
        } else if let Ok(n) = u16::try_from(len) {
            self.buf.push(STR16);
            self.buf.extend_from_slice(&n.to_be_bytes());
        } else {
            self.buf.push(STR32);
            self.buf.extend_from_slice(&(len as u32).to_be_bytes());
        }
    }

    /// Writes a binary blob using the smallest bin format that fits its
    /// length.
    pub fn write_bin(&mut self, data: &[u8]) {
        self.write_bin_header(data.len());
        self.buf.extend_from_slice(data);
    }

    /// Writes a binary blob, refusing to exceed `max_len` bytes.
    pub fn write_bin_bounded(&mut self, data: &[u8], max_len: usize) -> Result<(), CodecError> {
        if data.len() > max_len {
            return Err(CodecError::LengthExceedsBound { length: data.len(), limit: max_len });
        }
        self.write_bin(data);
        Ok(())
    }

    fn write_bin_header(&mut self, len: usize) {
        if let Ok(n) = u8::try_from(len) {
            self.buf.push(BIN8);
            self.buf.push(n);
        } else if let Ok(n) = u16::try_from(len) {
            self.buf.push(BIN16);
            self.buf.extend_from_slice(&n.to_be_bytes());
        } else {
            self.buf.push(BIN32);
            self.buf.extend_from_slice(&(len as u32).to_be_bytes());
        }
    }

    /// Writes an array header declaring `len` upcoming elements. The caller
    /// is responsible for writing exactly `len` values next.
    pub fn write_array_header(&mut self, len: usize) {
        if len <= (FIXARRAY_MAX - FIXARRAY_TAG) as usize {
            self.buf.push(FIXARRAY_TAG + len as u8);
        } else if let Ok(n) = u16::try_from(len) {
            self.buf.push(ARRAY16);
            self.buf.extend_from_slice(&n.to_be_bytes());
        } else {
            self.buf.push(ARRAY32);
            self.buf.extend_from_slice(&(len as u32).to_be_bytes());
        }
    }

    /// Writes a map header declaring `len` upcoming key/value pairs. The
    /// caller is responsible for writing exactly `len` key-then-value pairs
    /// next.
    pub fn write_map_header(&mut self, len: usize) {
        if len <= (FIXMAP_MAX - FIXMAP_TAG) as usize {
            self.buf.push(FIXMAP_TAG + len as u8);
        } else if let Ok(n) = u16::try_from(len) {
            self.buf.push(MAP16);
            self.buf.extend_from_slice(&n.to_be_bytes());
        } else {
            self.buf.push(MAP32);
            self.buf.extend_from_slice(&(len as u32).to_be_bytes());
        }
    }

    /// Delegates to a user type's own [`crate::MsgPackWrite`] implementation,
    /// mirroring the reference `DocumentWriter::writeClass`.
    pub fn write_class<T: crate::MsgPackWrite>(&mut self, value: &T) -> Result<(), CodecError> {
        value.write(self)
    }
}
