//! The Document presentation unit (L6): a format/schema-tagged MessagePack
//! body, ported from `Document.h`/`DocumentHeader` in the reference
//! implementation.

use phyllo_proto::{DataUnitTypeCode, SchemaCode, SerializationFormatCode, data_unit_type, schema, serialization_format};
use phyllo_transport::ReliableBufferLink;

use crate::error::CodecError;
use crate::{MsgPackRead, MsgPackWrite, Reader, Writer};

/// `[format: u8][schema: u8]`, the two-byte header every Document carries
/// ahead of its serialized body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHeader {
    /// The serialization format the body is encoded in.
    pub format: SerializationFormatCode,
    /// The schema the body conforms to, scoped within `format`.
    pub schema: SchemaCode,
}

impl DocumentHeader {
    /// Size in bytes of the encoded header.
    pub const SIZE: usize = 2;

    fn to_bytes(self) -> [u8; Self::SIZE] {
        [self.format, self.schema]
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() < Self::SIZE {
            return Err(CodecError::HeaderTooShort { expected: Self::SIZE, actual: bytes.len() });
        }
        Ok(Self { format: bytes[0], schema: bytes[1] })
    }
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self {
            format: serialization_format::binary_dynamic::UNKNOWN,
            schema: schema::generic::SCHEMALESS,
        }
    }
}

/// A format-tagged, schema-tagged serialized value. The only format this
/// crate implements is MessagePack
/// ([`serialization_format::binary_dynamic::MSG_PACK`]); `format` is still
/// carried on the wire so a Document produced by this crate interoperates
/// with a peer built against a different format, even though this crate can
/// only read/write the MessagePack one.
#[derive(Debug, Clone)]
pub struct Document {
    /// This document's format/schema header.
    pub header: DocumentHeader,
    buffer: Vec<u8>,
}

impl Document {
    /// The data unit type code a Document is carried as by the transport
    /// below it.
    pub const TYPE_CODE: DataUnitTypeCode = data_unit_type::presentation::DOCUMENT;

    /// Largest body a Document can carry, derived from the Reliable Buffer
    /// Link's payload limit the way the reference implementation derives
    /// `Document::kBodySizeLimit` from `ReliableBuffer::kPayloadSizeLimit`.
    pub const BODY_SIZE_LIMIT: usize = ReliableBufferLink::PAYLOAD_SIZE_LIMIT - DocumentHeader::SIZE;

    /// Creates an empty MessagePack document with a schemaless header.
    #[must_use]
    pub fn new() -> Self {
        let header = DocumentHeader {
            format: serialization_format::binary_dynamic::MSG_PACK,
            schema: schema::generic::SCHEMALESS,
        };
        Self { header, buffer: header.to_bytes().to_vec() }
    }

    /// The document's body (header stripped).
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.buffer[DocumentHeader::SIZE..]
    }

    /// The full wire buffer, header included.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Parses `buffer` into a header and body, replacing this document's
    /// contents.
    pub fn read(&mut self, buffer: &[u8]) -> Result<(), CodecError> {
        let header = DocumentHeader::from_bytes(buffer)?;
        self.header = header;
        self.buffer = buffer.to_vec();
        Ok(())
    }

    /// Deserializes the body as `T` via [`MsgPackRead`].
    pub fn read_payload<T: MsgPackRead>(&self) -> Result<T, CodecError> {
        let mut reader = Reader::new(self.body());
        T::read(&mut reader)
    }

    /// Serializes `instance` via [`MsgPackWrite`] as this document's body,
    /// tagging the header with `schema`.
    pub fn write<T: MsgPackWrite>(&mut self, instance: &T, schema: SchemaCode) -> Result<(), CodecError> {
        self.header.schema = schema;
        let mut writer = Writer::new();
        instance.write(&mut writer)?;
        self.set_body(&writer.into_bytes())
    }

    /// Replaces the body with raw, already-encoded bytes, leaving `schema`
    /// as previously set. Refuses an empty body or one exceeding
    /// [`Document::BODY_SIZE_LIMIT`].
    pub fn write_body(&mut self, body: &[u8]) -> Result<(), CodecError> {
        if body.is_empty() || body.len() > Self::BODY_SIZE_LIMIT {
            return Err(CodecError::InvalidBodySize { size: body.len(), limit: Self::BODY_SIZE_LIMIT });
        }
        self.set_body(body)
    }

    fn set_body(&mut self, body: &[u8]) -> Result<(), CodecError> {
        if body.len() > Self::BODY_SIZE_LIMIT {
            return Err(CodecError::InvalidBodySize { size: body.len(), limit: Self::BODY_SIZE_LIMIT });
        }
        self.buffer.truncate(DocumentHeader::SIZE);
        self.buffer.extend_from_slice(body);
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
