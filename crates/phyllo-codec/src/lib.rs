//! The Presentation layer (L6) of the Phyllo protocol stack: a hand-rolled
//! MessagePack reader/writer and the `Document` type that tags a
//! serialized body with its format and schema.
//!
//! The reference implementation's `DocumentReader<MsgPack>`/
//! `DocumentWriter<MsgPack>` are C++ template classes built around the
//! `mpack` C library's type-dispatched `read<Type>()`/`write(value)`
//! methods; [`Reader`] and [`Writer`] here carry that same one-method-per-
//! wire-type shape rather than delegating to a derive macro, since the
//! reference's `kSchema` tagging and length-bounded string/binary variants
//! don't map cleanly onto an auto-derived `Serialize`/`Deserialize`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod document;
pub mod error;
mod format;
pub mod primitives;
pub mod reader;
pub mod writer;

pub use document::{Document, DocumentHeader};
pub use error::CodecError;
pub use primitives::{read_array, write_array};
pub use reader::Reader;
pub use writer::Writer;

/// Implemented by a type that knows how to serialize itself as a
/// MessagePack value, mirroring the reference implementation's
/// `instance.write(writer)` convention for user classes (`Document::write`,
/// `DocumentLink::send`).
pub trait MsgPackWrite {
    /// Writes `self` into `writer`.
    fn write(&self, writer: &mut Writer) -> Result<(), CodecError>;
}

/// Implemented by a type that knows how to deserialize itself from a
/// MessagePack value, mirroring `instance.read(reader)` /
/// `DocumentReader::readClass` in the reference implementation.
pub trait MsgPackRead: Sized {
    /// Reads a value of `Self` from `reader`.
    fn read(reader: &mut Reader) -> Result<Self, CodecError>;
}
