//! Error type for MessagePack encoding and decoding failures.

use thiserror::Error;

/// Errors raised while reading or writing a MessagePack-encoded value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The reader ran out of bytes before a value finished decoding.
    #[error("buffer truncated while decoding")]
    Truncated,

    /// The format byte at the current cursor position didn't match any
    /// encoding accepted for the type being read.
    #[error("unexpected format byte 0x{byte:02x} while reading {expected}")]
    UnexpectedFormat {
        /// The offending leading byte.
        byte: u8,
        /// What the caller was trying to read.
        expected: &'static str,
    },

    /// A decoded integer didn't fit in the target type (e.g. a negative
    /// value read as an unsigned type, or a value too wide for the target).
    #[error("decoded value does not fit in the requested type")]
    OutOfRange,

    /// A string's bytes were not valid UTF-8.
    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    /// A length (string, binary, array, or map) exceeds the caller-supplied
    /// bound, e.g. the schema's declared length tier.
    #[error("length {length} exceeds bound {limit}")]
    LengthExceedsBound {
        /// The decoded or requested length.
        length: usize,
        /// The limit it was checked against.
        limit: usize,
    },

    /// The writer's backing buffer is full.
    #[error("writer buffer capacity exceeded")]
    WriterFull,

    /// A document buffer was shorter than the `DocumentHeader`.
    #[error("document buffer of {actual} bytes is shorter than the {expected}-byte header")]
    HeaderTooShort {
        /// Bytes required to hold the header.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },

    /// The document body is empty or exceeds the enclosing transport's
    /// payload size limit.
    #[error("document body size {size} is invalid (limit {limit})")]
    InvalidBodySize {
        /// The body size that was rejected.
        size: usize,
        /// The limit it was checked against.
        limit: usize,
    },
}
