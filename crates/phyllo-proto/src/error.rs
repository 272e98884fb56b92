//! Shared error type for wire-level size and framing violations.
//!
//! Individual layers mostly report failure as `bool`/`Option` on their hot
//! path (per spec.md §7, "the stack has no exception-style control flow"),
//! matching the reference implementation's `bool`-returning `read`/`write`
//! methods. [`ProtoError`] exists for the handful of call sites where a
//! caller benefits from knowing *why* a send or parse was refused (tests,
//! logging, and any layer above L5 that wants to report a cause upward).

use thiserror::Error;

/// Errors shared by the framing and validation layers (L1-L4).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtoError {
    /// The caller tried to send a zero-length payload where one is required.
    #[error("payload is empty")]
    EmptyPayload,

    /// The payload exceeds the enclosing layer's size limit.
    #[error("payload size {size} exceeds limit {limit}")]
    PayloadTooLarge {
        /// The payload size that was rejected.
        size: usize,
        /// The limit it was checked against.
        limit: usize,
    },

    /// A received buffer was shorter than the header it claims to carry.
    #[error("buffer of {actual} bytes is shorter than the {expected}-byte header")]
    BufferTooShort {
        /// Bytes required to hold the header.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },

    /// L2 COBS decoding failed (invalid frame).
    #[error("COBS frame failed to decode")]
    FramingError,

    /// L4 CRC check failed on an incoming Validated Datagram.
    #[error("CRC check failed")]
    IntegrityFailure,
}
