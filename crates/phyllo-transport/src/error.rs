//! Typed errors for the handful of call sites where a caller benefits from
//! knowing *why* a send was refused. The hot data-unit path still reports
//! failure as a bare `bool`/`Option`, matching spec.md §7's "no
//! exception-style control flow" contract; this type exists for
//! construction-time misuse and for tests/logging that want a cause.

use thiserror::Error;

/// Reasons a `send` on a transport layer can be refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The caller tried to send a zero-length payload where one is required.
    #[error("payload is empty")]
    EmptyPayload,

    /// The payload exceeds the enclosing layer's size limit.
    #[error("payload of {size} bytes exceeds this layer's limit of {limit} bytes")]
    PayloadTooLarge {
        /// The payload size that was rejected.
        size: usize,
        /// The limit it was checked against.
        limit: usize,
    },

    /// The ARQ sender's queue is saturated; the caller must retry later.
    #[error("send queue is full")]
    QueueFull,

    /// The underlying byte sink refused one or more bytes.
    #[error("byte sink refused a write")]
    SinkRefused,
}
