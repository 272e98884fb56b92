//! Error type for the topic-addressed pub/sub layers (L7-L8).

use thiserror::Error;

/// Errors raised while building or parsing a [`crate::Message`], or while
/// dispatching through an [`crate::Endpoint`]/[`crate::Router`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PubSubError {
    /// The caller tried to send a zero-length payload where one is required.
    #[error("payload is empty")]
    EmptyPayload,

    /// `topic.len()` exceeds [`crate::Message::TOPIC_SIZE_LIMIT`].
    #[error("topic of {len} bytes exceeds the {limit}-byte limit")]
    TopicTooLong {
        /// The topic length that was rejected.
        len: usize,
        /// The limit it was checked against.
        limit: usize,
    },

    /// `topic.len() + payload.len()` exceeds the enclosing Reliable Buffer
    /// Link's payload limit.
    #[error("message body of {size} bytes exceeds the {limit}-byte limit")]
    MessageTooLarge {
        /// The combined topic-plus-payload size that was rejected.
        size: usize,
        /// The limit it was checked against.
        limit: usize,
    },

    /// A received buffer was shorter than the `[type, topic_len]` header.
    #[error("buffer of {actual} bytes is shorter than the {expected}-byte header")]
    BufferTooShort {
        /// Bytes required to hold the header.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },

    /// A received buffer's declared `topic_len` runs past the end of the
    /// buffer.
    #[error("declared topic length {topic_len} runs past the {actual}-byte buffer")]
    TopicLengthOverrun {
        /// The declared topic length.
        topic_len: usize,
        /// Bytes actually present after the header.
        actual: usize,
    },

    /// The downstream sink refused the send.
    #[error("downstream sink refused the send")]
    SinkRefused,
}
