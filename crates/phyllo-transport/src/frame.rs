//! Frame / COBS (L2): encodes a payload so the L1 delimiter cannot appear
//! inside it, and decodes it back on receive.

use phyllo_proto::cobs;

use crate::chunk::ChunkedStream;
use crate::io::ByteSink;

/// Owns the L1 chunk accumulator and speaks COBS-encoded payloads to the
/// layer above.
pub struct FrameLink {
    stream: ChunkedStream,
}

impl FrameLink {
    /// Largest payload this link will encode, reserving the one byte of
    /// overhead a maximal-length COBS encoding adds; do not change without
    /// re-checking `cobs::encoded_len` against `ChunkedStream::CAPACITY`.
    pub const PAYLOAD_SIZE_LIMIT: usize = ChunkedStream::CAPACITY - 1;

    /// Creates a link with no pending frame.
    #[must_use]
    pub fn new() -> Self {
        Self { stream: ChunkedStream::new() }
    }

    /// COBS-encodes `payload` and writes it as a delimited L1 chunk.
    pub fn send(&self, payload: &[u8], sink: &mut impl ByteSink) -> bool {
        if payload.is_empty() || payload.len() > Self::PAYLOAD_SIZE_LIMIT {
            return false;
        }
        let encoded = cobs::encode_to_vec(payload);
        ChunkedStream::send(&encoded, sink)
    }

    /// Feeds one incoming byte. Returns the decoded payload once a full
    /// chunk has arrived and validly decodes; an invalid COBS chunk (or one
    /// that overflowed L1's buffer) is dropped and this returns `None` for
    /// that chunk boundary, per spec.md §7's framing-error contract.
    pub fn receive_byte(&mut self, byte: u8) -> Option<Vec<u8>> {
        if !self.stream.receive_byte(byte) {
            return None;
        }
        let overflowed = self.stream.overflowed();
        let chunk = self.stream.peek().unwrap_or(&[]);
        let decoded = if overflowed { Vec::new() } else { cobs::decode_to_vec(chunk) };
        self.stream.consume();
        (!decoded.is_empty()).then_some(decoded)
    }
}

impl Default for FrameLink {
    fn default() -> Self {
        Self::new()
    }
}
