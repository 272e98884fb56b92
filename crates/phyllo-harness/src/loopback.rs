//! In-memory byte-stream loopback, standing in for the teacher's
//! `turmoil`-simulated network: an outgoing [`RecordingSink`] that just
//! records bytes, a [`VecSource`] that replays them, and scripted-loss
//! helpers ([`split_messages`]/[`drop_message`]) that let a test drop one
//! whole L1-delimited chunk from the wire the way a lossy serial link would,
//! without needing to know how many bytes that chunk happened to encode to.

use phyllo_transport::io::{ByteSink, ByteSource};

/// A [`ByteSink`] that records every byte written to it, never refusing one.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink(pub Vec<u8>);

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Takes the recorded bytes, leaving the sink empty.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.0)
    }
}

impl ByteSink for RecordingSink {
    fn write_byte(&mut self, byte: u8) -> bool {
        self.0.push(byte);
        true
    }
}

/// A [`ByteSource`] that replays a fixed byte buffer.
#[derive(Debug, Default, Clone)]
pub struct VecSource {
    bytes: Vec<u8>,
    pos: usize,
}

impl VecSource {
    /// Creates a source that will replay `bytes` from the start.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl ByteSource for VecSource {
    fn available(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }
}

const DELIMITER: u8 = 0x00;

/// Splits a captured byte stream into the individual L1-delimited chunks
/// that produced it, dropping the delimiters themselves. Each `send` call a
/// link makes brackets its payload with a leading and trailing `0x00`
/// ([`phyllo_transport::chunk::ChunkedStream::send`]), so consecutive sends
/// share a delimiter and splitting on every `0x00` run recovers exactly the
/// chunks that were written, in order.
#[must_use]
pub fn split_messages(bytes: &[u8]) -> Vec<Vec<u8>> {
    bytes
        .split(|&b| b == DELIMITER)
        .filter(|chunk| !chunk.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}

/// Rejoins chunks produced by [`split_messages`] back into a delimited byte
/// stream, as a lossy link would deliver what's left after dropping one.
#[must_use]
pub fn join_messages(messages: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for message in messages {
        out.push(DELIMITER);
        out.extend_from_slice(message);
        out.push(DELIMITER);
    }
    out
}

/// Splits `bytes` into chunks, removes the chunk at `index`, and rejoins the
/// rest, simulating a single dropped L1 chunk on an otherwise-reliable wire.
#[must_use]
pub fn drop_message(bytes: &[u8], index: usize) -> Vec<u8> {
    let mut messages = split_messages(bytes);
    if index < messages.len() {
        messages.remove(index);
    }
    join_messages(&messages)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::{RecordingSink, VecSource, drop_message, split_messages};
    use phyllo_transport::chunk::ChunkedStream;
    use phyllo_transport::io::{ByteSink, ByteSource};

    #[test]
    fn split_messages_recovers_each_chunk_sent() {
        let mut sink = RecordingSink::new();
        assert!(ChunkedStream::send(b"a", &mut sink));
        assert!(ChunkedStream::send(b"bb", &mut sink));
        assert!(ChunkedStream::send(b"ccc", &mut sink));

        let messages = split_messages(&sink.0);
        assert_eq!(messages, vec![b"a".to_vec(), b"bb".to_vec(), b"ccc".to_vec()]);
    }

    #[test]
    fn drop_message_removes_exactly_one_chunk() {
        let mut sink = RecordingSink::new();
        assert!(ChunkedStream::send(b"p0", &mut sink));
        assert!(ChunkedStream::send(b"p1", &mut sink));
        assert!(ChunkedStream::send(b"p2", &mut sink));

        let lossy = drop_message(&sink.0, 1);
        assert_eq!(split_messages(&lossy), vec![b"p0".to_vec(), b"p2".to_vec()]);
    }

    #[test]
    fn vec_source_replays_bytes_in_order() {
        let mut source = VecSource::new(vec![1, 2, 3]);
        assert_eq!(source.available(), 3);
        assert_eq!(source.read_byte(), Some(1));
        assert_eq!(source.read_byte(), Some(2));
        assert_eq!(source.available(), 1);
        assert_eq!(source.read_byte(), Some(3));
        assert_eq!(source.read_byte(), None);
    }
}
