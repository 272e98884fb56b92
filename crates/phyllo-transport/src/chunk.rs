//! Chunked Stream (L1): delimits byte runs on a reserved zero byte.
//!
//! One pending chunk is buffered at a time. A non-delimiter byte is
//! appended; a delimiter byte closes the chunk if the buffer is non-empty,
//! so consecutive delimiters (empty chunks) are silently ignored rather
//! than producing zero-length chunks upstream.

use crate::config::CHUNK_SIZE_LIMIT;

const DELIMITER: u8 = 0x00;

/// Accumulates bytes from L0 into delimited chunks, and wraps outgoing
/// payloads with delimiters on send.
pub struct ChunkedStream {
    buffer: Vec<u8>,
    received: bool,
    overflow: bool,
}

impl ChunkedStream {
    /// Largest payload this stream will buffer (delimiters excluded).
    pub const CAPACITY: usize = CHUNK_SIZE_LIMIT - 1;

    /// Creates an empty stream with no pending chunk.
    #[must_use]
    pub fn new() -> Self {
        Self { buffer: Vec::with_capacity(Self::CAPACITY), received: false, overflow: false }
    }

    /// Feeds one incoming byte. Returns `true` the moment a complete chunk
    /// becomes available via [`Self::peek`].
    pub fn receive_byte(&mut self, byte: u8) -> bool {
        if byte == DELIMITER {
            if self.buffer.is_empty() {
                return false;
            }
            self.received = true;
            true
        } else {
            if self.buffer.len() >= Self::CAPACITY {
                self.overflow = true;
            } else {
                self.buffer.push(byte);
            }
            false
        }
    }

    /// The pending chunk, if [`Self::receive_byte`] last returned `true` and
    /// [`Self::consume`] has not yet been called.
    #[must_use]
    pub fn peek(&self) -> Option<&[u8]> {
        self.received.then_some(self.buffer.as_slice())
    }

    /// Whether a byte was dropped because the pending chunk exceeded
    /// [`Self::CAPACITY`] before the delimiter arrived.
    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.overflow
    }

    /// Clears the pending chunk and the overflow flag, readying the stream
    /// for the next chunk.
    pub fn consume(&mut self) {
        self.buffer.clear();
        self.received = false;
        self.overflow = false;
    }

    /// Writes `payload` to `sink`, bracketed by a leading and trailing
    /// delimiter byte. Fails without writing anything if `payload` is empty
    /// or exceeds [`Self::CAPACITY`].
    pub fn send(payload: &[u8], sink: &mut impl crate::io::ByteSink) -> bool {
        if payload.is_empty() || payload.len() > Self::CAPACITY {
            return false;
        }
        sink.write_byte(DELIMITER) && sink.write(payload) && sink.write_byte(DELIMITER)
    }
}

impl Default for ChunkedStream {
    fn default() -> Self {
        Self::new()
    }
}
