//! Datagram (L3): prepends a `[length, type]` header to a payload.
//!
//! Datagrams carry no reliability or integrity guarantee; `length` is
//! recorded as transmitted and is deliberately *not* cross-checked against
//! the actual payload size on receive, so a truncation can be detected by
//! whichever upper layer cares to compare the two (spec.md §4.3).

use phyllo_proto::data_unit_type::transport::DATAGRAM;
use phyllo_proto::{DataUnitTypeCode, data_unit_type::bytes::BUFFER};

use crate::frame::FrameLink;
use crate::io::ByteSink;

const HEADER_SIZE: usize = 2;

/// A received Datagram: the header as transmitted, plus an owned copy of
/// the payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    /// The `length` byte exactly as received (not re-validated here).
    pub length: u8,
    /// The enclosed unit's type code.
    pub type_code: DataUnitTypeCode,
    /// The payload bytes following the header.
    pub payload: Vec<u8>,
}

impl Datagram {
    /// Whether the transmitted `length` matches the payload actually
    /// carried. `false` indicates truncation or a misbehaving sender.
    #[must_use]
    pub fn length_is_consistent(&self) -> bool {
        usize::from(self.length) == self.payload.len()
    }
}

/// The L3 link: a `FrameLink` plus the length/type header framing.
pub struct DatagramLink {
    frame: FrameLink,
}

impl DatagramLink {
    /// Largest payload a Datagram can carry.
    pub const PAYLOAD_SIZE_LIMIT: usize = FrameLink::PAYLOAD_SIZE_LIMIT - HEADER_SIZE;

    /// Creates a link with no pending datagram.
    #[must_use]
    pub fn new() -> Self {
        Self { frame: FrameLink::new() }
    }

    /// Sends `payload` tagged with `type_code`, defaulting to
    /// [`BUFFER`] when the caller has no more specific code.
    pub fn send(&self, payload: &[u8], type_code: DataUnitTypeCode, sink: &mut impl ByteSink) -> bool {
        if payload.is_empty() || payload.len() > Self::PAYLOAD_SIZE_LIMIT {
            return false;
        }
        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.push(u8::try_from(payload.len()).unwrap_or(u8::MAX));
        buf.push(type_code);
        buf.extend_from_slice(payload);
        self.frame.send(&buf, sink)
    }

    /// Sends `payload` with the generic [`BUFFER`] type code.
    pub fn send_buffer(&self, payload: &[u8], sink: &mut impl ByteSink) -> bool {
        self.send(payload, BUFFER, sink)
    }

    /// Feeds one incoming byte. Returns a parsed [`Datagram`] once a frame
    /// decodes and is at least long enough to hold the header.
    pub fn receive_byte(&mut self, byte: u8) -> Option<Datagram> {
        let bytes = self.frame.receive_byte(byte)?;
        parse(&bytes)
    }
}

impl Default for DatagramLink {
    fn default() -> Self {
        Self::new()
    }
}

fn parse(bytes: &[u8]) -> Option<Datagram> {
    if bytes.len() < HEADER_SIZE {
        return None;
    }
    Some(Datagram { length: bytes[0], type_code: bytes[1], payload: bytes[HEADER_SIZE..].to_vec() })
}

/// This layer's own type code when it is itself the enclosed unit (e.g. a
/// Datagram nested inside a higher framing, which this workspace does not
/// exercise but which the registry still names).
pub const TYPE_CODE: DataUnitTypeCode = DATAGRAM;

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::DatagramLink;
    use crate::io::ByteSink;
    use phyllo_proto::data_unit_type::presentation::DOCUMENT;

    #[derive(Default)]
    struct VecSink(Vec<u8>);
    impl ByteSink for VecSink {
        fn write_byte(&mut self, byte: u8) -> bool {
            self.0.push(byte);
            true
        }
    }

    #[test]
    fn send_then_receive_round_trips_type_and_payload() {
        let mut sink = VecSink::default();
        let link = DatagramLink::new();
        assert!(link.send(b"hello", DOCUMENT, &mut sink));

        let mut receiver = DatagramLink::new();
        let mut received = None;
        for &byte in &sink.0 {
            if let Some(datagram) = receiver.receive_byte(byte) {
                received = Some(datagram);
            }
        }
        let datagram = received.expect("datagram should decode");
        assert_eq!(datagram.type_code, DOCUMENT);
        assert_eq!(datagram.payload, b"hello");
        assert!(datagram.length_is_consistent());
    }

    #[test]
    fn empty_payload_is_refused() {
        let mut sink = VecSink::default();
        let link = DatagramLink::new();
        assert!(!link.send(&[], DOCUMENT, &mut sink));
        assert!(sink.0.is_empty());
    }
}
