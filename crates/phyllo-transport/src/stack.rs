//! The three conventional transport compositions from spec.md §2: Minimal
//! (L1..L3), Reduced (L1..L4), and Standard (L1..L5). Each is a thin named
//! wrapper around the layer that already owns the whole chain beneath it
//! (`DatagramLink` already contains a `FrameLink`, which already contains a
//! `ChunkedStream`), so that a caller picks a stack by name rather than by
//! hand-assembling layers, while interoperating byte-for-byte with a peer
//! built the same way.

use phyllo_proto::DataUnitTypeCode;

use crate::datagram::{Datagram, DatagramLink};
use crate::io::ByteSink;
use crate::reliable::{ReceivedBuffer, ReliableBufferLink};
use crate::validated_datagram::{ValidatedDatagram, ValidatedDatagramLink};

/// `L1..L3`: chunking, COBS framing, and a length/type header. No
/// integrity check and no reliability; the cheapest composition to
/// implement and the cheapest to get wrong silently.
#[derive(Default)]
pub struct MinimalStack(DatagramLink);

impl MinimalStack {
    /// Creates a stack with no pending datagram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends `payload` tagged with `type_code`.
    pub fn send(&self, payload: &[u8], type_code: DataUnitTypeCode, sink: &mut impl ByteSink) -> bool {
        self.0.send(payload, type_code, sink)
    }

    /// Feeds one incoming byte. Returns a parsed [`Datagram`] once a frame
    /// decodes.
    pub fn receive_byte(&mut self, byte: u8) -> Option<Datagram> {
        self.0.receive_byte(byte)
    }
}

/// `L1..L4`: adds a CRC-32 integrity check over `DatagramLink`'s header
/// scheme (replacing the length field with a CRC).
#[derive(Default)]
pub struct ReducedStack(ValidatedDatagramLink);

impl ReducedStack {
    /// Creates a stack with no pending datagram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends `payload` tagged with `type_code`, CRC-protected.
    pub fn send(&self, payload: &[u8], type_code: DataUnitTypeCode, sink: &mut impl ByteSink) -> bool {
        self.0.send(payload, type_code, sink)
    }

    /// Feeds one incoming byte. Returns a parsed [`ValidatedDatagram`] once
    /// a frame decodes; callers must still check
    /// [`ValidatedDatagram::valid`] before delivering it upward.
    pub fn receive_byte(&mut self, byte: u8) -> Option<ValidatedDatagram> {
        self.0.receive_byte(byte)
    }
}

/// `L1..L5`: adds Go-Back-N ARQ on top of `ReducedStack`'s CRC-validated
/// transport. The only composition that requires a clock, since it owns
/// retransmit and piggyback timers.
#[derive(Default)]
pub struct StandardStack(ReliableBufferLink);

impl StandardStack {
    /// Creates a stack with empty sender/receiver ARQ state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `payload` for reliable delivery, transmitting it
    /// immediately if the send queue accepts it.
    pub fn send(
        &mut self,
        payload: &[u8],
        type_code: DataUnitTypeCode,
        now_ms: u64,
        sink: &mut impl ByteSink,
    ) -> bool {
        self.0.send(payload, type_code, now_ms, sink)
    }

    /// Advances time: fires retransmits and the piggyback control timer.
    pub fn update(&mut self, now_ms: u64, sink: &mut impl ByteSink) {
        self.0.update(now_ms, sink);
    }

    /// Feeds one incoming byte. Returns an in-order, integrity-checked
    /// payload once one arrives.
    pub fn receive_byte(
        &mut self,
        byte: u8,
        now_ms: u64,
        sink: &mut impl ByteSink,
    ) -> Option<ReceivedBuffer> {
        self.0.receive_byte(byte, now_ms, sink)
    }

    /// Number of Reliable Buffers dropped for failing the L4 integrity
    /// check.
    #[must_use]
    pub fn integrity_failures(&self) -> u64 {
        self.0.integrity_failures
    }

    /// Number of retransmissions the sender has performed.
    #[must_use]
    pub fn retransmissions(&self) -> u64 {
        self.0.retransmissions
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::{MinimalStack, StandardStack};
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
    fn minimal_stack_round_trips_a_document_payload() {
        let mut sink = VecSink::default();
        let sender = MinimalStack::new();
        assert!(sender.send(&[0x11, 0x00, 0x41], DOCUMENT, &mut sink));

        let mut receiver = MinimalStack::new();
        let mut received = None;
        for &byte in &sink.0 {
            if let Some(datagram) = receiver.receive_byte(byte) {
                received = Some(datagram);
            }
        }
        let datagram = received.expect("datagram should decode");
        assert_eq!(datagram.type_code, DOCUMENT);
        assert_eq!(datagram.payload, vec![0x11, 0x00, 0x41]);
    }

    #[test]
    fn standard_stack_reliably_delivers_several_sends() {
        let mut sender = StandardStack::new();
        let mut sink = VecSink::default();
        for payload in [b"a".as_slice(), b"b", b"c"] {
            assert!(sender.send(payload, DOCUMENT, 0, &mut sink));
        }

        let mut receiver = StandardStack::new();
        let mut delivered = Vec::new();
        for &byte in &sink.0 {
            if let Some(buf) = receiver.receive_byte(byte, 0, &mut VecSink::default()) {
                delivered.push(buf.payload);
            }
        }
        assert_eq!(delivered, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
        assert_eq!(receiver.integrity_failures(), 0);
    }
}
