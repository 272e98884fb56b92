//! Composes [`GbnSender`] and [`GbnReceiver`] atop a [`ValidatedDatagramLink`]
//! into the full L5 Reliable Buffer Link.

use phyllo_proto::DataUnitTypeCode;
use phyllo_proto::data_unit_type::transport::RELIABLE_BUFFER;
use tracing::{debug, warn};

use super::header::{ReliableBufferFlags, ReliableBufferHeader, HEADER_SIZE};
use super::receiver::{GbnReceiver, ReceiverAction};
use super::sender::{GbnSender, SenderAction};
use crate::io::ByteSink;
use crate::validated_datagram::ValidatedDatagramLink;

/// A payload delivered upward by the Reliable Buffer Link, already
/// deduplicated and placed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedBuffer {
    /// The enclosed unit's type code.
    pub type_code: DataUnitTypeCode,
    /// The in-order payload bytes.
    pub payload: Vec<u8>,
}

/// The L5 link: Go-Back-N ARQ over a CRC-validated datagram transport.
pub struct ReliableBufferLink {
    validated: ValidatedDatagramLink,
    sender: GbnSender,
    receiver: GbnReceiver,
    /// Number of Reliable Buffers dropped for failing the L4 integrity
    /// check, exposed for tests and `tracing` observers per spec.md §7.
    pub integrity_failures: u64,
    /// Number of retransmissions the sender has performed.
    pub retransmissions: u64,
}

impl ReliableBufferLink {
    /// Largest payload this link can carry.
    pub const PAYLOAD_SIZE_LIMIT: usize = ValidatedDatagramLink::PAYLOAD_SIZE_LIMIT - HEADER_SIZE;

    /// Creates a link with empty sender/receiver state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validated: ValidatedDatagramLink::new(),
            sender: GbnSender::new(),
            receiver: GbnReceiver::new(),
            integrity_failures: 0,
            retransmissions: 0,
        }
    }

    /// Enqueues `payload` for reliable delivery and, if the sender's queue
    /// accepts it, transmits it immediately. Returns `false` (a refused
    /// send) if the payload is empty, too large, or the send queue is full.
    pub fn send(
        &mut self,
        payload: &[u8],
        type_code: DataUnitTypeCode,
        now_ms: u64,
        sink: &mut impl ByteSink,
    ) -> bool {
        if payload.is_empty() || payload.len() > Self::PAYLOAD_SIZE_LIMIT {
            return false;
        }
        if !self.sender.enqueue(payload.to_vec(), type_code, now_ms) {
            warn!(queue_capacity = crate::config::SEND_QUEUE, "reliable buffer send queue full");
            return false;
        }
        let Some((seq, type_code, payload)) = self.sender.segment_to_send_now() else {
            return false;
        };
        self.emit_one(seq, type_code, &payload, sink)
    }

    /// Advances time: retransmits the sender's queue past its deadline (or
    /// gives up and resets past [`crate::config::MAX_RETRIES`]), and emits
    /// a standalone control segment if the receiver's piggyback timer
    /// expired with no outgoing data to ride on.
    pub fn update(&mut self, now_ms: u64, sink: &mut impl ByteSink) {
        match self.sender.tick(now_ms) {
            SenderAction::Idle => {},
            SenderAction::Emit(segments) => {
                self.retransmissions += segments.len() as u64;
                debug!(count = segments.len(), "retransmitting reliable buffers");
                for (seq, type_code, payload) in segments {
                    self.emit_one(seq, type_code, &payload, sink);
                }
            },
            SenderAction::GiveUp => {
                warn!("reliable buffer link giving up after max retries, resetting");
                self.emit_reset(sink);
                self.receiver.reset();
            },
        }

        if let ReceiverAction::EmitControl(header) = self.receiver.tick(now_ms) {
            self.emit_header(header, &[], sink);
        }
    }

    /// Feeds one incoming byte. Returns the payload of an in-order,
    /// integrity-checked Reliable Buffer once one arrives; out-of-order,
    /// corrupted, or control-only segments yield `None` but still update
    /// internal ARQ state (ack processing, NAK handling, reset).
    pub fn receive_byte(
        &mut self,
        byte: u8,
        now_ms: u64,
        sink: &mut impl ByteSink,
    ) -> Option<ReceivedBuffer> {
        let validated = self.validated.receive_byte(byte)?;
        if !validated.valid {
            self.integrity_failures += 1;
            debug!(total = self.integrity_failures, "reliable buffer failed CRC check");
            return None;
        }
        if validated.type_code != RELIABLE_BUFFER {
            return None;
        }
        let header = ReliableBufferHeader::from_bytes(&validated.payload)?;
        let payload = validated.payload[HEADER_SIZE..].to_vec();

        if header.flags.ack {
            self.sender.acknowledge(header.ack, now_ms);
        }
        if header.flags.ack && header.flags.nak {
            let segments = self.sender.retransmit_all();
            self.retransmissions += segments.len() as u64;
            for (seq, type_code, retransmit_payload) in segments {
                self.emit_one(seq, type_code, &retransmit_payload, sink);
            }
        }

        let deliverable = self.receiver.receive(&header, now_ms);
        if header.flags.rst {
            self.sender.reset();
            return None;
        }
        if deliverable && !payload.is_empty() {
            Some(ReceivedBuffer { type_code: header.type_code, payload })
        } else {
            None
        }
    }

    fn emit_one(
        &mut self,
        seq: u8,
        type_code: DataUnitTypeCode,
        payload: &[u8],
        sink: &mut impl ByteSink,
    ) -> bool {
        let mut header = ReliableBufferHeader {
            seq,
            ack: 0,
            flags: ReliableBufferFlags::default(),
            type_code,
        };
        self.receiver.prepare(&mut header);
        let sent = self.emit_header(header, payload, sink);
        if sent {
            self.receiver.sent(&header);
        }
        sent
    }

    fn emit_reset(&mut self, sink: &mut impl ByteSink) -> bool {
        let header = ReliableBufferHeader {
            seq: 0,
            ack: 0,
            flags: ReliableBufferFlags { rst: true, ..Default::default() },
            type_code: phyllo_proto::data_unit_type::layer::CONTROL,
        };
        self.emit_header(header, &[], sink)
    }

    fn emit_header(&self, header: ReliableBufferHeader, payload: &[u8], sink: &mut impl ByteSink) -> bool {
        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(&header.to_bytes());
        buf.extend_from_slice(payload);
        self.validated.send(&buf, RELIABLE_BUFFER, sink)
    }
}

impl Default for ReliableBufferLink {
    fn default() -> Self {
        Self::new()
    }
}
