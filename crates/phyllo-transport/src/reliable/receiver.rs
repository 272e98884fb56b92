//! Go-Back-N receiver, including the piggyback-ACK timer.

use phyllo_proto::DataUnitTypeCode;
use phyllo_proto::data_unit_type::layer::CONTROL;

use super::header::{ReliableBufferFlags, ReliableBufferHeader};
use crate::config::PIGGYBACK_TIMEOUT_MS;

/// What the receiver wants the link to do after processing an incoming
/// segment or a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiverAction {
    /// Nothing to emit.
    Idle,
    /// The piggyback timer expired with no outgoing data to ride on; emit
    /// this standalone control header with an empty payload.
    EmitControl(ReliableBufferHeader),
}

/// Go-Back-N receiver half of the Reliable Buffer Link.
pub struct GbnReceiver {
    next_expected: u8,
    pending_nak: bool,
    sent_nak: bool,
    piggyback_deadline_ms: Option<u64>,
}

impl GbnReceiver {
    /// Creates a receiver expecting sequence number 0.
    #[must_use]
    pub fn new() -> Self {
        Self { next_expected: 0, pending_nak: false, sent_nak: false, piggyback_deadline_ms: None }
    }

    /// The next sequence number this receiver expects.
    #[must_use]
    pub fn next_expected(&self) -> u8 {
        self.next_expected
    }

    /// Processes an incoming Reliable Buffer header. Returns `true` iff the
    /// segment is in order and should be delivered upward. Arms the
    /// piggyback timer regardless of ordering, per spec.md §4.5.
    pub fn receive(&mut self, header: &ReliableBufferHeader, now_ms: u64) -> bool {
        if header.flags.rst {
            self.reset();
            return false;
        }

        let deliverable = header.flags.nos || header.seq == self.next_expected;
        if deliverable && !header.flags.nos {
            self.next_expected = self.next_expected.wrapping_add(1);
            self.pending_nak = false;
            self.sent_nak = false;
        } else if !header.flags.nos {
            self.pending_nak = true;
        }

        self.piggyback_deadline_ms = Some(now_ms + PIGGYBACK_TIMEOUT_MS);
        deliverable
    }

    /// Populates the ack-related fields of an outgoing header so the
    /// receiver's state rides piggyback on a downstream data segment.
    pub fn prepare(&self, header: &mut ReliableBufferHeader) {
        header.ack = self.next_expected;
        header.flags.ack = true;
        header.flags.nak = self.pending_nak && !self.sent_nak;
    }

    /// Records that `header` was actually sent: clears the piggyback timer
    /// and, if it carried a NAK, remembers that so the same gap is not
    /// re-reported.
    pub fn sent(&mut self, header: &ReliableBufferHeader) {
        self.piggyback_deadline_ms = None;
        if header.flags.nak {
            self.sent_nak = true;
        }
    }

    /// Advances time. If the piggyback timer has expired with nothing else
    /// having cleared it, returns a standalone control header to emit.
    pub fn tick(&mut self, now_ms: u64) -> ReceiverAction {
        let Some(deadline) = self.piggyback_deadline_ms else {
            return ReceiverAction::Idle;
        };
        if now_ms < deadline {
            return ReceiverAction::Idle;
        }
        let mut header = ReliableBufferHeader {
            seq: 0,
            ack: 0,
            flags: ReliableBufferFlags { nos: true, ..Default::default() },
            type_code: CONTROL,
        };
        self.prepare(&mut header);
        self.sent(&header);
        ReceiverAction::EmitControl(header)
    }

    /// Clears all receiver state, as required when an RST is sent or
    /// received.
    pub fn reset(&mut self) {
        self.next_expected = 0;
        self.pending_nak = false;
        self.sent_nak = false;
        self.piggyback_deadline_ms = None;
    }
}

impl Default for GbnReceiver {
    fn default() -> Self {
        Self::new()
    }
}

/// Type code carried on a standalone piggyback control segment.
pub const CONTROL_TYPE: DataUnitTypeCode = CONTROL;
