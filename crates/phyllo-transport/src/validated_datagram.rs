//! Validated Datagram (L4): same shape as a Datagram, but the header
//! carries a CRC-32 over the protected region (`type ∥ payload`) instead of
//! a length. A corrupted datagram is dropped here and never reaches L5.

use phyllo_proto::crc::crc32;
use phyllo_proto::{DataUnitTypeCode, data_unit_type::bytes::BUFFER};

use crate::frame::FrameLink;
use crate::io::ByteSink;

const HEADER_SIZE: usize = 5; // 4-byte CRC + 1-byte type

/// A received Validated Datagram, with its integrity check already run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDatagram {
    /// The CRC-32 exactly as transmitted.
    pub crc: u32,
    /// The enclosed unit's type code.
    pub type_code: DataUnitTypeCode,
    /// The payload bytes following the header.
    pub payload: Vec<u8>,
    /// Whether the transmitted CRC matched the recomputed one.
    pub valid: bool,
}

/// The L4 link: a `FrameLink` plus CRC-32 protection of `type ∥ payload`.
pub struct ValidatedDatagramLink {
    frame: FrameLink,
}

impl ValidatedDatagramLink {
    /// Largest payload a Validated Datagram can carry.
    pub const PAYLOAD_SIZE_LIMIT: usize = FrameLink::PAYLOAD_SIZE_LIMIT - HEADER_SIZE;

    /// Creates a link with no pending datagram.
    #[must_use]
    pub fn new() -> Self {
        Self { frame: FrameLink::new() }
    }

    /// Sends `payload` tagged with `type_code`, computing and prepending
    /// the CRC-32 of `type ∥ payload`.
    pub fn send(&self, payload: &[u8], type_code: DataUnitTypeCode, sink: &mut impl ByteSink) -> bool {
        if payload.is_empty() || payload.len() > Self::PAYLOAD_SIZE_LIMIT {
            return false;
        }
        let mut protected = Vec::with_capacity(1 + payload.len());
        protected.push(type_code);
        protected.extend_from_slice(payload);
        let crc = crc32(&protected);

        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(&crc.to_be_bytes());
        buf.extend_from_slice(&protected);
        self.frame.send(&buf, sink)
    }

    /// Sends `payload` with the generic [`BUFFER`] type code.
    pub fn send_buffer(&self, payload: &[u8], sink: &mut impl ByteSink) -> bool {
        self.send(payload, BUFFER, sink)
    }

    /// Feeds one incoming byte. Returns a parsed [`ValidatedDatagram`] once
    /// a frame decodes and is at least long enough to hold the header; the
    /// caller must check [`ValidatedDatagram::valid`] before delivering it
    /// upward, since an integrity failure is not itself grounds to drop the
    /// parse (observers may still want to count it).
    pub fn receive_byte(&mut self, byte: u8) -> Option<ValidatedDatagram> {
        let bytes = self.frame.receive_byte(byte)?;
        parse(&bytes)
    }
}

impl Default for ValidatedDatagramLink {
    fn default() -> Self {
        Self::new()
    }
}

fn parse(bytes: &[u8]) -> Option<ValidatedDatagram> {
    if bytes.len() < HEADER_SIZE {
        return None;
    }
    let crc = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let type_code = bytes[4];
    let payload = bytes[HEADER_SIZE..].to_vec();
    let valid = crc32(&bytes[4..]) == crc;
    Some(ValidatedDatagram { crc, type_code, payload, valid })
}
