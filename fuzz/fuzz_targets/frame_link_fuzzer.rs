//! Fuzz target for `FrameLink::receive_byte` (L1+L2 combined).
//!
//! # Strategy
//!
//! Feed arbitrary bytes directly to a fresh link, as if they'd arrived over
//! a noisy serial line with no COBS or chunk-accumulator framing applied by
//! the fuzzer itself. This exercises the L1 overflow path and the L2 invalid-
//! jump-pointer path together, the way a real corrupted link would combine
//! both failure modes.
//!
//! # Invariants
//!
//! - `receive_byte` never panics on any input, of any length.
//! - Every payload it does decode stays within `FrameLink::PAYLOAD_SIZE_LIMIT`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use phyllo_transport::FrameLink;

fuzz_target!(|data: &[u8]| {
    let mut link = FrameLink::new();
    for &byte in data {
        if let Some(payload) = link.receive_byte(byte) {
            assert!(payload.len() <= FrameLink::PAYLOAD_SIZE_LIMIT);
        }
    }
});
