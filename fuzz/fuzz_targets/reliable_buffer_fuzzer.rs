//! Fuzz target for `ReliableBufferLink::receive_byte` (L1..L5 combined).
//!
//! # Strategy
//!
//! A sequence of (byte, time-advance) pairs drives the link through
//! arbitrary wire bytes interleaved with arbitrary piggyback/retransmit
//! timer ticks, the shape most likely to surface a state-machine bug in the
//! Go-Back-N sender/receiver pairing that a pure byte fuzzer would miss.
//!
//! # Invariants
//!
//! - `receive_byte` and `update` never panic, for any interleaving.
//! - The receiver's reported `integrity_failures` never exceeds the number
//!   of bytes fed in (a trivial sanity bound, not a tight one).

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phyllo_transport::ReliableBufferLink;
use phyllo_transport::io::ByteSink;

#[derive(Debug, Clone, Arbitrary)]
enum Step {
    Recv(u8),
    Advance(u8),
}

#[derive(Default)]
struct SinkCounter(u64);
impl ByteSink for SinkCounter {
    fn write_byte(&mut self, _byte: u8) -> bool {
        self.0 += 1;
        true
    }
}

fuzz_target!(|steps: Vec<Step>| {
    let mut link = ReliableBufferLink::new();
    let mut sink = SinkCounter::default();
    let mut now_ms: u64 = 0;
    let mut fed = 0u64;

    for step in steps {
        match step {
            Step::Recv(byte) => {
                fed += 1;
                let _ = link.receive_byte(byte, now_ms, &mut sink);
            },
            Step::Advance(delta) => {
                now_ms += u64::from(delta);
                link.update(now_ms, &mut sink);
            },
        }
    }

    assert!(link.integrity_failures <= fed);
});
