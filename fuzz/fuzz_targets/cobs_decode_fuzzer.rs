//! Fuzz target for the COBS decoder.
//!
//! # Strategy
//!
//! Arbitrary byte sequences, including ones a real L1 chunk accumulator
//! would never hand it (embedded zeros, truncated jump pointers, lone code
//! bytes at either end of the 0xff block boundary).
//!
//! # Invariants
//!
//! - `decode` never panics, regardless of input.
//! - A successful decode never re-encodes to something longer than
//!   `encoded_len` predicts for its own length.
//! - `decode_to_vec` on the output of `encode_to_vec` always recovers the
//!   original payload.

#![no_main]

use libfuzzer_sys::fuzz_target;
use phyllo_proto::cobs;

fuzz_target!(|data: &[u8]| {
    let mut decoded = Vec::new();
    let _ = cobs::decode(data, &mut decoded);

    let encoded = cobs::encode_to_vec(data);
    assert!(!encoded.contains(&0), "a COBS frame must never contain a literal zero");
    assert_eq!(encoded.len(), cobs::encoded_len(data.len()));
    assert_eq!(cobs::decode_to_vec(&encoded), data);
});
