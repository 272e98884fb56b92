//! Fuzz target for `Document::read` and the MessagePack primitive readers
//! reached through it.
//!
//! # Strategy
//!
//! Arbitrary bytes as a Document buffer (format/schema header plus whatever
//! MessagePack-shaped body follows), then an attempt to decode the body as
//! several different primitive types regardless of what the schema byte
//! actually claims — type confusion is exactly the case the reader must
//! reject structurally rather than by trusting the schema tag.
//!
//! # Invariants
//!
//! - `Document::read` never panics.
//! - `read_payload::<T>` never panics for any `T` attempted here, regardless
//!   of whether the schema byte matches.

#![no_main]

use libfuzzer_sys::fuzz_target;
use phyllo_codec::Document;

fuzz_target!(|data: &[u8]| {
    let mut document = Document::new();
    if document.read(data).is_err() {
        return;
    }

    let _ = document.read_payload::<u32>();
    let _ = document.read_payload::<u64>();
    let _ = document.read_payload::<bool>();
    let _ = document.read_payload::<f64>();
    let _ = document.read_payload::<String>();
    let _ = document.read_payload::<Vec<u8>>();
});
