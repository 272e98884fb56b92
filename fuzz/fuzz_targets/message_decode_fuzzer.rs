//! Fuzz target for `Message::read`.
//!
//! # Strategy
//!
//! Arbitrary bytes handed to a fresh `Message`, including ones an upstream
//! validated transport would never forward (a `topic_len` byte that claims
//! more bytes than are present).
//!
//! # Invariants
//!
//! - `read` never panics, for any input length or content.
//! - All invalid inputs return a structured `PubSubError`, never a silent
//!   partial parse.

#![no_main]

use libfuzzer_sys::fuzz_target;
use phyllo_pubsub::Message;

fuzz_target!(|data: &[u8]| {
    let mut message = Message::new();
    let _ = message.read(data);
});
