//! Deterministic, in-memory test infrastructure for the Phyllo protocol
//! stack: a scripted-loss byte-stream loopback, an injected millisecond
//! clock, and a handful of fixture endpoint handlers ported from the
//! reference implementation's `examples/pubsub/Endpoints.h`.
//!
//! Nothing in this crate is part of the protocol itself; it exists so the
//! other crates' integration tests can drive a full stack end to end
//! without a real byte source, a real clock, or an async runtime.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod clock;
pub mod fixtures;
pub mod loopback;

pub use clock::TestClock;
pub use loopback::{RecordingSink, VecSource, drop_message, split_messages};
