//! Compile-time constants shared by every layer in this crate.
//!
//! These are the protocol-shape knobs spec.md's §6 documents as
//! "configuration (compile-time or boot-time)". They are `pub const`
//! rather than a runtime config struct because changing any of them
//! changes the wire contract itself; a peer must be recompiled with the
//! same values to interoperate, not reconfigured at boot.

/// Maximum size of a single L1 chunk, including the payload only (the
/// delimiter bytes are not part of the chunk). 127 on 8-bit targets via the
/// `small-chunks` feature, matching the reference implementation's reduced
/// buffer budget for memory-constrained microcontrollers.
#[cfg(not(feature = "small-chunks"))]
pub const CHUNK_SIZE_LIMIT: usize = 255;

/// See the non-`small-chunks` doc comment above.
#[cfg(feature = "small-chunks")]
pub const CHUNK_SIZE_LIMIT: usize = 127;

/// Default serial baud rate for a UART/USB-CDC byte source, informational
/// only: this crate never opens a port itself.
pub const SERIAL_RATE: u32 = 115_200;

/// Maximum number of endpoint handlers a Router may hold (`phyllo-pubsub`).
/// Declared here so every crate in the workspace shares one source of truth
/// for protocol-shape constants.
pub const ROUTER_CAPACITY: usize = 256;

/// Go-Back-N sender window size (number of unacknowledged segments the
/// sender may have in flight).
pub const SENDER_WINDOW: usize = 8;

/// Capacity of the Go-Back-N sender's queue of unacknowledged segments.
pub const SEND_QUEUE: usize = 8;

/// How long the receiver waits for outgoing traffic to piggyback an ACK/NAK
/// on before emitting a standalone control segment, in milliseconds.
pub const PIGGYBACK_TIMEOUT_MS: u64 = 4;

/// Per-segment retransmit timeout for the Go-Back-N sender, in milliseconds.
///
/// Not specified by the reference implementation (its `GBNSender::update`
/// is an unimplemented stub); this value is this implementation's own
/// choice of a timeout an order of magnitude above the piggyback timeout,
/// so a lightly loaded link ACKs before a retransmit would ever fire.
pub const RETRANSMIT_TIMEOUT_MS: u64 = 50;

/// Number of retransmit timeouts the sender tolerates for the oldest
/// unacknowledged segment before giving up and resetting the link.
pub const MAX_RETRIES: u32 = 5;
