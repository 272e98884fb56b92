//! Injected time source.
//!
//! The protocol core never reads the system clock itself: every timer
//! (the ARQ piggyback timer and retransmit deadlines) is driven by a
//! monotonic millisecond count handed in by the host's event loop, so the
//! same state machine runs unmodified under a real clock, a deterministic
//! test harness, or a `no_std` target with its own timebase.

/// A monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since an arbitrary, implementation-defined epoch. Must
    /// be non-decreasing across calls.
    fn now_ms(&self) -> u64;
}
