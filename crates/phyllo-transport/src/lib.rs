//! Byte-stream, framing, datagram, and reliable-link layers (L1 through
//! L5) of the Phyllo protocol stack, and the three conventional transport
//! compositions built from them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chunk;
pub mod clock;
pub mod config;
pub mod datagram;
pub mod error;
pub mod frame;
pub mod io;
pub mod reliable;
pub mod stack;
pub mod validated_datagram;

pub use clock::Clock;
pub use datagram::{Datagram, DatagramLink};
pub use error::TransportError;
pub use frame::FrameLink;
pub use io::{ByteSink, ByteSource};
pub use reliable::{ReceivedBuffer, ReliableBufferLink};
pub use stack::{MinimalStack, ReducedStack, StandardStack};
pub use validated_datagram::{ValidatedDatagram, ValidatedDatagramLink};
