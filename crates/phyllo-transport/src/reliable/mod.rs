//! Reliable Buffer Link (L5): Go-Back-N ARQ over a Validated Datagram link.

mod header;
mod link;
mod receiver;
mod sender;

pub use header::{ReliableBufferFlags, ReliableBufferHeader, HEADER_SIZE};
pub use link::{ReceivedBuffer, ReliableBufferLink};
pub use receiver::{GbnReceiver, ReceiverAction};
pub use sender::{GbnSender, SenderAction};
