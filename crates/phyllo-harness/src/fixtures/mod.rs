//! Fixture endpoint handlers ported from the reference implementation's
//! `examples/pubsub/Endpoints.h`, used by this workspace's end-to-end tests
//! in place of a real device's application layer.

mod blink;
mod echo;
mod ping_pong;
mod reply;

pub use blink::BlinkHandler;
pub use echo::EchoHandler;
pub use ping_pong::PingPongHandler;
pub use reply::ReplyHandler;
