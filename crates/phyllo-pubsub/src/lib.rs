//! Topic-addressed pub/sub messaging and endpoint/router dispatch (L7-L8)
//! of the Phyllo protocol stack, ported from the reference implementation's
//! `Application` module (`Message.h`, `Endpoint.h`, `Router.h`, and their
//! `PubSub` specializations).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

mod document_link;
mod endpoint;
mod error;
mod filter;
mod message;
mod message_link;
mod router;

pub use document_link::{pack, unpack};
pub use endpoint::{Endpoint, EndpointHandler, SingleEndpoint};
pub use error::PubSubError;
pub use filter::NameFilter;
pub use message::{Message, MessageHeader};
pub use message_link::{receive, send, send_buffer};
pub use phyllo_transport::config::ROUTER_CAPACITY;
pub use router::Router;
