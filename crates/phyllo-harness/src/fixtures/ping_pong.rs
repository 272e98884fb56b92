//! Ported from `PingPongHandler` in `examples/pubsub/Endpoints.h`: "ping-pong
//! handling relies on internal state and works on two endpoints, so it's
//! handled by a general endpoint handler object" — an example of a handler
//! built directly against [`EndpointHandler`] rather than [`SingleEndpoint`]
//! because it owns more than one [`Endpoint`].

use phyllo_codec::Document;
use phyllo_proto::schema::generic::primitive::UINT64;
use phyllo_pubsub::{Endpoint, EndpointHandler, Message, NameFilter, pack};

/// Counts every message received on `"ping"`, replying on `"pong"` with the
/// count so far.
pub struct PingPongHandler {
    ping: Endpoint,
    pong: Endpoint,
    counter: u64,
}

impl PingPongHandler {
    /// Creates a handler listening on `"ping"` and replying on `"pong"`.
    #[must_use]
    pub fn new() -> Self {
        Self { ping: Endpoint::new(NameFilter::from("ping")), pong: Endpoint::new(NameFilter::from("pong")), counter: 0 }
    }

    /// The number of ping messages answered so far.
    #[must_use]
    pub fn counter(&self) -> u64 {
        self.counter
    }
}

impl Default for PingPongHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointHandler for PingPongHandler {
    fn setup(&mut self) {
        self.counter = 0;
    }

    fn receive(&mut self, message: &Message) {
        if !self.ping.accepts(message) {
            return;
        }

        let mut pong = Document::new();
        if pong.write(&self.counter, UINT64).is_err() {
            return;
        }
        if let Ok(outgoing) = pack(&pong, self.pong.filter().bytes()) {
            self.pong.send(outgoing);
        }
        self.counter += 1;
    }

    fn set_send_delegate(&mut self, send: Box<dyn FnMut(&Message) -> bool>) {
        // Both endpoints share one downstream sink; the reference
        // implementation's `ToSendDelegate` is likewise a single callback
        // handed to every endpoint the handler owns.
        self.pong.set_send_delegate(send);
    }

    fn filter(&self) -> &NameFilter {
        self.ping.filter()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::PingPongHandler;
    use phyllo_codec::Document;
    use phyllo_proto::data_unit_type::presentation::DOCUMENT;
    use phyllo_proto::schema::generic::primitive::UINT64;
    use phyllo_pubsub::{EndpointHandler, Message};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn each_ping_replies_on_pong_with_an_increasing_counter() {
        let mut handler = PingPongHandler::new();
        let sent = Rc::new(RefCell::new(Vec::new()));
        let sent_clone = sent.clone();
        handler.set_send_delegate(Box::new(move |message: &Message| {
            sent_clone.borrow_mut().push(message.clone());
            true
        }));

        let mut ping = Message::new();
        ping.write(b"ping", &[0x00], DOCUMENT).expect("write succeeds");

        handler.receive(&ping);
        handler.receive(&ping);

        let sent = sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].topic(), b"pong");

        let mut first = Document::new();
        first.read(sent[0].payload()).expect("parses");
        assert_eq!(first.header.schema, UINT64);
        let first_count: u64 = first.read_payload().expect("decodes");
        assert_eq!(first_count, 0);

        let mut second = Document::new();
        second.read(sent[1].payload()).expect("parses");
        let second_count: u64 = second.read_payload().expect("decodes");
        assert_eq!(second_count, 1);
    }

    #[test]
    fn a_message_on_a_different_topic_is_ignored() {
        let mut handler = PingPongHandler::new();
        handler.set_send_delegate(Box::new(|_message| true));

        let mut other = Message::new();
        other.write(b"elsewhere", b"x", DOCUMENT).expect("write succeeds");
        handler.receive(&other);
        assert_eq!(handler.counter(), 0);
    }
}
