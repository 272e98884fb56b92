//! Ported from `EchoHandler` in `examples/pubsub/Endpoints.h`: "a basic
//! example of how to write a basic single endpoint handler object" that
//! sends back exactly what it received.

use phyllo_pubsub::{Endpoint, Message, NameFilter, SingleEndpoint};

/// Re-sends every message it receives, unchanged.
pub struct EchoHandler {
    endpoint: Endpoint,
}

impl EchoHandler {
    /// Creates a handler scoped to the `"echo"` topic.
    #[must_use]
    pub fn new() -> Self {
        Self { endpoint: Endpoint::new(NameFilter::from("echo")) }
    }
}

impl Default for EchoHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleEndpoint for EchoHandler {
    fn endpoint(&mut self) -> &mut Endpoint {
        &mut self.endpoint
    }

    fn filter(&self) -> &NameFilter {
        self.endpoint.filter()
    }

    fn on_receive(&mut self, message: &Message) {
        let mut reply = Message::new();
        if reply.write(message.topic(), message.payload(), message.type_code()).is_ok() {
            self.endpoint.send(reply);
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::EchoHandler;
    use phyllo_proto::data_unit_type::presentation::DOCUMENT;
    use phyllo_pubsub::{EndpointHandler, Message};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn echo_sends_back_the_same_payload() {
        let mut handler = EchoHandler::new();
        let sent = Rc::new(RefCell::new(None));
        let sent_clone = sent.clone();
        handler.set_send_delegate(Box::new(move |message: &Message| {
            *sent_clone.borrow_mut() = Some(message.clone());
            true
        }));

        let mut incoming = Message::new();
        incoming.write(b"echo", b"hello!", DOCUMENT).expect("write succeeds");
        handler.receive(&incoming);

        let sent = sent.borrow();
        let sent = sent.as_ref().expect("echo sent a reply");
        assert_eq!(sent.topic(), b"echo");
        assert_eq!(sent.payload(), b"hello!");
        assert_eq!(sent.type_code(), DOCUMENT);
    }
}
