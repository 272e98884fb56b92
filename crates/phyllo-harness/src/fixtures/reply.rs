//! Ported from `ReplyHandler` in `examples/pubsub/Endpoints.h`: "reply
//! handling relies on encapsulated data, so it's handled by a single
//! endpoint handler object" — it always answers with the same pre-built
//! document regardless of what it is sent.

use phyllo_codec::Document;
use phyllo_proto::schema::generic::sequence::STRING16;
use phyllo_pubsub::{Endpoint, Message, NameFilter, SingleEndpoint, pack};

/// Replies to every message on the `"reply"` topic with the fixed MsgPack
/// string `"hello!"`, tagged with the [`STRING16`] schema.
pub struct ReplyHandler {
    endpoint: Endpoint,
    reply: Document,
}

impl ReplyHandler {
    /// Creates a handler scoped to the `"reply"` topic. The reply document's
    /// body is built once here, matching `ReplyHandler::setup()` in the
    /// reference implementation (the comment there notes this really
    /// belongs in the enclosing node's setup, not the handler's).
    #[must_use]
    pub fn new() -> Self {
        let mut reply = Document::new();
        let _ = reply.write(&"hello!".to_string(), STRING16);
        Self { endpoint: Endpoint::new(NameFilter::from("reply")), reply }
    }
}

impl Default for ReplyHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleEndpoint for ReplyHandler {
    fn endpoint(&mut self) -> &mut Endpoint {
        &mut self.endpoint
    }

    fn filter(&self) -> &NameFilter {
        self.endpoint.filter()
    }

    fn on_receive(&mut self, _message: &Message) {
        if let Ok(message) = pack(&self.reply, self.endpoint.filter().bytes()) {
            self.endpoint.send(message);
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::ReplyHandler;
    use phyllo_codec::Document;
    use phyllo_proto::data_unit_type::presentation::DOCUMENT;
    use phyllo_proto::schema::generic::sequence::STRING16;
    use phyllo_pubsub::{EndpointHandler, Message};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn reply_always_answers_with_the_fixed_hello_document() {
        let mut handler = ReplyHandler::new();
        let sent = Rc::new(RefCell::new(None));
        let sent_clone = sent.clone();
        handler.set_send_delegate(Box::new(move |message: &Message| {
            *sent_clone.borrow_mut() = Some(message.clone());
            true
        }));

        let mut incoming = Message::new();
        incoming.write(b"reply", b"anything", DOCUMENT).expect("write succeeds");
        handler.receive(&incoming);

        let sent = sent.borrow();
        let sent = sent.as_ref().expect("reply sent a message");
        assert_eq!(sent.topic(), b"reply");

        let mut document = Document::new();
        document.read(sent.payload()).expect("parses as a document");
        assert_eq!(document.header.schema, STRING16);
        let value: String = document.read_payload().expect("decodes as a string");
        assert_eq!(value, "hello!");
    }
}
