//! Endpoint dispatch (L8, per spec.md §4.9), ported from `Endpoint` and
//! `SingleEndpointHandler` in the reference implementation's
//! `Application/Endpoint.h` and `Application/PubSub/Endpoint.h`.
//!
//! The reference implementation models a handler hierarchy with virtual
//! `setup`/`update`/`receive` methods and a non-owning `EndpointHandler*`
//! held by the router. Rust has no free lunch for that inheritance, so an
//! [`Endpoint`] here is a plain value a handler owns, and [`EndpointHandler`]
//! is the trait a [`crate::Router`] dispatches through; [`SingleEndpoint`]
//! supplies the common case (one endpoint, one filter) via a blanket impl,
//! mirroring `SingleEndpointHandler`'s convenience over the generic base.

use crate::filter::NameFilter;
use crate::message::Message;

/// A topic-addressed mailbox: a [`NameFilter`] deciding which incoming
/// messages are in scope, and an outgoing send delegate that stamps the
/// filter's bytes onto the topic of anything sent through it.
pub struct Endpoint {
    filter: NameFilter,
    send: Option<Box<dyn FnMut(&Message) -> bool>>,
}

impl Endpoint {
    /// Creates an endpoint scoped to `filter`, with no send delegate wired
    /// up yet.
    #[must_use]
    pub fn new(filter: NameFilter) -> Self {
        Self { filter, send: None }
    }

    /// This endpoint's filter.
    #[must_use]
    pub fn filter(&self) -> &NameFilter {
        &self.filter
    }

    /// Wires up the delegate this endpoint forwards outgoing messages
    /// through, typically a `Router`'s or a transport stack's send method
    /// partially applied over its own state.
    pub fn set_send_delegate(&mut self, send: Box<dyn FnMut(&Message) -> bool>) {
        self.send = Some(send);
    }

    /// Whether `message` is addressed to this endpoint's filter.
    #[must_use]
    pub fn accepts(&self, message: &Message) -> bool {
        self.filter.matches(message.topic())
    }

    /// Forwards `message` through the send delegate after stamping its
    /// topic with this endpoint's filter bytes. Returns `false` if no
    /// delegate is wired up, if the stamped topic no longer fits the
    /// message, or if the delegate itself refuses the send.
    pub fn send(&mut self, mut message: Message) -> bool {
        let Some(send) = self.send.as_mut() else { return false };
        if message.set_topic(self.filter.bytes()).is_err() {
            return false;
        }
        send(&message)
    }
}

/// The per-message-tick lifecycle a [`crate::Router`] drives every handler
/// through, mirroring the reference implementation's `EndpointHandler`
/// interface (`setup`, `update`, `receive`).
pub trait EndpointHandler {
    /// Called once before the first `update`/`receive`, e.g. to send an
    /// initial message.
    fn setup(&mut self) {}

    /// Called on every router tick with the current time in milliseconds.
    fn update(&mut self, now_ms: u32) {
        let _ = now_ms;
    }

    /// Called for every message the router routes to this handler's
    /// endpoint.
    fn receive(&mut self, message: &Message);

    /// Wires up the send delegate this handler's endpoint(s) forward
    /// outgoing messages through.
    fn set_send_delegate(&mut self, send: Box<dyn FnMut(&Message) -> bool>);

    /// The filter this handler's endpoint is scoped to, used by the router
    /// to decide whether an incoming message should reach [`Self::receive`].
    fn filter(&self) -> &NameFilter;
}

/// A handler built around exactly one [`Endpoint`], the common case the
/// reference implementation's `SingleEndpointHandler` exists to simplify.
/// Implement this and get [`EndpointHandler`] for free via the blanket impl
/// below.
pub trait SingleEndpoint {
    /// The endpoint this handler dispatches through.
    fn endpoint(&mut self) -> &mut Endpoint;

    /// The filter of the endpoint returned by [`Self::endpoint`]. Typically
    /// just `&self.endpoint_field.filter()`; kept separate from
    /// [`Self::endpoint`] because the router needs it from a shared
    /// reference.
    fn filter(&self) -> &NameFilter;

    /// Called once before the first tick.
    fn on_setup(&mut self) {}

    /// Called on every router tick.
    fn on_update(&mut self, now_ms: u32) {
        let _ = now_ms;
    }

    /// Called for every message accepted by [`Self::endpoint`]'s filter.
    fn on_receive(&mut self, message: &Message);
}

impl<T: SingleEndpoint> EndpointHandler for T {
    fn setup(&mut self) {
        self.on_setup();
    }

    fn update(&mut self, now_ms: u32) {
        self.on_update(now_ms);
    }

    fn receive(&mut self, message: &Message) {
        self.on_receive(message);
    }

    fn set_send_delegate(&mut self, send: Box<dyn FnMut(&Message) -> bool>) {
        self.endpoint().set_send_delegate(send);
    }

    fn filter(&self) -> &NameFilter {
        SingleEndpoint::filter(self)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::{Endpoint, EndpointHandler, SingleEndpoint};
    use crate::filter::NameFilter;
    use crate::message::Message;
    use phyllo_proto::data_unit_type::presentation::DOCUMENT;

    struct Echo {
        endpoint: Endpoint,
        received: Vec<Vec<u8>>,
    }

    impl SingleEndpoint for Echo {
        fn endpoint(&mut self) -> &mut Endpoint {
            &mut self.endpoint
        }

        fn filter(&self) -> &NameFilter {
            self.endpoint.filter()
        }

        fn on_receive(&mut self, message: &Message) {
            self.received.push(message.payload().to_vec());
            let mut reply = Message::new();
            reply.write(message.topic(), message.payload(), message.type_code()).expect("write succeeds");
            self.endpoint.send(reply);
        }
    }

    #[test]
    fn endpoint_accepts_only_matching_topics() {
        let endpoint = Endpoint::new(NameFilter::from("echo"));
        let mut matching = Message::new();
        matching.write(b"echo", b"x", DOCUMENT).expect("write succeeds");
        let mut other = Message::new();
        other.write(b"other", b"x", DOCUMENT).expect("write succeeds");

        assert!(endpoint.accepts(&matching));
        assert!(!endpoint.accepts(&other));
    }

    #[test]
    fn send_without_a_delegate_fails() {
        let mut endpoint = Endpoint::new(NameFilter::from("echo"));
        let mut message = Message::new();
        message.write(b"echo", b"x", DOCUMENT).expect("write succeeds");
        assert!(!endpoint.send(message));
    }

    #[test]
    fn send_stamps_the_filter_bytes_onto_the_topic() {
        let mut endpoint = Endpoint::new(NameFilter::from("reply"));
        let sent = std::rc::Rc::new(std::cell::RefCell::new(None));
        let sent_clone = sent.clone();
        endpoint.set_send_delegate(Box::new(move |message: &Message| {
            *sent_clone.borrow_mut() = Some(message.clone());
            true
        }));

        let mut message = Message::new();
        message.write(b"anything", b"payload", DOCUMENT).expect("write succeeds");
        assert!(endpoint.send(message));

        let sent = sent.borrow();
        assert_eq!(sent.as_ref().expect("delegate ran").topic(), b"reply");
    }

    #[test]
    fn the_blanket_endpoint_handler_impl_dispatches_through_single_endpoint() {
        let mut echo = Echo { endpoint: Endpoint::new(NameFilter::from("echo")), received: Vec::new() };
        echo.set_send_delegate(Box::new(|_message: &Message| true));

        assert_eq!(EndpointHandler::filter(&echo), &NameFilter::from("echo"));

        let mut message = Message::new();
        message.write(b"echo", b"hello!", DOCUMENT).expect("write succeeds");
        EndpointHandler::receive(&mut echo, &message);
        assert_eq!(echo.received, vec![b"hello!".to_vec()]);
    }
}
