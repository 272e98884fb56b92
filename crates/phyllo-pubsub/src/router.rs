//! The Router (L8, per spec.md §4.9), ported from `Router` in the reference
//! implementation's `Application/Router.h`. The reference keeps a
//! fixed-capacity array of non-owning `EndpointHandler*`; here a `Router`
//! owns its handlers outright (there is no embedded-arena constraint to
//! honor on the host side of this stack) and fans `setup`/`update`/
//! `receive` out to each of them in registration order.

use phyllo_transport::config::ROUTER_CAPACITY;

use crate::endpoint::EndpointHandler;
use crate::message::Message;

/// Fans incoming messages, ticks, and setup out to every registered
/// [`EndpointHandler`] whose filter accepts them.
#[derive(Default)]
pub struct Router {
    handlers: Vec<Box<dyn EndpointHandler>>,
}

impl Router {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Registers `handler`, returning its index for later reference if
    /// needed. Does not enforce [`ROUTER_CAPACITY`]; a router with more
    /// handlers than that simply departs from the reference implementation's
    /// sizing assumption without losing correctness.
    pub fn register(&mut self, handler: Box<dyn EndpointHandler>) -> usize {
        self.handlers.push(handler);
        self.handlers.len() - 1
    }

    /// The number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Calls `setup` on every registered handler, in registration order.
    pub fn setup(&mut self) {
        for handler in &mut self.handlers {
            handler.setup();
        }
    }

    /// Calls `update(now_ms)` on every registered handler, in registration
    /// order.
    pub fn update(&mut self, now_ms: u32) {
        for handler in &mut self.handlers {
            handler.update(now_ms);
        }
    }

    /// Delivers `message` to every registered handler whose filter matches
    /// its topic, returning the number of handlers it was delivered to.
    pub fn receive(&mut self, message: &Message) -> usize {
        let mut delivered = 0;
        for handler in &mut self.handlers {
            if handler.filter().matches(message.topic()) {
                handler.receive(message);
                delivered += 1;
            }
        }
        delivered
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::Router;
    use crate::endpoint::{Endpoint, SingleEndpoint};
    use crate::filter::NameFilter;
    use crate::message::Message;
    use phyllo_proto::data_unit_type::presentation::DOCUMENT;

    struct Counter {
        endpoint: Endpoint,
        count: usize,
    }

    impl SingleEndpoint for Counter {
        fn endpoint(&mut self) -> &mut Endpoint {
            &mut self.endpoint
        }

        fn filter(&self) -> &NameFilter {
            self.endpoint.filter()
        }

        fn on_receive(&mut self, _message: &Message) {
            self.count += 1;
        }
    }

    #[test]
    fn receive_only_reaches_handlers_whose_filter_matches() {
        let mut router = Router::new();
        router.register(Box::new(Counter { endpoint: Endpoint::new(NameFilter::from("a")), count: 0 }));
        router.register(Box::new(Counter { endpoint: Endpoint::new(NameFilter::from("b")), count: 0 }));

        let mut message = Message::new();
        message.write(b"a", b"x", DOCUMENT).expect("write succeeds");
        let delivered = router.receive(&message);

        assert_eq!(delivered, 1);
    }

    #[test]
    fn receive_fans_out_to_every_matching_handler() {
        let mut router = Router::new();
        router.register(Box::new(Counter { endpoint: Endpoint::new(NameFilter::from("all")), count: 0 }));
        router.register(Box::new(Counter { endpoint: Endpoint::new(NameFilter::from("all")), count: 0 }));

        let mut message = Message::new();
        message.write(b"all", b"x", DOCUMENT).expect("write succeeds");
        let delivered = router.receive(&message);

        assert_eq!(delivered, 2);
    }

    #[test]
    fn an_empty_router_delivers_nothing() {
        let mut router = Router::new();
        assert!(router.is_empty());
        let mut message = Message::new();
        message.write(b"a", b"x", DOCUMENT).expect("write succeeds");
        assert_eq!(router.receive(&message), 0);
    }
}
