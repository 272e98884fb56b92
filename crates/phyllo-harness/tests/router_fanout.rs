//! Property 6: router fan-out. For any set of handlers configured with
//! distinct filters and an incoming document, exactly the handlers whose
//! filter matches the document's topic are invoked.

#![allow(clippy::expect_used)]

use phyllo_harness::fixtures::EchoHandler;
use phyllo_proto::data_unit_type::presentation::DOCUMENT;
use phyllo_pubsub::{Endpoint, EndpointHandler, Message, NameFilter, Router, SingleEndpoint};

struct Recorder {
    endpoint: Endpoint,
    hits: usize,
}

impl SingleEndpoint for Recorder {
    fn endpoint(&mut self) -> &mut Endpoint {
        &mut self.endpoint
    }

    fn filter(&self) -> &NameFilter {
        self.endpoint.filter()
    }

    fn on_receive(&mut self, _message: &Message) {
        self.hits += 1;
    }
}

fn recorder(filter: &str) -> Recorder {
    Recorder { endpoint: Endpoint::new(NameFilter::from(filter)), hits: 0 }
}

#[test]
fn only_handlers_with_a_matching_filter_are_invoked() {
    let mut router = Router::new();
    router.register(Box::new(recorder("echo")));
    router.register(Box::new(recorder("reply")));
    router.register(Box::new(recorder("blink")));
    router.register(Box::new(recorder("ping")));

    let mut document = Message::new();
    document.write(b"reply", b"x", DOCUMENT).expect("write succeeds");
    let delivered = router.receive(&document);

    assert_eq!(delivered, 1, "only the \"reply\" filter should have matched");
}

#[test]
fn distinct_filters_each_receive_their_own_topic_independently() {
    let mut router = Router::new();
    router.register(Box::new(recorder("a")));
    router.register(Box::new(recorder("b")));
    router.register(Box::new(recorder("c")));

    for topic in [b"a".as_slice(), b"b", b"c", b"a"] {
        let mut document = Message::new();
        document.write(topic, b"x", DOCUMENT).expect("write succeeds");
        assert_eq!(router.receive(&document), 1);
    }
}

#[test]
fn a_real_handler_registered_in_a_router_still_dispatches_correctly() {
    let mut router = Router::new();
    router.register(Box::new(EchoHandler::new()));
    router.register(Box::new(recorder("silent")));

    let mut document = Message::new();
    document.write(b"echo", b"hi", DOCUMENT).expect("write succeeds");
    assert_eq!(router.receive(&document), 1);
}
