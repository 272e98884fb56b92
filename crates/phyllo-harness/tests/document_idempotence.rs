//! Property 8: Document idempotence. Reading a document's own serialized
//! buffer back into a fresh document reproduces a document byte-equal to
//! the original.

#![allow(clippy::expect_used)]

use phyllo_codec::Document;
use phyllo_proto::schema;
use proptest::prelude::*;

fn assert_idempotent(doc: &Document) {
    let mut roundtrip = Document::new();
    roundtrip.read(doc.buffer()).expect("read succeeds");
    assert_eq!(roundtrip.header, doc.header);
    assert_eq!(roundtrip.buffer(), doc.buffer());
}

#[test]
fn a_freshly_constructed_document_is_idempotent() {
    assert_idempotent(&Document::new());
}

#[test]
fn a_document_with_a_primitive_body_is_idempotent() {
    let mut doc = Document::new();
    doc.write(&7u32, schema::generic::primitive::UINT32).expect("write succeeds");
    assert_idempotent(&doc);
}

#[test]
fn a_document_with_a_string_body_is_idempotent() {
    let mut doc = Document::new();
    doc.write(&"hello!".to_string(), schema::generic::sequence::STRING16).expect("write succeeds");
    assert_idempotent(&doc);
}

proptest! {
    #[test]
    fn any_written_u32_document_is_idempotent(value in any::<u32>()) {
        let mut doc = Document::new();
        doc.write(&value, schema::generic::primitive::UINT32).expect("write succeeds");
        let mut roundtrip = Document::new();
        roundtrip.read(doc.buffer()).expect("read succeeds");
        prop_assert_eq!(roundtrip.buffer(), doc.buffer());
    }
}
