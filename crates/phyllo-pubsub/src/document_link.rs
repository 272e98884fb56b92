//! Pub/Sub Document Link (L8, per spec.md §4.8): a thin translator between
//! L6's [`phyllo_codec::Document`] and L7's [`Message`]. Downward, it packs
//! a Document plus a topic into a Message; upward, it matches an incoming
//! Message's payload type back to a Document. The topic is carried
//! verbatim; the Message's `type` field is fixed to
//! [`phyllo_codec::Document::TYPE_CODE`], mirroring the reference
//! implementation's `Application::PubSub::Document`, which is a
//! `Presentation::Document` subclass that adds only a topic field.

use phyllo_codec::Document;

use crate::error::PubSubError;
use crate::message::Message;

/// Packs `document` under `topic` into a [`Message`] whose payload is the
/// document's full serialized buffer (header included) and whose `type`
/// field is fixed to [`Document::TYPE_CODE`].
pub fn pack(document: &Document, topic: &[u8]) -> Result<Message, PubSubError> {
    let mut message = Message::new();
    message.write(topic, document.buffer(), Document::TYPE_CODE)?;
    Ok(message)
}

/// Unpacks `message`'s payload into a [`Document`], returning `None` if the
/// message's `type` field isn't [`Document::TYPE_CODE`] (some other
/// payload kind riding the same Message framing, e.g. a raw buffer) rather
/// than treating that as a parse failure.
#[must_use]
pub fn unpack(message: &Message) -> Option<Result<Document, PubSubError>> {
    if message.type_code() != Document::TYPE_CODE {
        return None;
    }
    let mut document = Document::new();
    Some(document.read(message.payload()).map(|()| document).map_err(|_| PubSubError::BufferTooShort {
        expected: phyllo_codec::DocumentHeader::SIZE,
        actual: message.payload().len(),
    }))
}
