//! The Pub/Sub Message (L7): `[type, topic_len, topic…, payload…]`, ported
//! from `Message`/`MessageHeader` in the reference implementation's
//! `Application/PubSub/Message.h`.

use phyllo_proto::DataUnitTypeCode;
use phyllo_proto::data_unit_type::{application::PUB_SUB, bytes::BUFFER};
use phyllo_transport::ReliableBufferLink;

use crate::error::PubSubError;

/// `[type: u8][topic_len: u8]`, the two-byte header every Message carries
/// ahead of its topic and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    /// The type code of the enclosed payload (usually
    /// [`phyllo_codec::Document::TYPE_CODE`]).
    pub type_code: DataUnitTypeCode,
    /// The topic's length in bytes, at most [`Message::TOPIC_SIZE_LIMIT`].
    pub topic_len: u8,
}

impl MessageHeader {
    /// Size in bytes of the encoded header.
    pub const SIZE: usize = 2;
}

/// A topic-addressed payload: a `type` tag, a short topic name, and a
/// payload (normally the serialized buffer of a
/// [`phyllo_codec::Document`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// The message's `[type, topic_len]` header.
    pub header: MessageHeader,
    topic: Vec<u8>,
    payload: Vec<u8>,
}

impl Message {
    /// The data unit type code a Message is carried as by the transport
    /// below it.
    pub const TYPE_CODE: DataUnitTypeCode = PUB_SUB;

    /// Largest topic a Message can carry, per spec.md §3.
    pub const TOPIC_SIZE_LIMIT: usize = 15;

    /// Largest combined `topic.len() + payload.len()` a Message can carry,
    /// derived from the Reliable Buffer Link's payload limit the way the
    /// reference implementation derives `Message::kBodySizeLimit` from
    /// `ReliableBuffer::kPayloadSizeLimit`.
    pub const BODY_SIZE_LIMIT: usize = ReliableBufferLink::PAYLOAD_SIZE_LIMIT - MessageHeader::SIZE;

    /// Creates an empty message with an empty topic and payload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: MessageHeader { type_code: BUFFER, topic_len: 0 },
            topic: Vec::new(),
            payload: Vec::new(),
        }
    }

    /// This message's topic.
    #[must_use]
    pub fn topic(&self) -> &[u8] {
        &self.topic
    }

    /// This message's payload (the bytes following the topic).
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// This message's payload type code.
    #[must_use]
    pub fn type_code(&self) -> DataUnitTypeCode {
        self.header.type_code
    }

    /// Serializes this message to its `[type, topic_len, topic, payload]`
    /// wire form.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(MessageHeader::SIZE + self.topic.len() + self.payload.len());
        buf.push(self.header.type_code);
        buf.push(self.header.topic_len);
        buf.extend_from_slice(&self.topic);
        buf.extend_from_slice(&self.payload);
        buf
    }

    /// Replaces this message's topic and payload, tagged with `type_code`.
    /// Refuses an empty payload, a topic over [`Self::TOPIC_SIZE_LIMIT`]
    /// bytes, or a combined body over [`Self::BODY_SIZE_LIMIT`] bytes,
    /// leaving the message unchanged.
    pub fn write(
        &mut self,
        topic: &[u8],
        payload: &[u8],
        type_code: DataUnitTypeCode,
    ) -> Result<(), PubSubError> {
        if payload.is_empty() {
            return Err(PubSubError::EmptyPayload);
        }
        if topic.len() > Self::TOPIC_SIZE_LIMIT {
            return Err(PubSubError::TopicTooLong { len: topic.len(), limit: Self::TOPIC_SIZE_LIMIT });
        }
        let size = topic.len() + payload.len();
        if size > Self::BODY_SIZE_LIMIT {
            return Err(PubSubError::MessageTooLarge { size, limit: Self::BODY_SIZE_LIMIT });
        }
        self.header = MessageHeader { type_code, topic_len: topic.len() as u8 };
        self.topic = topic.to_vec();
        self.payload = payload.to_vec();
        Ok(())
    }

    /// Rewrites this message's topic in place, leaving its payload and type
    /// code untouched. Used by [`crate::Endpoint::send`] to stamp an
    /// outgoing message with the endpoint's canonical filter bytes.
    pub fn set_topic(&mut self, topic: &[u8]) -> Result<(), PubSubError> {
        if topic.len() > Self::TOPIC_SIZE_LIMIT {
            return Err(PubSubError::TopicTooLong { len: topic.len(), limit: Self::TOPIC_SIZE_LIMIT });
        }
        let size = topic.len() + self.payload.len();
        if size > Self::BODY_SIZE_LIMIT {
            return Err(PubSubError::MessageTooLarge { size, limit: Self::BODY_SIZE_LIMIT });
        }
        self.header.topic_len = topic.len() as u8;
        self.topic = topic.to_vec();
        Ok(())
    }

    /// Parses `buffer` into a header, topic, and payload, replacing this
    /// message's contents.
    pub fn read(&mut self, buffer: &[u8]) -> Result<(), PubSubError> {
        if buffer.len() < MessageHeader::SIZE {
            return Err(PubSubError::BufferTooShort { expected: MessageHeader::SIZE, actual: buffer.len() });
        }
        let type_code = buffer[0];
        let topic_len = buffer[1];
        let rest = &buffer[MessageHeader::SIZE..];
        if usize::from(topic_len) > rest.len() {
            return Err(PubSubError::TopicLengthOverrun {
                topic_len: usize::from(topic_len),
                actual: rest.len(),
            });
        }
        let (topic, payload) = rest.split_at(usize::from(topic_len));
        self.header = MessageHeader { type_code, topic_len };
        self.topic = topic.to_vec();
        self.payload = payload.to_vec();
        Ok(())
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::Message;
    use phyllo_proto::data_unit_type::presentation::DOCUMENT;

    #[test]
    fn write_then_read_round_trips_topic_and_payload() {
        let mut message = Message::new();
        message.write(b"echo", b"hello!", DOCUMENT).expect("write succeeds");

        let mut roundtrip = Message::new();
        roundtrip.read(&message.to_bytes()).expect("read succeeds");
        assert_eq!(roundtrip.topic(), b"echo");
        assert_eq!(roundtrip.payload(), b"hello!");
        assert_eq!(roundtrip.type_code(), DOCUMENT);
    }

    #[test]
    fn write_refuses_a_topic_over_the_size_limit() {
        let mut message = Message::new();
        let topic = [b'a'; Message::TOPIC_SIZE_LIMIT + 1];
        assert!(message.write(&topic, b"x", DOCUMENT).is_err());
    }

    #[test]
    fn write_refuses_an_empty_payload() {
        let mut message = Message::new();
        assert!(message.write(b"echo", &[], DOCUMENT).is_err());
    }

    #[test]
    fn set_topic_rewrites_topic_without_touching_payload() {
        let mut message = Message::new();
        message.write(b"echo", b"hello!", DOCUMENT).expect("write succeeds");
        message.set_topic(b"reply").expect("set_topic succeeds");
        assert_eq!(message.topic(), b"reply");
        assert_eq!(message.payload(), b"hello!");
    }

    #[test]
    fn read_rejects_a_topic_length_that_overruns_the_buffer() {
        let mut message = Message::new();
        // topic_len = 10 but only 2 bytes follow the header.
        assert!(message.read(&[DOCUMENT, 10, 0x01, 0x02]).is_err());
    }
}
