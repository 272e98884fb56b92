//! Pub/Sub Message Link (L7): wraps a topic and a payload into a
//! [`Message`] and forwards it to whichever transport layer sits beneath,
//! ported from `MessageLink` in the reference implementation.
//!
//! Unlike L1-L5's links, this one does not own the layer below it: it is a
//! stateless framing step, so it is expressed as free functions operating
//! over a caller-supplied downstream sink closure `(bytes, type_code) ->
//! bool`, matching the "send-callback graph" composition spec.md §9
//! describes for every layer above the byte-stream boundary.

use phyllo_proto::DataUnitTypeCode;
use phyllo_proto::data_unit_type::bytes::BUFFER;

use crate::error::PubSubError;
use crate::message::Message;

/// Builds a [`Message`] from `topic`/`payload`/`type_code` and hands its
/// wire bytes to `sink` tagged as [`Message::TYPE_CODE`].
///
/// `sink` is typically a transport layer's `send`, partially applied over
/// its clock/byte-sink arguments by the caller (see `phyllo-harness`'s
/// stack adapters).
pub fn send(
    topic: &[u8],
    payload: &[u8],
    type_code: DataUnitTypeCode,
    sink: &mut impl FnMut(&[u8], DataUnitTypeCode) -> bool,
) -> Result<(), PubSubError> {
    let mut message = Message::new();
    message.write(topic, payload, type_code)?;
    if !sink(&message.to_bytes(), Message::TYPE_CODE) {
        return Err(PubSubError::SinkRefused);
    }
    Ok(())
}

/// Sends `payload` under `topic` with the generic [`BUFFER`] type code.
pub fn send_buffer(
    topic: &[u8],
    payload: &[u8],
    sink: &mut impl FnMut(&[u8], DataUnitTypeCode) -> bool,
) -> Result<(), PubSubError> {
    send(topic, payload, BUFFER, sink)
}

/// Parses a buffer delivered by the layer below (already stripped of any
/// transport framing) into a [`Message`]. Returns `None` for an empty
/// buffer (matching `MessageLink::receive`'s "`buffer.empty()` -> no
/// delivery" guard); a malformed non-empty buffer surfaces its
/// [`PubSubError`] instead of silently dropping, since the transport below
/// has already validated integrity by the time bytes reach this layer.
pub fn receive(buffer: &[u8]) -> Option<Result<Message, PubSubError>> {
    if buffer.is_empty() {
        return None;
    }
    let mut message = Message::new();
    Some(message.read(buffer).map(|()| message))
}
