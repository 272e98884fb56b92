//! Wire vocabulary shared by every layer of the Phyllo protocol stack.
//!
//! This crate carries no layer state: it is the set of byte-level building
//! blocks (type/format/schema code registries, COBS framing, CRC-32) that
//! [`phyllo-transport`](https://docs.rs/phyllo-transport), `phyllo-codec`,
//! and `phyllo-pubsub` all build on, so that the wire contract between a
//! Phyllo stack and any reimplementation of it lives in one place.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cobs;
pub mod codes;
pub mod crc;
pub mod error;

pub use codes::{DataUnitTypeCode, SchemaCode, SerializationFormatCode, data_unit_type, schema, serialization_format};
pub use error::ProtoError;
