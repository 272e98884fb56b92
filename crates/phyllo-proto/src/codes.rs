//! Stable, extensible wire-code registries shared by every layer.
//!
//! These are deliberately plain `u8` constants grouped into modules rather
//! than closed Rust `enum`s: an unrecognized code must still round-trip as a
//! byte (a future layer or a newer peer may define one we don't know about),
//! so layers that only need to pass a code through untouched never have to
//! reject or panic on a value outside the ranges documented here.

/// A one-byte code identifying which kind of data unit a payload holds.
///
/// Carried by every framed layer (L3 and above) so that a layer which only
/// forwards bytes can still multiplex/demultiplex without knowing the
/// concrete payload type.
pub type DataUnitTypeCode = u8;

/// Control-plane and diagnostic codes (0x00-0x0f).
pub mod data_unit_type {
    /// Layer-agnostic control and diagnostic codes.
    pub mod layer {
        use super::super::DataUnitTypeCode;

        /// Generic control segment (e.g. a standalone ARQ ACK/NAK).
        pub const CONTROL: DataUnitTypeCode = 0x00;
        /// Protocol version announcement.
        pub const VERSION: DataUnitTypeCode = 0x01;
        /// Capability announcement.
        pub const CAPABILITIES: DataUnitTypeCode = 0x02;
        /// Error report.
        pub const ERROR: DataUnitTypeCode = 0x03;
        /// Warning report.
        pub const WARN: DataUnitTypeCode = 0x04;
        /// Informational report.
        pub const INFO: DataUnitTypeCode = 0x05;
        /// Debug report.
        pub const DEBUG: DataUnitTypeCode = 0x06;
        /// Trace report.
        pub const TRACE: DataUnitTypeCode = 0x07;
        /// Metrics report.
        pub const METRICS: DataUnitTypeCode = 0x08;
        // 0x09-0x0f are reserved for definition by the layer.
    }

    /// Raw byte-stream codes (0x10-0x1f).
    pub mod bytes {
        use super::super::DataUnitTypeCode;

        /// An opaque byte buffer.
        pub const BUFFER: DataUnitTypeCode = 0x10;
        /// A single byte taken directly from the stream.
        pub const STREAM: DataUnitTypeCode = 0x11;
        /// A delimited chunk (L1).
        pub const CHUNK: DataUnitTypeCode = 0x12;
        // 0x13-0x1f are reserved for future use.
    }

    /// Transport-layer codes (0x20-0x2f).
    pub mod transport {
        use super::super::DataUnitTypeCode;

        /// A COBS-encoded frame (L2).
        pub const FRAME: DataUnitTypeCode = 0x20;
        /// A length-prefixed datagram (L3).
        pub const DATAGRAM: DataUnitTypeCode = 0x21;
        /// A CRC-validated datagram (L4).
        pub const VALIDATED_DATAGRAM: DataUnitTypeCode = 0x22;
        /// An ARQ-sequenced reliable buffer (L5).
        pub const RELIABLE_BUFFER: DataUnitTypeCode = 0x23;
        /// Reserved for bring-your-own transport layers ported onto this stack.
        pub const PORTED_BUFFER: DataUnitTypeCode = 0x24;
        // 0x25-0x2f are reserved for future use.
    }

    /// Presentation-layer codes (0x40-0x4f).
    pub mod presentation {
        use super::super::DataUnitTypeCode;

        /// A serialization-format-tagged document (L6).
        pub const DOCUMENT: DataUnitTypeCode = 0x40;
        // 0x41-0x4f are reserved for future use.
    }

    /// Application-layer codes (0x60-0x6f).
    pub mod application {
        use super::super::DataUnitTypeCode;

        /// A topic-addressed pub/sub message (L7).
        pub const PUB_SUB: DataUnitTypeCode = 0x60;
        /// Reserved for a future RPC application layer.
        pub const RPC: DataUnitTypeCode = 0x61;
        /// Reserved for a future REST-like application layer.
        pub const REST: DataUnitTypeCode = 0x62;
        // 0x63-0x6f are reserved for future use.
    }
}

/// A one-byte code identifying the serialization format of a document body.
pub type SerializationFormatCode = u8;

/// Serialization format codes.
pub mod serialization_format {
    /// Binary, dynamically-typed formats.
    pub mod binary_dynamic {
        use super::super::SerializationFormatCode;

        /// Format not yet determined / unset.
        pub const UNKNOWN: SerializationFormatCode = 0x10;
        /// MessagePack. The only format this workspace implements a codec for.
        pub const MSG_PACK: SerializationFormatCode = 0x11;
        /// CBOR.
        pub const CBOR: SerializationFormatCode = 0x12;
        /// BSON.
        pub const BSON: SerializationFormatCode = 0x13;
        /// Avro.
        pub const AVRO: SerializationFormatCode = 0x14;
        // 0x15-0x1f are available for ad hoc binary dynamic formats.
    }

    /// Binary, statically-typed (schema-compiled) formats.
    pub mod binary_static {
        use super::super::SerializationFormatCode;

        /// Protocol Buffers.
        pub const PROTOBUF: SerializationFormatCode = 0x30;
        /// Apache Thrift.
        pub const THRIFT: SerializationFormatCode = 0x31;
        /// Cap'n Proto.
        pub const CAP_N_PROTO: SerializationFormatCode = 0x32;
        /// FlatBuffers.
        pub const FLAT_BUFFERS: SerializationFormatCode = 0x33;
        // 0x34-0x3f are available for ad hoc binary static formats.
    }

    /// Text-based formats.
    pub mod text {
        use super::super::SerializationFormatCode;

        /// JSON.
        pub const JSON: SerializationFormatCode = 0x50;
        /// CSV.
        pub const CSV: SerializationFormatCode = 0x51;
        // 0x52-0x5f are available for ad hoc text formats.
    }
}

/// A one-byte code identifying a document's schema, scoped within its format.
pub type SchemaCode = u8;

/// Schema codes.
pub mod schema {
    /// The generic, framework-defined schema band (0x00-0x1f).
    pub mod generic {
        use super::super::SchemaCode;

        /// The document has no fixed schema; readers must inspect tags as they go.
        pub const SCHEMALESS: SchemaCode = 0x00;

        /// Fixed-length primitive schemas (0x01-0x0e).
        pub mod primitive {
            use super::super::super::SchemaCode;

            /// A single `None`/nil value.
            pub const NONE: SchemaCode = 0x01;
            /// A single boolean.
            pub const BOOLEAN: SchemaCode = 0x02;
            /// A single platform-width unsigned integer.
            pub const UINT: SchemaCode = 0x03;
            /// A single `u8`.
            pub const UINT8: SchemaCode = 0x04;
            /// A single `u16`.
            pub const UINT16: SchemaCode = 0x05;
            /// A single `u32`.
            pub const UINT32: SchemaCode = 0x06;
            /// A single `u64`.
            pub const UINT64: SchemaCode = 0x07;
            /// A single platform-width signed integer.
            pub const INT: SchemaCode = 0x08;
            /// A single `i8`.
            pub const INT8: SchemaCode = 0x09;
            /// A single `i16`.
            pub const INT16: SchemaCode = 0x0a;
            /// A single `i32`.
            pub const INT32: SchemaCode = 0x0b;
            /// A single `i64`.
            pub const INT64: SchemaCode = 0x0c;
            /// A single `f32`.
            pub const FLOAT32: SchemaCode = 0x0d;
            /// A single `f64`.
            pub const FLOAT64: SchemaCode = 0x0e;
        }

        /// Length-tagged string/binary sequence schemas (0x10-0x19).
        pub mod sequence {
            use super::super::super::SchemaCode;

            /// A UTF-8 string with no declared maximum length.
            pub const STRING: SchemaCode = 0x10;
            /// A UTF-8 string bounded to an 8-bit length.
            pub const STRING8: SchemaCode = 0x11;
            /// A UTF-8 string bounded to a 16-bit length.
            pub const STRING16: SchemaCode = 0x12;
            /// A UTF-8 string bounded to a 32-bit length.
            pub const STRING32: SchemaCode = 0x13;
            /// A UTF-8 string bounded to a 64-bit length.
            pub const STRING64: SchemaCode = 0x14;
            /// A binary blob with no declared maximum length.
            pub const BINARY: SchemaCode = 0x15;
            /// A binary blob bounded to an 8-bit length.
            pub const BINARY8: SchemaCode = 0x16;
            /// A binary blob bounded to a 16-bit length.
            pub const BINARY16: SchemaCode = 0x17;
            /// A binary blob bounded to a 32-bit length.
            pub const BINARY32: SchemaCode = 0x18;
            /// A binary blob bounded to a 64-bit length.
            pub const BINARY64: SchemaCode = 0x19;
        }
        // 0x1a-0x1f are reserved for future use.
    }

    /// Reserved for schemas defined by framework-level application protocols
    /// layered on top of this stack (0x30-0x4f).
    pub mod framework {}

    /// Application-defined schemas (0x50-0xff), with a recommended band
    /// allocation convention carried over from the reference implementation.
    pub mod application {
        /// Recommended band for generic reusable tuples (0x50-0x5f).
        pub mod tuples {}
        /// Recommended band for generic reusable arrays (0x60-0x6f).
        pub mod arrays {}
        /// Recommended band for generic reusable maps (0x70-0x7f).
        pub mod maps {}
        /// Recommended band for debugging schemas (0x80-0x8f).
        pub mod debug {}
        /// Recommended band for system-management schemas (0x90-0x9f).
        pub mod system {}
        /// Recommended band for service-management schemas (0xa0-0xaf).
        pub mod services {}
        /// Recommended band for intensive-computation schemas (0xb0-0xbf).
        pub mod computation {}
        /// Recommended band for low-level hardware-control schemas (0xc0-0xcf).
        pub mod hardware {}
        /// Recommended band for high-level device-control schemas (0xd0-0xdf).
        pub mod devices {}
        /// Recommended band for data-management schemas (0xe0-0xef).
        pub mod data {}
        /// Recommended band for miscellaneous schemas (0xf0-0xff).
        pub mod miscellaneous {}
    }
}
