//! Property-based round-trip tests for the MessagePack reader/writer.

#![allow(clippy::unwrap_used)]

use phyllo_codec::{Reader, Writer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn u64_round_trips_through_write_uint(value in any::<u64>()) {
        let mut writer = Writer::new();
        writer.write_uint(value);
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        prop_assert_eq!(reader.read_u64().unwrap(), value);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn i64_round_trips_through_write_int(value in any::<i64>()) {
        let mut writer = Writer::new();
        writer.write_int(value);
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        prop_assert_eq!(reader.read_i64().unwrap(), value);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn f64_round_trips(value in any::<f64>()) {
        let mut writer = Writer::new();
        writer.write_f64(value);
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        let decoded = reader.read_f64().unwrap();
        prop_assert!(decoded.to_bits() == value.to_bits() || (decoded.is_nan() && value.is_nan()));
    }

    #[test]
    fn arbitrary_string_round_trips(value in ".*") {
        let mut writer = Writer::new();
        writer.write_str(&value);
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        prop_assert_eq!(reader.read_str().unwrap(), value);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn arbitrary_binary_round_trips(value in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut writer = Writer::new();
        writer.write_bin(&value);
        let bytes = writer.into_bytes();
        let mut reader = Reader::new(&bytes);
        prop_assert_eq!(reader.read_bin().unwrap(), value);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn skip_value_never_panics_on_truncated_input(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut reader = Reader::new(&bytes);
        let _ = reader.skip_value();
    }
}
