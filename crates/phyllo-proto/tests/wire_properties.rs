//! Property-based tests for the wire-level building blocks (L2 COBS framing,
//! L4 CRC-32 integrity check).
//!
//! These cover the round-trip and integrity laws spec.md §8 calls out as
//! proptest-worthy properties, generalizing the fixed examples already
//! exercised by the unit tests in `src/cobs.rs` and `src/crc.rs`.

use phyllo_proto::cobs;
use phyllo_proto::crc::crc32;
use proptest::prelude::*;

proptest! {
    /// Property 1: Chunk/COBS round-trip. Any payload decodes back to itself
    /// after encoding, and the encoded form never contains a `0x00` byte
    /// (the delimiter COBS exists to remove).
    #[test]
    fn cobs_round_trips_any_payload(payload in prop::collection::vec(any::<u8>(), 0..2048)) {
        let encoded = cobs::encode_to_vec(&payload);
        prop_assert!(!encoded.contains(&0), "encoded frame contains a literal zero byte");
        let decoded = cobs::decode_to_vec(&encoded);
        prop_assert_eq!(decoded, payload);
    }

    /// The worst-case length bound holds for every payload, not just the
    /// 254-byte boundary case covered by the unit test.
    #[test]
    fn cobs_encoded_len_bounds_actual_output(payload in prop::collection::vec(any::<u8>(), 0..2048)) {
        let encoded = cobs::encode_to_vec(&payload);
        prop_assert_eq!(encoded.len(), cobs::encoded_len(payload.len()));
    }

    /// Property 3 (generalized): any single-bit flip anywhere in a non-empty
    /// buffer changes its CRC-32. This is not a cryptographic guarantee, but
    /// CRC-32's generator polynomial makes every single-bit error detectable.
    #[test]
    fn crc32_detects_any_single_bit_flip(
        data in prop::collection::vec(any::<u8>(), 1..512),
        byte_index in any::<usize>(),
        bit in 0u8..8,
    ) {
        let byte_index = byte_index % data.len();
        let original_crc = crc32(&data);
        let mut flipped = data;
        flipped[byte_index] ^= 1 << bit;
        prop_assert_ne!(crc32(&flipped), original_crc);
    }

    /// Appending or truncating a byte changes the CRC (length is covered by
    /// the checksum, not just content).
    #[test]
    fn crc32_changes_when_a_byte_is_appended(
        data in prop::collection::vec(any::<u8>(), 0..512),
        extra in any::<u8>(),
    ) {
        let original_crc = crc32(&data);
        let mut extended = data;
        extended.push(extra);
        prop_assert_ne!(crc32(&extended), original_crc);
    }

    /// Decoding never panics on arbitrary (possibly invalid) byte input; it
    /// either returns a valid payload or signals failure with `None`.
    #[test]
    fn cobs_decode_never_panics_on_arbitrary_input(input in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut output = Vec::new();
        let _ = cobs::decode(&input, &mut output);
    }
}
