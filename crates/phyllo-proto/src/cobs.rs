//! Consistent Overhead Byte Stuffing (COBS), L2's frame encoding.
//!
//! This matches the wire form produced by Arduino's `PacketSerial`/`COBS`
//! library (`original_source` links against it directly): each zero byte in
//! the input is replaced by a pointer to the next zero (or to the end of the
//! frame), with a leading length byte covering the whole encoded buffer.
//! Overhead is at most one byte per 254 non-zero input bytes, and the
//! encoded output never contains a zero byte.

/// Maximum number of non-zero bytes a single COBS "code" block can span.
///
/// A code byte of `0xff` means "254 bytes follow with no zero in between";
/// `0xff` is therefore the largest valid code.
const MAX_BLOCK: usize = 254;

/// Encode `input` as a COBS frame, appending to `output`.
///
/// Returns the number of bytes appended. `output` must have at least
/// `encoded_len(input.len())` bytes of spare capacity reserved by the
/// caller (this function does not pre-reserve; `Vec::push` grows lazily).
pub fn encode(input: &[u8], output: &mut Vec<u8>) -> usize {
    let start_len = output.len();
    let mut code_index = output.len();
    output.push(1);
    let mut code = 1u8;

    for &byte in input {
        if byte == 0 {
            output[code_index] = code;
            code = 1;
            code_index = output.len();
            output.push(1);
        } else {
            output.push(byte);
            code += 1;
            if code == 0xff {
                output[code_index] = code;
                code = 1;
                code_index = output.len();
                output.push(1);
            }
        }
    }
    output[code_index] = code;

    output.len() - start_len
}

/// Encode `input` as a COBS frame into a freshly allocated buffer.
#[must_use]
pub fn encode_to_vec(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(encoded_len(input.len()));
    encode(input, &mut output);
    output
}

/// Worst-case encoded length for a payload of `payload_len` bytes: one
/// overhead byte per started 254-byte block, plus a terminal code byte for
/// the block the encoder always opens after a full 254-byte block closes,
/// plus the payload itself.
#[must_use]
pub fn encoded_len(payload_len: usize) -> usize {
    payload_len + payload_len / MAX_BLOCK + 1
}

/// Decode a COBS-encoded `input` buffer, appending the original payload to
/// `output`.
///
/// Returns `Some(bytes_appended)` on success. Returns `None` if `input` is
/// not a valid COBS encoding (a jump pointer runs past the end of the
/// buffer, or the buffer is empty) — per spec, callers must treat `None` the
/// same as an empty decoded frame and drop it.
pub fn decode(input: &[u8], output: &mut Vec<u8>) -> Option<usize> {
    let start_len = output.len();
    let mut pos = 0usize;

    while pos < input.len() {
        let code = input[pos] as usize;
        if code == 0 {
            return None; // a literal zero can never appear in a COBS frame
        }
        let block_start = pos + 1;
        let block_end = block_start + (code - 1);
        if block_end > input.len() {
            return None;
        }
        output.extend_from_slice(&input[block_start..block_end]);

        pos = block_end;
        if code < 0xff && pos < input.len() {
            output.push(0);
        }
    }

    Some(output.len() - start_len)
}

/// Decode a COBS-encoded `input` buffer into a freshly allocated buffer.
///
/// Returns an empty vector if `input` is not a valid COBS encoding, matching
/// the reference implementation's "invalid chunk decodes to zero length"
/// contract (spec.md §4.2).
#[must_use]
pub fn decode_to_vec(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    if decode(input, &mut output).is_none() {
        output.clear();
    }
    output
}
