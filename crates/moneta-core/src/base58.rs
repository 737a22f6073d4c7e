//! Monero-style block-wise base58 codec.
//!
//! Unlike Bitcoin's base58, which treats the whole buffer as one arbitrary
//! precision integer, this variant splits the input into 8-byte blocks and
//! encodes each block independently as a fixed-width group of up to 11
//! characters. Every arithmetic step therefore fits in 64 bits, and the
//! output length is a pure function of the input length, matching what the
//! wallet daemon produces for addresses and key material.
//!
//! Block widths come from [`ENCODED_BLOCK_SIZES`]: a block of `n` raw bytes
//! always occupies exactly `ENCODED_BLOCK_SIZES[n]` characters, with leading
//! slots padded by `'1'` (digit zero). Leading zero bytes are preserved, not
//! dropped.

use crate::error::CodecError;

/// The 58-character alphabet, excluding visually ambiguous glyphs
/// (`0`/`O`, `I`/`l`). A character's index is its digit value.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encoded character count for a block of 0..=8 raw bytes.
pub const ENCODED_BLOCK_SIZES: [usize; 9] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

/// Raw bytes per full block.
pub const FULL_BLOCK_SIZE: usize = 8;

/// Encoded characters per full block.
pub const FULL_ENCODED_BLOCK_SIZE: usize = 11;

/// Reverse lookup: ASCII byte to digit value, `0xFF` for non-alphabet bytes.
static DIGIT_VALUES: [u8; 128] = build_digit_values();

const fn build_digit_values() -> [u8; 128] {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 58 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encode raw bytes as a block-wise base58 string.
///
/// The empty input encodes to the empty string.
pub fn encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(encoded_len(data.len()));
    let mut blocks = data.chunks_exact(FULL_BLOCK_SIZE);
    for block in &mut blocks {
        out.push_str(&encode_block(block));
    }
    let last = blocks.remainder();
    if !last.is_empty() {
        out.push_str(&encode_block(last));
    }
    out
}

/// Decode a block-wise base58 string back to raw bytes.
///
/// The total length must be expressible as full 11-character groups plus a
/// trailing group whose size appears in [`ENCODED_BLOCK_SIZES`]; anything
/// else is rejected with [`CodecError::InvalidLength`] before any character
/// is examined.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = text.as_bytes();
    let last_raw = decoded_block_len(bytes.len() % FULL_ENCODED_BLOCK_SIZE)?;
    let full_blocks = bytes.len() / FULL_ENCODED_BLOCK_SIZE;

    let mut out = Vec::with_capacity(full_blocks * FULL_BLOCK_SIZE + last_raw);
    let mut groups = bytes.chunks_exact(FULL_ENCODED_BLOCK_SIZE);
    for group in &mut groups {
        out.extend_from_slice(&decode_block(group)?);
    }
    let last = groups.remainder();
    if !last.is_empty() {
        out.extend_from_slice(&decode_block(last)?);
    }
    Ok(out)
}

/// Encode a hexadecimal byte string as base58.
///
/// Hex is the canonical textual byte form at the library boundary; odd-length
/// or non-hex input is an [`CodecError::InvalidInput`].
pub fn encode_hex(hex_str: &str) -> Result<String, CodecError> {
    let data = hex::decode(hex_str)
        .map_err(|e| CodecError::InvalidInput(format!("invalid hex input: {e}")))?;
    Ok(encode(&data))
}

/// Decode a base58 string to a lowercase hexadecimal byte string.
pub fn decode_hex(text: &str) -> Result<String, CodecError> {
    Ok(hex::encode(decode(text)?))
}

/// Total encoded length for `raw_len` input bytes.
fn encoded_len(raw_len: usize) -> usize {
    raw_len / FULL_BLOCK_SIZE * FULL_ENCODED_BLOCK_SIZE
        + ENCODED_BLOCK_SIZES[raw_len % FULL_BLOCK_SIZE]
}

/// Raw byte count for an encoded group of `encoded_len` characters.
fn decoded_block_len(encoded_len: usize) -> Result<usize, CodecError> {
    ENCODED_BLOCK_SIZES
        .iter()
        .position(|&n| n == encoded_len)
        .ok_or(CodecError::InvalidLength(encoded_len))
}

/// Encode one block of 1..=8 raw bytes into its fixed-width group.
///
/// The block value is read big-endian, then written as base58 digits from the
/// rightmost slot leftwards; remaining slots stay at digit zero so leading
/// zero bytes survive the trip.
fn encode_block(block: &[u8]) -> String {
    debug_assert!(!block.is_empty() && block.len() <= FULL_BLOCK_SIZE);

    let mut value = block.iter().fold(0u64, |acc, &b| acc << 8 | u64::from(b));
    let mut buf = vec![ALPHABET[0]; ENCODED_BLOCK_SIZES[block.len()]];
    let mut slot = buf.len();
    while value > 0 {
        slot -= 1;
        buf[slot] = ALPHABET[(value % 58) as usize];
        value /= 58;
    }
    String::from_utf8(buf).expect("alphabet is pure ASCII")
}

/// Decode one encoded group into its raw bytes.
///
/// The accumulated value must fit in 64 bits and, for partial blocks, in the
/// raw byte width implied by the group width; both violations surface as
/// [`CodecError::Overflow`].
fn decode_block(group: &[u8]) -> Result<Vec<u8>, CodecError> {
    let raw_len = decoded_block_len(group.len())?;

    let mut value: u64 = 0;
    for &ch in group {
        let digit = digit_value(ch)?;
        value = value
            .checked_mul(58)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(CodecError::Overflow)?;
    }
    if raw_len < FULL_BLOCK_SIZE && value >> (8 * raw_len) != 0 {
        return Err(CodecError::Overflow);
    }

    Ok(value.to_be_bytes()[FULL_BLOCK_SIZE - raw_len..].to_vec())
}

fn digit_value(ch: u8) -> Result<u8, CodecError> {
    let value = if ch.is_ascii() {
        DIGIT_VALUES[ch as usize]
    } else {
        0xFF
    };
    if value == 0xFF {
        return Err(CodecError::InvalidCharacter(char::from(ch)));
    }
    Ok(value)
}
