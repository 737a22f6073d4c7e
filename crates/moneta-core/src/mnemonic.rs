//! Electrum-style mnemonic codec for wallet seeds.
//!
//! A seed is any byte string whose length is a multiple of four; every
//! 4-byte chunk maps to exactly three words from a wordset of N words, as
//! base-N digits each stored relative to the previous digit. Chunks are
//! endian-swapped before the arithmetic so that the stored seed bytes and
//! the encoded integer agree with the daemon's format.
//!
//! The optional checksum word is derived from a CRC32 over the
//! prefix-truncated body words and appended as a 13th or 25th word.

use crate::error::CodecError;
use crate::wordsets::{self, truncate_word, Wordset};

/// Bytes per seed chunk; each chunk becomes [`WORDS_PER_CHUNK`] words.
const SEED_CHUNK_BYTES: usize = 4;

/// Words produced per seed chunk.
const WORDS_PER_CHUNK: usize = 3;

/// Encode a hexadecimal seed as a mnemonic word list.
///
/// The seed must describe a whole number of 4-byte chunks. `wordset_name`
/// defaults to `"english"`.
pub fn encode(seed_hex: &str, wordset_name: Option<&str>) -> Result<Vec<String>, CodecError> {
    let wordset = wordsets::get_wordset(wordset_name)?;
    let seed = parse_seed(seed_hex)?;

    let n = wordset.words.len() as u64;
    let mut out = Vec::with_capacity(seed.len() / SEED_CHUNK_BYTES * WORDS_PER_CHUNK);
    for chunk in seed.chunks_exact(SEED_CHUNK_BYTES) {
        let bytes: [u8; SEED_CHUNK_BYTES] = chunk
            .try_into()
            .expect("chunks_exact yields 4-byte slices");
        // The seed stores each chunk little-endian; the digit arithmetic
        // wants the integer value, so swap on the way in.
        let x = u64::from(u32::from_le_bytes(bytes));

        let w1 = x % n;
        let w2 = (x / n + w1) % n;
        let w3 = (x / n / n + w2) % n;
        out.push(wordset.words[w1 as usize].to_owned());
        out.push(wordset.words[w2 as usize].to_owned());
        out.push(wordset.words[w3 as usize].to_owned());
    }
    Ok(out)
}

/// Encode a hexadecimal seed as a mnemonic word list with a trailing
/// checksum word.
pub fn encode_with_checksum(
    seed_hex: &str,
    wordset_name: Option<&str>,
) -> Result<Vec<String>, CodecError> {
    let wordset = wordsets::get_wordset(wordset_name)?;
    let mut words = encode(seed_hex, wordset_name)?;
    let check = checksum(&words, wordset.prefix_length)?;
    words.push(check);
    Ok(words)
}

/// Decode a mnemonic word list back to its hexadecimal seed.
///
/// For wordsets with a non-zero prefix length the list must carry a trailing
/// checksum word (length `3k + 1`); a plain multiple of three is reported as
/// [`CodecError::MissingChecksum`]. The checksum word is positional only —
/// use [`validate_checksum`] to verify it.
pub fn decode<S: AsRef<str>>(
    words: &[S],
    wordset_name: Option<&str>,
) -> Result<String, CodecError> {
    let wordset = wordsets::get_wordset(wordset_name)?;

    let body = if wordset.prefix_length == 0 {
        if words.len() % WORDS_PER_CHUNK != 0 {
            return Err(CodecError::TooFewWords);
        }
        words
    } else {
        match words.len() % WORDS_PER_CHUNK {
            0 => return Err(CodecError::MissingChecksum),
            2 => return Err(CodecError::TooFewWords),
            _ => &words[..words.len() - 1],
        }
    };

    let n = wordset.words.len() as u64;
    let mut out = String::with_capacity(body.len() / WORDS_PER_CHUNK * SEED_CHUNK_BYTES * 2);
    for triple in body.chunks_exact(WORDS_PER_CHUNK) {
        let w1 = resolve(wordset, triple[0].as_ref())? as u64;
        let w2 = resolve(wordset, triple[1].as_ref())? as u64;
        let w3 = resolve(wordset, triple[2].as_ref())? as u64;

        let x = w1 + n * ((w2 + n - w1) % n) + n * n * ((w3 + n - w2) % n);
        // Word triples can express values just past u32::MAX; such a triple
        // never comes from encode and cannot round-trip into a 4-byte chunk.
        let x = u32::try_from(x).map_err(|_| CodecError::Overflow)?;
        out.push_str(&hex::encode(x.to_le_bytes()));
    }
    Ok(out)
}

/// Compute the checksum word for a mnemonic word list.
///
/// The checksum is a CRC32 over the seed body (the first 24 words when the
/// list has more than 13, else the first 12), each word truncated to
/// `prefix_length` characters; the CRC indexes back into the body modulo its
/// length. A trailing checksum word already present is thereby excluded,
/// so computing and validating agree on the same word.
pub fn checksum<S: AsRef<str>>(words: &[S], prefix_length: usize) -> Result<String, CodecError> {
    if words.is_empty() {
        return Err(CodecError::TooFewWords);
    }

    let body_len = if words.len() > 13 { 24 } else { 12 };
    let body = &words[..words.len().min(body_len)];

    let mut joined = String::new();
    for word in body {
        joined.push_str(truncate_word(word.as_ref(), prefix_length));
    }

    let crc = crc32fast::hash(joined.as_bytes());
    Ok(body[crc as usize % body.len()].as_ref().to_owned())
}

/// Whether the list's trailing word is the checksum of its body.
pub fn validate_checksum<S: AsRef<str>>(
    words: &[S],
    prefix_length: usize,
) -> Result<bool, CodecError> {
    let expected = checksum(words, prefix_length)?;
    Ok(words.last().map(S::as_ref) == Some(expected.as_str()))
}

/// Find the unique wordset in which every word of the mnemonic resolves.
///
/// Returns `Ok(None)` when no wordset matches and
/// [`CodecError::AmbiguousWordset`] when more than one does — a list built
/// entirely from words two languages share cannot be attributed.
pub fn find_wordset_by_mnemonic<S: AsRef<str>>(
    words: &[S],
) -> Result<Option<&'static str>, CodecError> {
    let mut matches = Vec::new();
    for wordset in wordsets::all_wordsets() {
        if words.iter().all(|w| wordset.contains(w.as_ref())) {
            matches.push(wordset.name);
        }
    }
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0])),
        n => Err(CodecError::AmbiguousWordset(n)),
    }
}

fn parse_seed(seed_hex: &str) -> Result<Vec<u8>, CodecError> {
    let seed = hex::decode(seed_hex)
        .map_err(|e| CodecError::InvalidInput(format!("invalid hex seed: {e}")))?;
    if seed.len() % SEED_CHUNK_BYTES != 0 {
        return Err(CodecError::InvalidInput(format!(
            "seed length {} is not a multiple of {SEED_CHUNK_BYTES} bytes",
            seed.len()
        )));
    }
    Ok(seed)
}

fn resolve(wordset: &Wordset, word: &str) -> Result<usize, CodecError> {
    wordset
        .lookup(word)
        .ok_or_else(|| CodecError::InvalidWord(word.to_owned()))
}
