//! Wordset registry for the mnemonic codec.
//!
//! Each wordset is a named, ordered list of 1626 words for one language,
//! embedded from a plain one-word-per-line data file. The registry is built
//! lazily on first access behind a [`OnceLock`]: construction happens exactly
//! once even under concurrent callers, and every read afterwards is
//! lock-free because the table is immutable for the rest of the process.
//!
//! Words are looked up through a truncated-word index: every word is keyed by
//! its first `prefix_length` characters, which the wordlists guarantee to be
//! unique within a set. This lets callers type abbreviated words and keeps
//! reverse lookup O(1). Truncation counts characters, not bytes; wordlists
//! with accented words depend on that.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::CodecError;

/// Wordset used when the caller does not name one.
pub const DEFAULT_WORDSET: &str = "english";

/// Name, native name, english name, unique-prefix length, and word data for
/// every shipped language. Adding a language is adding a row and a data file.
const WORDSET_SOURCES: [(&str, &str, &str, usize, &str); 2] = [
    ("english", "English", "English", 3, include_str!("data/english.txt")),
    ("spanish", "Español", "Spanish", 4, include_str!("data/spanish.txt")),
];

/// An immutable wordset: one language's word table plus its derived
/// truncated-word index.
#[derive(Debug)]
pub struct Wordset {
    /// Registry key, e.g. `"english"`.
    pub name: &'static str,
    /// Human-readable name in the wordset's own language.
    pub native_name: &'static str,
    /// Human-readable name in English.
    pub english_name: &'static str,
    /// Number of leading characters guaranteed unique across `words`;
    /// `0` means whole words must be used.
    pub prefix_length: usize,
    /// The ordered word table.
    pub words: Vec<&'static str>,
    trunc_words: HashMap<&'static str, usize>,
}

impl Wordset {
    fn from_lines(
        name: &'static str,
        native_name: &'static str,
        english_name: &'static str,
        prefix_length: usize,
        raw: &'static str,
    ) -> Self {
        let words: Vec<&'static str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut trunc_words = HashMap::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            trunc_words.insert(truncate_word(word, prefix_length), index);
        }

        Self {
            name,
            native_name,
            english_name,
            prefix_length,
            words,
            trunc_words,
        }
    }

    /// Resolve a word (possibly abbreviated) to its index in the word table.
    pub fn lookup(&self, word: &str) -> Option<usize> {
        self.trunc_words
            .get(truncate_word(word, self.prefix_length))
            .copied()
    }

    /// Whether a word (possibly abbreviated) belongs to this wordset.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }
}

/// Truncate a word to the wordset's unique prefix, counting characters.
/// A prefix length of zero means the whole word.
pub(crate) fn truncate_word(word: &str, prefix_length: usize) -> &str {
    if prefix_length == 0 {
        return word;
    }
    match word.char_indices().nth(prefix_length) {
        Some((byte_index, _)) => &word[..byte_index],
        None => word,
    }
}

static REGISTRY: OnceLock<HashMap<&'static str, Wordset>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, Wordset> {
    REGISTRY.get_or_init(|| {
        WORDSET_SOURCES
            .iter()
            .map(|&(name, native, english, prefix_length, raw)| {
                (
                    name,
                    Wordset::from_lines(name, native, english, prefix_length, raw),
                )
            })
            .collect()
    })
}

/// Fetch a wordset by name, defaulting to [`DEFAULT_WORDSET`] when `None`.
pub fn get_wordset(name: Option<&str>) -> Result<&'static Wordset, CodecError> {
    let name = name.unwrap_or(DEFAULT_WORDSET);
    registry()
        .get(name)
        .ok_or_else(|| CodecError::UnknownWordset(name.to_owned()))
}

/// Names of all registered wordsets, sorted.
pub fn list_wordset_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = registry().keys().copied().collect();
    names.sort_unstable();
    names
}

/// Iterate over all registered wordsets (unspecified order).
pub(crate) fn all_wordsets() -> impl Iterator<Item = &'static Wordset> {
    registry().values()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_shipped_wordsets() {
        assert_eq!(list_wordset_names(), vec!["english", "spanish"]);
    }

    #[test]
    fn default_wordset_is_english() {
        let ws = get_wordset(None).unwrap();
        assert_eq!(ws.name, "english");
        assert_eq!(ws.prefix_length, 3);
        assert_eq!(ws.words.len(), 1626);
        assert_eq!(ws.words[0], "abbey");
    }

    #[test]
    fn unknown_wordset_is_rejected() {
        assert_eq!(
            get_wordset(Some("klingon")).unwrap_err(),
            CodecError::UnknownWordset("klingon".into())
        );
    }

    #[test]
    fn lookup_accepts_full_and_truncated_words() {
        let ws = get_wordset(Some("english")).unwrap();
        let full = ws.lookup("abducts").unwrap();
        assert_eq!(ws.lookup("abd"), Some(full));
        assert_eq!(ws.lookup("abducted"), Some(full));
        assert!(ws.lookup("xyz").is_none());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // "ábaco" starts with a two-byte character; a byte-wise cut would
        // either split it or key the wrong prefix.
        let ws = get_wordset(Some("spanish")).unwrap();
        assert!(ws.contains("ábaco"));
        assert_eq!(ws.lookup("ábac"), ws.lookup("ábaco"));
        assert_eq!(truncate_word("ábaco", 4), "ábac");
        assert_eq!(truncate_word("sí", 4), "sí");
        assert_eq!(truncate_word("whole", 0), "whole");
    }

    #[test]
    fn shipped_wordsets_have_unique_prefixes_and_expected_size() {
        for ws in all_wordsets() {
            assert_eq!(ws.words.len(), 1626, "{}", ws.name);
            let mut seen = std::collections::HashSet::new();
            for word in &ws.words {
                assert!(
                    seen.insert(truncate_word(word, ws.prefix_length)),
                    "{}: prefix of `{word}` is not unique",
                    ws.name
                );
            }
        }
    }
}
