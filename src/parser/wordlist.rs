//! Word List Normalization
//!
//! Turns free text into an ordered list of search words.
//! Tokens are separated by commas and newlines, trimmed, and upper-cased;
//! empty tokens are dropped.

use std::fmt;

use serde::Serialize;

/// A normalized search word: trimmed, upper-cased, never empty
///
/// The only way to obtain a `Word` is through normalization, so the
/// search engine never has to handle the empty case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Normalize a raw token; returns None for empty or whitespace-only input
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    /// The normalized text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (the length of a matching path)
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false by construction; present for completeness
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the normalized characters in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split word-list text on commas and newlines into normalized words
///
/// The resulting list preserves input order and may legally be empty.
pub fn parse_word_list(text: &str) -> Vec<Word> {
    text.split([',', '\n']).filter_map(Word::new).collect()
}
