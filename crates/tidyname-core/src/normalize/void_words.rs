//! Filler-word removal.

use crate::config::settings::FRENCH_VOID_WORDS;

/// An ordered, case-insensitive set of filler words.
///
/// Entries are stored lowercased and deduplicated, keeping first-seen order.
/// Elided forms such as `l'` carry their apostrophe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoidWordSet {
    words: Vec<String>,
}

impl VoidWordSet {
    /// Builds a set from any list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Vec<String> = Vec::new();
        for word in words {
            let lowered = word.as_ref().to_lowercase();
            if !lowered.is_empty() && !set.contains(&lowered) {
                set.push(lowered);
            }
        }
        Self { words: set }
    }

    /// An empty set: nothing is ever removed.
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Returns `true` if `token` matches an entry, ignoring case.
    pub fn contains(&self, token: &str) -> bool {
        let lowered = token.to_lowercase();
        self.words.iter().any(|w| *w == lowered)
    }

    /// The entries in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drops every whitespace-separated token that is a filler word.
    ///
    /// Apostrophes end a token, so `n'en` is checked as `n'` and `en`.
    /// Survivors are rejoined with single spaces.
    pub fn remove_from(&self, text: &str) -> String {
        let split = text.replace('\'', "' ");
        split
            .split_whitespace()
            .filter(|token| !self.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for VoidWordSet {
    fn default() -> Self {
        Self::new(FRENCH_VOID_WORDS)
    }
}
