//! The vocabulary of valid words, queried by exact-match membership.
//!
//! A dictionary is built once at startup (from the embedded word list or
//! from a file named on the command line) and is read-only afterwards.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors raised while loading a word list from disk.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word-list file could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    /// The file was read but no line survived normalization.
    #[error("word list contains no usable words")]
    Empty,
}

/// An immutable set of valid words.
///
/// Entries are normalized on the way in: trimmed, lowercased, and limited
/// to words made of ASCII letters only. Anything else is dropped, so every
/// stored word is a plain lowercase string and membership tests are exact.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new(words: Vec<String>) -> Self {
        let words = words
            .into_iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()))
            .collect();
        Self { words }
    }

    /// Build a dictionary from word-list text, one word per line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_owned).collect())
    }

    /// Load a dictionary from a word-list file, one word per line.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let text = fs::read_to_string(path)?;
        let dictionary = Self::from_text(&text);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(dictionary)
    }

    /// Exact-match membership test. The vocabulary is lowercase, so lookups
    /// are case-sensitive: `contains("CAT")` is always false.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All words of exactly `length` characters, in no particular order.
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .filter(move |word| word.len() == length)
            .map(String::as_str)
    }
}
