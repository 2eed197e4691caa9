//! # Word Ladder
//!
//! A breadth-first word ladder solver: give it two equal-length English
//! words and it finds the shortest chain that turns one into the other by
//! changing a single letter at a time, with every link a dictionary word.
//!
//! The search explores the implicit substitution graph level by level, so
//! the first chain to reach the destination is provably a shortest one.

pub mod dictionary;
pub mod search;

pub use dictionary::{Dictionary, DictionaryError};
pub use search::{one_letter_neighbors, ConnectivityStats, Ladder, LadderSolver};

/// The substitution alphabet tried at every letter position.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Load the dictionary from the embedded word list
pub fn load_dictionary() -> Dictionary {
    Dictionary::from_text(include_str!("../dictionary/dictionary.txt"))
}
