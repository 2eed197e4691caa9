//! Shortest word ladder search.
//!
//! The dictionary induces an implicit graph: words are nodes, and two words
//! share an edge when they differ in exactly one letter. A ladder is a path
//! in that graph, and the solver finds a shortest one with a breadth-first
//! search that materializes edges on demand instead of building the graph
//! up front.

use std::collections::{HashMap, HashSet, VecDeque};

use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::ALPHABET;

/// An ordered word chain from a source word to a destination word.
pub type Ladder = Vec<String>;

/// Words one substitution away from `word` that are dictionary members and
/// have not been visited yet.
///
/// Every accepted neighbor is inserted into `visited` before this function
/// returns. Marking at generation time (rather than when a word is later
/// dequeued) is what keeps a word discovered through one parent from being
/// handed out again for a different parent at the same or a deeper search
/// level. Neighbors come back in (position, letter) order, which keeps
/// searches deterministic.
pub fn one_letter_neighbors(
    dictionary: &Dictionary,
    visited: &mut HashSet<String>,
    word: &str,
) -> Vec<String> {
    let mut neighbors = Vec::new();
    let mut candidate = word.as_bytes().to_vec();

    for i in 0..candidate.len() {
        let original = candidate[i];
        for &letter in ALPHABET {
            if letter == original {
                continue;
            }
            candidate[i] = letter;
            // Substitution into a non-ASCII word can split a code point;
            // the checked conversion discards those candidates.
            if let Ok(text) = std::str::from_utf8(&candidate) {
                if dictionary.contains(text) && !visited.contains(text) {
                    visited.insert(text.to_string());
                    neighbors.push(text.to_string());
                }
            }
        }
        candidate[i] = original;
    }

    neighbors
}

/// How one length class of the dictionary hangs together.
#[derive(Debug, Clone)]
pub struct ConnectivityStats {
    pub word_length: usize,
    pub word_count: usize,
    /// Words with no one-letter neighbors at all.
    pub isolated_words: usize,
    /// The longest shortest ladder, in hops (0 when nothing connects).
    pub diameter: usize,
    /// One pair of words realizing the diameter.
    pub longest_pair: Option<(String, String)>,
    /// Mean number of other words reachable from a word.
    pub average_reachable: f64,
}

/// The ladder search engine.
///
/// Owns the dictionary and serves any number of queries; each query runs
/// one self-contained breadth-first search with its own visited set and
/// frontier, so the solver itself never changes.
#[derive(Debug, Clone)]
pub struct LadderSolver {
    dictionary: Dictionary,
}

impl LadderSolver {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The shortest ladder from `source` to `destination`, or `None` when
    /// no ladder exists.
    ///
    /// The returned chain starts with `source`, ends with `destination`,
    /// and every link changes exactly one letter while staying inside the
    /// dictionary. When `source == destination` the ladder is the single
    /// word itself. The source is exempt from the membership requirement;
    /// every later word is a dictionary member. Words of different lengths
    /// can never connect, so that case returns `None` without searching.
    pub fn shortest_ladder(&self, source: &str, destination: &str) -> Option<Ladder> {
        if source.len() != destination.len() {
            return None;
        }

        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(source.to_string());

        let mut frontier: VecDeque<Ladder> = VecDeque::new();
        frontier.push_back(vec![source.to_string()]);

        while let Some(ladder) = frontier.pop_front() {
            // Enqueued ladders are never empty.
            let top = match ladder.last() {
                Some(word) => word.clone(),
                None => continue,
            };

            // Level-order dequeueing makes the first ladder that reaches
            // the destination a shortest one.
            if top == destination {
                return Some(ladder);
            }

            for neighbor in one_letter_neighbors(&self.dictionary, &mut visited, &top) {
                let mut extended = ladder.clone();
                extended.push(neighbor);
                frontier.push_back(extended);
            }
        }

        None
    }

    /// Hop count of every word reachable from `source`, including the
    /// source itself at zero hops.
    pub fn reachable_from(&self, source: &str) -> HashMap<String, usize> {
        let mut distances = HashMap::new();
        distances.insert(source.to_string(), 0);

        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(source.to_string());

        let mut frontier: VecDeque<(String, usize)> = VecDeque::new();
        frontier.push_back((source.to_string(), 0));

        while let Some((word, hops)) = frontier.pop_front() {
            for neighbor in one_letter_neighbors(&self.dictionary, &mut visited, &word) {
                distances.insert(neighbor.clone(), hops + 1);
                frontier.push_back((neighbor, hops + 1));
            }
        }

        distances
    }

    /// Survey every word of one length: how many words there are, how many
    /// are isolated, the longest shortest ladder of the class with one
    /// witness pair, and the mean reachable-set size.
    ///
    /// Sources are surveyed in parallel. Each survey is an independent
    /// single-threaded search over the shared read-only dictionary, and
    /// sources are visited in sorted order with lexicographic tie-breaking,
    /// so the report is deterministic.
    pub fn connectivity_stats(&self, word_length: usize) -> ConnectivityStats {
        let mut words: Vec<&str> = self.dictionary.words_of_length(word_length).collect();
        words.sort_unstable();

        let surveys: Vec<(usize, usize, Option<String>)> = words
            .par_iter()
            .map(|&word| {
                let distances = self.reachable_from(word);
                let eccentricity = distances.values().max().copied().unwrap_or(0);
                let farthest = if eccentricity == 0 {
                    None
                } else {
                    distances
                        .iter()
                        .filter(|&(_, &hops)| hops == eccentricity)
                        .map(|(word, _)| word.clone())
                        .min()
                };
                (distances.len(), eccentricity, farthest)
            })
            .collect();

        let word_count = words.len();
        let isolated_words = surveys
            .iter()
            .filter(|(reachable, _, _)| *reachable == 1)
            .count();
        let total_reachable: usize = surveys
            .iter()
            .map(|(reachable, _, _)| reachable - 1)
            .sum();
        let average_reachable = if word_count == 0 {
            0.0
        } else {
            total_reachable as f64 / word_count as f64
        };

        let mut diameter = 0;
        let mut longest_pair = None;
        for (source, (_, eccentricity, farthest)) in words.iter().zip(&surveys) {
            if *eccentricity > diameter {
                if let Some(farthest) = farthest {
                    diameter = *eccentricity;
                    longest_pair = Some((source.to_string(), farthest.clone()));
                }
            }
        }

        ConnectivityStats {
            word_length,
            word_count,
            isolated_words,
            diameter,
            longest_pair,
            average_reachable,
        }
    }
}
