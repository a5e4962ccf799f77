//! The bidirectional spelling dictionary.
//!
//! A [`Dictionary`] holds two independent indices: one keyed by British
//! spellings (mapping to American) and one keyed by American spellings
//! (mapping to British). The indices are deliberately not kept mutually
//! consistent — overriding or removing one side never repairs stale
//! entries on the other, and tests cover that asymmetry. Keys are stored
//! exactly as inserted; lookup tries the exact word first and falls back
//! to its lowercase form.
//!
//! # Examples
//!
//! ```
//! use orthovar::dictionary::{Dictionary, Direction};
//!
//! let dict = Dictionary::new();
//! assert_eq!(dict.to_american("Colour"), "Color");
//! assert_eq!(dict.to_british("THEATER"), "THEATRE");
//! // Unknown words pass through unchanged.
//! assert_eq!(dict.to_american("zebra"), "zebra");
//! ```

use ahash::AHashMap;

use crate::casing::mirror_case;
use crate::dataset::{self, WordPair};
use crate::folding::Locale;

/// Translation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Look up a British spelling, produce the American one.
    BritishToAmerican,
    /// Look up an American spelling, produce the British one.
    AmericanToBritish,
}

/// A bidirectional word-level spelling dictionary.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// British spelling → American spelling.
    british_index: AHashMap<String, String>,
    /// American spelling → British spelling.
    american_index: AHashMap<String, String>,
    /// British keys in insertion order, backing `entries()`.
    british_order: Vec<String>,
}

impl Dictionary {
    /// Create a dictionary seeded from the built-in dataset.
    pub fn new() -> Self {
        Self::from_dataset(dataset::pairs())
    }

    /// Create a dictionary seeded from the built-in dataset, then apply
    /// `pairs` on top. Later pairs override earlier ones under the same
    /// exact key.
    pub fn with_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = WordPair>,
    {
        let mut dict = Self::new();
        for pair in pairs {
            dict.add(pair);
        }
        dict
    }

    /// Create an empty dictionary with no seed data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a dictionary seeded from an arbitrary dataset, in order.
    pub fn from_dataset<I>(dataset: I) -> Self
    where
        I: IntoIterator<Item = WordPair>,
    {
        let mut dict = Self::default();
        for pair in dataset {
            dict.add(pair);
        }
        dict
    }

    /// Insert a pair into both indices, exactly as given.
    ///
    /// No case normalization, no trimming, no validation: an existing
    /// entry under the same exact key is overwritten, and its stale
    /// counterpart in the other index is left alone.
    pub fn add(&mut self, pair: WordPair) -> &mut Self {
        let WordPair { gb, us } = pair;
        if !self.british_index.contains_key(&gb) {
            self.british_order.push(gb.clone());
        }
        self.american_index.insert(us.clone(), gb.clone());
        self.british_index.insert(gb, us);
        self
    }

    /// Remove a pair, lowercasing `word` under the invariant locale if no
    /// exact key matches. Removing an absent word is a silent no-op.
    pub fn remove(&mut self, word: &str) -> &mut Self {
        self.remove_in(word, Locale::default())
    }

    /// Remove a pair, lowercasing `word` under `locale` if no exact key
    /// matches.
    ///
    /// Resolution order: exact British key, exact American key, folded
    /// British key, folded American key, no-op. A matched entry is
    /// deleted together with its one paired key in the other index —
    /// nothing else. A locale fold that matches no stored key (for
    /// example [`Locale::Turkic`] folding "TIRE" to "tıre") leaves the
    /// dictionary untouched; there is no invariant-fold retry.
    pub fn remove_in(&mut self, word: &str, locale: Locale) -> &mut Self {
        if !self.remove_exact(word) {
            self.remove_exact(&locale.lowercase(word));
        }
        self
    }

    /// Translate a single word.
    ///
    /// Looks up `word` as an exact key in the direction's index, then its
    /// lowercase form; an unknown word is returned unchanged, never an
    /// error. With `match_case` the counterpart is re-cased to mirror the
    /// literal input (see [`mirror_case`]); without it the counterpart is
    /// returned in its stored casing.
    pub fn translate(&self, word: &str, direction: Direction, match_case: bool) -> String {
        if word.is_empty() {
            return String::new();
        }

        let index = match direction {
            Direction::BritishToAmerican => &self.british_index,
            Direction::AmericanToBritish => &self.american_index,
        };
        let target = match index.get(word) {
            Some(target) => Some(target),
            None => index.get(word.to_lowercase().as_str()),
        };

        match target {
            None => word.to_string(),
            Some(target) if !match_case => target.clone(),
            Some(target) => mirror_case(target, word),
        }
    }

    /// Translate a British spelling to American, mirroring its casing.
    pub fn to_american(&self, word: &str) -> String {
        self.translate(word, Direction::BritishToAmerican, true)
    }

    /// Translate an American spelling to British, mirroring its casing.
    pub fn to_british(&self, word: &str) -> String {
        self.translate(word, Direction::AmericanToBritish, true)
    }

    /// Translate a sequence of words element-wise, preserving order and
    /// length. Each word is translated independently; there is no
    /// cross-word state.
    pub fn translate_all<S>(
        &self,
        words: &[S],
        direction: Direction,
        match_case: bool,
    ) -> Vec<String>
    where
        S: AsRef<str>,
    {
        words
            .iter()
            .map(|word| self.translate(word.as_ref(), direction, match_case))
            .collect()
    }

    /// Iterate (gb, us) pairs in insertion order.
    ///
    /// One pair per British-index entry; entries visible only through the
    /// American index (stale reverse mappings left by overrides) are not
    /// produced. Calling again yields a fresh pass over current state.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.british_order.iter().filter_map(|gb| {
            self.british_index
                .get(gb)
                .map(|us| (gb.as_str(), us.as_str()))
        })
    }

    /// Number of pairs reachable through the British index.
    pub fn len(&self) -> usize {
        self.british_index.len()
    }

    /// True if the British index is empty.
    pub fn is_empty(&self) -> bool {
        self.british_index.is_empty()
    }

    /// Delete `key` from whichever index holds it, along with the paired
    /// key recorded in the other index. British-first, matching the
    /// removal resolution order.
    fn remove_exact(&mut self, key: &str) -> bool {
        if let Some(us) = self.british_index.remove(key) {
            self.american_index.remove(&us);
            self.british_order.retain(|k| k != key);
            return true;
        }
        if let Some(gb) = self.american_index.remove(key) {
            if self.british_index.remove(&gb).is_some() {
                self.british_order.retain(|k| k != &gb);
            }
            return true;
        }
        false
    }
}
