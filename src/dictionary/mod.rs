//! The learning dictionary
//!
//! A `WordStore` keeps known words sorted lexicographically, answers
//! prefix-range queries for the board search, and learns words entered by
//! the player with a probability controlled by the difficulty level. The
//! backing file format and bounded save policy live in [`persistence`].

mod embedded;
pub mod persistence;

pub use embedded::{STARTER, STARTER_COUNT};
pub use persistence::{SAVE_CAP, load_store, save_store};

use rand::Rng;
use std::ops::Bound;

/// Difficulty applied when none is configured
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// A sorted, duplicate-free collection of known words
///
/// Identity is case-sensitive; the surrounding word pipeline lowercases
/// input before it reaches the store.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: std::collections::BTreeSet<String>,
    difficulty: u8,
}

impl WordStore {
    /// Create an empty store at the default difficulty
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: std::collections::BTreeSet::new(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }

    /// Create a store holding the given words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }

    /// Words starting with `prefix`, in ascending lexicographic order
    ///
    /// Computes the half-open range `[prefix, upper)` where `upper` is the
    /// prefix with its final character replaced by the next code point
    /// ("cat" queries `["cat", "cau")`), then slices the sorted store. An
    /// empty prefix yields the entire store. The iterator is finite and a
    /// fresh call restarts it.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::WordStore;
    ///
    /// let store = WordStore::from_words(["cat", "car", "dog"]);
    /// let hits: Vec<&str> = store.words_with_prefix("ca").collect();
    /// assert_eq!(hits, ["car", "cat"]);
    /// ```
    pub fn words_with_prefix<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a str> + 'a {
        let bounds = if prefix.is_empty() {
            (Bound::Unbounded, Bound::Unbounded)
        } else {
            let upper = bump_last_char(prefix).map_or(Bound::Unbounded, Bound::Excluded);
            (Bound::Included(prefix.to_string()), upper)
        };
        self.words.range(bounds).map(String::as_str)
    }

    /// Maybe retain a word, depending on the difficulty
    ///
    /// Draws a uniform integer in `[1, 10]` and inserts the word iff the
    /// draw is at most the difficulty, so a difficulty of 10 learns every
    /// word and 1 learns about one in ten. Returns whether this draw
    /// retained the word.
    pub fn learn(&mut self, word: &str, rng: &mut impl Rng) -> bool {
        let draw = rng.random_range(1..=10);
        if draw <= self.difficulty {
            self.words.insert(word.to_string());
            true
        } else {
            false
        }
    }

    /// Remove a word if present
    pub fn forget(&mut self, word: &str) {
        self.words.remove(word);
    }

    /// Case-sensitive exact membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Set the difficulty level
    ///
    /// Values outside `[1, 10]` are silently ignored and the prior level
    /// kept.
    pub fn set_difficulty(&mut self, level: u8) {
        if (1..=10).contains(&level) {
            self.difficulty = level;
        }
    }

    /// Current difficulty level
    #[must_use]
    pub const fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Number of stored words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate all words in ascending lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Replace the final character of `prefix` with its successor code point
///
/// Returns `None` for an empty prefix or when the final character has no
/// successor; callers fall back to an unbounded tail in that case.
fn bump_last_char(prefix: &str) -> Option<String> {
    let mut chars: Vec<char> = prefix.chars().collect();
    let last = chars.pop()?;
    let next = char::from_u32(last as u32 + 1)?;
    chars.push(next);
    Some(chars.into_iter().collect())
}
