//! Backtracking word search and pruned dictionary discovery
//!
//! Both entry points share the same recursive core: mark the current cell,
//! try each unvisited adjacent continuation, unmark on the way back. The
//! visited mask lives on the call stack, never on the board, so every
//! public call starts and finishes with a clean slate.

use super::Board;
use crate::core::{Position, WordSet};
use crate::dictionary::WordStore;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Length of the path prefixes enumerated to prune dictionary scans
const PREFIX_LEN: usize = 3;

impl Board {
    /// Check whether a word is traceable on the board
    ///
    /// A word is traceable when its letters lie on a simple path of
    /// pairwise-adjacent cells, each cell used at most once. Starting cells
    /// are tried in row-major order and the first complete path wins.
    ///
    /// Empty and single-character words are always rejected: the
    /// continuation step is never entered for them, a boundary kept
    /// deliberately since Boggle's shortest legal word has three letters.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::board::Board;
    ///
    /// let board = Board::from_rows(&["cat", "ogr", "din"]).unwrap();
    /// assert!(board.is_word_on_board("cat"));
    /// assert!(!board.is_word_on_board("cot"));
    /// ```
    #[must_use]
    pub fn is_word_on_board(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        if letters.len() < 2 {
            return false;
        }

        let mut visited = vec![false; self.side() * self.side()];

        for start in self.positions() {
            if self.letter(start) == letters[0] {
                let index = self.index(start);
                visited[index] = true;
                let found = self.extend_path(&letters, 1, start, &mut visited);
                visited[index] = false;
                if found {
                    return true;
                }
            }
        }
        false
    }

    /// Find every dictionary word traceable on the board
    ///
    /// Runs in three passes:
    /// 1. enumerate every distinct 3-letter string spelled by a simple path
    ///    on the board;
    /// 2. collect the dictionary words starting with any of those prefixes
    ///    into one ascending, duplicate-free candidate list;
    /// 3. re-verify each candidate with [`Self::is_word_on_board`].
    ///
    /// The prefix pass is purely a pruning filter over the dictionary: any
    /// traceable word's first three letters necessarily spell a traceable
    /// path, so no word is lost. Verification shares no path state with the
    /// prefix pass. The result set holds the accepted words in ascending
    /// order.
    #[must_use]
    pub fn dictionary_words(&self, store: &WordStore) -> WordSet {
        // Pass 1: all 3-letter path prefixes
        let mut prefixes = FxHashSet::default();
        let mut visited = vec![false; self.side() * self.side()];
        let mut prefix = String::with_capacity(PREFIX_LEN);

        for start in self.positions() {
            let index = self.index(start);
            visited[index] = true;
            self.collect_prefixes(start, &mut prefix, &mut visited, &mut prefixes);
            visited[index] = false;
        }

        // Pass 2: merge prefix-range queries, ascending and deduplicated
        let mut candidates: BTreeSet<&str> = BTreeSet::new();
        for p in &prefixes {
            candidates.extend(store.words_with_prefix(p));
        }

        // Pass 3: independent full verification
        let mut found = WordSet::new();
        for candidate in candidates {
            if self.is_word_on_board(candidate) {
                found.add(candidate);
            }
        }
        found
    }

    /// Try to place `letters[next..]` continuing from `current`
    ///
    /// Scans cells in row-major order for an unvisited neighbor carrying
    /// the next letter. Succeeds immediately on the final letter; otherwise
    /// marks the cell, recurses, and unmarks before trying the next
    /// candidate or returning, so the mask is restored on every exit path.
    fn extend_path(
        &self,
        letters: &[char],
        next: usize,
        current: Position,
        visited: &mut [bool],
    ) -> bool {
        let letter = letters[next];

        for candidate in self.positions() {
            let index = self.index(candidate);
            if !visited[index]
                && self.letter(candidate) == letter
                && current.is_adjacent(candidate)
            {
                if next == letters.len() - 1 {
                    return true;
                }
                visited[index] = true;
                let found = self.extend_path(letters, next + 1, candidate, visited);
                visited[index] = false;
                if found {
                    return true;
                }
            }
        }
        false
    }

    /// Collect every distinct prefix spelled by a simple path through `pos`
    ///
    /// The caller has already marked `pos` visited. Each branch stops
    /// growing once it holds exactly [`PREFIX_LEN`] letters.
    fn collect_prefixes(
        &self,
        pos: Position,
        prefix: &mut String,
        visited: &mut [bool],
        prefixes: &mut FxHashSet<String>,
    ) {
        prefix.push(self.letter(pos));

        if prefix.len() == PREFIX_LEN {
            prefixes.insert(prefix.clone());
        } else {
            for next in self.positions() {
                let index = self.index(next);
                if !visited[index] && pos.is_adjacent(next) {
                    visited[index] = true;
                    self.collect_prefixes(next, prefix, visited, prefixes);
                    visited[index] = false;
                }
            }
        }

        prefix.pop();
    }
}
