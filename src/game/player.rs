//! Round players
//!
//! Two competitors take part in every round: the human, whose typed words
//! must survive a board check, and the computer, whose words come straight
//! from dictionary discovery. Both share the same bookkeeping: words found
//! this round, words rejected at review time, an archive of past rounds,
//! and a running score.

use crate::board::Board;
use crate::core::{WordSet, tokenize};
use crate::dictionary::WordStore;
use rand::Rng;

/// Per-player bookkeeping shared by both competitors
#[derive(Debug, Default)]
pub struct Tally {
    round_words: WordSet,
    rejected_words: WordSet,
    past_rounds: Vec<WordSet>,
    score: u32,
}

impl Tally {
    /// Archive the finished round and reset per-round state
    fn archive_round(&mut self) {
        let finished = std::mem::take(&mut self.round_words);
        self.past_rounds.push(finished);
        self.rejected_words = WordSet::new();
    }
}

/// A round competitor
///
/// Implementations differ only in how `add_words` sources and validates
/// candidate words; rejection and score bookkeeping are shared.
pub trait Player {
    /// Shared bookkeeping, read-only
    fn tally(&self) -> &Tally;

    /// Shared bookkeeping, mutable
    fn tally_mut(&mut self) -> &mut Tally;

    /// Record words for the current round from raw text
    fn add_words<R: Rng>(
        &mut self,
        text: &str,
        board: &Board,
        store: &mut WordStore,
        rng: &mut R,
    );

    /// Withdraw words at review time
    ///
    /// Each token is dropped from the round words, recorded as rejected,
    /// and forgotten by the dictionary so it stops resurfacing as a
    /// discovery candidate.
    fn reject_words(&mut self, text: &str, store: &mut WordStore) {
        for word in tokenize(text) {
            let tally = self.tally_mut();
            tally.round_words.remove(&word);
            tally.rejected_words.add(&word);
            store.forget(&word);
        }
    }

    /// Words found in the current round
    fn words(&self) -> &WordSet {
        &self.tally().round_words
    }

    /// Words rejected in the current round
    fn rejected_words(&self) -> &WordSet {
        &self.tally().rejected_words
    }

    /// Word sets of previous rounds, oldest first
    fn past_rounds(&self) -> &[WordSet] {
        &self.tally().past_rounds
    }

    /// Running total score
    fn score(&self) -> u32 {
        self.tally().score
    }

    /// Add points to the running total
    fn add_score(&mut self, points: u32) {
        self.tally_mut().score += points;
    }

    /// Archive the current round and start a fresh one
    fn new_round(&mut self) {
        self.tally_mut().archive_round();
    }
}

/// The human competitor
///
/// Typed words are verified on the board before they count; valid entries
/// are also offered to the dictionary, which learns them with a
/// difficulty-dependent probability. Entries that fail the board check are
/// tracked separately for display.
#[derive(Debug, Default)]
pub struct HumanPlayer {
    tally: Tally,
    invalid_words: WordSet,
}

impl HumanPlayer {
    /// Create a player with empty bookkeeping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entered words that failed the board check this round
    #[must_use]
    pub fn invalid_words(&self) -> &WordSet {
        &self.invalid_words
    }
}

impl Player for HumanPlayer {
    fn tally(&self) -> &Tally {
        &self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }

    fn add_words<R: Rng>(
        &mut self,
        text: &str,
        board: &Board,
        store: &mut WordStore,
        rng: &mut R,
    ) {
        for word in tokenize(text) {
            if board.is_word_on_board(&word) {
                self.tally.round_words.add(&word);
                store.learn(&word, rng);
            } else {
                self.invalid_words.add(&word);
            }
        }
    }

    fn new_round(&mut self) {
        self.invalid_words = WordSet::new();
        self.tally.archive_round();
    }
}

/// The computer competitor
///
/// Words arrive from dictionary discovery, already verified on the board,
/// so they are accepted verbatim.
#[derive(Debug, Default)]
pub struct ComputerPlayer {
    tally: Tally,
}

impl ComputerPlayer {
    /// Create a player with empty bookkeeping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Player for ComputerPlayer {
    fn tally(&self) -> &Tally {
        &self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }

    fn add_words<R: Rng>(
        &mut self,
        text: &str,
        _board: &Board,
        _store: &mut WordStore,
        _rng: &mut R,
    ) {
        for word in tokenize(text) {
            self.tally.round_words.add(&word);
        }
    }
}
