//! Round bookkeeping
//!
//! A `Game` owns the board, the dictionary, and both players, and walks
//! them through the round lifecycle: word entry, the computer's discovery
//! turn, word rejection, and end-of-round classification and scoring.

use super::player::{ComputerPlayer, HumanPlayer, Player};
use super::scoring::set_score;
use crate::board::Board;
use crate::core::WordSet;
use crate::dictionary::WordStore;
use rand::Rng;

/// End-of-round classification and scores
///
/// Only words unique to a player score; words both players found cancel
/// out, as in table Boggle.
#[derive(Debug)]
pub struct RoundSummary {
    pub round: u32,
    pub human_unique: WordSet,
    pub computer_unique: WordSet,
    pub common: WordSet,
    pub human_round_score: u32,
    pub computer_round_score: u32,
    pub human_total: u32,
    pub computer_total: u32,
}

/// A human-versus-computer Boggle session
#[derive(Debug)]
pub struct Game {
    board: Board,
    store: WordStore,
    human: HumanPlayer,
    computer: ComputerPlayer,
    round: u32,
}

impl Game {
    /// Start a session on a freshly generated board
    pub fn new<R: Rng>(store: WordStore, rng: &mut R) -> Self {
        Self::with_board(Board::random(rng), store)
    }

    /// Start a session on a preset board
    #[must_use]
    pub fn with_board(board: Board, store: WordStore) -> Self {
        Self {
            board,
            store,
            human: HumanPlayer::new(),
            computer: ComputerPlayer::new(),
            round: 1,
        }
    }

    /// The current board
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The dictionary
    #[must_use]
    pub const fn store(&self) -> &WordStore {
        &self.store
    }

    /// The human competitor
    #[must_use]
    pub const fn human(&self) -> &HumanPlayer {
        &self.human
    }

    /// The computer competitor
    #[must_use]
    pub const fn computer(&self) -> &ComputerPlayer {
        &self.computer
    }

    /// Current round number, starting at 1
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Set the dictionary difficulty (out-of-range values are ignored)
    pub fn set_difficulty(&mut self, level: u8) {
        self.store.set_difficulty(level);
    }

    /// Enter a line of human words for the current round
    pub fn human_turn<R: Rng>(&mut self, text: &str, rng: &mut R) {
        self.human
            .add_words(text, &self.board, &mut self.store, rng);
    }

    /// Run the computer's discovery turn
    ///
    /// Every dictionary word traceable on the board joins the computer's
    /// round words. Returns the computer's words for display.
    pub fn computer_turn<R: Rng>(&mut self, rng: &mut R) -> &WordSet {
        let found = self.board.dictionary_words(&self.store);
        for word in found.iter() {
            self.computer
                .add_words(word, &self.board, &mut self.store, rng);
        }
        self.computer.words()
    }

    /// Reject words for both players and drop them from the dictionary
    pub fn reject_words(&mut self, text: &str) {
        self.human.reject_words(text, &mut self.store);
        self.computer.reject_words(text, &mut self.store);
    }

    /// Classify the round's words and apply scores
    ///
    /// Human unique = human − computer, computer unique = computer − human,
    /// common = intersection; only the unique sets score, and totals
    /// accumulate across rounds.
    pub fn finish_round(&mut self) -> RoundSummary {
        let human_unique = self.human.words().difference(self.computer.words());
        let computer_unique = self.computer.words().difference(self.human.words());
        let common = self.human.words().intersection(self.computer.words());

        let human_round_score = set_score(&human_unique);
        let computer_round_score = set_score(&computer_unique);
        self.human.add_score(human_round_score);
        self.computer.add_score(computer_round_score);

        RoundSummary {
            round: self.round,
            human_unique,
            computer_unique,
            common,
            human_round_score,
            computer_round_score,
            human_total: self.human.score(),
            computer_total: self.computer.score(),
        }
    }

    /// Give the dictionary back at the end of a session, e.g. for saving
    #[must_use]
    pub fn into_store(self) -> WordStore {
        self.store
    }

    /// Archive the round and start the next one on a fresh board
    pub fn new_round<R: Rng>(&mut self, rng: &mut R) {
        self.round += 1;
        self.board = Board::random(rng);
        self.human.new_round();
        self.computer.new_round();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_game() -> Game {
        let board = Board::from_rows(&["cat", "ogr", "din"]).unwrap();
        let mut store = WordStore::from_words(["cat", "cog", "dig", "zebra"]);
        store.set_difficulty(10);
        Game::with_board(board, store)
    }

    #[test]
    fn human_turn_checks_words_against_the_board() {
        let mut game = sample_game();
        let mut rng = StdRng::seed_from_u64(5);

        game.human_turn("cat cot", &mut rng);

        let found: Vec<&str> = game.human().words().iter().collect();
        assert_eq!(found, ["cat"]);
        let invalid: Vec<&str> = game.human().invalid_words().iter().collect();
        assert_eq!(invalid, ["cot"]);
    }

    #[test]
    fn computer_turn_collects_discovered_words() {
        let mut game = sample_game();
        let mut rng = StdRng::seed_from_u64(5);

        let words: Vec<String> = game
            .computer_turn(&mut rng)
            .iter()
            .map(String::from)
            .collect();
        assert_eq!(words, ["cat", "cog", "dig"]);
    }

    #[test]
    fn finish_round_classifies_and_scores_unique_words() {
        let mut game = sample_game();
        let mut rng = StdRng::seed_from_u64(5);

        game.human_turn("cat", &mut rng);
        game.computer_turn(&mut rng);
        let summary = game.finish_round();

        assert!(summary.human_unique.is_empty());
        let computer_unique: Vec<&str> = summary.computer_unique.iter().collect();
        assert_eq!(computer_unique, ["cog", "dig"]);
        let common: Vec<&str> = summary.common.iter().collect();
        assert_eq!(common, ["cat"]);

        assert_eq!(summary.human_round_score, 0);
        assert_eq!(summary.computer_round_score, 2);
        assert_eq!(summary.human_total, 0);
        assert_eq!(summary.computer_total, 2);
    }

    #[test]
    fn totals_accumulate_across_rounds() {
        let mut game = sample_game();
        let mut rng = StdRng::seed_from_u64(5);

        game.computer_turn(&mut rng);
        let first = game.finish_round();
        assert_eq!(first.computer_total, 3);

        game.new_round(&mut rng);
        let second = game.finish_round();
        // Fresh round, no words entered yet
        assert_eq!(second.computer_round_score, 0);
        assert_eq!(second.computer_total, 3);
    }

    #[test]
    fn reject_words_affects_both_players_and_the_store() {
        let mut game = sample_game();
        let mut rng = StdRng::seed_from_u64(5);

        game.human_turn("cat", &mut rng);
        game.computer_turn(&mut rng);
        game.reject_words("cat");

        assert!(game.human().words().is_empty());
        assert!(game.computer().words().index_of("cat").is_none());
        assert!(!game.store().contains("cat"));
    }

    #[test]
    fn new_round_replaces_the_board_and_bumps_the_counter() {
        let mut game = sample_game();
        let mut rng = StdRng::seed_from_u64(5);
        let old_board = game.board().clone();

        assert_eq!(game.round(), 1);
        game.new_round(&mut rng);

        assert_eq!(game.round(), 2);
        assert_eq!(game.board().side(), crate::board::DEFAULT_SIDE);
        assert_ne!(*game.board(), old_board);
    }
}
