//! Dictionary discovery command
//!
//! Runs the full pruned search for every dictionary word on a board.

use crate::board::Board;
use crate::core::WordSet;
use crate::dictionary::WordStore;
use crate::game::scoring::set_score;

/// Result of a discovery run
pub struct DiscoverResult {
    pub words: WordSet,
    pub score: u32,
}

/// Find every dictionary word on the board, with its total score
#[must_use]
pub fn run_discover(board: &Board, store: &WordStore) -> DiscoverResult {
    let words = board.dictionary_words(store);
    let score = set_score(&words);
    DiscoverResult { words, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_scores_the_found_set() {
        let board = Board::from_rows(&["cat", "ogr", "din"]).unwrap();
        let store = WordStore::from_words(["cat", "cog", "dig", "zebra"]);

        let result = run_discover(&board, &store);

        let words: Vec<&str> = result.words.iter().collect();
        assert_eq!(words, ["cat", "cog", "dig"]);
        assert_eq!(result.score, 3);
    }

    #[test]
    fn discover_on_empty_store_scores_zero() {
        let board = Board::from_rows(&["cat", "ogr", "din"]).unwrap();
        let result = run_discover(&board, &WordStore::new());
        assert!(result.words.is_empty());
        assert_eq!(result.score, 0);
    }
}
