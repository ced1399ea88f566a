//! Word verification command
//!
//! Checks typed words against a board and the dictionary without starting
//! a game.

use crate::board::Board;
use crate::core::tokenize;
use crate::dictionary::WordStore;

/// Verdict for one entered word
pub struct CheckOutcome {
    pub word: String,
    pub on_board: bool,
    pub in_dictionary: bool,
}

/// Check every word in `text` against the board and dictionary
///
/// The text may hold several space- or punctuation-separated words; each
/// token is lowercased, then verified independently.
#[must_use]
pub fn check_words(text: &str, board: &Board, store: &WordStore) -> Vec<CheckOutcome> {
    tokenize(text)
        .map(|word| {
            let on_board = board.is_word_on_board(&word);
            let in_dictionary = store.contains(&word);
            CheckOutcome {
                word,
                on_board,
                in_dictionary,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_board_and_dictionary_status() {
        let board = Board::from_rows(&["cat", "ogr", "din"]).unwrap();
        let store = WordStore::from_words(["cat", "cot"]);

        let outcomes = check_words("cat, cot dig", &board, &store);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].word, "cat");
        assert!(outcomes[0].on_board);
        assert!(outcomes[0].in_dictionary);

        assert_eq!(outcomes[1].word, "cot");
        assert!(!outcomes[1].on_board);
        assert!(outcomes[1].in_dictionary);

        assert_eq!(outcomes[2].word, "dig");
        assert!(outcomes[2].on_board);
        assert!(!outcomes[2].in_dictionary);
    }

    #[test]
    fn check_with_no_tokens_is_empty() {
        let board = Board::from_rows(&["ca", "og"]).unwrap();
        let store = WordStore::new();
        assert!(check_words(" ,. ", &board, &store).is_empty());
    }
}
