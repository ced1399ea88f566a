//! The Boggle letter grid
//!
//! A `Board` owns an N×N grid of lowercase letters (N = 4 for a standard
//! game) and the search engine that decides which words are traceable on
//! it. Grids are either generated from a weighted letter distribution or
//! built from preset rows.

mod search;

use crate::core::Position;
use rand::Rng;
use std::fmt;

/// Side length of a standard board
pub const DEFAULT_SIDE: usize = 4;

/// Letter pool for grid generation, one byte per draw out of 96
///
/// Weights: J/K/Q/Y/Z ×1, B/C/F/G/M/P/V ×2, D/U/W/X ×3, H/L/R ×5,
/// A/I/N/S/O ×6, E/T ×10.
const LETTER_POOL: &[u8; 96] =
    b"aaaaaabbccdddeeeeeeeeeeffgghhhhhiiiiiijklllllmmnnnnnnooooooppqrrrrrssssssttttttttttuuuvvwwwxxxyz";

/// Error type for invalid preset grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Empty,
    NotSquare { rows: usize, cols: usize },
    InvalidCharacter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Board must have at least one row"),
            Self::NotSquare { rows, cols } => {
                write!(f, "Board must be square, got {rows} rows x {cols} columns")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "Board letters must be alphabetic, got {c:?}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// An N×N grid of lowercase letters
///
/// The grid is immutable once constructed; a new round gets a freshly
/// generated board rather than mutating this one. Search scratch state is
/// local to each call, so a shared `&Board` can serve repeated queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    side: usize,
    cells: Vec<char>,
}

impl Board {
    /// Generate a standard 4×4 board from the weighted letter pool
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::random_with_side(DEFAULT_SIDE, rng)
    }

    /// Generate a board of the given side from the weighted letter pool
    ///
    /// Every cell is drawn independently, so repeated letters across the
    /// grid are expected.
    pub fn random_with_side(side: usize, rng: &mut impl Rng) -> Self {
        let cells = (0..side * side)
            .map(|_| LETTER_POOL[rng.random_range(0..LETTER_POOL.len())] as char)
            .collect();
        Self { side, cells }
    }

    /// Build a board from preset rows of letters
    ///
    /// Rows must form a non-empty square of alphabetic characters; letters
    /// are normalized to lowercase.
    ///
    /// # Errors
    /// Returns `BoardError` if the grid is empty, not square, or contains a
    /// non-alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::board::Board;
    ///
    /// let board = Board::from_rows(&["cat", "ogr", "din"]).unwrap();
    /// assert_eq!(board.side(), 3);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        if rows.is_empty() {
            return Err(BoardError::Empty);
        }

        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);

        for row in rows {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != side {
                return Err(BoardError::NotSquare { rows: side, cols: width });
            }
            for c in row.chars() {
                if !c.is_ascii_alphabetic() {
                    return Err(BoardError::InvalidCharacter(c));
                }
                cells.push(c.to_ascii_lowercase());
            }
        }

        Ok(Self { side, cells })
    }

    /// Side length of the grid
    #[inline]
    #[must_use]
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    #[inline]
    #[must_use]
    pub fn letter(&self, pos: Position) -> char {
        self.cells[self.index(pos)]
    }

    /// Row-major flat index of a position
    #[inline]
    fn index(&self, pos: Position) -> usize {
        pos.row() * self.side + pos.col()
    }

    /// Iterate every cell position in row-major order
    fn positions(&self) -> impl Iterator<Item = Position> {
        let side = self.side;
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            for col in 0..self.side {
                write!(f, "{} ", self.cells[row * self.side + col].to_ascii_uppercase())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn letter_pool_has_expected_weights() {
        let count = |letter: u8| LETTER_POOL.iter().filter(|&&c| c == letter).count();
        for rare in [b'j', b'k', b'q', b'y', b'z'] {
            assert_eq!(count(rare), 1);
        }
        for common in [b'a', b'i', b'n', b's', b'o'] {
            assert_eq!(count(common), 6);
        }
        assert_eq!(count(b'e'), 10);
        assert_eq!(count(b't'), 10);
        assert_eq!(count(b'h'), 5);
        assert_eq!(count(b'd'), 3);
        assert_eq!(count(b'b'), 2);
    }

    #[test]
    fn random_board_has_default_side_and_lowercase_letters() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::random(&mut rng);
        assert_eq!(board.side(), DEFAULT_SIDE);
        for pos in board.positions() {
            assert!(board.letter(pos).is_ascii_lowercase());
        }
    }

    #[test]
    fn random_board_is_deterministic_for_a_seed() {
        let first = Board::random(&mut StdRng::seed_from_u64(42));
        let second = Board::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn from_rows_builds_expected_grid() {
        let board = Board::from_rows(&["CAt", "ogr", "din"]).unwrap();
        assert_eq!(board.side(), 3);
        assert_eq!(board.letter(Position::new(0, 0)), 'c');
        assert_eq!(board.letter(Position::new(0, 2)), 't');
        assert_eq!(board.letter(Position::new(2, 1)), 'i');
    }

    #[test]
    fn from_rows_rejects_empty_grid() {
        let rows: [&str; 0] = [];
        assert_eq!(Board::from_rows(&rows), Err(BoardError::Empty));
    }

    #[test]
    fn from_rows_rejects_non_square_grid() {
        assert_eq!(
            Board::from_rows(&["cat", "og"]),
            Err(BoardError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn from_rows_rejects_non_alphabetic_letters() {
        assert_eq!(
            Board::from_rows(&["c1", "og"]),
            Err(BoardError::InvalidCharacter('1'))
        );
    }

    #[test]
    fn display_renders_uppercase_rows() {
        let board = Board::from_rows(&["ca", "og"]).unwrap();
        assert_eq!(format!("{board}"), "C A \nO G \n");
    }
}
