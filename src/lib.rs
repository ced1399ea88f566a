//! Boggle Solver
//!
//! A Boggle word finder: a backtracking search engine over an N×N letter
//! grid, a learning dictionary with prefix-range pruning, and scored
//! human-versus-computer rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::board::Board;
//! use boggle_solver::dictionary::WordStore;
//!
//! let board = Board::from_rows(&["cat", "ogr", "din"]).unwrap();
//! assert!(board.is_word_on_board("cat"));
//!
//! let store = WordStore::from_words(["cat", "cog", "zebra"]);
//! let found = board.dictionary_words(&store);
//! assert_eq!(found.len(), 2);
//! ```

// Core domain types
pub mod core;

// The letter grid and search engine
pub mod board;

// The learning dictionary
pub mod dictionary;

// Players, scoring, and rounds
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
