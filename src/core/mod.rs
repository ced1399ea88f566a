//! Core domain types for the Boggle engine
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod position;
mod tokens;
mod word_set;

pub use position::Position;
pub use tokens::tokenize;
pub use word_set::WordSet;
