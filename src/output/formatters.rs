//! Formatting utilities for terminal output

use crate::core::WordSet;

/// Arrange a word set into fixed-width columns
///
/// Returns one string with newline-separated rows of `per_row` words, each
/// padded to the longest word's width. An empty set yields an empty string.
#[must_use]
pub fn format_word_columns(words: &WordSet, per_row: usize) -> String {
    let width = words.iter().map(str::len).max().unwrap_or(0);
    let mut lines: Vec<String> = Vec::new();

    for (i, word) in words.iter().enumerate() {
        if i % per_row == 0 {
            lines.push(String::new());
        }
        // Just pushed for the first column, so the row always exists
        let line = lines.last_mut().expect("row exists");
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(&format!("{word:<width$}"));
    }

    lines.join("\n")
}

/// Pluralize a count, e.g. "1 point" / "3 points"
#[must_use]
pub fn count_label(count: u32, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}
