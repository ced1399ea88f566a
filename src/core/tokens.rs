//! Raw word input tokenizing
//!
//! Player input arrives as one line that may hold several words separated by
//! spaces or punctuation. Tokens are split on non-word characters, empties
//! dropped, and the rest lowercased before any board or dictionary check.

/// Split raw input into lowercased word tokens
///
/// A word character is an ASCII alphanumeric or underscore; every other
/// character separates tokens. Tokens that are not purely alphabetic are
/// kept here and rejected later by the board check, which only ever matches
/// letters.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}
