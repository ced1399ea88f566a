//! Embedded starter dictionary
//!
//! Word list compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/starter.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_count_matches_const() {
        assert_eq!(STARTER.len(), STARTER_COUNT);
    }

    #[test]
    fn starter_words_are_lowercase_alphabetic() {
        for &word in STARTER {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' is not lowercase alphabetic"
            );
        }
    }

    #[test]
    fn starter_has_discovery_material() {
        // Discovery needs words of at least three letters
        assert!(STARTER.iter().any(|w| w.len() >= 3));
    }
}
