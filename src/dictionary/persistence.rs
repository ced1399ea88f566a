//! Dictionary file persistence
//!
//! The backing store is a plain text file, one word per line. Loading
//! accepts only purely alphabetic lines and treats a missing file as an
//! empty dictionary; saving caps the file at [`SAVE_CAP`] words, choosing a
//! uniform random sample when the in-memory store has grown past the cap.

use super::WordStore;
use rand::Rng;
use std::fs;
use std::io;
use std::path::Path;

/// Maximum number of words written back to the dictionary file
pub const SAVE_CAP: usize = 300;

/// Load a word store from a file
///
/// Lines that are not purely ASCII-alphabetic are skipped. A missing file
/// yields an empty store rather than an error, so a fresh session starts
/// cleanly.
///
/// # Errors
///
/// Returns an I/O error only for genuine read failures (permissions,
/// hardware); callers downgrade those to a warning and continue with
/// whatever is already in memory.
pub fn load_store<P: AsRef<Path>>(path: P) -> io::Result<WordStore> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(WordStore::new()),
        Err(e) => return Err(e),
    };

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.chars().all(|c| c.is_ascii_alphabetic()));

    Ok(WordStore::from_words(words))
}

/// Write a word store to a file, at most [`SAVE_CAP`] words
///
/// A store within the cap is written whole, in sorted iteration order. A
/// larger store is sampled: exactly [`SAVE_CAP`] words drawn uniformly
/// without replacement, by repeatedly removing a uniform pick from a
/// shrinking candidate list. Returns the number of words written.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_store<P: AsRef<Path>>(
    path: P,
    store: &WordStore,
    rng: &mut impl Rng,
) -> io::Result<usize> {
    let mut candidates: Vec<&str> = store.iter().collect();

    let selected = if candidates.len() > SAVE_CAP {
        let mut chosen = Vec::with_capacity(SAVE_CAP);
        for _ in 0..SAVE_CAP {
            let index = rng.random_range(0..candidates.len());
            chosen.push(candidates.swap_remove(index));
        }
        chosen
    } else {
        candidates
    };

    let mut content = String::new();
    for word in &selected {
        content.push_str(word);
        content.push('\n');
    }
    fs::write(path, content)?;

    Ok(selected.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::env;
    use std::path::PathBuf;

    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str) -> Self {
            let path = env::temp_dir().join(format!("boggle_{}_{name}", std::process::id()));
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn load_missing_file_yields_empty_store() {
        let store = load_store("definitely_not_a_real_dictionary_file.txt").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn load_skips_non_alphabetic_lines() {
        let file = TempFile::new("load_filter.txt");
        fs::write(&file.0, "cat\nd0g\nhen house\n\nfox\n123\n").unwrap();

        let store = load_store(&file.0).unwrap();
        let words: Vec<&str> = store.iter().collect();
        assert_eq!(words, ["cat", "fox"]);
    }

    #[test]
    fn load_trims_line_endings() {
        let file = TempFile::new("load_crlf.txt");
        fs::write(&file.0, "cat\r\ndog\r\n").unwrap();

        let store = load_store(&file.0).unwrap();
        assert!(store.contains("cat"));
        assert!(store.contains("dog"));
    }

    #[test]
    fn save_small_store_writes_all_words_sorted() {
        let file = TempFile::new("save_small.txt");
        let store = WordStore::from_words(["dog", "ant", "cat"]);
        let mut rng = StdRng::seed_from_u64(11);

        let written = save_store(&file.0, &store, &mut rng).unwrap();
        assert_eq!(written, 3);

        let content = fs::read_to_string(&file.0).unwrap();
        assert_eq!(content, "ant\ncat\ndog\n");
    }

    #[test]
    fn save_large_store_samples_exactly_the_cap() {
        let file = TempFile::new("save_large.txt");
        let words: Vec<String> = (0..500).map(|i| format!("word{i:03}")).collect();
        let store = WordStore::from_words(words.iter().map(String::as_str));
        let mut rng = StdRng::seed_from_u64(11);

        let written = save_store(&file.0, &store, &mut rng).unwrap();
        assert_eq!(written, SAVE_CAP);

        let content = fs::read_to_string(&file.0).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), SAVE_CAP);

        // No duplicates, every survivor came from the original store
        let unique: HashSet<&str> = lines.iter().copied().collect();
        assert_eq!(unique.len(), SAVE_CAP);
        for line in &lines {
            assert!(store.contains(line));
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let file = TempFile::new("round_trip.txt");
        let store = WordStore::from_words(["cat", "dog", "hen"]);
        let mut rng = StdRng::seed_from_u64(11);

        save_store(&file.0, &store, &mut rng).unwrap();
        let reloaded = load_store(&file.0).unwrap();

        assert_eq!(reloaded.len(), 3);
        assert!(reloaded.contains("cat"));
        assert!(reloaded.contains("dog"));
        assert!(reloaded.contains("hen"));
    }
}
