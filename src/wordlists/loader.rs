//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordListError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Words are separated by any whitespace. Entries that are not valid 5-letter
/// words are skipped.
///
/// # Errors
///
/// Returns `WordListError::Read` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use guess_my_word::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/all_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse whitespace-separated words, skipping invalid entries
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words = text
        .split_whitespace()
        .filter_map(|entry| {
            let word = Word::new(entry).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {skipped} entries that are not 5-letter words");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use guess_my_word::wordlists::loader::words_from_slice;
/// use guess_my_word::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_text_splits_on_any_whitespace() {
        let words = words_from_text("aahed aalii\n  abaca\r\nabaci\t\nzymic\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["aahed", "aalii", "abaca", "abaci", "zymic"]);
    }

    #[test]
    fn words_from_text_normalizes_case() {
        let words = words_from_text("HELLO World");
        assert_eq!(words[0].text(), "hello");
        assert_eq!(words[1].text(), "world");
    }

    #[test]
    fn load_from_file_reads_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "newly\nfirst\nbogus-entry\nzonal\n").unwrap();

        let words = load_from_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["newly", "first", "zonal"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guess_my_word_does_not_exist.txt");

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, WordListError::Read { .. }));
        assert!(err.to_string().contains("guess_my_word_does_not_exist.txt"));
    }
}
