//! Word lists for the game
//!
//! The dictionary holds every word accepted as a guess; the target list holds
//! the candidates for the word of the day. Both are embedded at build time and
//! can be replaced by files at startup.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain a usable word list. Fatal at startup.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0} word list contains no valid 5-letter words")]
    Empty(&'static str),
}

/// Words accepted as a guess
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty("dictionary"));
        }
        let index = words.iter().map(|w| w.text().to_string()).collect();
        Ok(Self { words, index })
    }

    /// Case-insensitive membership test, surrounding whitespace ignored
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_lowercase())
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    /// Words in their original order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Candidates for the word of the day
#[derive(Debug, Clone)]
pub struct TargetList {
    words: Vec<Word>,
}

impl TargetList {
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty("target"));
        }
        Ok(Self { words })
    }

    /// Draw one target uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Dictionary and target list loaded together
#[derive(Debug, Clone)]
pub struct WordLists {
    pub dictionary: Dictionary,
    pub targets: TargetList,
}

impl WordLists {
    /// Build from already-parsed words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if either list is empty.
    pub fn new(dictionary: Vec<Word>, targets: Vec<Word>) -> Result<Self, WordListError> {
        let lists = Self {
            dictionary: Dictionary::new(dictionary)?,
            targets: TargetList::new(targets)?,
        };

        let unguessable = lists
            .targets
            .words()
            .iter()
            .filter(|w| !lists.dictionary.contains(w))
            .count();
        if unguessable > 0 {
            log::warn!("{unguessable} target words are missing from the dictionary");
        }

        Ok(lists)
    }

    /// The lists compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded data is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(DICTIONARY),
            loader::words_from_slice(TARGETS),
        )
    }

    /// Load each list from its file, or fall back to the embedded list
    ///
    /// # Errors
    /// Returns an error if a given file cannot be read or yields no words.
    pub fn load(
        dictionary_path: Option<&Path>,
        targets_path: Option<&Path>,
    ) -> Result<Self, WordListError> {
        let dictionary = match dictionary_path {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(DICTIONARY),
        };
        let targets = match targets_path {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(TARGETS),
        };

        let lists = Self::new(dictionary, targets)?;
        log::info!(
            "word lists ready: {} dictionary words, {} targets",
            lists.dictionary.len(),
            lists.targets.len()
        );
        Ok(lists)
    }
}
