//! Letters the player has tried that are not in the target

use super::word::Word;
use std::collections::BTreeSet;

/// Accumulates the distinct guessed letters absent from the target
///
/// Letters are stored uppercase and iterate in alphabetical order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MissLetters {
    letters: BTreeSet<char>,
}

impl MissLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the letters of `guess` that appear nowhere in `target`
    ///
    /// Returns the accumulated set for the session so far.
    ///
    /// # Examples
    /// ```
    /// use guess_my_word::core::{MissLetters, Word};
    ///
    /// let mut misses = MissLetters::new();
    /// let guess = Word::new("hello").unwrap();
    /// let target = Word::new("weird").unwrap();
    ///
    /// let letters: Vec<char> = misses.record(&guess, &target).iter().copied().collect();
    /// assert_eq!(letters, ['H', 'L', 'O']);
    /// ```
    pub fn record(&mut self, guess: &Word, target: &Word) -> &BTreeSet<char> {
        self.letters.extend(missing_letters(guess, target));
        &self.letters
    }

    /// Accumulated letters in alphabetical order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Forget every recorded letter
    pub fn reset(&mut self) {
        self.letters.clear();
    }
}

/// Uppercase letters of `guess` absent from `target`, in guess order
///
/// Repeated letters are kept, e.g. `hello` against `weird` gives `H L L O`.
#[must_use]
pub fn missing_letters(guess: &Word, target: &Word) -> Vec<char> {
    guess
        .chars()
        .iter()
        .filter(|&&ch| !target.has_letter(ch))
        .map(|&ch| char::from(ch.to_ascii_uppercase()))
        .collect()
}
