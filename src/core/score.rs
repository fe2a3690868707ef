//! Per-letter feedback for a guess
//!
//! A score holds one outcome per position of the guess:
//! - 0 = Miss (letter not in any unclaimed position of the target)
//! - 1 = Misplaced (letter in the target, wrong position)
//! - 2 = Exact (right letter, right position)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Miss = 0,
    Misplaced = 1,
    Exact = 2,
}

impl Outcome {
    /// Numeric value of the outcome (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Outcome for a numeric value, `None` above 2
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Miss),
            1 => Some(Self::Misplaced),
            2 => Some(Self::Exact),
            _ => None,
        }
    }

    /// Character shown under a letter: `_` miss, `0` misplaced, `X` exact
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Miss => '_',
            Self::Misplaced => '0',
            Self::Exact => 'X',
        }
    }
}

/// Feedback for a whole guess, aligned position by position with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([Outcome; WORD_LENGTH]);

impl Score {
    /// Every letter exact
    pub const WON: Self = Self([Outcome::Exact; WORD_LENGTH]);

    /// Score `guess` against `target`
    ///
    /// Exact matches are claimed first. Each target letter can then be claimed
    /// by at most one misplaced guess letter, earliest guess position first, so
    /// repeated letters are never over-counted.
    ///
    /// # Examples
    /// ```
    /// use guess_my_word::core::{Score, Word};
    ///
    /// let guess = Word::new("melee").unwrap();
    /// let target = Word::new("erect").unwrap();
    ///
    /// assert_eq!(Score::calculate(&guess, &target).values(), [0, 1, 0, 1, 0]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [Outcome::Miss; WORD_LENGTH];
        let mut remaining = target.char_counts();

        // Allow: index pairs guess[i] with target[i] and result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == target.char_at(i) {
                result[i] = Outcome::Exact;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Outcome::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = Outcome::Misplaced;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Build a score from numeric outcome values
    ///
    /// Returns `None` unless there are exactly 5 values, each 0, 1 or 2.
    #[must_use]
    pub fn from_values(values: &[u8]) -> Option<Self> {
        if values.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Outcome::Miss; WORD_LENGTH];
        for (slot, &value) in result.iter_mut().zip(values) {
            *slot = Outcome::from_value(value)?;
        }
        Some(Self(result))
    }

    /// Numeric outcome values in position order
    #[must_use]
    pub fn values(&self) -> [u8; WORD_LENGTH] {
        self.0.map(Outcome::value)
    }

    /// Outcomes in position order
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Outcome; WORD_LENGTH] {
        &self.0
    }

    /// Outcome at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn outcome_at(&self, position: usize) -> Outcome {
        self.0[position]
    }

    /// True when every position is exact
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.0.iter().all(|&outcome| outcome == Outcome::Exact)
    }

    /// Number of positions with the given outcome
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    /// Markers separated by spaces, e.g. `0 _ _ X 0`
    #[must_use]
    pub fn markers(&self) -> String {
        let markers: Vec<String> = self.0.iter().map(|o| o.marker().to_string()).collect();
        markers.join(" ")
    }
}

/// True iff every outcome in `score` is exact
#[inline]
#[must_use]
pub fn is_won(score: &Score) -> bool {
    score.is_won()
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markers())
    }
}

impl<'a> IntoIterator for &'a Score {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
