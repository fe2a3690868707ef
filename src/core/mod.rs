//! Core domain types for the game
//!
//! Pure types with no I/O: words, scoring and miss-letter tracking.

mod misses;
mod score;
mod word;

pub use misses::{MissLetters, missing_letters};
pub use score::{Outcome, Score, is_won};
pub use word::{WORD_LENGTH, Word, WordError};
