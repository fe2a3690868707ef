//! Guess My Word
//!
//! Guess the 5-letter word of the day in six attempts, with per-letter feedback
//! after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_my_word::core::{Score, Word};
//!
//! let guess = Word::new("gauge").unwrap();
//! let target = Word::new("range").unwrap();
//!
//! let score = Score::calculate(&guess, &target);
//! assert_eq!(score.values(), [0, 2, 0, 2, 2]);
//! assert_eq!(score.to_string(), "_ X _ X X");
//! ```

// Core domain types
pub mod core;

// Session state machine and settings
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging setup
pub mod logging;
