//! Full-screen terminal interface
//!
//! Plays the same sessions as the prompt loop with a ratatui board.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
