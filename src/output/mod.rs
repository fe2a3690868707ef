//! Terminal output formatting
//!
//! Plain-text formatting plus colored display helpers for the prompt loop.

pub mod display;
pub mod formatters;

pub use formatters::{HELP_TEXT, format_miss_letters, format_score, is_help_request};
