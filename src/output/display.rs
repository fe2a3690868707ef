//! Display functions for the prompt-driven game

use super::formatters::{HELP_TEXT, attempts_label, format_miss_letters, format_score};
use crate::core::{MissLetters, Word};
use crate::game::{GuessError, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Print the title banner
///
/// # Errors
/// Propagates write failures.
pub fn write_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, "{}", "       Welcome to Guess My Word.".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out)
}

/// Greet the player and state the rules in one line
///
/// # Errors
/// Propagates write failures.
pub fn write_greeting<W: Write>(out: &mut W, name: &str, max_attempts: usize) -> io::Result<()> {
    writeln!(
        out,
        "\nHi, {name}. Let's begin, shall we?\nYou have {} to guess the word of the day.\nGood luck!\n\nFor help, enter {}.\n",
        attempts_label(max_attempts),
        "H".bold()
    )
}

/// Print a scored guess followed by the miss letters so far
///
/// # Errors
/// Propagates write failures.
pub fn write_turn<W: Write>(out: &mut W, turn: &Turn, misses: &MissLetters) -> io::Result<()> {
    writeln!(out, "{}", format_score(&turn.guess, &turn.score).bold())?;
    writeln!(out, "{}", format_miss_letters(misses).bright_black())
}

/// # Errors
/// Propagates write failures.
pub fn write_won<W: Write>(out: &mut W, name: &str, target: &Word, attempts: usize) -> io::Result<()> {
    writeln!(
        out,
        "\n{}\nWord of the day: {}\nSolved in {}.\n",
        format!("Well done, {name}, you won!").green().bold(),
        target.text().bright_yellow().bold(),
        attempts_label(attempts)
    )
}

/// # Errors
/// Propagates write failures.
pub fn write_lost<W: Write>(out: &mut W, name: &str, target: &Word) -> io::Result<()> {
    writeln!(
        out,
        "\n{}\nThe word of the day was \"{}\"\n",
        format!("Sorry, you lost, {name} :(").red().bold(),
        target.text().bright_yellow().bold()
    )
}

/// Encourage another go after a wrong guess
///
/// # Errors
/// Propagates write failures.
pub fn write_retry<W: Write>(out: &mut W, name: &str, attempts_left: usize) -> io::Result<()> {
    writeln!(
        out,
        "Not quite right, {name}. Give it another go. ({} left)\n",
        attempts_label(attempts_left)
    )
}

/// Report a rejected guess. The attempt is not consumed.
///
/// # Errors
/// Propagates write failures.
pub fn write_invalid_guess<W: Write>(out: &mut W, name: &str, error: &GuessError) -> io::Result<()> {
    log::debug!("invalid guess: {error}");
    writeln!(
        out,
        "{}\n",
        format!("Error. Please enter a 5-letter valid English word, {name}.").red()
    )
}

/// # Errors
/// Propagates write failures.
pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{HELP_TEXT}")
}
