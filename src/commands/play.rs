//! Prompt-driven game
//!
//! Asks for the player's name, then runs sessions on any line-based reader and
//! writer. `main` wires it to stdin/stdout; tests drive it with in-memory I/O.

use crate::game::{GameConfig, Session, SessionState};
use crate::output::display::{
    write_greeting, write_help, write_invalid_guess, write_lost, write_retry, write_turn,
    write_welcome, write_won,
};
use crate::output::is_help_request;
use crate::wordlists::WordLists;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};

/// Name used when the player just presses Enter
const DEFAULT_NAME: &str = "human";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { attempts: usize },
    Lost,
    /// Input ran out before the session was over
    Abandoned,
}

/// Run the interactive prompt loop until the player stops or input ends
///
/// Returns the outcome of every session played.
///
/// # Errors
///
/// Returns an error on I/O failure reading input, writing output or updating
/// the miss-letter log.
pub fn run_play<R: BufRead, W: Write>(
    lists: &WordLists,
    config: &GameConfig,
    mut input: R,
    mut output: W,
) -> Result<Vec<SessionOutcome>> {
    let mut rng = config.rng();
    let mut outcomes = Vec::new();

    write_welcome(&mut output)?;

    let name = if let Some(name) = &config.player_name {
        name.clone()
    } else {
        match read_line(&mut input, &mut output, "What is your name, human?")? {
            Some(name) if !name.is_empty() => name,
            Some(_) => DEFAULT_NAME.to_string(),
            None => {
                writeln!(output, "\nGoodbye!")?;
                return Ok(outcomes);
            }
        }
    };
    write_greeting(&mut output, &name, config.max_attempts)?;

    loop {
        let outcome = play_session(lists, config, &name, &mut rng, &mut input, &mut output)?;
        outcomes.push(outcome);
        log::info!("session {} ended: {outcome:?}", outcomes.len());

        if outcome == SessionOutcome::Abandoned {
            break;
        }

        let again = read_line(&mut input, &mut output, "Play again? (yes/no)")?;
        if !again.is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")) {
            break;
        }
        writeln!(output, "\nNew word of the day chosen!\n")?;
    }

    writeln!(output, "Thanks for playing, {name}!")?;
    Ok(outcomes)
}

fn play_session<G: Rng, R: BufRead, W: Write>(
    lists: &WordLists,
    config: &GameConfig,
    name: &str,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Result<SessionOutcome> {
    let mut session = Session::start(lists, rng, config.max_attempts);
    let miss_log = config
        .open_miss_log()
        .context("failed to create the miss-letter log")?;
    let prompt = format!("Enter your guess, {name}:");

    loop {
        let Some(line) = read_line(input, output, &prompt)? else {
            writeln!(
                output,
                "\nNo more guesses. The word of the day was \"{}\".",
                session.target()
            )?;
            return Ok(SessionOutcome::Abandoned);
        };

        if is_help_request(&line) {
            write_help(output)?;
            continue;
        }

        let turn = match session.submit(&line) {
            Ok(turn) => turn,
            Err(err) => {
                write_invalid_guess(output, name, &err)?;
                continue;
            }
        };

        if let Some(log) = &miss_log {
            log.mirror(&turn.missed, session.misses())
                .with_context(|| format!("failed to update {}", log.path().display()))?;
        }
        write_turn(output, &turn, session.misses())?;

        match turn.state {
            SessionState::Won => {
                write_won(output, name, session.target(), turn.attempt)?;
                return Ok(SessionOutcome::Won {
                    attempts: turn.attempt,
                });
            }
            SessionState::Lost => {
                write_lost(output, name, session.target())?;
                return Ok(SessionOutcome::Lost);
            }
            SessionState::AwaitingGuess => write_retry(output, name, session.attempts_left())?,
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    writeln!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read player input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
