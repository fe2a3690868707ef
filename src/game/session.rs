//! One play-through: from target selection to win or loss
//!
//! The session owns the target, the attempt counter and the miss letters.
//! Front ends feed it raw player input through [`Session::submit`] and render
//! the returned [`Turn`].

use crate::core::{MissLetters, Score, WORD_LENGTH, Word, missing_letters};
use crate::wordlists::{Dictionary, WordLists};
use rand::Rng;
use thiserror::Error;

/// Attempts allowed per session unless configured otherwise
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Won,
    Lost,
}

impl SessionState {
    /// Won and Lost are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A rejected guess. Never consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be 5 letters, got {0}")]
    WrongLength(usize),
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),
    #[error("the session is already over")]
    SessionOver,
}

/// A scored attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub score: Score,
    /// 1-based attempt number
    pub attempt: usize,
    /// Letters of this guess absent from the target, in guess order
    pub missed: Vec<char>,
    pub state: SessionState,
}

#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    max_attempts: usize,
    attempts: usize,
    state: SessionState,
    history: Vec<Turn>,
    misses: MissLetters,
}

impl<'a> Session<'a> {
    /// Start a session against a known target
    ///
    /// # Panics
    /// Panics in debug mode if `max_attempts` is zero
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, target: Word, max_attempts: usize) -> Self {
        debug_assert!(max_attempts > 0, "a session needs at least one attempt");
        log::debug!("session started, {max_attempts} attempts");

        Self {
            dictionary,
            target,
            max_attempts,
            attempts: 0,
            state: SessionState::AwaitingGuess,
            history: Vec::new(),
            misses: MissLetters::new(),
        }
    }

    /// Start a session with a target drawn at random from `lists`
    pub fn start<R: Rng>(lists: &'a WordLists, rng: &mut R, max_attempts: usize) -> Self {
        let target = lists.targets.choose(rng).clone();
        Self::new(&lists.dictionary, target, max_attempts)
    }

    /// Validate, score and record one guess
    ///
    /// # Errors
    /// - `GuessError::SessionOver` once the session is won or lost
    /// - `GuessError::WrongLength` if the trimmed input is not 5 characters
    /// - `GuessError::NotInDictionary` if the word is not accepted
    ///
    /// # Examples
    /// ```
    /// use guess_my_word::core::Word;
    /// use guess_my_word::game::{Session, SessionState};
    /// use guess_my_word::wordlists::{Dictionary, loader::words_from_slice};
    ///
    /// let dictionary = Dictionary::new(words_from_slice(&["hello", "weird"])).unwrap();
    /// let mut session = Session::new(&dictionary, Word::new("weird").unwrap(), 6);
    ///
    /// assert!(session.submit("nope").is_err());
    /// assert_eq!(session.attempts(), 0);
    ///
    /// let turn = session.submit("WEIRD").unwrap();
    /// assert_eq!(turn.state, SessionState::Won);
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        if self.state.is_over() {
            return Err(GuessError::SessionOver);
        }

        let normalized = input.trim().to_lowercase();
        let length = normalized.chars().count();
        if length != WORD_LENGTH {
            log::debug!("rejected guess {normalized:?}: {length} letters");
            return Err(GuessError::WrongLength(length));
        }

        let guess = match Word::new(&normalized) {
            Ok(word) if self.dictionary.contains(&word) => word,
            _ => {
                log::debug!("rejected guess {normalized:?}: not in dictionary");
                return Err(GuessError::NotInDictionary(normalized));
            }
        };

        self.attempts += 1;
        let score = Score::calculate(&guess, &self.target);
        self.misses.record(&guess, &self.target);

        self.state = if score.is_won() {
            SessionState::Won
        } else if self.attempts >= self.max_attempts {
            SessionState::Lost
        } else {
            SessionState::AwaitingGuess
        };
        log::debug!(
            "attempt {}/{}: {} scored {:?} -> {:?}",
            self.attempts,
            self.max_attempts,
            guess,
            score.values(),
            self.state
        );

        let turn = Turn {
            missed: missing_letters(&guess, &self.target),
            guess,
            score,
            attempt: self.attempts,
            state: self.state,
        };
        self.history.push(turn.clone());
        Ok(turn)
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Attempts consumed so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// The word of the day. Front ends reveal it only once the session is over.
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Scored turns in order
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Distinct letters guessed so far that are not in the target
    #[must_use]
    pub const fn misses(&self) -> &MissLetters {
        &self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&[
            "hello", "weird", "crane", "slate", "drain", "float", "train", "tenor", "melee",
            "erect",
        ]))
        .unwrap()
    }

    fn session<'a>(dictionary: &'a Dictionary, target: &str) -> Session<'a> {
        Session::new(dictionary, Word::new(target).unwrap(), MAX_ATTEMPTS)
    }

    #[test]
    fn starts_awaiting_guess() {
        let dict = dictionary();
        let session = session(&dict, "weird");

        assert_eq!(session.state(), SessionState::AwaitingGuess);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.attempts_left(), 6);
        assert!(session.history().is_empty());
        assert!(session.misses().is_empty());
    }

    #[test]
    fn invalid_guesses_do_not_consume_attempts() {
        let dict = dictionary();
        let mut session = session(&dict, "weird");

        assert_eq!(session.submit("hell"), Err(GuessError::WrongLength(4)));
        assert_eq!(session.submit(""), Err(GuessError::WrongLength(0)));
        assert_eq!(session.submit("toolong"), Err(GuessError::WrongLength(7)));
        assert_eq!(
            session.submit("zzzzz"),
            Err(GuessError::NotInDictionary("zzzzz".to_string()))
        );
        assert_eq!(
            session.submit("he11o"),
            Err(GuessError::NotInDictionary("he11o".to_string()))
        );

        assert_eq!(session.attempts(), 0);
        assert_eq!(session.state(), SessionState::AwaitingGuess);
    }

    #[test]
    fn input_is_trimmed_and_case_insensitive() {
        let dict = dictionary();
        let mut session = session(&dict, "tenor");

        let turn = session.submit("  TRAIN \n").unwrap();
        assert_eq!(turn.guess.text(), "train");
        assert_eq!(turn.score.values(), [2, 1, 0, 0, 1]);
        assert_eq!(turn.attempt, 1);
    }

    #[test]
    fn correct_guess_wins() {
        let dict = dictionary();
        let mut session = session(&dict, "weird");

        session.submit("hello").unwrap();
        let turn = session.submit("weird").unwrap();

        assert_eq!(turn.state, SessionState::Won);
        assert_eq!(turn.attempt, 2);
        assert!(turn.score.is_won());
        assert!(session.is_over());
    }

    #[test]
    fn six_misses_lose() {
        let dict = dictionary();
        let mut session = session(&dict, "weird");

        for attempt in 1..MAX_ATTEMPTS {
            let turn = session.submit("crane").unwrap();
            assert_eq!(turn.state, SessionState::AwaitingGuess, "attempt {attempt}");
        }
        let last = session.submit("slate").unwrap();

        assert_eq!(last.state, SessionState::Lost);
        assert_eq!(last.attempt, MAX_ATTEMPTS);
        assert_eq!(session.attempts_left(), 0);
        assert_eq!(session.history().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn winning_on_the_last_attempt_is_a_win() {
        let dict = dictionary();
        let mut session = Session::new(&dict, Word::new("weird").unwrap(), 2);

        session.submit("crane").unwrap();
        assert_eq!(session.submit("weird").unwrap().state, SessionState::Won);
    }

    #[test]
    fn submitting_after_the_end_is_rejected() {
        let dict = dictionary();
        let mut session = Session::new(&dict, Word::new("weird").unwrap(), 1);

        assert_eq!(session.submit("hello").unwrap().state, SessionState::Lost);
        assert_eq!(session.submit("weird"), Err(GuessError::SessionOver));
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn miss_letters_accumulate_over_the_session() {
        let dict = dictionary();
        let mut session = session(&dict, "weird");

        let turn = session.submit("hello").unwrap();
        assert_eq!(turn.missed, ['H', 'L', 'L', 'O']);
        assert_eq!(session.misses().letters().collect::<String>(), "HLO");

        session.submit("slate").unwrap();
        assert_eq!(session.misses().letters().collect::<String>(), "AHLOST");
    }

    #[test]
    fn history_keeps_every_scored_turn() {
        let dict = dictionary();
        let mut session = session(&dict, "erect");

        session.submit("melee").unwrap();
        let _ = session.submit("nope!");
        session.submit("tenor").unwrap();

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].score.values(), [0, 1, 0, 1, 0]);
        assert_eq!(history[1].guess.text(), "tenor");
        assert_eq!(history[1].score.outcome_at(0), Outcome::Misplaced);
    }

    #[test]
    fn start_draws_target_from_lists() {
        let lists = WordLists::new(
            words_from_slice(&["hello", "weird", "crane"]),
            words_from_slice(&["weird", "crane"]),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let session = Session::start(&lists, &mut rng, MAX_ATTEMPTS);
        assert!(["weird", "crane"].contains(&session.target().text()));
    }
}
