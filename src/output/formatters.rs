//! Formatting utilities for terminal output

use crate::core::{MissLetters, Score, Word};

/// Rules and marker legend shown when the player enters `h`
pub const HELP_TEXT: &str = "\
Guess-My-Word HELP:
The goal in Guess-My-Word is to guess a 5-letter English word of the day in 6 attempts or less.
For each attempt, you must enter a valid word. The attempt is not lost if the guess is invalid - \
the game continues to ask for a guess until a valid guess is provided.
Both the target word and the guess can contain repeated letters. You must enter your guess and press ENTER.
The system returns a score on your guess, which displays if the letters in the guess are present \
in the word of the day.

X = exact
0 = misplaced
_ = miss

If the guess is not correct, the game continues to ask for a guess until the attempts are exhausted \
(game is lost)
or until you correctly guess the word of the day (game is won) within the provided attempts.
";

/// True for the help command: `h`, any case, surrounding whitespace ignored
#[must_use]
pub fn is_help_request(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("h")
}

/// Format a guess and its score as two aligned lines
///
/// # Examples
/// ```
/// use guess_my_word::core::{Score, Word};
/// use guess_my_word::output::formatters::format_score;
///
/// let guess = Word::new("hello").unwrap();
/// let score = Score::from_values(&[1, 0, 0, 2, 1]).unwrap();
/// assert_eq!(format_score(&guess, &score), "H E L L O\n0 _ _ X 0");
/// ```
#[must_use]
pub fn format_score(guess: &Word, score: &Score) -> String {
    format!("{}\n{}", guess.spaced_upper(), score.markers())
}

/// Message listing the miss letters, e.g.
/// `Letters entered not in word of the day: ['H', 'L', 'O']`
#[must_use]
pub fn format_miss_letters(misses: &MissLetters) -> String {
    let quoted: Vec<String> = misses.letters().map(|ch| format!("'{ch}'")).collect();
    format!(
        "Letters entered not in word of the day: [{}]",
        quoted.join(", ")
    )
}

/// "1 attempt" / "3 attempts"
#[must_use]
pub fn attempts_label(count: usize) -> String {
    if count == 1 {
        "1 attempt".to_string()
    } else {
        format!("{count} attempts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(values: &[u8]) -> Score {
        Score::from_values(values).unwrap()
    }

    #[test]
    fn format_score_renders_markers() {
        let hello = Word::new("hello").unwrap();

        assert_eq!(
            format_score(&hello, &score(&[0, 0, 0, 0, 0])),
            "H E L L O\n_ _ _ _ _"
        );
        assert_eq!(
            format_score(&hello, &score(&[0, 0, 0, 1, 1])),
            "H E L L O\n_ _ _ 0 0"
        );
        assert_eq!(
            format_score(&hello, &score(&[1, 0, 0, 2, 1])),
            "H E L L O\n0 _ _ X 0"
        );
        assert_eq!(
            format_score(&hello, &score(&[2, 2, 2, 2, 2])),
            "H E L L O\nX X X X X"
        );
    }

    #[test]
    fn format_miss_letters_sorted_and_quoted() {
        let mut misses = MissLetters::new();
        misses.record(&Word::new("hello").unwrap(), &Word::new("weird").unwrap());

        assert_eq!(
            format_miss_letters(&misses),
            "Letters entered not in word of the day: ['H', 'L', 'O']"
        );
    }

    #[test]
    fn format_miss_letters_empty() {
        assert_eq!(
            format_miss_letters(&MissLetters::new()),
            "Letters entered not in word of the day: []"
        );
    }

    #[test]
    fn help_request_detection() {
        assert!(is_help_request("h"));
        assert!(is_help_request(" H \n"));
        assert!(!is_help_request("help"));
        assert!(!is_help_request("hello"));
    }

    #[test]
    fn help_text_has_legend() {
        assert!(HELP_TEXT.contains("X = exact"));
        assert!(HELP_TEXT.contains("0 = misplaced"));
        assert!(HELP_TEXT.contains("_ = miss"));
    }

    #[test]
    fn attempts_label_pluralizes() {
        assert_eq!(attempts_label(1), "1 attempt");
        assert_eq!(attempts_label(6), "6 attempts");
    }
}
