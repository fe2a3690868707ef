//! Score a single guess without playing a session

use crate::core::{Score, Word, WordError};
use crate::output::format_score;

/// Result of scoring one guess against one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub guess: Word,
    pub target: Word,
    pub score: Score,
}

impl ScoreReport {
    /// The two-line rendering followed by the numeric values
    #[must_use]
    pub fn render(&self) -> String {
        let values: Vec<String> = self.score.values().iter().map(u8::to_string).collect();
        format!(
            "{}\n({})",
            format_score(&self.guess, &self.score),
            values.join(", ")
        )
    }
}

/// Score `guess` against `target`
///
/// Neither word needs to be in a dictionary.
///
/// # Errors
///
/// Returns `WordError` if either input is not a 5-letter word.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreReport, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let score = Score::calculate(&guess, &target);
    log::debug!("{guess} vs {target}: {:?}", score.values());

    Ok(ScoreReport {
        guess,
        target,
        score,
    })
}
