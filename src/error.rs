//! Error types for the audit questionnaire.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A question record that breaks the option/score pairing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// The question offers no options at all.
    #[error("question {text:?} has no options")]
    NoOptions { text: String },

    /// Option labels and score values are not paired one-to-one.
    #[error("question {text:?} has {options} options but {scores} scores")]
    ScoreMismatch {
        text: String,
        options: usize,
        scores: usize,
    },
}

/// Errors raised while grouping records into catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A catalog was built from zero records.
    #[error("no {records} records to build a catalog from")]
    EmptyInput {
        /// Which record kind was empty ("question" or "best practice").
        records: &'static str,
    },

    /// Summing a chapter's best option scores overflows `i64`.
    #[error("chapter {chapter:?} has an achievable score too large to represent")]
    ScoreOverflow { chapter: String },
}

/// Errors raised by the scoring engine and the percentage calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The selected option index is outside the current question's options.
    #[error("option {index} is out of range, the question has {options} options")]
    InvalidSelection { index: usize, options: usize },

    /// Every question in the chapter is worth zero points at best.
    #[error("chapter {chapter:?} has no achievable score, percentage is undefined")]
    DivisionUndefined { chapter: String },

    /// `advance` was called with no answer submitted for the current question.
    #[error("the current question has not been answered")]
    Unanswered,

    /// Adding the option's points would overflow the running score.
    #[error("adding {points} points to chapter {chapter:?} overflows the score")]
    ScoreOverflow { chapter: String, points: i64 },

    /// The session already walked past its last chapter.
    #[error("the session is already complete")]
    SessionComplete,
}

impl ScoringError {
    /// Whether the caller can re-prompt and carry on with the same session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScoringError::InvalidSelection { .. }
                | ScoringError::DivisionUndefined { .. }
                | ScoringError::Unanswered
                | ScoringError::ScoreOverflow { .. }
        )
    }
}

/// Errors raised while reading record files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error for running an audit.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to load records: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Invalid answer list: {0}")]
    Answers(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(ScoringError::InvalidSelection { index: 4, options: 3 }.is_recoverable());
        assert!(
            ScoringError::DivisionUndefined {
                chapter: "Backups".to_string()
            }
            .is_recoverable()
        );
        assert!(ScoringError::Unanswered.is_recoverable());
        assert!(
            ScoringError::ScoreOverflow {
                chapter: "Big".to_string(),
                points: 1
            }
            .is_recoverable()
        );
        assert!(!ScoringError::SessionComplete.is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogError::EmptyInput { records: "question" };
        assert_eq!(err.to_string(), "no question records to build a catalog from");

        let err = ScoringError::InvalidSelection { index: 3, options: 3 };
        assert_eq!(
            err.to_string(),
            "option 3 is out of range, the question has 3 options"
        );
    }
}
