use serde::Deserialize;

use crate::error::QuestionError;

/// One scored question of the audit.
///
/// `options[i]` is worth `scores[i]` points. Both lists always have the same,
/// non-zero length.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    chapter: String,
    text: String,
    options: Vec<String>,
    scores: Vec<i64>,
}

#[derive(Deserialize)]
struct QuestionRecord {
    chapter: String,
    text: String,
    options: Vec<String>,
    scores: Vec<i64>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.chapter, record.text, record.options, record.scores)
    }
}

impl Question {
    pub fn new(
        chapter: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        scores: Vec<i64>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();

        if options.is_empty() {
            return Err(QuestionError::NoOptions { text });
        }

        if options.len() != scores.len() {
            return Err(QuestionError::ScoreMismatch {
                text,
                options: options.len(),
                scores: scores.len(),
            });
        }

        Ok(Self {
            chapter: chapter.into(),
            text,
            options,
            scores,
        })
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    /// Points awarded for the option at `index`, if it exists.
    pub fn score_of(&self, index: usize) -> Option<i64> {
        self.scores.get(index).copied()
    }

    /// The best score any single option can earn.
    pub fn max_score(&self) -> i64 {
        // Non-empty by construction.
        self.scores.iter().copied().max().unwrap_or(0)
    }
}
