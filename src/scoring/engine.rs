use std::sync::Arc;

use indexmap::IndexMap;

use crate::catalog::{QuestionCatalog, RecommendationCatalog};
use crate::error::ScoringError;
use crate::models::{BestPractice, Question};

use super::percentage::percentage;
use super::recommend::select;

/// Where the session cursor currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer to question `question_index` of chapter `chapter_index`.
    AwaitingAnswer {
        chapter_index: usize,
        question_index: usize,
    },
    /// Every chapter has been walked.
    SessionComplete,
}

/// Outcome of a successful [`ScoringEngine::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved to the next question of the same chapter.
    NextQuestion,
    /// The last question of a chapter was passed.
    ///
    /// The engine is then either at the first question of the following
    /// chapter or, after the last chapter, complete.
    ChapterComplete(ChapterReport),
}

/// Result of one finished chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterReport {
    pub chapter: String,
    pub score: i64,
    pub max_possible: i64,
    /// `None` when the chapter has nothing to score (undefined ratio).
    pub percentage: Option<u8>,
    /// Recommended practices, selected as if the percentage were 0 when it is undefined.
    pub practices: Vec<BestPractice>,
}

/// Totals handed to the presentation layer once the session is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub total_score: i64,
    /// Per-chapter scores, in the order chapters were started.
    pub chapter_scores: IndexMap<String, i64>,
    pub reports: Vec<ChapterReport>,
}

/// Mutable progress of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringState {
    chapter_index: usize,
    question_index: usize,
    total_score: i64,
    chapter_scores: IndexMap<String, i64>,
}

impl ScoringState {
    pub fn chapter_index(&self) -> usize {
        self.chapter_index
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn chapter_scores(&self) -> &IndexMap<String, i64> {
        &self.chapter_scores
    }
}

/// Walks the chapters of a [`QuestionCatalog`] one question at a time and
/// accumulates the scores of submitted answers.
///
/// Answering is two-phase: [`submit_answer`](Self::submit_answer) scores the
/// chosen option, [`advance`](Self::advance) moves the cursor on. One engine
/// holds exactly one session; it is not meant to be shared between callers.
#[derive(Debug)]
pub struct ScoringEngine {
    questions: Arc<QuestionCatalog>,
    practices: Arc<RecommendationCatalog>,
    state: ScoringState,
    answered: bool,
    reports: Vec<ChapterReport>,
}

impl ScoringEngine {
    pub fn new(questions: Arc<QuestionCatalog>, practices: Arc<RecommendationCatalog>) -> Self {
        Self {
            questions,
            practices,
            state: ScoringState::default(),
            answered: false,
            reports: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.state.chapter_index >= self.questions.chapter_count() {
            Phase::SessionComplete
        } else {
            Phase::AwaitingAnswer {
                chapter_index: self.state.chapter_index,
                question_index: self.state.question_index,
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::SessionComplete
    }

    pub fn state(&self) -> &ScoringState {
        &self.state
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.questions
    }

    pub fn current_chapter(&self) -> Option<&str> {
        self.questions.chapter_name(self.state.chapter_index)
    }

    /// Questions of the active chapter, empty once the session is complete.
    pub fn current_chapter_questions(&self) -> &[Question] {
        self.questions
            .chapter_at(self.state.chapter_index)
            .map(|(_, questions)| questions)
            .unwrap_or(&[])
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_chapter_questions().get(self.state.question_index)
    }

    /// Reports of the chapters completed so far, in completion order.
    pub fn reports(&self) -> &[ChapterReport] {
        &self.reports
    }

    /// Score the option at `selected` for the current question.
    ///
    /// Does not move the cursor. Submitting again before advancing adds the
    /// score again.
    pub fn submit_answer(&mut self, selected: usize) -> Result<i64, ScoringError> {
        let (chapter, question) = match (self.current_chapter(), self.current_question()) {
            (Some(chapter), Some(question)) => (chapter, question),
            _ => return Err(ScoringError::SessionComplete),
        };

        let points = question
            .score_of(selected)
            .ok_or(ScoringError::InvalidSelection {
                index: selected,
                options: question.options().len(),
            })?;
        let chapter = chapter.to_string();

        let chapter_score = self.state.chapter_scores.get(&chapter).copied().unwrap_or(0);
        let (Some(total_score), Some(chapter_score)) = (
            self.state.total_score.checked_add(points),
            chapter_score.checked_add(points),
        ) else {
            return Err(ScoringError::ScoreOverflow { chapter, points });
        };

        self.state.total_score = total_score;
        self.state.chapter_scores.insert(chapter.clone(), chapter_score);
        self.answered = true;

        tracing::debug!(
            chapter = %chapter,
            question = self.state.question_index,
            selected,
            points,
            "answer accepted"
        );

        Ok(points)
    }

    /// Move past the answered question.
    ///
    /// Passing the last question of a chapter finishes that chapter and
    /// returns its report.
    pub fn advance(&mut self) -> Result<Step, ScoringError> {
        if self.is_complete() {
            return Err(ScoringError::SessionComplete);
        }
        if !self.answered {
            return Err(ScoringError::Unanswered);
        }

        self.answered = false;
        self.state.question_index += 1;

        if self.state.question_index < self.current_chapter_questions().len() {
            return Ok(Step::NextQuestion);
        }

        let report = self.finish_chapter();
        self.reports.push(report.clone());
        self.state.question_index = 0;
        self.state.chapter_index += 1;

        if self.is_complete() {
            tracing::info!(
                total_score = self.state.total_score,
                chapters = self.reports.len(),
                "audit session complete"
            );
        }

        Ok(Step::ChapterComplete(report))
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total_score: self.state.total_score,
            chapter_scores: self.state.chapter_scores.clone(),
            reports: self.reports.clone(),
        }
    }

    fn finish_chapter(&self) -> ChapterReport {
        let chapter = self.current_chapter().unwrap_or_default().to_string();
        let score = self.state.chapter_scores.get(&chapter).copied().unwrap_or(0);
        let max_possible = self.questions.max_possible(&chapter);

        let percentage = match percentage(&chapter, &self.state.chapter_scores, &self.questions) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(chapter = %chapter, %err, "treating chapter percentage as 0");
                None
            }
        };

        let practices = select(self.practices.practices(&chapter), percentage.unwrap_or(0)).to_vec();

        tracing::info!(
            chapter = %chapter,
            score,
            max_possible,
            percentage = ?percentage,
            recommendations = practices.len(),
            "chapter completed"
        );

        ChapterReport {
            chapter,
            score,
            max_possible,
            percentage,
            practices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn question(chapter: &str, text: &str, scores: Vec<i64>) -> Question {
        let options = (0..scores.len()).map(|i| format!("option {}", i)).collect();
        Question::new(chapter, text, options, scores).unwrap()
    }

    fn engine(questions: Vec<Question>, practices: Vec<BestPractice>) -> ScoringEngine {
        ScoringEngine::new(
            Arc::new(QuestionCatalog::build(questions).unwrap()),
            Arc::new(RecommendationCatalog::build(practices).unwrap()),
        )
    }

    fn security_engine() -> ScoringEngine {
        engine(
            vec![
                question("Security", "q1", vec![0, 1, 2]),
                question("Security", "q2", vec![0, 2, 4]),
            ],
            vec![
                BestPractice::new("Security", "Identity", "Enforce MFA"),
                BestPractice::new("Security", "Patching", "Patch monthly"),
                BestPractice::new("Security", "Logging", "Centralize logs"),
            ],
        )
    }

    #[test]
    fn test_initial_phase() {
        let engine = security_engine();
        assert_eq!(
            engine.phase(),
            Phase::AwaitingAnswer {
                chapter_index: 0,
                question_index: 0
            }
        );
        assert_eq!(engine.current_chapter(), Some("Security"));
        assert_eq!(engine.current_question().map(Question::text), Some("q1"));
        assert!(engine.state().chapter_scores().is_empty());
    }

    #[test]
    fn test_submit_does_not_move_cursor() {
        let mut engine = security_engine();
        assert_eq!(engine.submit_answer(2), Ok(2));
        assert_eq!(engine.state().question_index(), 0);
        assert_eq!(engine.state().total_score(), 2);
        assert_eq!(engine.state().chapter_scores().get("Security"), Some(&2));
    }

    #[test]
    fn test_invalid_selection_leaves_state_untouched() {
        let mut engine = security_engine();
        let before = engine.state().clone();

        assert_eq!(
            engine.submit_answer(3),
            Err(ScoringError::InvalidSelection {
                index: 3,
                options: 3
            })
        );
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.advance(), Err(ScoringError::Unanswered));
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut engine = security_engine();
        assert_eq!(engine.advance(), Err(ScoringError::Unanswered));

        engine.submit_answer(0).unwrap();
        assert_eq!(engine.advance(), Ok(Step::NextQuestion));
        assert_eq!(engine.advance(), Err(ScoringError::Unanswered));
    }

    #[test]
    fn test_chapter_complete_report() {
        let mut engine = security_engine();
        engine.submit_answer(1).unwrap();
        engine.advance().unwrap();
        engine.submit_answer(1).unwrap();

        let Step::ChapterComplete(report) = engine.advance().unwrap() else {
            panic!("expected chapter completion");
        };

        assert_eq!(report.chapter, "Security");
        assert_eq!(report.score, 3);
        assert_eq!(report.max_possible, 6);
        assert_eq!(report.percentage, Some(50));
        let texts: Vec<&str> = report.practices.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["Enforce MFA", "Patch monthly"]);
        assert!(engine.is_complete());
    }

    #[test]
    fn test_operations_after_completion_fail() {
        let mut engine = engine(
            vec![question("Backups", "q1", vec![0, 5])],
            vec![BestPractice::new("Backups", "Recovery", "Test restores")],
        );
        engine.submit_answer(1).unwrap();
        engine.advance().unwrap();

        assert_eq!(engine.submit_answer(0), Err(ScoringError::SessionComplete));
        assert_eq!(engine.advance(), Err(ScoringError::SessionComplete));
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn test_zero_max_chapter_reports_undefined_percentage() {
        let mut engine = engine(
            vec![question("Inventory", "q1", vec![0, 0])],
            vec![
                BestPractice::new("Inventory", "Assets", "Keep an asset register"),
                BestPractice::new("Inventory", "Assets", "Tag hardware"),
            ],
        );
        engine.submit_answer(1).unwrap();

        let Step::ChapterComplete(report) = engine.advance().unwrap() else {
            panic!("expected chapter completion");
        };
        assert_eq!(report.percentage, None);
        assert_eq!(report.practices.len(), 1);
    }

    #[test]
    fn test_repeated_submit_overflow_leaves_state_untouched() {
        let mut engine = engine(
            vec![question("Big", "q1", vec![0, i64::MAX])],
            vec![BestPractice::new("Big", "Limits", "Cap option scores")],
        );
        assert_eq!(engine.submit_answer(1), Ok(i64::MAX));
        let before = engine.state().clone();

        assert_eq!(
            engine.submit_answer(1),
            Err(ScoringError::ScoreOverflow {
                chapter: "Big".to_string(),
                points: i64::MAX
            })
        );
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_total_overflow_across_chapters() {
        let mut engine = engine(
            vec![
                question("Big", "q1", vec![0, i64::MAX]),
                question("Bigger", "q2", vec![0, i64::MAX]),
            ],
            vec![BestPractice::new("Big", "Limits", "Cap option scores")],
        );
        engine.submit_answer(1).unwrap();
        engine.advance().unwrap();

        let err = engine.submit_answer(1).unwrap_err();
        assert!(matches!(err, ScoringError::ScoreOverflow { .. }));
        assert!(err.is_recoverable());
        assert_eq!(engine.state().total_score(), i64::MAX);
        assert!(engine.state().chapter_scores().get("Bigger").is_none());

        assert_eq!(engine.submit_answer(0), Ok(0));
        assert!(matches!(engine.advance(), Ok(Step::ChapterComplete(_))));
        assert!(engine.is_complete());
    }

    #[test]
    fn test_chapter_without_practices() {
        let mut engine = engine(
            vec![question("Physical", "q1", vec![0, 1])],
            vec![BestPractice::new("Security", "Identity", "Enforce MFA")],
        );
        engine.submit_answer(1).unwrap();

        let Step::ChapterComplete(report) = engine.advance().unwrap() else {
            panic!("expected chapter completion");
        };
        assert_eq!(report.percentage, Some(100));
        assert!(report.practices.is_empty());
    }
}
