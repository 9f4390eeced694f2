use std::sync::Arc;

use crate::catalog::{QuestionCatalog, RecommendationCatalog};
use crate::error::ScoringError;
use crate::models::{AppState, Question};
use crate::scoring::{ChapterReport, ScoringEngine, Step};

const UNANSWERED_WARNING: &str = "Please answer the current question before proceeding.";

/// A one-line message shown under the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    ChapterComplete {
        chapter: String,
        percentage: Option<u8>,
        recommendations: usize,
    },
}

impl Notice {
    fn from_report(report: &ChapterReport) -> Self {
        Notice::ChapterComplete {
            chapter: report.chapter.clone(),
            percentage: report.percentage,
            recommendations: report.practices.len(),
        }
    }
}

/// Screen state of the terminal front-end around one [`ScoringEngine`].
pub struct App {
    pub state: AppState,
    questions: Arc<QuestionCatalog>,
    practices: Arc<RecommendationCatalog>,
    engine: ScoringEngine,
    highlighted: usize,
    selected: Option<usize>,
    notice: Option<Notice>,
    practices_scroll: usize,
}

impl App {
    pub fn new(questions: Arc<QuestionCatalog>, practices: Arc<RecommendationCatalog>) -> Self {
        let engine = ScoringEngine::new(Arc::clone(&questions), Arc::clone(&practices));

        Self {
            state: AppState::Welcome,
            questions,
            practices,
            engine,
            highlighted: 0,
            selected: None,
            notice: None,
            practices_scroll: 0,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn current_chapter(&self) -> &str {
        self.engine.current_chapter().unwrap_or_default()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.engine.current_question()
    }

    /// 1-based position of the current question within its chapter, and the chapter size.
    pub fn chapter_progress(&self) -> (usize, usize) {
        let state = self.engine.state();
        (
            state.question_index() + 1,
            self.engine.current_chapter_questions().len(),
        )
    }

    /// 1-based position of the current chapter, and the chapter count.
    pub fn session_progress(&self) -> (usize, usize) {
        (
            self.engine.state().chapter_index() + 1,
            self.questions.chapter_count(),
        )
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn practices_scroll(&self) -> usize {
        self.practices_scroll
    }

    pub fn start(&mut self) {
        self.state = AppState::Questionnaire;
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options().len())
    }

    pub fn highlight_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted = (self.highlighted + count - 1) % count;
        }
    }

    /// Mark the highlighted option as the chosen answer.
    pub fn select_highlighted(&mut self) {
        self.selected = Some(self.highlighted);
        if matches!(self.notice, Some(Notice::Warning(_))) {
            self.notice = None;
        }
    }

    /// Score the chosen answer and move to the next question.
    ///
    /// With nothing chosen, only a warning is raised. Recoverable engine
    /// errors are shown the same way; anything else is returned.
    pub fn proceed(&mut self) -> Result<(), ScoringError> {
        let Some(selected) = self.selected else {
            self.notice = Some(Notice::Warning(UNANSWERED_WARNING.to_string()));
            return Ok(());
        };

        match self.submit_and_advance(selected) {
            Ok(step) => {
                self.highlighted = 0;
                self.selected = None;
                self.notice = match step {
                    Step::NextQuestion => None,
                    Step::ChapterComplete(report) => Some(Notice::from_report(&report)),
                };
                if self.engine.is_complete() {
                    self.state = AppState::Results;
                }
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                tracing::warn!(%err, "answer rejected");
                self.selected = None;
                self.notice = Some(Notice::Warning(err.to_string()));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn submit_and_advance(&mut self, selected: usize) -> Result<Step, ScoringError> {
        self.engine.submit_answer(selected)?;
        self.engine.advance()
    }

    pub fn show_practices(&mut self) {
        self.practices_scroll = 0;
        self.state = AppState::Practices;
    }

    pub fn back_to_results(&mut self) {
        self.state = AppState::Results;
    }

    pub fn scroll_practices_down(&mut self) {
        self.practices_scroll = self.practices_scroll.saturating_add(1);
    }

    pub fn scroll_practices_up(&mut self) {
        self.practices_scroll = self.practices_scroll.saturating_sub(1);
    }

    /// Start a fresh session over the same catalogs.
    pub fn restart(&mut self) {
        *self = Self::new(Arc::clone(&self.questions), Arc::clone(&self.practices));
    }
}
