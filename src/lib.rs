//! # audit-quiz
//!
//! A chapter-by-chapter audit questionnaire. Each answer is worth a number of
//! points; when a chapter is finished its score is turned into a percentage
//! and a tiered subset of the chapter's best practices is recommended.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use audit_quiz::{Audit, AuditError};
//!
//! fn main() -> Result<(), AuditError> {
//!     let audit = Audit::from_json("data/questions.json", "data/best_practices.json")?;
//!
//!     // Run the questionnaire in the terminal
//!     audit.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod catalog;
mod data;
pub mod error;
pub mod models;
pub mod report;
pub mod scoring;
mod terminal;
mod ui;

use std::path::Path;
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use terminal::TerminalSession;

pub use app::{App, Notice};
pub use catalog::{QuestionCatalog, RecommendationCatalog};
pub use data::{
    DEFAULT_BEST_PRACTICES_PATH, DEFAULT_QUESTIONS_PATH, load_best_practices_from_path,
    load_questions_from_path,
};
pub use error::{AuditError, CatalogError, LoadError, QuestionError, ScoringError};
pub use models::{AppState, BestPractice, Question};
pub use scoring::{ChapterReport, Phase, ScoringEngine, SessionSummary, Step};

/// Catalogs for one audit, shared by every session started from it.
#[derive(Debug)]
pub struct Audit {
    questions: Arc<QuestionCatalog>,
    practices: Arc<RecommendationCatalog>,
}

impl Audit {
    /// Build the catalogs from already-loaded records.
    pub fn new(questions: Vec<Question>, practices: Vec<BestPractice>) -> Result<Self, AuditError> {
        Ok(Self {
            questions: Arc::new(QuestionCatalog::build(questions)?),
            practices: Arc::new(RecommendationCatalog::build(practices)?),
        })
    }

    /// Load questions and best practices from JSON files.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use audit_quiz::Audit;
    ///
    /// let audit = Audit::from_json("questions.json", "best_practices.json")
    ///     .expect("Failed to load audit");
    /// ```
    pub fn from_json<Q, B>(questions_path: Q, practices_path: B) -> Result<Self, AuditError>
    where
        Q: AsRef<Path>,
        B: AsRef<Path>,
    {
        let questions = load_questions_from_path(questions_path)?;
        let practices = load_best_practices_from_path(practices_path)?;
        tracing::info!(
            questions = questions.len(),
            practices = practices.len(),
            "audit records loaded"
        );
        Self::new(questions, practices)
    }

    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    pub fn practices(&self) -> &RecommendationCatalog {
        &self.practices
    }

    /// A fresh scoring session over this audit's catalogs.
    pub fn session(&self) -> ScoringEngine {
        ScoringEngine::new(Arc::clone(&self.questions), Arc::clone(&self.practices))
    }

    /// Answer every question in order with the given option indices.
    ///
    /// Exactly one index per question is required.
    pub fn run_scripted(&self, answers: &[usize]) -> Result<SessionSummary, AuditError> {
        let expected = self.questions.question_count();
        if answers.len() != expected {
            return Err(AuditError::Answers(format!(
                "{} answers given, the questionnaire has {} questions",
                answers.len(),
                expected
            )));
        }

        let mut engine = self.session();
        for &answer in answers {
            engine.submit_answer(answer)?;
            engine.advance()?;
        }

        Ok(engine.summary())
    }

    /// Run the questionnaire in the terminal.
    ///
    /// Takes over the terminal until the user quits; the terminal is restored
    /// on every exit path, including errors.
    pub fn run(&self) -> Result<(), AuditError> {
        let mut app = App::new(Arc::clone(&self.questions), Arc::clone(&self.practices));
        let mut terminal = TerminalSession::enter()?;
        run_event_loop(&mut terminal, &mut app)
    }
}

fn run_event_loop(terminal: &mut TerminalSession, app: &mut App) -> Result<(), AuditError> {
    loop {
        terminal.draw(app)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, AuditError> {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Ok(true);
    }

    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Questionnaire => handle_questionnaire_input(app, key)?,
        AppState::Results => handle_results_input(app, key),
        AppState::Practices => handle_practices_input(app, key),
    }

    Ok(false)
}

fn handle_welcome_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.start();
    }
}

fn handle_questionnaire_input(app: &mut App, key: KeyCode) -> Result<(), ScoringError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.highlight_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.highlight_next_option(),
        KeyCode::Char(' ') => app.select_highlighted(),
        KeyCode::Enter => app.proceed()?,
        _ => {}
    }
    Ok(())
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('b') | KeyCode::Char('B') => app.show_practices(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}

fn handle_practices_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_practices_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_practices_up(),
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => app.back_to_results(),
        _ => {}
    }
}
