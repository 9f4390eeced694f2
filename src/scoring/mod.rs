//! Session scoring: the answer/advance state machine, chapter percentages and
//! tiered best-practice selection.

mod engine;
mod percentage;
mod recommend;

pub use engine::{ChapterReport, Phase, ScoringEngine, ScoringState, SessionSummary, Step};
pub use percentage::percentage;
pub use recommend::{Tier, select};
