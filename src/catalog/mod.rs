//! Chapter groupings built once from the loaded records.
//!
//! Both catalogs are read-only after construction and are meant to be shared
//! (behind an `Arc`) by every session in the process.

mod questions;
mod recommendations;

pub use questions::QuestionCatalog;
pub use recommendations::RecommendationCatalog;
