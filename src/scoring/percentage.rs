use indexmap::IndexMap;

use crate::catalog::QuestionCatalog;
use crate::error::ScoringError;

/// Share of `chapter`'s achievable points that were scored, as a whole percent.
///
/// Rounds half up and clamps into `0..=100`. A chapter without any scored
/// points yet counts as 0.
pub fn percentage(
    chapter: &str,
    chapter_scores: &IndexMap<String, i64>,
    catalog: &QuestionCatalog,
) -> Result<u8, ScoringError> {
    let score = chapter_scores.get(chapter).copied().unwrap_or(0);
    ratio_percent(chapter, score, catalog.max_possible(chapter))
}

pub(crate) fn ratio_percent(
    chapter: &str,
    score: i64,
    max_possible: i64,
) -> Result<u8, ScoringError> {
    if max_possible <= 0 {
        return Err(ScoringError::DivisionUndefined {
            chapter: chapter.to_string(),
        });
    }

    let score = score.clamp(0, max_possible) as i128;
    let max = max_possible as i128;
    let rounded = (200 * score + max) / (2 * max);

    Ok(rounded as u8)
}
