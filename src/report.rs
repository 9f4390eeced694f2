//! Plain-text rendering of a finished session.

use std::fmt;

use crate::scoring::SessionSummary;

/// Results and assigned best practices of a session, one line per item.
pub struct TextReport<'a>(pub &'a SessionSummary);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;

        writeln!(f, "Total Score: {}", summary.total_score)?;
        for (chapter, score) in &summary.chapter_scores {
            writeln!(f, "Chapter {}: {}", chapter, score)?;
        }

        writeln!(f)?;
        writeln!(f, "Assigned Best Practices")?;
        for report in &summary.reports {
            match report.percentage {
                Some(value) => writeln!(f, "Chapter {} ({}%):", report.chapter, value)?,
                None => writeln!(f, "Chapter {} (n/a):", report.chapter)?,
            }
            for practice in &report.practices {
                writeln!(f, "  Chapter: {} - {}", report.chapter, practice)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BestPractice;
    use crate::scoring::ChapterReport;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_report_lists_scores_and_practices() {
        let mut chapter_scores = IndexMap::new();
        chapter_scores.insert("Security".to_string(), 3);
        chapter_scores.insert("Inventory".to_string(), 0);

        let summary = SessionSummary {
            total_score: 3,
            chapter_scores,
            reports: vec![
                ChapterReport {
                    chapter: "Security".to_string(),
                    score: 3,
                    max_possible: 6,
                    percentage: Some(50),
                    practices: vec![BestPractice::new("Security", "Identity", "Enforce MFA")],
                },
                ChapterReport {
                    chapter: "Inventory".to_string(),
                    score: 0,
                    max_possible: 0,
                    percentage: None,
                    practices: Vec::new(),
                },
            ],
        };

        let expected = "\
Total Score: 3
Chapter Security: 3
Chapter Inventory: 0

Assigned Best Practices
Chapter Security (50%):
  Chapter: Security - [Identity] Enforce MFA
Chapter Inventory (n/a):
";
        assert_eq!(TextReport(&summary).to_string(), expected);
    }
}
