use std::collections::HashMap;

use crate::error::CatalogError;
use crate::models::BestPractice;

/// Best practices grouped by chapter, lookup only.
#[derive(Debug, Clone)]
pub struct RecommendationCatalog {
    by_chapter: HashMap<String, Vec<BestPractice>>,
}

impl RecommendationCatalog {
    pub fn build(practices: Vec<BestPractice>) -> Result<Self, CatalogError> {
        if practices.is_empty() {
            return Err(CatalogError::EmptyInput {
                records: "best practice",
            });
        }

        let mut by_chapter: HashMap<String, Vec<BestPractice>> = HashMap::new();
        for practice in practices {
            by_chapter
                .entry(practice.chapter.clone())
                .or_default()
                .push(practice);
        }

        tracing::debug!(chapters = by_chapter.len(), "built recommendation catalog");
        Ok(Self { by_chapter })
    }

    /// Practices for `chapter` in source order, empty if none are defined.
    pub fn practices(&self, chapter: &str) -> &[BestPractice] {
        self.by_chapter.get(chapter).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_rejects_empty_input() {
        let err = RecommendationCatalog::build(Vec::new()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyInput {
                records: "best practice"
            }
        );
    }

    #[test]
    fn test_groups_and_keeps_order() {
        let catalog = RecommendationCatalog::build(vec![
            BestPractice::new("Security", "Identity", "Enforce MFA"),
            BestPractice::new("Backups", "Recovery", "Test restores"),
            BestPractice::new("Security", "Patching", "Patch monthly"),
        ])
        .unwrap();

        let texts: Vec<&str> = catalog
            .practices("Security")
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Enforce MFA", "Patch monthly"]);
        assert!(catalog.practices("Logging").is_empty());
    }
}
