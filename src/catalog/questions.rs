use indexmap::IndexMap;

use crate::error::CatalogError;
use crate::models::Question;

/// Questions grouped by chapter, chapters kept in order of first appearance.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    chapters: IndexMap<String, Vec<Question>>,
    max_possible: IndexMap<String, i64>,
}

impl QuestionCatalog {
    /// Group `questions` by chapter.
    ///
    /// Questions sharing a chapter name are merged into one group even when
    /// they are not adjacent in the input; their relative order is kept.
    /// Fails if a chapter's achievable score does not fit in an `i64`.
    pub fn build(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::EmptyInput { records: "question" });
        }

        let mut chapters: IndexMap<String, Vec<Question>> = IndexMap::new();
        for question in questions {
            chapters
                .entry(question.chapter().to_string())
                .or_default()
                .push(question);
        }

        let max_possible = chapters
            .iter()
            .map(|(chapter, questions)| {
                questions
                    .iter()
                    .try_fold(0i64, |sum, q| sum.checked_add(q.max_score()))
                    .map(|max| (chapter.clone(), max))
                    .ok_or_else(|| CatalogError::ScoreOverflow {
                        chapter: chapter.clone(),
                    })
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;

        tracing::debug!(chapters = chapters.len(), "built question catalog");
        Ok(Self {
            chapters,
            max_possible,
        })
    }

    /// Chapter names in traversal order.
    pub fn chapter_order(&self) -> impl ExactSizeIterator<Item = &str> {
        self.chapters.keys().map(String::as_str)
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Chapter name at position `index` of the traversal order.
    pub fn chapter_name(&self, index: usize) -> Option<&str> {
        self.chapters.get_index(index).map(|(name, _)| name.as_str())
    }

    /// Questions of the chapter at position `index`.
    pub fn chapter_at(&self, index: usize) -> Option<(&str, &[Question])> {
        self.chapters
            .get_index(index)
            .map(|(name, questions)| (name.as_str(), questions.as_slice()))
    }

    /// Questions of `chapter`, empty if the chapter is unknown.
    pub fn questions(&self, chapter: &str) -> &[Question] {
        self.chapters.get(chapter).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of questions across all chapters.
    pub fn question_count(&self) -> usize {
        self.chapters.values().map(Vec::len).sum()
    }

    /// Sum of each question's best option score within `chapter`.
    pub fn max_possible(&self, chapter: &str) -> i64 {
        self.max_possible.get(chapter).copied().unwrap_or(0)
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

    #[test]
    fn test_build_rejects_empty_input() {
        let err = QuestionCatalog::build(Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::EmptyInput { records: "question" });
    }

    #[test]
    fn test_chapter_order_is_first_appearance() {
        let catalog = QuestionCatalog::build(vec![
            question("Network", "q1", vec![0, 1]),
            question("Access", "q2", vec![0, 1]),
            question("Network", "q3", vec![0, 1]),
            question("Backups", "q4", vec![0, 1]),
        ])
        .unwrap();

        let order: Vec<&str> = catalog.chapter_order().collect();
        assert_eq!(order, vec!["Network", "Access", "Backups"]);

        let texts: Vec<&str> = catalog
            .questions("Network")
            .iter()
            .map(Question::text)
            .collect();
        assert_eq!(texts, vec!["q1", "q3"]);
        assert_eq!(catalog.question_count(), 4);
    }

    #[test]
    fn test_max_possible() {
        let catalog = QuestionCatalog::build(vec![
            question("Security", "q1", vec![0, 1, 2]),
            question("Security", "q2", vec![0, 2, 4]),
        ])
        .unwrap();

        assert_eq!(catalog.max_possible("Security"), 6);
        assert_eq!(catalog.max_possible("Unknown"), 0);
    }

    #[test]
    fn test_build_rejects_overflowing_chapter_max() {
        let err = QuestionCatalog::build(vec![
            question("Big", "q1", vec![0, i64::MAX]),
            question("Big", "q2", vec![0, i64::MAX]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::ScoreOverflow {
                chapter: "Big".to_string()
            }
        );
    }

    #[test]
    fn test_max_possible_at_i64_limit() {
        let catalog = QuestionCatalog::build(vec![
            question("Big", "q1", vec![0, i64::MAX - 1]),
            question("Big", "q2", vec![0, 1]),
        ])
        .unwrap();
        assert_eq!(catalog.max_possible("Big"), i64::MAX);
    }

    #[test]
    fn test_chapter_at() {
        let catalog = QuestionCatalog::build(vec![question("Security", "q1", vec![0, 1])]).unwrap();

        let (name, questions) = catalog.chapter_at(0).unwrap();
        assert_eq!(name, "Security");
        assert_eq!(questions.len(), 1);
        assert!(catalog.chapter_at(1).is_none());
    }
}
