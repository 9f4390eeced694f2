use serde::Deserialize;

/// A remediation item attached to a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BestPractice {
    pub chapter: String,
    pub category: String,
    pub text: String,
}

impl BestPractice {
    pub fn new(
        chapter: impl Into<String>,
        category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            chapter: chapter.into(),
            category: category.into(),
            text: text.into(),
        }
    }
}

impl std::fmt::Display for BestPractice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.category, self.text)
    }
}
