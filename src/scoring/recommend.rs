use crate::models::BestPractice;

/// Percentage band that decides how many best practices are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// 0-25%
    Critical,
    /// 26-50%
    Weak,
    /// 51-75%
    Fair,
    /// 76-100%
    Strong,
}

impl Tier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=25 => Tier::Critical,
            26..=50 => Tier::Weak,
            51..=75 => Tier::Fair,
            _ => Tier::Strong,
        }
    }

    /// Number of practices to surface, `None` meaning all of them.
    pub fn limit(self) -> Option<usize> {
        match self {
            Tier::Critical => Some(1),
            Tier::Weak => Some(2),
            Tier::Fair => Some(3),
            Tier::Strong => None,
        }
    }
}

/// Leading slice of `practices` recommended for a chapter scoring `percentage`.
pub fn select(practices: &[BestPractice], percentage: u8) -> &[BestPractice] {
    let count = Tier::from_percentage(percentage)
        .limit()
        .map_or(practices.len(), |limit| limit.min(practices.len()));
    &practices[..count]
}
