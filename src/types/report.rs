use crate::types::scoring::{Category, CategoryScores, Rating, Score, ScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    pub fn blocking(id: &str, title: &str, body: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.into(),
            blocking: true,
        }
    }

    pub fn warning(id: &str, title: &str, body: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.into(),
            blocking: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub score: Score,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreditReport {
    pub store_name: Option<String>,
    pub total: Score,
    pub rating: Rating,
    pub summary: String,
    pub category_scores: CategoryScores,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<Recommendation>,
    pub input_digest: String,
    pub generated_at: String,
}

impl CreditReport {
    pub fn result(&self) -> ScoreResult {
        ScoreResult {
            total: self.total,
            rating: self.rating,
        }
    }

    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }
}
