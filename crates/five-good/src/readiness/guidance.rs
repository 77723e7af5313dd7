use serde::Serialize;

use super::domain::{Category, CategoryResult, EvaluationResult, OverallStatus};

/// Dashboard-ready projection of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessSummary {
    pub status: OverallStatus,
    pub status_label: &'static str,
    pub readiness_score: u8,
    pub hard_passed: usize,
    pub categories: Vec<CategorySummaryRow>,
    /// Suggestions ordered by how close each category is to passing.
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummaryRow {
    pub category: Category,
    pub label: &'static str,
    pub passed: bool,
    pub almost_passed: bool,
    pub soft_bonus: u8,
    pub reasons: Vec<String>,
    pub tips: Vec<String>,
}

impl EvaluationResult {
    pub fn summary(&self) -> ReadinessSummary {
        let categories = self
            .category_results
            .iter()
            .map(|(category, result)| CategorySummaryRow {
                category: *category,
                label: category.label(),
                passed: result.is_hard_passed,
                almost_passed: result.is_almost_passed,
                soft_bonus: result.soft_bonus,
                reasons: result.hard_fails.clone(),
                tips: result.tips.clone(),
            })
            .collect();

        ReadinessSummary {
            status: self.overall_status,
            status_label: self.overall_status.label(),
            readiness_score: self.readiness_score,
            hard_passed: self.hard_passed_count(),
            categories,
            next_steps: self.next_steps(),
        }
    }

    fn next_steps(&self) -> Vec<String> {
        let near: fn(&CategoryResult) -> bool = |r| !r.is_hard_passed && r.is_almost_passed;
        let failing: fn(&CategoryResult) -> bool = |r| !r.is_hard_passed && !r.is_almost_passed;
        let passed: fn(&CategoryResult) -> bool = |r| r.is_hard_passed;

        let results = &self.category_results;
        [near, failing, passed]
            .into_iter()
            .flat_map(move |tier| {
                results
                    .values()
                    .filter(move |result| tier(*result))
                    .flat_map(|result| result.tips.iter().cloned())
            })
            .collect()
    }
}
