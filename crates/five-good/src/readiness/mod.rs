//! Rule-based readiness evaluation for the five recognition categories.
//!
//! Evaluation is a pure function of the criteria, the student class and the
//! thresholds: no state, no I/O, and identical inputs always give identical
//! results. Callers recompute on every input change instead of caching.

mod config;
pub mod domain;
mod guidance;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use config::ReadinessThresholds;
pub use domain::{
    Category, CategoryResult, CriteriaInput, EvaluationResult, OverallStatus, StudentClass,
    UnknownStudentClass,
};
pub use guidance::{CategorySummaryRow, ReadinessSummary};

use policy::decide_outcome;

/// Stateless evaluator that applies the policy thresholds to a student's criteria.
#[derive(Debug, Clone, Default)]
pub struct ReadinessEngine {
    thresholds: ReadinessThresholds,
}

impl ReadinessEngine {
    pub fn new(thresholds: ReadinessThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ReadinessThresholds {
        &self.thresholds
    }

    pub fn evaluate(&self, criteria: &CriteriaInput, class: StudentClass) -> EvaluationResult {
        let category_results = rules::score_categories(criteria, class, &self.thresholds);
        let (overall_status, readiness_score) = decide_outcome(&category_results, &self.thresholds);

        EvaluationResult {
            overall_status,
            readiness_score,
            category_results,
        }
    }
}

/// Evaluates with the institution's default thresholds.
pub fn evaluate_readiness(criteria: &CriteriaInput, class: StudentClass) -> EvaluationResult {
    ReadinessEngine::default().evaluate(criteria, class)
}
