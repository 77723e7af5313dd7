use serde::Serialize;

use crate::profiles::StudentId;
use crate::readiness::{Category, EvaluationResult, OverallStatus, StudentClass};

/// Per-student line of a cohort report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortEntry {
    pub student_id: StudentId,
    pub student_class: StudentClass,
    pub overall_status: OverallStatus,
    pub readiness_score: u8,
    pub hard_fails: Vec<String>,
    /// Flattened suggestions in category order.
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub eligible: usize,
    pub almost_ready: usize,
    pub not_eligible: usize,
}

impl StatusCounts {
    fn record(&mut self, status: OverallStatus) {
        match status {
            OverallStatus::Eligible => self.eligible += 1,
            OverallStatus::AlmostReady => self.almost_ready += 1,
            OverallStatus::NotEligible => self.not_eligible += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPassEntry {
    pub category: Category,
    pub label: &'static str,
    pub passed: usize,
    pub almost_passed: usize,
    pub total: usize,
}

/// Administrative roll-up over a set of evaluated students.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortReport {
    pub entries: Vec<CohortEntry>,
    pub status_counts: StatusCounts,
    pub category_pass_counts: Vec<CategoryPassEntry>,
    pub average_score: f64,
}

impl CohortReport {
    pub fn from_evaluations<I>(evaluations: I) -> Self
    where
        I: IntoIterator<Item = (StudentId, StudentClass, EvaluationResult)>,
    {
        let mut entries = Vec::new();
        let mut status_counts = StatusCounts::default();
        let mut category_pass_counts: Vec<CategoryPassEntry> = Category::ordered()
            .into_iter()
            .map(|category| CategoryPassEntry {
                category,
                label: category.label(),
                passed: 0,
                almost_passed: 0,
                total: 0,
            })
            .collect();
        let mut score_total: u64 = 0;

        for (student_id, student_class, result) in evaluations {
            status_counts.record(result.overall_status);
            score_total += u64::from(result.readiness_score);

            for entry in &mut category_pass_counts {
                if let Some(category) = result.category(entry.category) {
                    entry.total += 1;
                    if category.is_hard_passed {
                        entry.passed += 1;
                    } else if category.is_almost_passed {
                        entry.almost_passed += 1;
                    }
                }
            }

            entries.push(CohortEntry {
                student_id,
                student_class,
                overall_status: result.overall_status,
                readiness_score: result.readiness_score,
                hard_fails: result.hard_fails().into_iter().map(str::to_string).collect(),
                tips: result.tips().into_iter().map(str::to_string).collect(),
            });
        }

        let average_score = if entries.is_empty() {
            0.0
        } else {
            score_total as f64 / entries.len() as f64
        };

        Self {
            entries,
            status_counts,
            category_pass_counts,
            average_score,
        }
    }

    /// Students closest to eligibility first, then by id.
    pub fn ranked(&self) -> Vec<&CohortEntry> {
        let mut ranked: Vec<&CohortEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.overall_status
                .cmp(&a.overall_status)
                .then(b.readiness_score.cmp(&a.readiness_score))
                .then_with(|| a.student_id.cmp(&b.student_id))
        });
        ranked
    }
}
