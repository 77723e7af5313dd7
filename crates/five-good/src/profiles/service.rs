use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use super::domain::{CriteriaUpdate, StudentId, StudentProfile};
use super::repository::{ProfileRepository, RepositoryError};
use crate::cohort::CohortReport;
use crate::readiness::{
    CriteriaInput, EvaluationResult, ReadinessEngine, ReadinessSummary, StudentClass,
};

/// Current readiness for a stored student, recomputed on request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentReadiness {
    pub student_id: StudentId,
    pub student_class: StudentClass,
    pub evaluation: EvaluationResult,
    pub summary: ReadinessSummary,
}

/// Service composing the criteria store and the evaluation engine.
pub struct ReadinessService<R> {
    repository: Arc<R>,
    engine: Arc<ReadinessEngine>,
}

impl<R> ReadinessService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: ReadinessEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    /// Replace a student's criteria. Nothing derived from them is stored.
    pub fn save_criteria(
        &self,
        student_id: StudentId,
        update: CriteriaUpdate,
    ) -> Result<StudentProfile, ReadinessServiceError> {
        let profile = StudentProfile {
            student_id,
            student_class: update.student_class,
            criteria: update.criteria,
            updated_at: Utc::now(),
        };

        let stored = self.repository.upsert(profile)?;
        info!(
            student_id = stored.student_id.as_str(),
            student_class = stored.student_class.label(),
            "criteria saved"
        );
        Ok(stored)
    }

    pub fn evaluate_student(
        &self,
        student_id: &StudentId,
    ) -> Result<StudentReadiness, ReadinessServiceError> {
        let profile = self
            .repository
            .fetch(student_id)?
            .ok_or(RepositoryError::NotFound)?;

        let evaluation = self
            .engine
            .evaluate(&profile.criteria, profile.student_class);
        debug!(
            student_id = student_id.as_str(),
            status = evaluation.overall_status.label(),
            score = evaluation.readiness_score,
            "readiness evaluated"
        );

        Ok(StudentReadiness {
            student_id: profile.student_id,
            student_class: profile.student_class,
            summary: evaluation.summary(),
            evaluation,
        })
    }

    /// Evaluate unsaved criteria, e.g. a form that is still being filled in.
    pub fn evaluate_adhoc(&self, criteria: &CriteriaInput, class: StudentClass) -> EvaluationResult {
        self.engine.evaluate(criteria, class)
    }

    pub fn cohort_report(&self) -> Result<CohortReport, ReadinessServiceError> {
        let profiles = self.repository.list()?;
        info!(students = profiles.len(), "building cohort report");

        let evaluations = profiles.into_iter().map(|profile| {
            let result = self
                .engine
                .evaluate(&profile.criteria, profile.student_class);
            (profile.student_id, profile.student_class, result)
        });

        Ok(CohortReport::from_evaluations(evaluations))
    }
}

/// Error raised by the readiness service.
#[derive(Debug, thiserror::Error)]
pub enum ReadinessServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
