use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::profiles::domain::{CriteriaUpdate, StudentId, StudentProfile};
use crate::profiles::repository::{InMemoryProfileRepository, ProfileRepository, RepositoryError};
use crate::profiles::ReadinessService;
use crate::readiness::{CriteriaInput, ReadinessEngine, StudentClass};

pub(super) fn eligible_criteria() -> CriteriaInput {
    CriteriaInput {
        training_points: 95,
        no_discipline: true,
        gpa: 3.5,
        is_healthy_student: true,
        volunteer_days: 6,
        volunteer_award: true,
        skill_course_or_union_award: true,
        integration_activity: true,
        english_b1_or_gpa: true,
        ..CriteriaInput::default()
    }
}

pub(super) fn update(class: StudentClass, criteria: CriteriaInput) -> CriteriaUpdate {
    CriteriaUpdate {
        student_class: class,
        criteria,
    }
}

pub(super) fn build_service() -> (
    Arc<ReadinessService<InMemoryProfileRepository>>,
    Arc<InMemoryProfileRepository>,
) {
    let repository = Arc::new(InMemoryProfileRepository::default());
    let service = Arc::new(ReadinessService::new(
        repository.clone(),
        ReadinessEngine::default(),
    ));
    (service, repository)
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn upsert(&self, _profile: StudentProfile) -> Result<StudentProfile, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &StudentId) -> Result<Option<StudentProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<StudentProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("json body")
}
