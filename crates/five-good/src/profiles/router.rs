use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CriteriaUpdate, StudentId};
use super::repository::{ProfileRepository, RepositoryError};
use super::service::{ReadinessService, ReadinessServiceError};
use crate::readiness::{CriteriaInput, StudentClass};

/// Stateless evaluation request; both fields may be omitted.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EvaluateRequest {
    #[serde(default)]
    pub(crate) student_class: StudentClass,
    #[serde(default)]
    pub(crate) criteria: CriteriaInput,
}

/// Router builder exposing criteria storage and readiness evaluation.
pub fn profile_router<R>(service: Arc<ReadinessService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route("/api/v1/readiness/evaluate", post(evaluate_handler::<R>))
        .route("/api/v1/readiness/cohort", get(cohort_handler::<R>))
        .route(
            "/api/v1/students/:student_id/criteria",
            put(save_criteria_handler::<R>),
        )
        .route(
            "/api/v1/students/:student_id/readiness",
            get(readiness_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler<R>(
    State(service): State<Arc<ReadinessService<R>>>,
    axum::Json(request): axum::Json<EvaluateRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let result = service.evaluate_adhoc(&request.criteria, request.student_class);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn save_criteria_handler<R>(
    State(service): State<Arc<ReadinessService<R>>>,
    Path(student_id): Path<String>,
    axum::Json(update): axum::Json<CriteriaUpdate>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.save_criteria(StudentId(student_id), update) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn readiness_handler<R>(
    State(service): State<Arc<ReadinessService<R>>>,
    Path(student_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let id = StudentId(student_id);
    match service.evaluate_student(&id) {
        Ok(readiness) => (StatusCode::OK, axum::Json(readiness)).into_response(),
        Err(ReadinessServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "student_id": id.0,
                "error": "no criteria recorded for student",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn cohort_handler<R>(State(service): State<Arc<ReadinessService<R>>>) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.cohort_report() {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ReadinessServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
