use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use five_good::cohort::{CohortImporter, CohortReport};
use five_good::error::AppError;
use five_good::profiles::{profile_router, ProfileRepository, ReadinessService};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use tracing::info;

pub(crate) fn with_readiness_routes<R>(service: Arc<ReadinessService<R>>) -> axum::Router
where
    R: ProfileRepository + 'static,
{
    profile_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/readiness/cohort/import",
            axum::routing::post(cohort_import_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Evaluates a roster CSV posted as the request body without storing it.
pub(crate) async fn cohort_import_endpoint(
    Extension(state): Extension<AppState>,
    body: String,
) -> Result<Json<CohortReport>, AppError> {
    let reader = Cursor::new(body.into_bytes());
    let report = CohortImporter::from_reader(reader, &state.engine)?;
    info!(
        students = report.entries.len(),
        eligible = report.status_counts.eligible,
        "cohort roster evaluated"
    );
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use five_good::profiles::InMemoryProfileRepository;
    use five_good::readiness::ReadinessEngine;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
            engine: Arc::new(ReadinessEngine::default()),
        }
    }

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(ReadinessService::new(
            Arc::new(InMemoryProfileRepository::default()),
            ReadinessEngine::default(),
        ));
        with_readiness_routes(service).layer(Extension(app_state(ready)))
    }

    #[tokio::test]
    async fn cohort_import_endpoint_summarises_roster() {
        let csv = "student_id,training_points,no_discipline,gpa,is_healthy_student\n\
SV1,95,yes,3.6,yes\n\
SV2,,,,\n"
            .to_string();

        let Json(report) = cohort_import_endpoint(Extension(app_state(true)), csv)
            .await
            .expect("roster evaluates");

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].readiness_score, 42);
        assert_eq!(report.status_counts.not_eligible, 2);
    }

    #[tokio::test]
    async fn cohort_import_endpoint_rejects_bad_rows() {
        let csv = "student_id,student_class\nSV1,primary\n".to_string();

        let err = cohort_import_endpoint(Extension(app_state(true)), csv)
            .await
            .expect_err("bad class rejected");

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ready_route_reflects_startup_flag() {
        let response = app(false)
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn health_route_is_always_ok() {
        let response = app(true)
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
