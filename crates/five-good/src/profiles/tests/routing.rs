use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::profiles::router::readiness_handler;
use crate::profiles::{profile_router, ReadinessService};
use crate::readiness::ReadinessEngine;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_route_accepts_partial_forms() {
    let (service, _) = build_service();
    let router = profile_router(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/readiness/evaluate",
            json!({
                "student_class": "COLLEGE",
                "criteria": { "training_points": 92, "gpa": null, "no_discipline": true }
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["overall_status"], "NOT_ELIGIBLE");
    assert_eq!(body["readiness_score"], 14);
    assert_eq!(body["category_results"]["ethics"]["is_hard_passed"], true);
    assert_eq!(body["category_results"]["study"]["is_hard_passed"], false);
}

#[tokio::test]
async fn saved_criteria_can_be_read_back_as_readiness() {
    let (service, _) = build_service();
    let router = profile_router(service);

    let saved = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/students/SV2024010/criteria",
            json!({
                "student_class": "UNIVERSITY",
                "criteria": serde_json::to_value(eligible_criteria()).expect("criteria json"),
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(saved.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::get("/api/v1/students/SV2024010/readiness")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["student_id"], "SV2024010");
    assert_eq!(body["evaluation"]["overall_status"], "ELIGIBLE");
    assert_eq!(body["summary"]["status_label"], "eligible");
}

#[tokio::test]
async fn readiness_for_unknown_student_is_not_found() {
    let (service, _) = build_service();

    let response = readiness_handler(State(service), Path("nobody".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["student_id"], "nobody");
}

#[tokio::test]
async fn store_outage_maps_to_internal_error() {
    let service = Arc::new(ReadinessService::new(
        Arc::new(UnavailableRepository),
        ReadinessEngine::default(),
    ));
    let router = profile_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/readiness/cohort")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
