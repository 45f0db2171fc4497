//! Router-level integration tests.
//!
//! These drive the full application router (all middleware layers included)
//! with in-memory requests via `tower::ServiceExt::oneshot`. The database
//! pool is lazy and points at an unreachable address, so only behaviour that
//! resolves before the database layer (routing, auth extraction, health
//! degradation) is asserted here.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let app = common::build_test_app(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_auth_header_returns_401() {
    let app = common::build_test_app(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/questions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"title":"t","body":"b","tags":[]}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[tokio::test]
async fn non_bearer_auth_scheme_returns_401() {
    let app = common::build_test_app(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/questions")
                .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"title":"t","body":"b","tags":[]}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn garbage_bearer_token_returns_401() {
    let app = common::build_test_app(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/questions")
                .header(header::AUTHORIZATION, "Bearer not-a-real-jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"title":"t","body":"b","tags":[]}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

#[tokio::test]
async fn responses_carry_request_id_header() {
    let app = common::build_test_app(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response.headers().contains_key("x-request-id"),
        "every response must carry a request id"
    );
}
