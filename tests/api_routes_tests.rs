// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health, CORS and cross-cutting header tests.

use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use tower::ServiceExt;

mod common;
use common::{body_json, create_test_app, empty_request};

#[tokio::test]
async fn test_health() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("X-Request-Id", "trace-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("x-request-id").unwrap(), "trace-42");
    assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
    assert_eq!(headers.get("Cache-Control").unwrap(), "no-store");
}

#[tokio::test]
async fn test_error_responses_carry_request_id() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/v1/devices/ghost/streak"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/v1/devices/register")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}
