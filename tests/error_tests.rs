// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{http::StatusCode, response::IntoResponse};
use streak_tracker::error::AppError;

async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_not_found_includes_details() {
    let (status, body) = body_json(AppError::NotFound("Device x not found".to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["details"], "Device x not found");
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let (status, body) = body_json(AppError::Database("connection reset".to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "database_error");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_internal_error_from_anyhow() {
    let err: AppError = anyhow::anyhow!("boom").into();
    let (status, body) = body_json(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
}
