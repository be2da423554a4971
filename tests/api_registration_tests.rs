// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration and streak API tests.
//!
//! These tests drive the full router over the in-memory store and verify:
//! 1. Registration creates a device and records today's activity
//! 2. Registering twice on one day does not inflate the streak
//! 3. Streak queries honor the reference date
//! 4. History and deletion endpoints

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde_json::json;
use streak_tracker::services::DeviceInfo;
use tower::ServiceExt;

mod common;
use common::{body_json, create_test_app, empty_request, json_post};

fn day(month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, d).unwrap()
}

#[tokio::test]
async fn test_register_new_device() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(json_post(
            "/api/v1/devices/register",
            json!({ "device_id": "phone-1", "platform": "ios", "app_version": "1.0.0" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["device_id"], "phone-1");
    assert_eq!(body["current_streak"], 1);
    assert_eq!(body["longest_streak"], 1);
    assert_eq!(body["is_new_device"], true);
}

#[tokio::test]
async fn test_register_twice_same_day() {
    let (app, _) = create_test_app();

    let first = app
        .clone()
        .oneshot(json_post(
            "/api/v1/devices/register",
            json!({ "device_id": "phone-1" }),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .clone()
        .oneshot(json_post(
            "/api/v1/devices/register",
            json!({ "device_id": "phone-1" }),
        ))
        .await
        .unwrap();
    let body = body_json(second).await;
    assert_eq!(body["is_new_device"], false);
    assert_eq!(body["current_streak"], 1);
    assert_eq!(body["longest_streak"], 1);

    let history = app
        .oneshot(empty_request("GET", "/api/v1/devices/phone-1/activity"))
        .await
        .unwrap();
    let body = body_json(history).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_streak_with_reference_date() {
    let (app, state) = create_test_app();
    let svc = &state.registration_service;

    for d in [7, 8, 9, 10, 14, 15] {
        svc.register("phone-1", DeviceInfo::default(), day(1, d))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            "/api/v1/devices/phone-1/streak?date=2024-01-15",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["reference_date"], "2024-01-15");
    assert_eq!(body["current_streak"], 2);
    assert_eq!(body["longest_streak"], 4);

    // Records after the reference date are ignored
    let response = app
        .oneshot(empty_request(
            "GET",
            "/api/v1/devices/phone-1/streak?date=2024-01-08",
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["current_streak"], 2);
    assert_eq!(body["longest_streak"], 2);
}

#[tokio::test]
async fn test_activity_history_newest_first() {
    let (app, state) = create_test_app();
    let svc = &state.registration_service;

    for d in [3, 1, 2] {
        svc.register("phone-1", DeviceInfo::default(), day(2, d))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(empty_request("GET", "/api/v1/devices/phone-1/activity"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["dates"],
        json!(["2024-02-03", "2024-02-02", "2024-02-01"])
    );
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_delete_device() {
    let (app, state) = create_test_app();
    state
        .registration_service
        .register("phone-1", DeviceInfo::default(), day(1, 15))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/v1/devices/phone-1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], 2);

    let response = app
        .oneshot(empty_request("GET", "/api/v1/devices/phone-1/streak"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_device_not_found() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/v1/devices/ghost/activity"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}
