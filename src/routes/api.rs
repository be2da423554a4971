// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device registration and streak API routes.

use crate::error::{AppError, Result};
use crate::services::DeviceInfo;
use crate::time_utils::{format_day, parse_day, today_utc};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

const MAX_DEVICE_ID_LEN: usize = 128;

/// API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/devices/register", post(register_device))
        .route("/api/v1/devices/{device_id}", delete(delete_device))
        .route("/api/v1/devices/{device_id}/streak", get(get_streak))
        .route("/api/v1/devices/{device_id}/activity", get(get_activity))
}

/// Device IDs are client-chosen: letters, digits and `.`, `_`, `:`, `-`.
fn validate_device_id(device_id: &str) -> std::result::Result<(), ValidationError> {
    let valid_chars = device_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | ':' | '-'));

    if device_id.is_empty() || device_id.len() > MAX_DEVICE_ID_LEN || !valid_chars {
        return Err(ValidationError::new("device_id"));
    }
    Ok(())
}

fn check_path_device_id(device_id: &str) -> Result<()> {
    validate_device_id(device_id)
        .map_err(|_| AppError::BadRequest(format!("Invalid device_id: {}", device_id)))
}

// ─── Registration ────────────────────────────────────────────

/// Registration request body.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_device_id"))]
    pub device_id: String,
    #[validate(length(min = 1, max = 32))]
    pub platform: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub app_version: Option<String>,
}

/// Registration response.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RegisterResponse {
    pub device_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub is_new_device: bool,
    pub last_seen: String,
}

/// Register a device and record today's activity.
async fn register_device(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    body.validate()?;

    let info = DeviceInfo {
        platform: body.platform,
        app_version: body.app_version,
    };

    let outcome = state
        .registration_service
        .register(&body.device_id, info, today_utc())
        .await?;

    Ok(Json(RegisterResponse {
        device_id: outcome.device.device_id,
        current_streak: outcome.streak.current_streak,
        longest_streak: outcome.streak.longest_streak,
        is_new_device: outcome.is_new_device,
        last_seen: outcome.device.last_seen,
    }))
}

// ─── Streak ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct StreakQuery {
    /// Reference day (`YYYY-MM-DD`), defaults to today (UTC)
    date: Option<String>,
}

/// Streak response.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StreakResponse {
    pub device_id: String,
    pub reference_date: String,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Get the streak for a device as of a reference day.
async fn get_streak(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<String>,
    Query(params): Query<StreakQuery>,
) -> Result<Json<StreakResponse>> {
    check_path_device_id(&device_id)?;

    let reference_date = match params.date.as_deref() {
        Some(raw) => parse_day(raw).ok_or_else(|| {
            AppError::BadRequest("Invalid 'date' parameter: must be YYYY-MM-DD".to_string())
        })?,
        None => today_utc(),
    };

    tracing::debug!(device_id = %device_id, %reference_date, "Computing streak");

    let streak = state
        .registration_service
        .streak_for(&device_id, reference_date)
        .await?;

    Ok(Json(StreakResponse {
        device_id,
        reference_date: format_day(reference_date),
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
    }))
}

// ─── Activity History ────────────────────────────────────────

/// Activity history response.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityResponse {
    pub device_id: String,
    /// Active days, newest first
    pub dates: Vec<String>,
    pub total: u32,
}

/// List the days a device was active.
async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<String>,
) -> Result<Json<ActivityResponse>> {
    check_path_device_id(&device_id)?;

    let dates: Vec<String> = state
        .registration_service
        .history(&device_id)
        .await?
        .into_iter()
        .map(format_day)
        .collect();

    Ok(Json(ActivityResponse {
        device_id,
        total: dates.len() as u32,
        dates,
    }))
}

// ─── Device Deletion ─────────────────────────────────────────

/// Response for device deletion.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteDeviceResponse {
    pub success: bool,
    /// Number of stored documents removed
    pub deleted: u32,
}

/// Delete a device and its activity history.
async fn delete_device(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<String>,
) -> Result<Json<DeleteDeviceResponse>> {
    check_path_device_id(&device_id)?;

    let deleted = state
        .registration_service
        .delete_device(&device_id)
        .await?;

    Ok(Json(DeleteDeviceResponse {
        success: true,
        deleted: deleted as u32,
    }))
}
