// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Streak-Tracker: device registration with daily activity streaks
//!
//! This crate provides the backend API that records one activity entry per
//! device per calendar day and reports the current and longest run of
//! consecutive active days.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::StreakDb;
use services::RegistrationService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: StreakDb,
    pub registration_service: RegistrationService,
}

impl AppState {
    pub fn new(config: Config, db: StreakDb) -> Self {
        let registration_service = RegistrationService::new(db.clone());
        Self {
            config,
            db,
            registration_service,
        }
    }
}
