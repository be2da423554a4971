// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (correlation IDs, security headers).

pub mod request_id;
pub mod security;

pub use request_id::{propagate_request_id, RequestId, REQUEST_ID_HEADER};
