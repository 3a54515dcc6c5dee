// ABOUTME: Health check endpoint for liveness probes and monitoring
// ABOUTME: Reports service name, version, and status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! Health check route.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::constants::service_names;

/// Health report payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub service: String,
    pub version: String,
    pub status: String,
}

/// Health routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health route
    #[must_use]
    pub fn routes() -> Router {
        Router::new().route("/health", get(Self::health))
    }

    /// Liveness probe
    async fn health() -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(HealthResponse {
                service: service_names::NUTRIAI_SERVER.to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                status: "ok".to_owned(),
            }),
        )
    }
}
