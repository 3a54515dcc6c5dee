// ABOUTME: Integration tests for the health endpoint and full router assembly
// ABOUTME: Smoke-tests the merged API router with middleware layers applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use nutriai_server::routes::health::{HealthResponse, HealthRoutes};
use nutriai_server::server;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_reports_ok() {
    common::init_test_logging();
    let router = HealthRoutes::routes();

    let response = AxumTestRequest::get("/health").send(router).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.service, "nutriai-server");
    assert_eq!(body.status, "ok");
    assert!(!body.version.is_empty());
}

#[tokio::test]
async fn test_full_router_serves_every_endpoint_group() {
    let resources = common::create_test_resources_replying("unused");
    let app = server::build_router(resources);

    for uri in [
        "/health",
        "/api/food-items",
        "/api/chat/messages/user-123",
        "/api/meal-plans/user-123",
        "/api/calorie-entries/user-123",
    ] {
        let response = AxumTestRequest::get(uri).send(app.clone()).await;
        assert_eq!(response.status_code(), StatusCode::OK, "GET {uri}");
    }

    // Unknown paths fall through to 404
    let response = AxumTestRequest::get("/api/unknown").send(app).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
