// ABOUTME: HTTP server assembly: router construction, middleware layers, listener
// ABOUTME: Applies CORS and request tracing before serving the API router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! Server assembly and startup.

use anyhow::{Context, Result};
use axum::Router;
use http::{HeaderName, HeaderValue, Method};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::environment::ServerConfig;
use crate::resources::ServerResources;
use crate::routes;

/// Configure CORS from the origin allowlist
///
/// An empty list or `"*"` allows any origin (development mode); otherwise
/// the comma-separated entries become the allowlist.
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = if config.cors.allowed_origins.is_empty()
        || config.cors.allowed_origins == "*"
    {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
}

/// Build the full application router with middleware layers
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    routes::api_router(resources)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the listener and serve until shutdown
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let port = resources.config.http_port;
    let app = build_router(resources);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind HTTP port {port}"))?;

    info!("NutriAI server listening on port {}", port);

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated unexpectedly")?;

    Ok(())
}
