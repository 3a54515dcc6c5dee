// ABOUTME: Food catalog route handlers for listing, searching, and fetching items
// ABOUTME: Search is a case-insensitive substring match on name or category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! Food catalog routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{errors::AppError, resources::ServerResources, storage::Storage};

/// Query parameters for the catalog listing
#[derive(Debug, Deserialize, Default)]
pub struct FoodItemsQuery {
    /// Substring to match against name or category
    #[serde(default)]
    pub search: Option<String>,
}

/// Food catalog routes handler
pub struct FoodItemRoutes;

impl FoodItemRoutes {
    /// Create all food catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/food-items", get(Self::list_items))
            .route("/api/food-items/:id", get(Self::get_item))
            .with_state(resources)
    }

    /// List the catalog, optionally filtered by a search term
    async fn list_items(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<FoodItemsQuery>,
    ) -> Result<Response, AppError> {
        let items = match query.search.as_deref() {
            Some(search) if !search.is_empty() => {
                resources.storage.search_food_items(search).await
            }
            _ => resources.storage.get_food_items().await,
        };

        Ok((StatusCode::OK, Json(items)).into_response())
    }

    /// Fetch a single food item
    async fn get_item(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let item = resources
            .storage
            .get_food_item(&id)
            .await
            .ok_or_else(|| AppError::not_found("Food item"))?;

        Ok((StatusCode::OK, Json(item)).into_response())
    }
}
