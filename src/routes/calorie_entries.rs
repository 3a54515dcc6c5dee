// ABOUTME: Calorie tracking route handlers for listing, logging, and deleting entries
// ABOUTME: Joins each entry to its food item and derives totalCalories at read time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! Calorie entry routes.
//!
//! Responses carry the referenced food item and the derived `totalCalories`
//! value; neither is stored. A missing food item yields `foodItem: null`
//! and a total of zero rather than an error.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::{
    errors::AppError,
    models::{entry_total_calories, CalorieEntry, FoodItem, NewCalorieEntry},
    resources::ServerResources,
    storage::Storage,
};

/// Query parameters for listing entries
#[derive(Debug, Deserialize, Default)]
pub struct CalorieEntriesQuery {
    /// Restrict results to one day (YYYY-MM-DD)
    #[serde(default)]
    pub date: Option<String>,
}

/// A calorie entry joined with its food item and derived total
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieEntryWithFood {
    #[serde(flatten)]
    pub entry: CalorieEntry,
    pub food_item: Option<FoodItem>,
    pub total_calories: i64,
}

/// Calorie entry routes handler
pub struct CalorieEntryRoutes;

impl CalorieEntryRoutes {
    /// Create all calorie entry routes
    ///
    /// The path parameter is a user id for GET and an entry id for DELETE;
    /// the router requires one shared name for the segment.
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/calorie-entries", post(Self::create_entry))
            .route(
                "/api/calorie-entries/:id",
                get(Self::list_entries).delete(Self::delete_entry),
            )
            .with_state(resources)
    }

    /// List a user's entries, optionally restricted to one day
    async fn list_entries(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<CalorieEntriesQuery>,
    ) -> Result<Response, AppError> {
        let date = query
            .date
            .as_deref()
            .map(parse_date_param)
            .transpose()?;

        let entries = resources.storage.get_calorie_entries(&user_id, date).await;

        let mut joined = Vec::with_capacity(entries.len());
        for entry in entries {
            joined.push(Self::with_food(&resources, entry).await);
        }

        Ok((StatusCode::OK, Json(joined)).into_response())
    }

    /// Log a new calorie entry
    async fn create_entry(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<NewCalorieEntry>,
    ) -> Result<Response, AppError> {
        let entry = resources.storage.create_calorie_entry(request).await;
        let joined = Self::with_food(&resources, entry).await;

        Ok((StatusCode::OK, Json(joined)).into_response())
    }

    /// Remove an entry; deleting twice yields 404, never an error
    async fn delete_entry(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        if !resources.storage.delete_calorie_entry(&id).await {
            return Err(AppError::not_found("Calorie entry"));
        }

        Ok((StatusCode::OK, Json(json!({ "success": true }))).into_response())
    }

    /// Join an entry to its food item and compute the derived total
    async fn with_food(resources: &ServerResources, entry: CalorieEntry) -> CalorieEntryWithFood {
        let food_item = match entry.food_item_id.as_deref() {
            Some(food_item_id) => resources.storage.get_food_item(food_item_id).await,
            None => None,
        };

        let total_calories = entry_total_calories(food_item.as_ref(), entry.servings.as_deref());

        CalorieEntryWithFood {
            entry,
            food_item,
            total_calories,
        }
    }
}

/// Parse the `date` query parameter (YYYY-MM-DD)
fn parse_date_param(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse::<NaiveDate>()
        .map_err(|_| AppError::invalid_input(format!("Invalid date filter: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_param() {
        assert_eq!(
            parse_date_param("2025-03-14").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
        assert!(parse_date_param("March 14").is_err());
        assert!(parse_date_param("2025-13-01").is_err());
    }
}
