// ABOUTME: HTTP REST API route handlers for the NutriAI endpoints
// ABOUTME: Declares per-endpoint-group modules and assembles the API router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! HTTP routes for chat, meal planning, food catalog, calorie tracking, and
//! fitness recommendations. Each endpoint group lives in its own module and
//! exposes a `routes(Arc<ServerResources>)` constructor; this module merges
//! them into the full API surface.

use std::sync::Arc;

use axum::Router;

use crate::resources::ServerResources;

/// Calorie tracking endpoints
pub mod calorie_entries;

/// AI chat endpoints
pub mod chat;

/// BMI and fitness recommendation endpoints
pub mod fitness;

/// Food catalog endpoints
pub mod food_items;

/// Health check endpoint
pub mod health;

/// Meal plan endpoints
pub mod meal_plans;

/// Assemble the complete API router
#[must_use]
pub fn api_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(chat::ChatRoutes::routes(resources.clone()))
        .merge(meal_plans::MealPlanRoutes::routes(resources.clone()))
        .merge(food_items::FoodItemRoutes::routes(resources.clone()))
        .merge(calorie_entries::CalorieEntryRoutes::routes(
            resources.clone(),
        ))
        .merge(fitness::FitnessRoutes::routes(resources))
        .merge(health::HealthRoutes::routes())
}
