// ABOUTME: Meal plan route handlers for listing and AI-driven generation
// ABOUTME: Falls back to a fixed weekly plan when the model output is unusable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! Meal plan routes.
//!
//! `POST /api/meal-plans/generate` asks the LLM for a 7-day plan in a strict
//! JSON shape. Any gateway failure or shape mismatch substitutes the fixed
//! fallback plan; generation therefore always persists a plan and returns
//! 200. `GET /api/meal-plans/:user_id` lists plans newest first, so the
//! current plan is the first element.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use crate::{
    errors::AppError,
    llm::{prompts, ChatMessage, ChatRequest, LlmProvider},
    models::{DayMeals, GeneratedMealPlan, Meal, MealPlanDay, NewMealPlan, Snack},
    resources::ServerResources,
    storage::Storage,
};

/// Request to generate a meal plan
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMealPlanRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub calorie_goal: Option<i32>,
    #[serde(default)]
    pub dietary_preferences: Option<Vec<String>>,
    #[serde(default)]
    pub fitness_goal: Option<String>,
}

/// Meal plan routes handler
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/meal-plans/:user_id", get(Self::list_plans))
            .route("/api/meal-plans/generate", post(Self::generate_plan))
            .with_state(resources)
    }

    /// List a user's meal plans, newest first
    async fn list_plans(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let plans = resources.storage.get_meal_plans(&user_id).await;
        Ok((StatusCode::OK, Json(plans)).into_response())
    }

    /// Generate a plan via the LLM and persist it
    async fn generate_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GenerateMealPlanRequest>,
    ) -> Result<Response, AppError> {
        let prompt = prompts::meal_plan_prompt(
            request.calorie_goal,
            request.dietary_preferences.as_deref().unwrap_or(&[]),
            request.fitness_goal.as_deref(),
        );

        let conversation = vec![
            ChatMessage::system(prompts::MEAL_PLAN_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ];

        let generated = match resources.llm.complete(&ChatRequest::new(conversation)).await {
            Ok(completion) => serde_json::from_str::<GeneratedMealPlan>(&completion.content)
                .unwrap_or_else(|e| {
                    warn!("meal plan completion did not parse ({e}); using fallback plan");
                    fallback_plan()
                }),
            Err(e) => {
                warn!("meal plan generation failed ({e}); using fallback plan");
                fallback_plan()
            }
        };

        let plan = resources
            .storage
            .create_meal_plan(NewMealPlan {
                user_id: request.user_id,
                name: generated.name,
                meals: generated.days,
                total_calories: generated.total_weekly_calories,
                target_date: Some(Utc::now()),
            })
            .await;

        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}

/// The fixed plan substituted when AI output is missing or malformed
///
/// The literal content is part of the endpoint contract.
#[must_use]
pub fn fallback_plan() -> GeneratedMealPlan {
    GeneratedMealPlan {
        name: "AI-Generated Meal Plan".to_owned(),
        days: vec![MealPlanDay {
            day: "Monday".to_owned(),
            meals: DayMeals {
                breakfast: Meal {
                    name: "Oatmeal with Berries".to_owned(),
                    calories: 350,
                    description: "Steel-cut oats topped with mixed berries and almonds".to_owned(),
                },
                lunch: Meal {
                    name: "Quinoa Power Bowl".to_owned(),
                    calories: 480,
                    description: "Quinoa with grilled chicken and roasted vegetables".to_owned(),
                },
                dinner: Meal {
                    name: "Salmon & Vegetables".to_owned(),
                    calories: 420,
                    description: "Grilled salmon with steamed broccoli and sweet potato"
                        .to_owned(),
                },
                snacks: vec![Snack {
                    name: "Greek Yogurt".to_owned(),
                    calories: 150,
                }],
            },
            total_calories: 1400,
        }],
        total_weekly_calories: Some(9800),
    }
}
