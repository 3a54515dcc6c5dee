// ABOUTME: Fitness recommendation route handler combining BMI math with AI advice
// ABOUTME: BMI category thresholds are part of the endpoint contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! Fitness recommendation route.
//!
//! BMI is computed server-side from the submitted weight (kg) and height
//! (cm); the categorized result seeds the LLM prompt, and both are returned
//! alongside the generated advice.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    errors::AppError,
    llm::{prompts, ChatMessage, ChatRequest, LlmProvider},
    resources::ServerResources,
};

/// Request for personalized recommendations
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessRecommendationRequest {
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub fitness_goal: Option<String>,
}

/// Response with BMI and AI-generated advice
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessRecommendationResponse {
    /// BMI rendered with one decimal place
    pub bmi: String,
    pub bmi_category: String,
    pub recommendations: String,
}

/// Fitness routes handler
pub struct FitnessRoutes;

impl FitnessRoutes {
    /// Create all fitness routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/fitness/recommendations",
                post(Self::recommendations),
            )
            .with_state(resources)
    }

    /// Compute BMI and ask the LLM for tailored advice
    async fn recommendations(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<FitnessRecommendationRequest>,
    ) -> Result<Response, AppError> {
        let bmi = compute_bmi(request.weight, request.height);
        let bmi_display = format!("{bmi:.1}");
        let category = bmi_category(bmi);

        let prompt = prompts::fitness_prompt(
            &bmi_display,
            category,
            request.age,
            request.activity_level.as_deref(),
            request.fitness_goal.as_deref(),
        );

        let conversation = vec![
            ChatMessage::system(prompts::FITNESS_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ];

        let completion = resources
            .llm
            .complete(&ChatRequest::new(conversation))
            .await?;

        Ok((
            StatusCode::OK,
            Json(FitnessRecommendationResponse {
                bmi: bmi_display,
                bmi_category: category.to_owned(),
                recommendations: completion.content,
            }),
        )
            .into_response())
    }
}

/// BMI from weight in kg and height in cm
fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    weight_kg / (height_cm / 100.0).powi(2)
}

/// WHO category thresholds: <18.5, <25, <30, else
fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "underweight"
    } else if bmi < 25.0 {
        "normal weight"
    } else if bmi < 30.0 {
        "overweight"
    } else {
        "obese"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bmi() {
        let bmi = compute_bmi(70.0, 175.0);
        assert_eq!(format!("{bmi:.1}"), "22.9");

        let bmi = compute_bmi(50.0, 180.0);
        assert_eq!(format!("{bmi:.1}"), "15.4");
    }

    #[test]
    fn test_bmi_category_thresholds() {
        assert_eq!(bmi_category(15.4), "underweight");
        assert_eq!(bmi_category(18.4), "underweight");
        assert_eq!(bmi_category(18.5), "normal weight");
        assert_eq!(bmi_category(22.9), "normal weight");
        assert_eq!(bmi_category(24.9), "normal weight");
        assert_eq!(bmi_category(25.0), "overweight");
        assert_eq!(bmi_category(29.9), "overweight");
        assert_eq!(bmi_category(30.0), "obese");
        assert_eq!(bmi_category(42.0), "obese");
    }
}
