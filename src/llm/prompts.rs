// ABOUTME: Prompt templates for the chat assistant, meal-plan generation, and fitness advice
// ABOUTME: All AI-facing text lives here so handlers stay free of prompt literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! System and user prompt construction for every AI-backed endpoint.

use crate::constants::defaults;

/// System prompt for the conversational nutrition assistant
pub const CHAT_SYSTEM_PROMPT: &str = "You are NutriAI, an expert nutrition and fitness assistant. You provide personalized advice on:
- Meal planning and nutrition recommendations
- Calorie counting and macro tracking
- Diet plans for various goals (weight loss, muscle gain, etc.)
- Exercise and fitness tips based on BMI and goals
- Healthy eating habits and lifestyle changes

Always provide evidence-based, practical advice. Be encouraging and supportive. If asked about medical conditions, recommend consulting healthcare professionals.";

/// System prompt for meal-plan generation; demands JSON-only output
pub const MEAL_PLAN_SYSTEM_PROMPT: &str =
    "You are a professional nutritionist creating meal plans. Always respond with valid JSON only.";

/// System prompt for fitness recommendations
pub const FITNESS_SYSTEM_PROMPT: &str =
    "You are a certified fitness and nutrition coach providing personalized recommendations.";

/// Build the user prompt for a 7-day meal plan
#[must_use]
pub fn meal_plan_prompt(
    calorie_goal: Option<i32>,
    dietary_preferences: &[String],
    fitness_goal: Option<&str>,
) -> String {
    let calorie_goal = calorie_goal.unwrap_or(defaults::CALORIE_GOAL);
    let preferences = if dietary_preferences.is_empty() {
        "none".to_owned()
    } else {
        dietary_preferences.join(", ")
    };
    let fitness_goal = fitness_goal.unwrap_or(defaults::FITNESS_GOAL);

    format!(
        r#"Create a detailed 7-day meal plan with the following requirements:
- Daily calorie target: {calorie_goal} calories
- Dietary preferences: {preferences}
- Fitness goal: {fitness_goal}

Format the response as a JSON object with this structure:
{{
  "name": "Weekly Meal Plan",
  "days": [
    {{
      "day": "Monday",
      "meals": {{
        "breakfast": {{"name": "Meal Name", "calories": 300, "description": "Brief description"}},
        "lunch": {{"name": "Meal Name", "calories": 400, "description": "Brief description"}},
        "dinner": {{"name": "Meal Name", "calories": 500, "description": "Brief description"}},
        "snacks": [{{"name": "Snack Name", "calories": 150}}]
      }},
      "totalCalories": 1350
    }}
  ],
  "totalWeeklyCalories": 9450
}}

Ensure meals are balanced, nutritious, and align with the specified goals."#
    )
}

/// Build the user prompt for personalized fitness recommendations
#[must_use]
pub fn fitness_prompt(
    bmi: &str,
    bmi_category: &str,
    age: Option<i32>,
    activity_level: Option<&str>,
    fitness_goal: Option<&str>,
) -> String {
    let age = age.map_or_else(|| "not specified".to_owned(), |age| age.to_string());
    let activity_level = activity_level.unwrap_or("not specified");
    let fitness_goal = fitness_goal.unwrap_or("not specified");

    format!(
        "Based on the following profile, provide personalized fitness and nutrition recommendations:
- BMI: {bmi} ({bmi_category})
- Age: {age}
- Activity Level: {activity_level}
- Fitness Goal: {fitness_goal}

Provide specific workout recommendations, suggested calorie intake, and nutritional guidelines. Be encouraging and practical."
    )
}
