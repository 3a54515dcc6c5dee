// ABOUTME: Domain models for users, chat messages, meal plans, foods, and calorie entries
// ABOUTME: Wire representations use camelCase to match the web client contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! # Data Model
//!
//! Every entity is keyed by a server-generated UUID rendered as a `String`.
//! Foreign-key-shaped fields (`user_id`, `food_item_id`) are advisory plain
//! strings: nothing enforces referential integrity, and the demo client uses
//! the non-UUID id `user-123`.
//!
//! Decimal-valued fields (`weight`, `protein`, `servings`, ...) are carried
//! as strings, mirroring the wire contract; they are parsed only where a
//! derived value needs them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// User
// ============================================================================

/// A registered user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: Option<i32>,
    /// Body weight in kg, decimal string
    pub weight: Option<String>,
    /// Height in cm, decimal string
    pub height: Option<String>,
    pub activity_level: Option<String>,
    pub fitness_goal: Option<String>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    pub calorie_goal: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a user; server assigns id and timestamp
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub fitness_goal: Option<String>,
    #[serde(default)]
    pub dietary_preferences: Option<Vec<String>>,
    #[serde(default)]
    pub calorie_goal: Option<i32>,
}

/// Partial update for a user profile; only supplied fields are merged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub fitness_goal: Option<String>,
    #[serde(default)]
    pub dietary_preferences: Option<Vec<String>>,
    #[serde(default)]
    pub calorie_goal: Option<i32>,
}

// ============================================================================
// Chat
// ============================================================================

/// A single chat message, from the user or the assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub user_id: Option<String>,
    pub message: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

/// Payload for appending a chat message
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatMessage {
    #[serde(default)]
    pub user_id: Option<String>,
    pub message: String,
    pub is_user: bool,
}

// ============================================================================
// Meal Plans
// ============================================================================

/// A single meal within a day plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    pub calories: i32,
    pub description: String,
}

/// A snack entry (no description on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snack {
    pub name: String,
    pub calories: i32,
}

/// The three meals plus snacks for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMeals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    #[serde(default)]
    pub snacks: Vec<Snack>,
}

/// One day of a generated meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanDay {
    pub day: String,
    pub meals: DayMeals,
    pub total_calories: i32,
}

/// The JSON shape the meal-plan generation prompt asks the model for
///
/// A completion that fails to deserialize into this shape triggers the
/// fixed fallback plan instead of an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMealPlan {
    pub name: String,
    pub days: Vec<MealPlanDay>,
    #[serde(default)]
    pub total_weekly_calories: Option<i32>,
}

/// A persisted meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub meals: Vec<MealPlanDay>,
    pub total_calories: Option<i32>,
    pub target_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Payload for persisting a meal plan
#[derive(Debug, Clone)]
pub struct NewMealPlan {
    pub user_id: Option<String>,
    pub name: String,
    pub meals: Vec<MealPlanDay>,
    pub total_calories: Option<i32>,
    pub target_date: Option<DateTime<Utc>>,
}

// ============================================================================
// Food Items
// ============================================================================

/// A catalog food item with per-serving nutrition facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub calories_per_serving: i32,
    pub serving_size: String,
    /// Grams of protein per serving, decimal string
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
    pub category: Option<String>,
}

/// Payload for inserting a food item
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    pub name: String,
    pub calories_per_serving: i32,
    pub serving_size: String,
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub carbs: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

// ============================================================================
// Calorie Entries
// ============================================================================

/// A logged food consumption event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieEntry {
    pub id: String,
    pub user_id: Option<String>,
    pub food_item_id: Option<String>,
    /// Number of servings consumed, decimal string; absent means one
    pub servings: Option<String>,
    /// breakfast, lunch, dinner, or snack (free text)
    pub meal_type: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Payload for logging a calorie entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalorieEntry {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub food_item_id: Option<String>,
    #[serde(default)]
    pub servings: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
}

/// Total calories for an entry, derived at read time
///
/// `round(calories_per_serving * servings)`; servings that are absent or
/// unparseable count as one, a missing food item yields zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // totals stay far below i64 range
pub fn entry_total_calories(food_item: Option<&FoodItem>, servings: Option<&str>) -> i64 {
    food_item.map_or(0, |item| {
        let servings = servings
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(1.0);
        (f64::from(item.calories_per_serving) * servings).round() as i64
    })
}
