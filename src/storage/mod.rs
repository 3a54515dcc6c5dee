// ABOUTME: Record store abstraction over the five entity collections
// ABOUTME: Defines the Storage trait implemented by the in-memory backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! # Record Store
//!
//! CRUD and query primitives over five independent collections: users, chat
//! messages, meal plans, food items, and calorie entries. The store never
//! raises domain errors: absence is `None` (or `false` for deletes), and
//! creation cannot fail for a shape-valid input. Input validation is the
//! caller's job.
//!
//! Handlers depend on the trait, not the backend, so tests can swap the
//! store the same way they swap the LLM provider.

mod memory;

pub use memory::MemoryStorage;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{
    CalorieEntry, ChatMessage, FoodItem, MealPlan, NewCalorieEntry, NewChatMessage, NewFoodItem,
    NewMealPlan, NewUser, User, UserUpdate,
};

/// Store contract shared by all backends
#[async_trait]
pub trait Storage: Send + Sync {
    // ── Users ───────────────────────────────────────────────────────────

    /// Fetch a user by id
    async fn get_user(&self, id: &str) -> Option<User>;

    /// Fetch a user by exact username (linear scan)
    async fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Fetch a user by exact email (linear scan)
    async fn get_user_by_email(&self, email: &str) -> Option<User>;

    /// Create a user; duplicates of username/email are NOT rejected
    async fn create_user(&self, user: NewUser) -> User;

    /// Merge the supplied fields into an existing user
    async fn update_user(&self, id: &str, updates: UserUpdate) -> Option<User>;

    // ── Chat ────────────────────────────────────────────────────────────

    /// All messages for a user, ascending by timestamp
    async fn get_chat_messages(&self, user_id: &str) -> Vec<ChatMessage>;

    /// Append a chat message
    async fn create_chat_message(&self, message: NewChatMessage) -> ChatMessage;

    // ── Meal plans ──────────────────────────────────────────────────────

    /// All plans for a user, newest first
    async fn get_meal_plans(&self, user_id: &str) -> Vec<MealPlan>;

    /// Fetch a plan by id
    async fn get_meal_plan(&self, id: &str) -> Option<MealPlan>;

    /// Persist a meal plan
    async fn create_meal_plan(&self, plan: NewMealPlan) -> MealPlan;

    /// Remove a plan; false when the id was already absent
    async fn delete_meal_plan(&self, id: &str) -> bool;

    // ── Food items ──────────────────────────────────────────────────────

    /// The full food catalog, in no particular order
    async fn get_food_items(&self) -> Vec<FoodItem>;

    /// Case-insensitive substring match against name or category
    async fn search_food_items(&self, query: &str) -> Vec<FoodItem>;

    /// Fetch a food item by id
    async fn get_food_item(&self, id: &str) -> Option<FoodItem>;

    /// Insert a food item into the catalog
    async fn create_food_item(&self, item: NewFoodItem) -> FoodItem;

    // ── Calorie entries ─────────────────────────────────────────────────

    /// Entries for a user, descending by timestamp; a date restricts the
    /// result to that UTC day window
    async fn get_calorie_entries(&self, user_id: &str, date: Option<NaiveDate>)
        -> Vec<CalorieEntry>;

    /// Log a calorie entry
    async fn create_calorie_entry(&self, entry: NewCalorieEntry) -> CalorieEntry;

    /// Remove an entry; false when the id was already absent
    async fn delete_calorie_entry(&self, id: &str) -> bool;
}
