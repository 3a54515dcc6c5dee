// ABOUTME: In-memory record store implementation backed by per-collection RwLocks
// ABOUTME: Seeds the food catalog with ten common items at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! In-memory storage backend.
//!
//! Each collection is an independent `HashMap` keyed by the generated id,
//! guarded by its own `RwLock`. Every trait method takes the lock exactly
//! once, so read-modify-write sequences (user update) are atomic per
//! collection. Data lives for the process lifetime only.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Storage;
use crate::models::{
    CalorieEntry, ChatMessage, FoodItem, MealPlan, NewCalorieEntry, NewChatMessage, NewFoodItem,
    NewMealPlan, NewUser, User, UserUpdate,
};

/// In-memory implementation of [`Storage`]
pub struct MemoryStorage {
    users: RwLock<HashMap<String, User>>,
    chat_messages: RwLock<HashMap<String, ChatMessage>>,
    meal_plans: RwLock<HashMap<String, MealPlan>>,
    food_items: RwLock<HashMap<String, FoodItem>>,
    calorie_entries: RwLock<HashMap<String, CalorieEntry>>,
}

/// Seed catalog: (name, calories per serving, serving size, protein, carbs, fat, category)
const SEED_FOODS: &[(&str, i32, &str, &str, &str, &str, &str)] = &[
    ("Apple, medium", 95, "1 medium (182g)", "0.5", "25", "0.3", "fruits"),
    ("Banana, medium", 105, "1 medium (118g)", "1.3", "27", "0.4", "fruits"),
    ("Chicken Breast", 165, "100g grilled", "31", "0", "3.6", "protein"),
    ("Quinoa, cooked", 222, "1 cup (185g)", "8", "39", "3.6", "grains"),
    ("Greek Yogurt", 130, "1 cup (245g)", "23", "9", "0.4", "dairy"),
    ("Salmon, grilled", 206, "100g", "22", "0", "12", "protein"),
    ("Brown Rice, cooked", 216, "1 cup (195g)", "5", "45", "1.8", "grains"),
    ("Broccoli, steamed", 27, "1 cup (156g)", "3", "6", "0.4", "vegetables"),
    ("Avocado", 234, "1 medium (150g)", "3", "12", "21", "fruits"),
    ("Oats, cooked", 158, "1 cup (234g)", "6", "28", "3.2", "grains"),
];

impl MemoryStorage {
    /// Create an empty store with the seeded food catalog
    #[must_use]
    pub fn new() -> Self {
        let mut food_items = HashMap::new();
        for &(name, calories, serving, protein, carbs, fat, category) in SEED_FOODS {
            let id = Uuid::new_v4().to_string();
            food_items.insert(
                id.clone(),
                FoodItem {
                    id,
                    name: name.to_owned(),
                    calories_per_serving: calories,
                    serving_size: serving.to_owned(),
                    protein: Some(protein.to_owned()),
                    carbs: Some(carbs.to_owned()),
                    fat: Some(fat.to_owned()),
                    category: Some(category.to_owned()),
                },
            );
        }

        Self {
            users: RwLock::new(HashMap::new()),
            chat_messages: RwLock::new(HashMap::new()),
            meal_plans: RwLock::new(HashMap::new()),
            food_items: RwLock::new(food_items),
            calorie_entries: RwLock::new(HashMap::new()),
        }
    }

    fn next_id() -> String {
        Uuid::new_v4().to_string()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_user(&self, id: &str) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    async fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.email == email)
            .cloned()
    }

    async fn create_user(&self, user: NewUser) -> User {
        let id = Self::next_id();
        let record = User {
            id: id.clone(),
            username: user.username,
            email: user.email,
            password: user.password,
            age: user.age,
            weight: user.weight,
            height: user.height,
            activity_level: user.activity_level,
            fitness_goal: user.fitness_goal,
            dietary_preferences: user.dietary_preferences.unwrap_or_default(),
            calorie_goal: user.calorie_goal,
            created_at: Utc::now(),
        };
        self.users.write().await.insert(id, record.clone());
        record
    }

    async fn update_user(&self, id: &str, updates: UserUpdate) -> Option<User> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id)?;

        if let Some(username) = updates.username {
            user.username = username;
        }
        if let Some(email) = updates.email {
            user.email = email;
        }
        if let Some(password) = updates.password {
            user.password = password;
        }
        if let Some(age) = updates.age {
            user.age = Some(age);
        }
        if let Some(weight) = updates.weight {
            user.weight = Some(weight);
        }
        if let Some(height) = updates.height {
            user.height = Some(height);
        }
        if let Some(activity_level) = updates.activity_level {
            user.activity_level = Some(activity_level);
        }
        if let Some(fitness_goal) = updates.fitness_goal {
            user.fitness_goal = Some(fitness_goal);
        }
        if let Some(dietary_preferences) = updates.dietary_preferences {
            user.dietary_preferences = dietary_preferences;
        }
        if let Some(calorie_goal) = updates.calorie_goal {
            user.calorie_goal = Some(calorie_goal);
        }

        Some(user.clone())
    }

    async fn get_chat_messages(&self, user_id: &str) -> Vec<ChatMessage> {
        let mut messages: Vec<ChatMessage> = self
            .chat_messages
            .read()
            .await
            .values()
            .filter(|message| message.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        messages
    }

    async fn create_chat_message(&self, message: NewChatMessage) -> ChatMessage {
        let id = Self::next_id();
        let record = ChatMessage {
            id: id.clone(),
            user_id: message.user_id,
            message: message.message,
            is_user: message.is_user,
            timestamp: Utc::now(),
        };
        self.chat_messages.write().await.insert(id, record.clone());
        record
    }

    async fn get_meal_plans(&self, user_id: &str) -> Vec<MealPlan> {
        let mut plans: Vec<MealPlan> = self
            .meal_plans
            .read()
            .await
            .values()
            .filter(|plan| plan.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        plans
    }

    async fn get_meal_plan(&self, id: &str) -> Option<MealPlan> {
        self.meal_plans.read().await.get(id).cloned()
    }

    async fn create_meal_plan(&self, plan: NewMealPlan) -> MealPlan {
        let id = Self::next_id();
        let record = MealPlan {
            id: id.clone(),
            user_id: plan.user_id,
            name: plan.name,
            meals: plan.meals,
            total_calories: plan.total_calories,
            target_date: plan.target_date,
            created_at: Utc::now(),
        };
        self.meal_plans.write().await.insert(id, record.clone());
        record
    }

    async fn delete_meal_plan(&self, id: &str) -> bool {
        self.meal_plans.write().await.remove(id).is_some()
    }

    async fn get_food_items(&self) -> Vec<FoodItem> {
        self.food_items.read().await.values().cloned().collect()
    }

    async fn search_food_items(&self, query: &str) -> Vec<FoodItem> {
        let query = query.to_lowercase();
        self.food_items
            .read()
            .await
            .values()
            .filter(|item| {
                item.name.to_lowercase().contains(&query)
                    || item
                        .category
                        .as_ref()
                        .is_some_and(|category| category.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    async fn get_food_item(&self, id: &str) -> Option<FoodItem> {
        self.food_items.read().await.get(id).cloned()
    }

    async fn create_food_item(&self, item: NewFoodItem) -> FoodItem {
        let id = Self::next_id();
        let record = FoodItem {
            id: id.clone(),
            name: item.name,
            calories_per_serving: item.calories_per_serving,
            serving_size: item.serving_size,
            protein: item.protein,
            carbs: item.carbs,
            fat: item.fat,
            category: item.category,
        };
        self.food_items.write().await.insert(id, record.clone());
        record
    }

    async fn get_calorie_entries(
        &self,
        user_id: &str,
        date: Option<NaiveDate>,
    ) -> Vec<CalorieEntry> {
        let mut entries: Vec<CalorieEntry> = self
            .calorie_entries
            .read()
            .await
            .values()
            .filter(|entry| entry.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();

        if let Some(date) = date {
            let start = date.and_time(NaiveTime::MIN).and_utc();
            let end = start + Duration::days(1);
            entries.retain(|entry| entry.timestamp >= start && entry.timestamp < end);
        }

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    async fn create_calorie_entry(&self, entry: NewCalorieEntry) -> CalorieEntry {
        let id = Self::next_id();
        let record = CalorieEntry {
            id: id.clone(),
            user_id: entry.user_id,
            food_item_id: entry.food_item_id,
            servings: entry.servings,
            meal_type: entry.meal_type,
            timestamp: Utc::now(),
        };
        self.calorie_entries
            .write()
            .await
            .insert(id, record.clone());
        record
    }

    async fn delete_calorie_entry(&self, id: &str) -> bool {
        self.calorie_entries.write().await.remove(id).is_some()
    }
}
