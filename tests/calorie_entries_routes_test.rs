// ABOUTME: Integration tests for calorie tracking routes
// ABOUTME: Covers the derived totalCalories join, date filtering, and idempotent deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use std::sync::Arc;

use common::TEST_USER_ID;
use helpers::axum_test::AxumTestRequest;
use nutriai_server::models::FoodItem;
use nutriai_server::resources::ServerResources;
use nutriai_server::routes::calorie_entries::{CalorieEntryRoutes, CalorieEntryWithFood};
use nutriai_server::routes::food_items::FoodItemRoutes;

use axum::http::StatusCode;
use serde_json::{json, Value};

/// Look up a seeded food item id through the catalog route
async fn find_food(resources: &Arc<ServerResources>, search: &str) -> FoodItem {
    let router = FoodItemRoutes::routes(resources.clone());
    let response = AxumTestRequest::get(&format!("/api/food-items?search={search}"))
        .send(router)
        .await;
    let mut items: Vec<FoodItem> = response.json();
    assert_eq!(items.len(), 1, "expected exactly one match for {search}");
    items.remove(0)
}

#[tokio::test]
async fn test_create_entry_derives_total_from_servings() {
    let resources = common::create_test_resources_replying("unused");
    let apple = find_food(&resources, "apple").await;
    let router = CalorieEntryRoutes::routes(resources);

    let response = AxumTestRequest::post("/api/calorie-entries")
        .json(&json!({
            "userId": TEST_USER_ID,
            "foodItemId": apple.id,
            "servings": "2",
            "mealType": "snack"
        }))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let entry: CalorieEntryWithFood = response.json();
    // 95 calories per serving * 2 servings
    assert_eq!(entry.total_calories, 190);
    assert_eq!(entry.food_item.unwrap().name, "Apple, medium");
    assert_eq!(entry.entry.meal_type.as_deref(), Some("snack"));
    assert!(!entry.entry.id.is_empty());
}

#[tokio::test]
async fn test_omitted_servings_default_to_one() {
    let resources = common::create_test_resources_replying("unused");
    let apple = find_food(&resources, "apple").await;
    let router = CalorieEntryRoutes::routes(resources);

    let response = AxumTestRequest::post("/api/calorie-entries")
        .json(&json!({
            "userId": TEST_USER_ID,
            "foodItemId": apple.id
        }))
        .send(router)
        .await;

    let entry: CalorieEntryWithFood = response.json();
    assert_eq!(entry.total_calories, 95);
}

#[tokio::test]
async fn test_unparseable_servings_count_as_one() {
    let resources = common::create_test_resources_replying("unused");
    let apple = find_food(&resources, "apple").await;
    let router = CalorieEntryRoutes::routes(resources);

    let response = AxumTestRequest::post("/api/calorie-entries")
        .json(&json!({
            "userId": TEST_USER_ID,
            "foodItemId": apple.id,
            "servings": "a lot"
        }))
        .send(router)
        .await;

    let entry: CalorieEntryWithFood = response.json();
    assert_eq!(entry.total_calories, 95);
}

#[tokio::test]
async fn test_fractional_servings_round_to_nearest() {
    let resources = common::create_test_resources_replying("unused");
    let quinoa = find_food(&resources, "qui").await;
    let router = CalorieEntryRoutes::routes(resources);

    let response = AxumTestRequest::post("/api/calorie-entries")
        .json(&json!({
            "userId": TEST_USER_ID,
            "foodItemId": quinoa.id,
            "servings": "0.5"
        }))
        .send(router)
        .await;

    let entry: CalorieEntryWithFood = response.json();
    // 222 * 0.5 = 111
    assert_eq!(entry.total_calories, 111);
}

#[tokio::test]
async fn test_missing_food_item_yields_zero_total() {
    let resources = common::create_test_resources_replying("unused");
    let router = CalorieEntryRoutes::routes(resources);

    let response = AxumTestRequest::post("/api/calorie-entries")
        .json(&json!({
            "userId": TEST_USER_ID,
            "foodItemId": "no-such-food",
            "servings": "3"
        }))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let entry: CalorieEntryWithFood = response.json();
    assert_eq!(entry.total_calories, 0);
    assert!(entry.food_item.is_none());
}

#[tokio::test]
async fn test_list_entries_with_date_filter() {
    let resources = common::create_test_resources_replying("unused");
    let apple = find_food(&resources, "apple").await;
    let router = CalorieEntryRoutes::routes(resources);

    AxumTestRequest::post("/api/calorie-entries")
        .json(&json!({
            "userId": TEST_USER_ID,
            "foodItemId": apple.id,
            "servings": "1",
            "mealType": "breakfast"
        }))
        .send(router.clone())
        .await;

    let today = chrono::Utc::now().date_naive();
    let response = AxumTestRequest::get(&format!(
        "/api/calorie-entries/{TEST_USER_ID}?date={today}"
    ))
    .send(router.clone())
    .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let entries: Vec<CalorieEntryWithFood> = response.json();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].total_calories, 95);

    // A day with no entries filters everything out
    let response = AxumTestRequest::get(&format!(
        "/api/calorie-entries/{TEST_USER_ID}?date=2000-01-01"
    ))
    .send(router)
    .await;

    let entries: Vec<CalorieEntryWithFood> = response.json();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_invalid_date_filter_is_400() {
    let resources = common::create_test_resources_replying("unused");
    let router = CalorieEntryRoutes::routes(resources);

    let response = AxumTestRequest::get(&format!(
        "/api/calorie-entries/{TEST_USER_ID}?date=yesterday"
    ))
    .send(router)
    .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_delete_entry_then_404_on_repeat() {
    let resources = common::create_test_resources_replying("unused");
    let router = CalorieEntryRoutes::routes(resources);

    let created = AxumTestRequest::post("/api/calorie-entries")
        .json(&json!({ "userId": TEST_USER_ID }))
        .send(router.clone())
        .await;
    let entry: CalorieEntryWithFood = created.json();

    let response = AxumTestRequest::delete(&format!("/api/calorie-entries/{}", entry.entry.id))
        .send(router.clone())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let repeat = AxumTestRequest::delete(&format!("/api/calorie-entries/{}", entry.entry.id))
        .send(router)
        .await;

    assert_eq!(repeat.status_code(), StatusCode::NOT_FOUND);
}
