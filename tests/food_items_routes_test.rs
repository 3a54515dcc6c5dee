// ABOUTME: Integration tests for the food catalog routes
// ABOUTME: Covers the seeded catalog, search semantics, and single-item fetch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use nutriai_server::models::FoodItem;
use nutriai_server::routes::food_items::FoodItemRoutes;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_list_returns_seeded_catalog() {
    let resources = common::create_test_resources_replying("unused");
    let router = FoodItemRoutes::routes(resources);

    let response = AxumTestRequest::get("/api/food-items").send(router).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let items: Vec<FoodItem> = response.json();
    assert_eq!(items.len(), 10);
}

#[tokio::test]
async fn test_search_finds_quinoa() {
    let resources = common::create_test_resources_replying("unused");
    let router = FoodItemRoutes::routes(resources);

    let response = AxumTestRequest::get("/api/food-items?search=qui")
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let items: Vec<FoodItem> = response.json();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Quinoa, cooked");
    assert_eq!(items[0].calories_per_serving, 222);
    assert_eq!(items[0].category.as_deref(), Some("grains"));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let resources = common::create_test_resources_replying("unused");
    let router = FoodItemRoutes::routes(resources);

    let response = AxumTestRequest::get("/api/food-items?search=GREEK")
        .send(router)
        .await;

    let items: Vec<FoodItem> = response.json();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Greek Yogurt");
}

#[tokio::test]
async fn test_search_matches_category() {
    let resources = common::create_test_resources_replying("unused");
    let router = FoodItemRoutes::routes(resources);

    let response = AxumTestRequest::get("/api/food-items?search=grains")
        .send(router)
        .await;

    let items: Vec<FoodItem> = response.json();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|item| item.category.as_deref() == Some("grains")));
}

#[tokio::test]
async fn test_empty_search_lists_everything() {
    let resources = common::create_test_resources_replying("unused");
    let router = FoodItemRoutes::routes(resources);

    let response = AxumTestRequest::get("/api/food-items?search=")
        .send(router)
        .await;

    let items: Vec<FoodItem> = response.json();
    assert_eq!(items.len(), 10);
}

#[tokio::test]
async fn test_get_item_by_id() {
    let resources = common::create_test_resources_replying("unused");
    let router = FoodItemRoutes::routes(resources);

    let listing = AxumTestRequest::get("/api/food-items?search=avocado")
        .send(router.clone())
        .await;
    let items: Vec<FoodItem> = listing.json();
    let avocado = &items[0];

    let response = AxumTestRequest::get(&format!("/api/food-items/{}", avocado.id))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let item: FoodItem = response.json();
    assert_eq!(&item, avocado);
}

#[tokio::test]
async fn test_get_unknown_item_is_404() {
    let resources = common::create_test_resources_replying("unused");
    let router = FoodItemRoutes::routes(resources);

    let response = AxumTestRequest::get("/api/food-items/nonexistent-id")
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}
