// ABOUTME: Test helper modules shared across integration tests
// ABOUTME: HTTP request builder for exercising axum routers

pub mod axum_test;
