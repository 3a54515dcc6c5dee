// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides resource construction with a fresh store and a stubbed LLM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI
#![allow(dead_code)]

//! Shared test utilities for `nutriai_server`
//!
//! Every test gets a fresh in-memory store (with the seeded food catalog)
//! and a deterministic LLM stub, wired through the same `ServerResources`
//! container the binary uses.

use std::sync::{Arc, Once};

use async_trait::async_trait;
use nutriai_server::{
    config::environment::ServerConfig,
    errors::AppError,
    llm::{ChatRequest, ChatResponse, LlmProvider},
    resources::ServerResources,
    storage::MemoryStorage,
};

/// Demo user id used by the excluded web client
pub const TEST_USER_ID: &str = "user-123";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Deterministic LLM stub
// ============================================================================

/// What the stub does when asked for a completion
enum StubBehavior {
    /// Return this text as the completion
    Reply(String),
    /// Fail with an external-service error
    Fail,
}

/// Deterministic replacement for the Groq gateway
pub struct StubLlm {
    behavior: StubBehavior,
}

impl StubLlm {
    /// Stub that always replies with the given text
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: StubBehavior::Reply(text.into()),
        }
    }

    /// Stub that simulates an unreachable provider
    pub fn failing() -> Self {
        Self {
            behavior: StubBehavior::Fail,
        }
    }
}

#[async_trait]
impl LlmProvider for StubLlm {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        match &self.behavior {
            StubBehavior::Reply(text) => Ok(ChatResponse {
                content: text.clone(),
                model: "stub-model".to_owned(),
            }),
            StubBehavior::Fail => Err(AppError::external_service(
                "Stub",
                "simulated provider outage",
            )),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(matches!(self.behavior, StubBehavior::Reply(_)))
    }
}

// ============================================================================
// Resource construction
// ============================================================================

/// Test resources with a caller-supplied LLM provider
pub fn create_test_resources(llm: Arc<dyn LlmProvider>) -> Arc<ServerResources> {
    init_test_logging();

    let storage = Arc::new(MemoryStorage::new());
    let config = Arc::new(ServerConfig::default());

    Arc::new(ServerResources::new(storage, llm, config))
}

/// Test resources whose LLM always replies with the given text
pub fn create_test_resources_replying(text: &str) -> Arc<ServerResources> {
    create_test_resources(Arc::new(StubLlm::replying(text)))
}

/// Test resources whose LLM simulates an unreachable provider
pub fn create_test_resources_failing() -> Arc<ServerResources> {
    create_test_resources(Arc::new(StubLlm::failing()))
}
