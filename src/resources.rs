// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Holds the shared store, LLM provider, and configuration handles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! # Server Resources Module
//!
//! Centralized resource container constructed once at process start and
//! passed by handle into every request-handling context. This replaces the
//! ambient-singleton store of the reference implementation with explicit
//! dependency injection, which is also what lets tests swap in a
//! deterministic LLM stub or a fresh store per test.

use std::sync::Arc;

use crate::config::environment::ServerConfig;
use crate::llm::LlmProvider;
use crate::storage::Storage;

/// Shared resources for all request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Record store owning all entity collections
    pub storage: Arc<dyn Storage>,
    /// AI completion gateway
    pub llm: Arc<dyn LlmProvider>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources
    #[must_use]
    pub fn new(
        storage: Arc<dyn Storage>,
        llm: Arc<dyn LlmProvider>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            storage,
            llm,
            config,
        }
    }
}
