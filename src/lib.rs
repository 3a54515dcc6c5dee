// ABOUTME: Main library entry point for the NutriAI nutrition assistant API
// ABOUTME: Provides chat, AI meal planning, and calorie tracking over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

#![deny(unsafe_code)]

//! # NutriAI Server
//!
//! A demo nutrition and fitness backend. The server exposes a small REST API
//! for an AI chat assistant, AI-generated weekly meal plans, a food catalog,
//! and a calorie tracker. All records live in an in-memory store for the
//! lifetime of the process; AI text comes from Groq's OpenAI-compatible
//! completion endpoint.
//!
//! ## Architecture
//!
//! - **Storage**: in-memory record store behind the [`storage::Storage`]
//!   trait, constructed once at startup and shared via [`resources::ServerResources`]
//! - **LLM**: pluggable completion gateway behind [`llm::LlmProvider`]
//! - **Routes**: axum handlers per endpoint group, orchestrating the two
//! - **Config**: environment-based configuration, no config files
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriai_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("NutriAI server configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Application constants and environment variable names
pub mod constants;

/// Configuration management from environment variables
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// LLM provider abstraction for AI chat integration
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Domain models for users, chat, meal plans, foods, and calorie entries
pub mod models;

/// Centralized resource container for dependency injection
pub mod resources;

/// HTTP route handlers for the REST API
pub mod routes;

/// HTTP server assembly: router, middleware layers, listener
pub mod server;

/// In-memory record store for all entity collections
pub mod storage;
