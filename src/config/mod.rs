// ABOUTME: Configuration module for environment-based server settings
// ABOUTME: Re-exports the environment configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! Configuration management. All settings come from the environment; there
//! are no configuration files.

pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
