// ABOUTME: Application constants and configuration values
// ABOUTME: Environment variable names, defaults, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! Central home for constants so route handlers and config stay literal-free.

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origin allowlist, or "*"
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Groq API key for the completion gateway
    pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Default values applied when the environment leaves a setting unset
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8080;
    /// Default daily calorie target used in meal-plan prompts
    pub const CALORIE_GOAL: i32 = 1500;
    /// Default fitness goal used in meal-plan prompts
    pub const FITNESS_GOAL: &str = "maintenance";
}

/// Service identifiers for logging and health reporting
pub mod service_names {
    /// Canonical service name
    pub const NUTRIAI_SERVER: &str = "nutriai-server";
}
