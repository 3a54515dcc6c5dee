// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration management

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for security and other configurations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin allowlist, or "*" for any origin
    pub allowed_origins: String,
}

/// Top-level server configuration assembled from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// The Groq API key is intentionally NOT validated here: the server
    /// starts without one, and the AI gateway fails per call instead.
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var(env_config::HTTP_PORT) {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("invalid {} value: {port}", env_config::HTTP_PORT))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let log_level = env::var("RUST_LOG")
            .map(|s| LogLevel::from_str_or_default(&s))
            .unwrap_or_default();

        let environment = env::var(env_config::ENVIRONMENT)
            .map(|s| Environment::from_str_or_default(&s))
            .unwrap_or_default();

        let cors = CorsConfig {
            allowed_origins: env::var(env_config::CORS_ALLOWED_ORIGINS)
                .unwrap_or_else(|_| "*".into()),
        };

        Ok(Self {
            http_port,
            log_level,
            environment,
            cors,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} log_level={} environment={} cors_origins={}",
            self.http_port, self.log_level, self.environment, self.cors.allowed_origins
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            cors: CorsConfig {
                allowed_origins: "*".into(),
            },
        }
    }
}
