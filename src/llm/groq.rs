// ABOUTME: Groq LLM provider implementation over the OpenAI-compatible API
// ABOUTME: Single-attempt completion calls with a fixed apology fallback for empty responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! # Groq Provider
//!
//! Implementation of the [`LlmProvider`] trait against Groq's
//! OpenAI-compatible chat completion endpoint.
//!
//! ## Configuration
//!
//! Set the `GROQ_API_KEY` environment variable with your API key from
//! Groq Console: <https://console.groq.com/keys>
//!
//! The provider is constructed even when the key is absent; the missing
//! credential surfaces as a configuration error on the first completion
//! call, before any network I/O. The server itself starts fine without it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider};
use crate::constants::env_config;
use crate::errors::AppError;

/// Default model to use
const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Default sampling temperature
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default output token cap
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Base URL for the Groq API (OpenAI-compatible)
const API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Completion text substituted when the provider returns no usable choice
pub const FALLBACK_COMPLETION: &str =
    "I apologize, but I couldn't generate a response at the moment.";

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// Groq API request structure
#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<GroqMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// Message structure for the Groq API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroqMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for GroqMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// Groq API response structure
#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    #[serde(default)]
    model: Option<String>,
}

/// Choice in a Groq response
#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
}

/// Message in a Groq response
#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Groq LLM provider
pub struct GroqProvider {
    client: Client,
    api_key: Option<String>,
}

impl GroqProvider {
    /// Create a new Groq provider with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: Some(api_key.into()),
        }
    }

    /// Create a Groq provider from the environment
    ///
    /// An absent or empty `GROQ_API_KEY` is not an error here; completion
    /// calls will fail fast with a configuration error instead.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var(env_config::GROQ_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            warn!(
                "{} is not set; AI endpoints will fail until it is provided",
                env_config::GROQ_API_KEY
            );
        }

        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Build the API URL for a given endpoint
    fn api_url(endpoint: &str) -> String {
        format!("{API_BASE_URL}/{endpoint}")
    }

    /// Resolve the configured API key or fail with a configuration error
    fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::config(format!(
                "Missing {} environment variable. Get your API key from https://console.groq.com/keys",
                env_config::GROQ_API_KEY
            ))
        })
    }

    /// Convert internal messages to Groq format
    fn convert_messages(messages: &[ChatMessage]) -> Vec<GroqMessage> {
        messages.iter().map(GroqMessage::from).collect()
    }

    /// Extract the completion text from a parsed response
    ///
    /// An empty choice list, or a first choice with no content, yields the
    /// fixed fallback string rather than an error.
    fn completion_text(response: &GroqResponse) -> String {
        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
            .map_or_else(|| FALLBACK_COMPLETION.to_owned(), ToOwned::to_owned)
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(DEFAULT_MODEL)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let api_key = self.require_api_key()?;
        let model = request.model.as_deref().unwrap_or(DEFAULT_MODEL);

        debug!("Sending chat completion request to Groq");

        let groq_request = GroqRequest {
            model: model.to_owned(),
            messages: Self::convert_messages(&request.messages),
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        };

        let response = self
            .client
            .post(Self::api_url("chat/completions"))
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&groq_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Groq API: {}", e);
                AppError::external_service("Groq", format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Groq API response: {}", e);
            AppError::external_service("Groq", format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            error!("Groq API returned {}: {}", status, body);
            return Err(AppError::external_service(
                "Groq",
                format!(
                    "API error ({}): {}",
                    status,
                    body.chars().take(200).collect::<String>()
                ),
            ));
        }

        let groq_response: GroqResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Groq API response: {}", e);
            AppError::external_service("Groq", format!("Failed to parse response: {e}"))
        })?;

        let content = Self::completion_text(&groq_response);

        debug!("Received response from Groq: {} chars", content.len());

        Ok(ChatResponse {
            content,
            model: groq_response.model.unwrap_or_else(|| model.to_owned()),
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        let api_key = self.require_api_key()?;

        debug!("Performing Groq API health check");

        let response = self
            .client
            .get(Self::api_url("models"))
            .header("Authorization", format!("Bearer {api_key}"))
            .send()
            .await
            .map_err(|e| {
                error!("Groq health check failed: {}", e);
                AppError::external_service("Groq", format!("Health check failed: {e}"))
            })?;

        let healthy = response.status().is_success();

        if !healthy {
            warn!(
                "Groq API health check failed with status: {}",
                response.status()
            );
        }

        Ok(healthy)
    }
}
