// ABOUTME: Chat route handlers for the AI nutrition assistant
// ABOUTME: Lists conversation history and relays user messages through the LLM gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriAI

//! Chat routes.
//!
//! `GET /api/chat/messages/:user_id` returns the stored conversation oldest
//! first. `POST /api/chat/send` appends the user message, sends the recent
//! conversation to the LLM, stores the reply, and returns both records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::{
    errors::AppError,
    llm::{self, prompts, ChatRequest, LlmProvider},
    models::{ChatMessage, NewChatMessage},
    resources::ServerResources,
    storage::Storage,
};

/// Number of stored messages included as conversation context
const CHAT_HISTORY_WINDOW: usize = 10;

/// Response for a completed chat exchange
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchangeResponse {
    /// The persisted user message
    pub user_message: ChatMessage,
    /// The persisted assistant reply
    pub ai_message: ChatMessage,
}

/// Chat routes handler
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create all chat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/chat/messages/:user_id", get(Self::list_messages))
            .route("/api/chat/send", post(Self::send_message))
            .with_state(resources)
    }

    /// List a user's conversation, ascending by timestamp
    async fn list_messages(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let messages = resources.storage.get_chat_messages(&user_id).await;
        Ok((StatusCode::OK, Json(messages)).into_response())
    }

    /// Append a user message and produce the assistant reply
    async fn send_message(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<NewChatMessage>,
    ) -> Result<Response, AppError> {
        let user_id = request.user_id.clone();
        let message_text = request.message.clone();

        let user_message = resources.storage.create_chat_message(request).await;

        let conversation = Self::build_conversation(&resources, user_id.as_deref(), &message_text)
            .await;

        let completion = resources
            .llm
            .complete(&ChatRequest::new(conversation))
            .await?;

        info!(
            "chat reply generated for user {}",
            user_id.as_deref().unwrap_or("<anonymous>")
        );

        let ai_message = resources
            .storage
            .create_chat_message(NewChatMessage {
                user_id,
                message: completion.content,
                is_user: false,
            })
            .await;

        Ok((
            StatusCode::OK,
            Json(ChatExchangeResponse {
                user_message,
                ai_message,
            }),
        )
            .into_response())
    }

    /// Assemble the LLM conversation: system prompt, the last stored
    /// messages, then the incoming text
    async fn build_conversation(
        resources: &ServerResources,
        user_id: Option<&str>,
        message_text: &str,
    ) -> Vec<llm::ChatMessage> {
        let recent = resources
            .storage
            .get_chat_messages(user_id.unwrap_or(""))
            .await;

        let start = recent.len().saturating_sub(CHAT_HISTORY_WINDOW);
        let mut conversation = Vec::with_capacity(recent.len() - start + 2);

        conversation.push(llm::ChatMessage::system(prompts::CHAT_SYSTEM_PROMPT));

        for message in &recent[start..] {
            let chat_message = if message.is_user {
                llm::ChatMessage::user(&message.message)
            } else {
                llm::ChatMessage::assistant(&message.message)
            };
            conversation.push(chat_message);
        }

        conversation.push(llm::ChatMessage::user(message_text));
        conversation
    }
}
