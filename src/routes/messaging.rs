// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Messaging routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{ConversationSummary, MessageView};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/conversations", get(list_conversations))
        .route(
            "/api/conversations/{id}/messages",
            get(list_messages),
        )
        .route("/api/messages", post(send_message))
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Absent on the first message between a pair; the conversation is
    /// created lazily.
    pub conversation_id: Option<String>,
    #[validate(length(min = 1))]
    pub receiver_id: String,
    #[validate(length(min = 1, max = 5000))]
    pub text: String,
}

/// The session user's conversations, most recently updated first.
async fn list_conversations(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ConversationSummary>>> {
    let conversations = state.messaging.list_conversations(&user.uid).await?;
    Ok(Json(conversations))
}

/// Messages in a conversation, chronological. Viewing marks the
/// counterpart's unread messages as read.
async fn list_messages(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Vec<MessageView>>> {
    let messages = state
        .messaging
        .list_messages(&conversation_id, &user.uid)
        .await?;
    Ok(Json(messages))
}

/// Send a message from the session user.
async fn send_message(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<MessageView>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let message = state
        .messaging
        .send_message(req.conversation_id, &user.uid, &req.receiver_id, req.text)
        .await?;

    Ok(Json(message))
}
