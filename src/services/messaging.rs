// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Direct messaging operations.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::user::{FALLBACK_DISPLAY_NAME, FALLBACK_TITLE};
use crate::models::{
    Conversation, ConversationSummary, CounterpartProfile, LastMessage, LastMessageView, Message,
    MessageView,
};
use crate::time_utils;
use chrono::{DateTime, Utc};
use futures_util::{stream, StreamExt};

const MAX_CONCURRENT_DB_OPS: usize = 10;

/// Messaging data access service.
#[derive(Clone)]
pub struct MessagingService {
    db: FirestoreDb,
}

impl MessagingService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Conversations `uid` participates in, most recently updated first,
    /// each with the counterpart's profile and an unread count.
    ///
    /// One profile read plus one unread query per conversation; the fan-out
    /// runs through a bounded concurrent stream. Acceptable only because
    /// conversation lists are small.
    pub async fn list_conversations(
        &self,
        uid: &str,
    ) -> Result<Vec<ConversationSummary>, AppError> {
        let now = chrono::Utc::now();
        let conversations = self.db.conversations_for_user(uid).await?;

        stream::iter(conversations)
            .map(|conversation| {
                let db = self.db.clone();
                let uid = uid.to_string();
                async move { summarize_conversation(&db, conversation, &uid, now).await }
            })
            .buffered(MAX_CONCURRENT_DB_OPS)
            .collect::<Vec<Result<ConversationSummary, AppError>>>()
            .await
            .into_iter()
            .collect()
    }

    /// All messages in a conversation, chronological. As a side effect,
    /// every unread message not sent by `uid` is marked read in one atomic
    /// commit before the list is returned.
    pub async fn list_messages(
        &self,
        conversation_id: &str,
        uid: &str,
    ) -> Result<Vec<MessageView>, AppError> {
        let now = chrono::Utc::now();
        let messages = self.db.messages_in_conversation(conversation_id).await?;

        let to_mark: Vec<Message> = messages
            .iter()
            .filter(|message| message.sender_id != uid && !message.is_read)
            .cloned()
            .collect();
        self.db.mark_messages_read(&to_mark).await?;

        Ok(messages
            .into_iter()
            .map(|message| {
                let is_self = message.sender_id == uid;
                MessageView {
                    id: message.id,
                    text: message.text,
                    timestamp: time_utils::relative_label_rfc3339(&message.created_at, now),
                    sender: message.sender_id,
                    is_self,
                }
            })
            .collect())
    }

    /// Send a message, creating the conversation lazily when no id is given.
    ///
    /// With an id, the conversation's lastMessage/updatedAt are refreshed
    /// first; then the message is inserted unread. The returned echo is
    /// client-optimistic, labeled "Just now".
    pub async fn send_message(
        &self,
        conversation_id: Option<String>,
        sender_id: &str,
        receiver_id: &str,
        text: String,
    ) -> Result<MessageView, AppError> {
        let now = chrono::Utc::now().to_rfc3339();

        let last_message = LastMessage {
            text: text.clone(),
            timestamp: now.clone(),
            sender_id: sender_id.to_string(),
        };

        let conversation_id = match conversation_id {
            Some(id) => {
                let mut conversation = self.db.get_conversation(&id).await?.ok_or_else(|| {
                    AppError::NotFound(format!("Conversation {} not found", id))
                })?;

                conversation.last_message = last_message;
                conversation.updated_at = now.clone();
                self.db.update_conversation(&id, &conversation).await?;
                id
            }
            None => {
                let conversation = Conversation {
                    id: String::new(),
                    participants: vec![sender_id.to_string(), receiver_id.to_string()],
                    last_message,
                    updated_at: now.clone(),
                };

                let created = self.db.insert_conversation(&conversation).await?;
                tracing::info!(
                    conversation_id = %created.id,
                    "Conversation created on first message"
                );
                created.id
            }
        };

        let message = Message {
            id: String::new(),
            conversation_id,
            sender_id: sender_id.to_string(),
            text,
            created_at: now,
            is_read: false,
        };

        let created = self.db.insert_message(&message).await?;

        Ok(MessageView {
            id: created.id,
            text: created.text,
            timestamp: time_utils::JUST_NOW.to_string(),
            sender: created.sender_id,
            is_self: true,
        })
    }
}

/// Resolve one conversation row: counterpart profile plus unread count.
async fn summarize_conversation(
    db: &FirestoreDb,
    conversation: Conversation,
    uid: &str,
    now: DateTime<Utc>,
) -> Result<ConversationSummary, AppError> {
    let counterpart_id = conversation
        .counterpart_of(uid)
        .unwrap_or_default()
        .to_string();

    // A missing profile document renders with fallbacks rather than failing
    // the whole listing.
    let profile = db.get_user_profile(&counterpart_id).await?;

    let (name, avatar, title) = match profile {
        Some(profile) => (
            profile.display_name_or_fallback(),
            profile.photo_url.clone(),
            profile.title_or_fallback(),
        ),
        None => (
            FALLBACK_DISPLAY_NAME.to_string(),
            None,
            FALLBACK_TITLE.to_string(),
        ),
    };

    let unread = db
        .unread_messages_from(&conversation.id, &counterpart_id)
        .await?
        .len() as u32;

    Ok(ConversationSummary {
        id: conversation.id,
        user: CounterpartProfile {
            id: counterpart_id,
            name,
            avatar,
            title,
        },
        last_message: LastMessageView {
            text: conversation.last_message.text,
            timestamp: time_utils::relative_label_rfc3339(
                &conversation.last_message.timestamp,
                now,
            ),
            is_read: true,
            sender: conversation.last_message.sender_id,
        },
        unread,
    })
}
