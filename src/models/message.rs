// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversation and message models for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Denormalized preview of the newest message, embedded on the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
    pub text: String,
    /// When the message was sent (RFC3339)
    pub timestamp: String,
    pub sender_id: String,
}

/// Stored conversation document.
///
/// Created lazily on the first message between a pair of users. The schema
/// does not enforce uniqueness of the pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Document ID, populated on reads.
    #[serde(alias = "_firestore_id", default, skip_serializing)]
    pub id: String,
    /// Exactly two user ids, unordered
    pub participants: Vec<String>,
    pub last_message: LastMessage,
    /// Last activity time (RFC3339), used for ordering
    pub updated_at: String,
}

impl Conversation {
    /// The participant that is not `uid`.
    pub fn counterpart_of(&self, uid: &str) -> Option<&str> {
        self.participants
            .iter()
            .find(|id| id.as_str() != uid)
            .map(String::as_str)
    }
}

/// Stored message document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Document ID, populated on reads.
    #[serde(alias = "_firestore_id", default, skip_serializing)]
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub text: String,
    /// When the message was sent (RFC3339)
    pub created_at: String,
    /// False until the non-sender views the conversation
    pub is_read: bool,
}

/// Counterpart profile attached to each conversation summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CounterpartProfile {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub title: String,
}

/// Last-message preview as served to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LastMessageView {
    pub text: String,
    /// Relative display label
    pub timestamp: String,
    pub is_read: bool,
    pub sender: String,
}

/// One row of the conversation list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ConversationSummary {
    pub id: String,
    pub user: CounterpartProfile,
    pub last_message: LastMessageView,
    /// Messages from the counterpart not yet marked read
    pub unread: u32,
}

/// Message as served to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MessageView {
    pub id: String,
    pub text: String,
    /// Relative display label
    pub timestamp: String,
    pub sender: String,
    pub is_self: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart_of_picks_the_other_participant() {
        let convo = Conversation {
            id: "c1".to_string(),
            participants: vec!["u1".to_string(), "u2".to_string()],
            last_message: LastMessage {
                text: "hi".to_string(),
                timestamp: "2026-08-05T12:00:00Z".to_string(),
                sender_id: "u1".to_string(),
            },
            updated_at: "2026-08-05T12:00:00Z".to_string(),
        };

        assert_eq!(convo.counterpart_of("u1"), Some("u2"));
        assert_eq!(convo.counterpart_of("u2"), Some("u1"));
        assert_eq!(convo.counterpart_of("u3"), Some("u1"));
    }
}
