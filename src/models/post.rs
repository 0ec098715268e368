// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feed post model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::time_utils;

/// Stored post document.
///
/// Field names serialize camelCase to match the collection layout the web
/// client reads. `like_count` equals `liked_by.len()` at all times; the
/// toggle operation maintains this, the store does not verify it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Document ID, populated on reads.
    #[serde(alias = "_firestore_id", default, skip_serializing)]
    pub id: String,
    /// Author's user id
    pub author_id: String,
    /// Author display name snapshot
    pub author_name: String,
    /// Author headline snapshot
    pub author_title: String,
    /// Author avatar URL snapshot
    pub author_avatar: Option<String>,
    /// Post body
    pub content: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    /// Number of likes; mirrors `liked_by`
    pub like_count: u32,
    /// Number of comments (no comment operation exists yet)
    pub comment_count: u32,
    /// Users who liked this post
    #[serde(default)]
    pub liked_by: Vec<String>,
}

impl Post {
    /// Whether `uid` has liked this post.
    pub fn is_liked_by(&self, uid: &str) -> bool {
        self.liked_by.iter().any(|id| id == uid)
    }
}

/// Author fields snapshotted onto a new post.
#[derive(Debug, Clone)]
pub struct PostAuthor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub avatar: Option<String>,
}

/// Post as served to the client, with the display timestamp resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PostView {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_title: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub timestamp_string: String,
    pub like_count: u32,
    pub comment_count: u32,
    pub liked_by: Vec<String>,
}

impl PostView {
    /// Resolve the stored timestamp into a relative display label.
    pub fn from_post(post: Post, now: chrono::DateTime<chrono::Utc>) -> Self {
        let timestamp_string = time_utils::relative_label_rfc3339(&post.created_at, now);
        Self {
            id: post.id,
            author_id: post.author_id,
            author_name: post.author_name,
            author_title: post.author_title,
            author_avatar: post.author_avatar,
            content: post.content,
            timestamp_string,
            like_count: post.like_count,
            comment_count: post.comment_count,
            liked_by: post.liked_by,
        }
    }

    /// View of a just-created post; the server timestamp is not considered
    /// resolved at return time, so the label is fixed at "Just now".
    pub fn just_created(post: Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            author_name: post.author_name,
            author_title: post.author_title,
            author_avatar: post.author_avatar,
            content: post.content,
            timestamp_string: time_utils::JUST_NOW.to_string(),
            like_count: post.like_count,
            comment_count: post.comment_count,
            liked_by: post.liked_by,
        }
    }
}
