// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const POSTS: &str = "posts";
    pub const JOBS: &str = "jobs";
    pub const CONVERSATIONS: &str = "conversations";
    pub const MESSAGES: &str = "messages";
}

/// Document field names used in query filters and ordering.
///
/// These must match the serde renames on the models.
pub mod fields {
    pub const CREATED_AT: &str = "createdAt";
    pub const POSTED_AT: &str = "postedAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const LIKED_BY: &str = "likedBy";
    pub const SAVED_BY: &str = "savedBy";
    pub const APPLIED_BY: &str = "appliedBy";
    pub const PARTICIPANTS: &str = "participants";
    pub const CONVERSATION_ID: &str = "conversationId";
    pub const SENDER_ID: &str = "senderId";
    pub const IS_READ: &str = "isRead";
}
