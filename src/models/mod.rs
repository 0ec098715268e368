// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod job;
pub mod message;
pub mod post;
pub mod user;

pub use job::{Job, JobView};
pub use message::{
    Conversation, ConversationSummary, CounterpartProfile, LastMessage, LastMessageView, Message,
    MessageView,
};
pub use post::{Post, PostAuthor, PostView};
pub use user::{SessionUser, UserProfile};
