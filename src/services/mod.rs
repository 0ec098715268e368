// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod auth;
pub mod identity;
pub mod jobs;
pub mod messaging;
pub mod posts;

pub use auth::AuthService;
pub use identity::FirebaseAuthClient;
pub use jobs::{JobsService, NewJob};
pub use messaging::MessagingService;
pub use posts::PostsService;
