// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gauntlet Connect: the social network for Gauntlet AI
//!
//! This crate provides the backend API for the feed, jobs board, and
//! direct messaging, persisted in Firestore with sessions issued against
//! Firebase Auth.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::{AuthService, JobsService, MessagingService, PostsService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub auth: AuthService,
    pub posts: PostsService,
    pub jobs: JobsService,
    pub messaging: MessagingService,
}
