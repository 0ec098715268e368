// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gauntlet Connect API Server
//!
//! Serves the feed, jobs board, and direct messaging for the web client,
//! backed by Firestore and Firebase Auth.

use gauntlet_connect::{
    config::Config,
    db::FirestoreDb,
    services::{AuthService, JobsService, MessagingService, PostsService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Gauntlet Connect API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.firebase_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Identity provider is selected once here, from configuration
    let auth = AuthService::new(&config, db.clone());
    tracing::info!(mode = ?config.auth_mode, "Auth service initialized");

    // Data access services
    let posts = PostsService::new(db.clone());
    let jobs = JobsService::new(db.clone());
    let messaging = MessagingService::new(db.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        auth,
        posts,
        jobs,
        messaging,
    });

    // Build router
    let app = gauntlet_connect::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gauntlet_connect=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
