// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Firebase connection parameters fall back to literal `mock-*` placeholders
//! so a checkout runs against the emulator without any setup.

use std::env;

/// How the identity provider is selected at startup.
///
/// This is a configuration switch, not a runtime decision: the provider is
/// chosen once when [`crate::services::AuthService`] is constructed and never
/// branched on per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Delegate credential checks to the Firebase Auth REST API.
    Firebase,
    /// Serve a static development identity with simulated latency.
    Mock,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Firebase project wiring ---
    /// Firebase web API key (public)
    pub firebase_api_key: String,
    /// Firebase / GCP project ID
    pub firebase_project_id: String,
    /// Cloud Storage bucket for profile media
    pub firebase_storage_bucket: String,
    /// FCM sender ID
    pub firebase_messaging_sender_id: String,
    /// Firebase app ID
    pub firebase_app_id: String,

    // --- Server ---
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,

    // --- Auth ---
    /// Identity provider selection
    pub auth_mode: AuthMode,
    /// Email domain accepted by sign-in/sign-up (no leading `@`)
    pub allowed_email_domain: String,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let auth_mode = match env::var("AUTH_MODE").as_deref() {
            Ok("mock") => AuthMode::Mock,
            Ok("firebase") | Err(_) => AuthMode::Firebase,
            Ok(other) => return Err(ConfigError::Invalid("AUTH_MODE", other.to_string())),
        };

        Ok(Self {
            firebase_api_key: env::var("FIREBASE_API_KEY")
                .unwrap_or_else(|_| "mock-api-key".to_string()),
            firebase_project_id: env::var("FIREBASE_PROJECT_ID")
                .unwrap_or_else(|_| "mock-project-id".to_string()),
            firebase_storage_bucket: env::var("FIREBASE_STORAGE_BUCKET")
                .unwrap_or_else(|_| "mock-storage-bucket".to_string()),
            firebase_messaging_sender_id: env::var("FIREBASE_MESSAGING_SENDER_ID")
                .unwrap_or_else(|_| "mock-sender-id".to_string()),
            firebase_app_id: env::var("FIREBASE_APP_ID")
                .unwrap_or_else(|_| "mock-app-id".to_string()),

            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),

            auth_mode,
            allowed_email_domain: env::var("ALLOWED_EMAIL_DOMAIN")
                .unwrap_or_else(|_| "gauntletai.com".to_string()),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            firebase_api_key: "mock-api-key".to_string(),
            firebase_project_id: "test-project".to_string(),
            firebase_storage_bucket: "mock-storage-bucket".to_string(),
            firebase_messaging_sender_id: "mock-sender-id".to_string(),
            firebase_app_id: "mock-app-id".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            auth_mode: AuthMode::Mock,
            allowed_email_domain: "gauntletai.com".to_string(),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
