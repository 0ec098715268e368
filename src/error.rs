// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Only {0} email addresses are allowed")]
    InvalidEmailDomain(String),

    #[error("Auth provider error: {code}")]
    Auth { code: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Error code reported for the local domain-validation rejection.
    ///
    /// Sign-in/sign-up reject with this code before any remote call is made.
    pub const INVALID_EMAIL_DOMAIN_CODE: &'static str = "auth/invalid-email-domain";
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string(), None),
            AppError::InvalidEmailDomain(domain) => (
                StatusCode::BAD_REQUEST,
                AppError::INVALID_EMAIL_DOMAIN_CODE.to_string(),
                Some(format!("Only {domain} email addresses are allowed")),
            ),
            AppError::Auth { code, message } => (
                StatusCode::UNAUTHORIZED,
                code.clone(),
                Some(message.clone()),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "not_found".to_string(),
                Some(msg.clone()),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "bad_request".to_string(),
                Some(msg.clone()),
            ),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error".to_string(),
                    None,
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse { error, details };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
