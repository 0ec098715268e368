// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firebase Auth REST client (Identity Toolkit).
//!
//! Handles:
//! - Email/password sign-in
//! - Account creation
//! - Account lookup (verified-email flag, profile fields)
//!
//! Provider errors are surfaced verbatim as (code, message) pairs; this
//! client never retries.

use crate::error::AppError;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Firebase Auth REST API client.
#[derive(Clone)]
pub struct FirebaseAuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FirebaseAuthClient {
    /// Create a new client keyed by the project's web API key.
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Override the endpoint (Auth emulator, tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Verify an email/password pair, returning the provider identity.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, AppError> {
        let credentials = self
            .post_json::<CredentialResponse>(
                "accounts:signInWithPassword",
                &serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        self.lookup(&credentials).await
    }

    /// Create a new account, returning the provider identity.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<ProviderUser, AppError> {
        let credentials = self
            .post_json::<CredentialResponse>(
                "accounts:signUp",
                &serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        self.lookup(&credentials).await
    }

    /// Fetch the full account record for a fresh credential.
    ///
    /// The sign-in/sign-up responses omit `emailVerified` and profile
    /// fields; `accounts:lookup` is the authoritative read.
    async fn lookup(&self, credentials: &CredentialResponse) -> Result<ProviderUser, AppError> {
        let mut lookup = self
            .post_json::<LookupResponse>(
                "accounts:lookup",
                &serde_json::json!({ "idToken": credentials.id_token }),
            )
            .await?;

        lookup
            .users
            .pop()
            .ok_or_else(|| AppError::Auth {
                code: "USER_NOT_FOUND".to_string(),
                message: "Account lookup returned no users".to_string(),
            })
            .map(|record| ProviderUser {
                uid: record.local_id,
                email: record.email.unwrap_or_else(|| credentials.email.clone()),
                display_name: non_empty(record.display_name),
                photo_url: non_empty(record.photo_url),
                email_verified: record.email_verified,
            })
    }

    /// POST to an Identity Toolkit endpoint and parse the JSON response.
    async fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<T, AppError> {
        let url = format!("{}/{}?key={}", self.base_url, endpoint, self.api_key);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Auth {
                code: "auth/network-request-failed".to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(parse_provider_error(status, &body));
        }

        response.json().await.map_err(|e| AppError::Auth {
            code: "auth/invalid-response".to_string(),
            message: format!("JSON parse error: {}", e),
        })
    }
}

/// Identity returned by the provider after credential verification.
#[derive(Debug, Clone)]
pub struct ProviderUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub email_verified: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialResponse {
    #[serde(default)]
    email: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountRecord {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    photo_url: Option<String>,
    #[serde(default)]
    email_verified: bool,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Map an Identity Toolkit error body to (code, message), verbatim.
///
/// The provider packs the code into `error.message`, sometimes with a
/// trailing human-readable reason ("WEAK_PASSWORD : Password should be...").
fn parse_provider_error(status: reqwest::StatusCode, body: &str) -> AppError {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(parsed) => {
            let message = parsed.error.message;
            let code = message
                .split([' ', ':'])
                .next()
                .unwrap_or("auth/unknown")
                .to_string();
            AppError::Auth { code, message }
        }
        Err(_) => AppError::Auth {
            code: "auth/unknown".to_string(),
            message: format!("HTTP {}: {}", status, body),
        },
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_provider_error_bare_code() {
        let body = r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND"}}"#;
        let err = parse_provider_error(reqwest::StatusCode::BAD_REQUEST, body);
        match err {
            AppError::Auth { code, message } => {
                assert_eq!(code, "EMAIL_NOT_FOUND");
                assert_eq!(message, "EMAIL_NOT_FOUND");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_provider_error_with_reason() {
        let body = r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters"}}"#;
        let err = parse_provider_error(reqwest::StatusCode::BAD_REQUEST, body);
        match err {
            AppError::Auth { code, message } => {
                assert_eq!(code, "WEAK_PASSWORD");
                assert!(message.contains("at least 6 characters"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_provider_error_unparseable_body() {
        let err = parse_provider_error(reqwest::StatusCode::BAD_GATEWAY, "<html>");
        match err {
            AppError::Auth { code, message } => {
                assert_eq!(code, "auth/unknown");
                assert!(message.contains("502"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
