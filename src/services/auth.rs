// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth session manager.
//!
//! Sign-in/sign-up validate the email domain locally before any remote call,
//! then delegate to the configured identity provider. The provider is picked
//! once at startup; the mock provider serves a static identity with a fixed
//! simulated latency for offline development.

use crate::config::{AuthMode, Config};
use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{SessionUser, UserProfile};
use crate::services::identity::{FirebaseAuthClient, ProviderUser};
use std::time::Duration;

/// Fixed latency applied to every mock-provider operation.
const MOCK_LATENCY: Duration = Duration::from_millis(500);

const MOCK_UID: &str = "mock-user-id";
const MOCK_EMAIL: &str = "test@gauntletai.com";
const MOCK_DISPLAY_NAME: &str = "Test User";

enum ProviderMode {
    Firebase(FirebaseAuthClient),
    Mock,
}

/// Session manager over the configured identity provider.
pub struct AuthService {
    mode: ProviderMode,
    allowed_email_domain: String,
    db: FirestoreDb,
}

impl AuthService {
    /// Select the provider from configuration, once.
    pub fn new(config: &Config, db: FirestoreDb) -> Self {
        let mode = match config.auth_mode {
            AuthMode::Firebase => {
                ProviderMode::Firebase(FirebaseAuthClient::new(config.firebase_api_key.clone()))
            }
            AuthMode::Mock => {
                tracing::warn!("Using mock identity provider; no credentials are checked");
                ProviderMode::Mock
            }
        };

        Self {
            mode,
            allowed_email_domain: config.allowed_email_domain.clone(),
            db,
        }
    }

    /// Reject emails outside the organizational domain.
    ///
    /// This check runs before any remote call and is never retried.
    pub fn validate_email_domain(&self, email: &str) -> Result<(), AppError> {
        let suffix = format!("@{}", self.allowed_email_domain);
        if email.ends_with(&suffix) {
            Ok(())
        } else {
            Err(AppError::InvalidEmailDomain(
                self.allowed_email_domain.clone(),
            ))
        }
    }

    /// Verify credentials and return the session identity.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AppError> {
        self.validate_email_domain(email)?;

        match &self.mode {
            ProviderMode::Firebase(client) => {
                let user = client.sign_in_with_password(email, password).await?;
                tracing::info!(uid = %user.uid, "Sign-in successful");
                Ok(session_user(user))
            }
            ProviderMode::Mock => {
                tokio::time::sleep(MOCK_LATENCY).await;
                Ok(mock_user())
            }
        }
    }

    /// Create an account, seed its profile document, and return the session
    /// identity.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SessionUser, AppError> {
        self.validate_email_domain(email)?;

        let user = match &self.mode {
            ProviderMode::Firebase(client) => {
                let user = client.sign_up(email, password).await?;
                tracing::info!(uid = %user.uid, "Account created");
                session_user(user)
            }
            ProviderMode::Mock => {
                tokio::time::sleep(MOCK_LATENCY).await;
                mock_user()
            }
        };

        // Profile seeding is best-effort: counterpart resolution has display
        // fallbacks, so a failed write must not fail the sign-up.
        let profile = UserProfile {
            uid: user.uid.clone(),
            email: Some(user.email.clone()),
            display_name: user.display_name.clone(),
            photo_url: user.photo_url.clone(),
            title: None,
        };
        if let Err(e) = self.db.upsert_user_profile(&user.uid, &profile).await {
            tracing::warn!(error = %e, uid = %user.uid, "Failed to seed user profile");
        }

        Ok(user)
    }

    /// End the session. The provider holds no server-side session state;
    /// the HTTP layer clears the session cookie.
    pub async fn sign_out(&self) -> Result<(), AppError> {
        if let ProviderMode::Mock = self.mode {
            tokio::time::sleep(MOCK_LATENCY).await;
        }
        Ok(())
    }
}

fn session_user(user: ProviderUser) -> SessionUser {
    SessionUser {
        uid: user.uid,
        email: user.email,
        display_name: user.display_name,
        photo_url: user.photo_url,
        email_verified: user.email_verified,
    }
}

/// Static development identity served by the mock provider.
fn mock_user() -> SessionUser {
    SessionUser {
        uid: MOCK_UID.to_string(),
        email: MOCK_EMAIL.to_string(),
        display_name: Some(MOCK_DISPLAY_NAME.to_string()),
        photo_url: None,
        email_verified: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_auth() -> AuthService {
        AuthService::new(&Config::test_default(), FirestoreDb::new_mock())
    }

    #[test]
    fn domain_validation_accepts_org_emails() {
        let auth = mock_auth();
        assert!(auth.validate_email_domain("alice@gauntletai.com").is_ok());
    }

    #[test]
    fn domain_validation_rejects_other_domains() {
        let auth = mock_auth();

        for email in [
            "alice@example.com",
            "alice@gauntletai.org",
            "alice@gauntletai.com.evil.com",
            "",
        ] {
            match auth.validate_email_domain(email) {
                Err(AppError::InvalidEmailDomain(domain)) => {
                    assert_eq!(domain, "gauntletai.com");
                }
                other => panic!("expected domain rejection for {email:?}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn mock_sign_in_returns_static_identity() {
        let auth = mock_auth();
        let user = auth.sign_in("test@gauntletai.com", "password").await.unwrap();

        assert_eq!(user.uid, "mock-user-id");
        assert_eq!(user.email, "test@gauntletai.com");
        assert!(user.email_verified);
    }

    #[tokio::test]
    async fn sign_in_rejects_bad_domain_before_any_remote_call() {
        // The mock db errors on any operation and the mock provider needs no
        // network; a domain rejection must short-circuit before either.
        let auth = mock_auth();
        let result = auth.sign_in("test@other.com", "password").await;
        assert!(matches!(result, Err(AppError::InvalidEmailDomain(_))));
    }
}
