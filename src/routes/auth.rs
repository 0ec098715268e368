// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session routes: sign-in, sign-up, sign-out, current user.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, AuthUser, SESSION_COOKIE};
use crate::models::SessionUser;
use crate::AppState;

/// Public session routes (no auth required).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signin", post(sign_in))
        .route("/auth/signup", post(sign_up))
        .route("/auth/signout", post(sign_out))
}

/// Session routes that require an authenticated user.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}

#[derive(Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Successful sign-in/sign-up response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    pub user: SessionUser,
    /// Bearer token, for clients that do not use the cookie
    pub token: String,
}

/// Current user response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MeResponse {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub title: Option<String>,
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path("/");
    cookie
}

/// Verify credentials and establish a session.
async fn sign_in(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = state.auth.sign_in(&req.email, &req.password).await?;

    let token = create_jwt(&user.uid, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    Ok((
        jar.add(session_cookie(token.clone())),
        Json(SessionResponse { user, token }),
    ))
}

/// Create an account and establish a session.
async fn sign_up(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<CredentialsRequest>,
) -> Result<(CookieJar, Json<SessionResponse>)> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let user = state.auth.sign_up(&req.email, &req.password).await?;

    let token = create_jwt(&user.uid, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    Ok((
        jar.add(session_cookie(token.clone())),
        Json(SessionResponse { user, token }),
    ))
}

/// Tear down the session.
async fn sign_out(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode)> {
    state.auth.sign_out().await?;
    Ok((jar.remove(removal_cookie()), StatusCode::NO_CONTENT))
}

/// Current user's profile.
async fn me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<MeResponse>> {
    let profile = state
        .db
        .get_user_profile(&user.uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.uid)))?;

    Ok(Json(MeResponse {
        uid: user.uid,
        email: profile.email,
        display_name: profile.display_name,
        photo_url: profile.photo_url,
        title: profile.title,
    }))
}
