// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feed routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::user::{FALLBACK_DISPLAY_NAME, FALLBACK_TITLE};
use crate::models::{PostAuthor, PostView};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/liked", get(liked_posts))
        .route("/api/posts/{id}/like", post(toggle_like))
}

#[derive(Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 3000, message = "content length out of range"))]
    pub content: String,
}

/// Like-toggle result.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ToggleLikeResponse {
    pub liked: bool,
}

/// Full feed, newest first.
async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<PostView>>> {
    let posts = state.posts.list_posts().await?;
    Ok(Json(posts))
}

/// Create a post authored by the session user.
///
/// Author fields are snapshotted from the user's profile document with the
/// same fallbacks the conversation list uses.
async fn create_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<PostView>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let author = match state.db.get_user_profile(&user.uid).await? {
        Some(profile) => PostAuthor {
            id: user.uid.clone(),
            name: profile.display_name_or_fallback(),
            title: profile.title_or_fallback(),
            avatar: profile.photo_url,
        },
        None => PostAuthor {
            id: user.uid.clone(),
            name: FALLBACK_DISPLAY_NAME.to_string(),
            title: FALLBACK_TITLE.to_string(),
            avatar: None,
        },
    };

    let post = state.posts.create_post(author, req.content).await?;
    Ok(Json(post))
}

/// Flip the session user's like on a post.
async fn toggle_like(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(post_id): Path<String>,
) -> Result<Json<ToggleLikeResponse>> {
    let liked = state.posts.toggle_like(&post_id, &user.uid).await?;
    Ok(Json(ToggleLikeResponse { liked }))
}

/// IDs of posts the session user has liked.
async fn liked_posts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<String>>> {
    let ids = state.posts.liked_post_ids(&user.uid).await?;
    Ok(Json(ids))
}
