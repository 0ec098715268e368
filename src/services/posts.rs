// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Feed post operations.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{Post, PostAuthor, PostView};

/// Post data access service.
#[derive(Clone)]
pub struct PostsService {
    db: FirestoreDb,
}

impl PostsService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// All posts, newest first. No pagination; the feed is the full
    /// collection. Store errors propagate to the caller, no retry.
    pub async fn list_posts(&self) -> Result<Vec<PostView>, AppError> {
        let now = chrono::Utc::now();
        let posts = self.db.list_posts().await?;

        Ok(posts
            .into_iter()
            .map(|post| PostView::from_post(post, now))
            .collect())
    }

    /// Create a post with zero counters and an empty like set.
    ///
    /// The returned view carries a "Just now" label; the stored timestamp is
    /// not re-read before returning.
    pub async fn create_post(
        &self,
        author: PostAuthor,
        content: String,
    ) -> Result<PostView, AppError> {
        let post = Post {
            id: String::new(),
            author_id: author.id,
            author_name: author.name,
            author_title: author.title,
            author_avatar: author.avatar,
            content,
            created_at: chrono::Utc::now().to_rfc3339(),
            like_count: 0,
            comment_count: 0,
            liked_by: Vec::new(),
        };

        let created = self.db.insert_post(&post).await?;

        tracing::info!(post_id = %created.id, author_id = %created.author_id, "Post created");

        Ok(PostView::just_created(created))
    }

    /// Flip `uid`'s membership in the post's like set and adjust the counter.
    ///
    /// Read-then-write with no transaction: two sessions toggling the same
    /// post concurrently can each observe the same membership state and
    /// produce a lost update. Returns the new liked state.
    pub async fn toggle_like(&self, post_id: &str, uid: &str) -> Result<bool, AppError> {
        let mut post = self
            .db
            .get_post(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

        let was_liked = post.is_liked_by(uid);

        if was_liked {
            post.liked_by.retain(|id| id != uid);
            post.like_count = post.like_count.saturating_sub(1);
        } else {
            post.liked_by.push(uid.to_string());
            post.like_count += 1;
        }

        self.db.update_post(post_id, &post).await?;

        Ok(!was_liked)
    }

    /// IDs of posts `uid` has liked.
    pub async fn liked_post_ids(&self, uid: &str) -> Result<Vec<String>, AppError> {
        let posts = self.db.posts_liked_by(uid).await?;
        Ok(posts.into_iter().map(|post| post.id).collect())
    }
}
