// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile documents keyed by provider uid)
//! - Posts (feed documents with embedded like membership)
//! - Jobs (board documents with saved/applied membership)
//! - Conversations and Messages (direct messaging)

use crate::db::{collections, fields};
use crate::error::AppError;
use crate::models::{Conversation, Job, Message, Post, UserProfile};

// Firestore limits batch/transaction writes to 500 operations.
// We use a safe limit of 400 to allow headroom.
const BATCH_SIZE: usize = 400;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Profile Operations ─────────────────────────────────

    /// Get a user profile by provider uid.
    pub async fn get_user_profile(&self, uid: &str) -> Result<Option<UserProfile>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(uid)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a user profile document.
    pub async fn upsert_user_profile(
        &self,
        uid: &str,
        profile: &UserProfile,
    ) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(uid)
            .object(profile)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Post Operations ─────────────────────────────────────────

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::POSTS)
            .order_by([(
                fields::CREATED_AT,
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a post by document ID.
    pub async fn get_post(&self, post_id: &str) -> Result<Option<Post>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::POSTS)
            .obj()
            .one(post_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a post with a generated document ID.
    ///
    /// Returns the stored post with its `id` populated.
    pub async fn insert_post(&self, post: &Post) -> Result<Post, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::POSTS)
            .generate_document_id()
            .object(post)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Overwrite a post document.
    pub async fn update_post(&self, post_id: &str, post: &Post) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::POSTS)
            .document_id(post_id)
            .object(post)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Posts whose likedBy membership contains `uid`.
    pub async fn posts_liked_by(&self, uid: &str) -> Result<Vec<Post>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::POSTS)
            .filter(|q| q.field(fields::LIKED_BY).array_contains(uid))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Job Operations ──────────────────────────────────────────

    /// All jobs, newest first.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::JOBS)
            .order_by([(
                fields::POSTED_AT,
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a job by document ID.
    pub async fn get_job(&self, job_id: &str) -> Result<Option<Job>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::JOBS)
            .obj()
            .one(job_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a job with a generated document ID.
    pub async fn insert_job(&self, job: &Job) -> Result<Job, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::JOBS)
            .generate_document_id()
            .object(job)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Overwrite a job document.
    pub async fn update_job(&self, job_id: &str, job: &Job) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::JOBS)
            .document_id(job_id)
            .object(job)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Jobs whose savedBy membership contains `uid`.
    pub async fn jobs_saved_by(&self, uid: &str) -> Result<Vec<Job>, AppError> {
        self.membership_jobs(fields::SAVED_BY, uid).await
    }

    /// Jobs whose appliedBy membership contains `uid`.
    pub async fn jobs_applied_by(&self, uid: &str) -> Result<Vec<Job>, AppError> {
        self.membership_jobs(fields::APPLIED_BY, uid).await
    }

    async fn membership_jobs(&self, field: &str, uid: &str) -> Result<Vec<Job>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::JOBS)
            .filter(|q| q.field(field).array_contains(uid))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Conversation Operations ─────────────────────────────────

    /// Conversations `uid` participates in, most recently updated first.
    pub async fn conversations_for_user(&self, uid: &str) -> Result<Vec<Conversation>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::CONVERSATIONS)
            .filter(|q| q.field(fields::PARTICIPANTS).array_contains(uid))
            .order_by([(
                fields::UPDATED_AT,
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a conversation by document ID.
    pub async fn get_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Option<Conversation>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::CONVERSATIONS)
            .obj()
            .one(conversation_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a conversation with a generated document ID.
    pub async fn insert_conversation(
        &self,
        conversation: &Conversation,
    ) -> Result<Conversation, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::CONVERSATIONS)
            .generate_document_id()
            .object(conversation)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Overwrite a conversation document.
    pub async fn update_conversation(
        &self,
        conversation_id: &str,
        conversation: &Conversation,
    ) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::CONVERSATIONS)
            .document_id(conversation_id)
            .object(conversation)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Message Operations ──────────────────────────────────────

    /// All messages in a conversation, chronological.
    pub async fn messages_in_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<Message>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::MESSAGES)
            .filter(|q| q.field(fields::CONVERSATION_ID).eq(conversation_id))
            .order_by([(
                fields::CREATED_AT,
                firestore::FirestoreQueryDirection::Ascending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Unread messages in a conversation sent by `sender_id`.
    pub async fn unread_messages_from(
        &self,
        conversation_id: &str,
        sender_id: &str,
    ) -> Result<Vec<Message>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::MESSAGES)
            .filter(|q| {
                q.for_all([
                    q.field(fields::CONVERSATION_ID).eq(conversation_id),
                    q.field(fields::SENDER_ID).eq(sender_id),
                    q.field(fields::IS_READ).eq(false),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a message with a generated document ID.
    pub async fn insert_message(&self, message: &Message) -> Result<Message, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::MESSAGES)
            .generate_document_id()
            .object(message)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Mark the given messages as read in an atomic batch.
    ///
    /// All writes in a chunk commit together or not at all. Chunking only
    /// matters past the Firestore per-transaction write limit.
    pub async fn mark_messages_read(&self, messages: &[Message]) -> Result<(), AppError> {
        if messages.is_empty() {
            return Ok(());
        }

        let client = self.get_client()?;

        for chunk in messages.chunks(BATCH_SIZE) {
            let mut transaction = client
                .begin_transaction()
                .await
                .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

            for message in chunk {
                let updated = Message {
                    is_read: true,
                    ..message.clone()
                };

                client
                    .fluent()
                    .update()
                    .in_col(collections::MESSAGES)
                    .document_id(&message.id)
                    .object(&updated)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        AppError::Database(format!(
                            "Failed to add read-marking to transaction: {}",
                            e
                        ))
                    })?;
            }

            transaction
                .commit()
                .await
                .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;
        }

        tracing::debug!(count = messages.len(), "Marked messages read");

        Ok(())
    }
}
