// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Jobs board routes.

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
use crate::models::JobView;
use crate::services::NewJob;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/jobs", get(list_jobs).post(create_job))
        .route("/api/jobs/saved", get(saved_jobs))
        .route("/api/jobs/applied", get(applied_jobs))
        .route("/api/jobs/{id}/save", post(toggle_save))
        .route("/api/jobs/{id}/apply", post(apply))
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub company: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    /// Full-time / Part-time / Contract / Internship
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub job_type: String,
    #[validate(length(max = 100))]
    pub salary: String,
    #[validate(length(min = 1, max = 10000))]
    pub description: String,
    pub skills: Vec<String>,
}

/// Save-toggle result.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ToggleSaveResponse {
    pub saved: bool,
}

/// Application result; `applied` is false when the user had already applied.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ApplyResponse {
    pub applied: bool,
}

/// Full jobs board, newest first.
async fn list_jobs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<JobView>>> {
    let jobs = state.jobs.list_jobs().await?;
    Ok(Json(jobs))
}

/// Seed a new job posting.
async fn create_job(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateJobRequest>,
) -> Result<Json<JobView>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let job = state
        .jobs
        .create_job(NewJob {
            title: req.title,
            company: req.company,
            location: req.location,
            job_type: req.job_type,
            salary: req.salary,
            description: req.description,
            skills: req.skills,
        })
        .await?;

    Ok(Json(job))
}

/// Flip the session user's save on a job.
async fn toggle_save(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(job_id): Path<String>,
) -> Result<Json<ToggleSaveResponse>> {
    let saved = state.jobs.toggle_save(&job_id, &user.uid).await?;
    Ok(Json(ToggleSaveResponse { saved }))
}

/// Apply for a job; idempotent.
async fn apply(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(job_id): Path<String>,
) -> Result<Json<ApplyResponse>> {
    let applied = state.jobs.apply(&job_id, &user.uid).await?;
    Ok(Json(ApplyResponse { applied }))
}

/// IDs of jobs the session user has saved.
async fn saved_jobs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<String>>> {
    let ids = state.jobs.saved_job_ids(&user.uid).await?;
    Ok(Json(ids))
}

/// IDs of jobs the session user has applied to.
async fn applied_jobs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<String>>> {
    let ids = state.jobs.applied_job_ids(&user.uid).await?;
    Ok(Json(ids))
}
