// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Jobs board operations.

use crate::db::FirestoreDb;
use crate::error::AppError;
use crate::models::{Job, JobView};

/// Fields accepted when seeding a new job posting.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// Jobs data access service.
#[derive(Clone)]
pub struct JobsService {
    db: FirestoreDb,
}

impl JobsService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// All jobs, newest first by posting date.
    pub async fn list_jobs(&self) -> Result<Vec<JobView>, AppError> {
        let now = chrono::Utc::now();
        let jobs = self.db.list_jobs().await?;

        Ok(jobs
            .into_iter()
            .map(|job| JobView::from_job(job, now))
            .collect())
    }

    /// Seed a new job posting with empty membership sets.
    pub async fn create_job(&self, new_job: NewJob) -> Result<JobView, AppError> {
        let job = Job {
            id: String::new(),
            title: new_job.title,
            company: new_job.company,
            location: new_job.location,
            job_type: new_job.job_type,
            salary: new_job.salary,
            posted_at: chrono::Utc::now().to_rfc3339(),
            description: new_job.description,
            skills: new_job.skills,
            saved_by: Vec::new(),
            applied_by: Vec::new(),
        };

        let created = self.db.insert_job(&job).await?;

        tracing::info!(job_id = %created.id, title = %created.title, "Job created");

        Ok(JobView::from_job(created, chrono::Utc::now()))
    }

    /// Flip `uid`'s membership in the job's saved set.
    ///
    /// Same unguarded read-then-write as post likes. Returns the new saved
    /// state.
    pub async fn toggle_save(&self, job_id: &str, uid: &str) -> Result<bool, AppError> {
        let mut job = self
            .db
            .get_job(job_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

        let was_saved = job.is_saved_by(uid);

        if was_saved {
            job.saved_by.retain(|id| id != uid);
        } else {
            job.saved_by.push(uid.to_string());
        }

        self.db.update_job(job_id, &job).await?;

        Ok(!was_saved)
    }

    /// Add `uid` to the job's applied set.
    ///
    /// Monotonic: never removes. Returns false when the user already
    /// applied, which is not an error.
    pub async fn apply(&self, job_id: &str, uid: &str) -> Result<bool, AppError> {
        let mut job = self
            .db
            .get_job(job_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

        if job.is_applied_by(uid) {
            return Ok(false);
        }

        job.applied_by.push(uid.to_string());
        self.db.update_job(job_id, &job).await?;

        tracing::info!(job_id = %job_id, uid = %uid, "Job application recorded");

        Ok(true)
    }

    /// IDs of jobs `uid` has saved.
    pub async fn saved_job_ids(&self, uid: &str) -> Result<Vec<String>, AppError> {
        let jobs = self.db.jobs_saved_by(uid).await?;
        Ok(jobs.into_iter().map(|job| job.id).collect())
    }

    /// IDs of jobs `uid` has applied to.
    pub async fn applied_job_ids(&self, uid: &str) -> Result<Vec<String>, AppError> {
        let jobs = self.db.jobs_applied_by(uid).await?;
        Ok(jobs.into_iter().map(|job| job.id).collect())
    }
}
