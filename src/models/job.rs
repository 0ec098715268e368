// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job posting model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::time_utils;

/// Stored job posting document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Document ID, populated on reads.
    #[serde(alias = "_firestore_id", default, skip_serializing)]
    pub id: String,
    /// Role title
    pub title: String,
    /// Hiring company
    pub company: String,
    /// Location (free text, may be "Remote")
    pub location: String,
    /// Employment type: Full-time / Part-time / Contract / Internship
    #[serde(rename = "type")]
    pub job_type: String,
    /// Salary range display string
    pub salary: String,
    /// When the job was posted (RFC3339)
    pub posted_at: String,
    /// Role description
    pub description: String,
    /// Required skills, in display order
    pub skills: Vec<String>,
    /// Users who saved this job
    #[serde(default)]
    pub saved_by: Vec<String>,
    /// Users who applied; a uid appears at most once
    #[serde(default)]
    pub applied_by: Vec<String>,
}

impl Job {
    pub fn is_saved_by(&self, uid: &str) -> bool {
        self.saved_by.iter().any(|id| id == uid)
    }

    pub fn is_applied_by(&self, uid: &str) -> bool {
        self.applied_by.iter().any(|id| id == uid)
    }
}

/// Job posting as served to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JobView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub posted_string: String,
    pub description: String,
    pub skills: Vec<String>,
    pub saved_by: Vec<String>,
    pub applied_by: Vec<String>,
}

impl JobView {
    pub fn from_job(job: Job, now: chrono::DateTime<chrono::Utc>) -> Self {
        let posted_string = time_utils::relative_label_rfc3339(&job.posted_at, now);
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            job_type: job.job_type,
            salary: job.salary,
            posted_string,
            description: job.description,
            skills: job.skills,
            saved_by: job.saved_by,
            applied_by: job.applied_by,
        }
    }
}
