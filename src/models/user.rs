// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile and session identity models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Display fallbacks when a counterpart's profile document is missing
/// or incomplete.
pub const FALLBACK_DISPLAY_NAME: &str = "User";
pub const FALLBACK_TITLE: &str = "User at Gauntlet AI";

/// User profile document, keyed by the identity provider uid.
///
/// Written at sign-up; read by other services for counterpart resolution
/// and author snapshots. Read-only to everything except auth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Document ID (the provider uid), populated on reads.
    #[serde(alias = "_firestore_id", default, skip_serializing)]
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    /// Professional headline shown next to the name
    pub title: Option<String>,
}

impl UserProfile {
    pub fn display_name_or_fallback(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string())
    }

    pub fn title_or_fallback(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| FALLBACK_TITLE.to_string())
    }
}

/// Identity returned by the provider on a successful sign-in or sign-up.
///
/// Owned by the auth session manager; read-only to other components.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub email_verified: bool,
}
