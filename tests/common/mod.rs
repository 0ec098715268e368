// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use gauntlet_connect::config::Config;
use gauntlet_connect::db::FirestoreDb;
use gauntlet_connect::routes::create_router;
use gauntlet_connect::services::{AuthService, JobsService, MessagingService, PostsService};
use gauntlet_connect::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_db(test_db_offline())
}

/// Create a test app over a specific database handle (emulator or offline).
#[allow(dead_code)]
pub fn create_test_app_with_db(db: FirestoreDb) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();

    let auth = AuthService::new(&config, db.clone());
    let posts = PostsService::new(db.clone());
    let jobs = JobsService::new(db.clone());
    let messaging = MessagingService::new(db.clone());

    let state = Arc::new(AppState {
        config,
        db,
        auth,
        posts,
        jobs,
        messaging,
    });

    (create_router(state.clone()), state)
}

/// Create a test JWT for the given uid with the app's signing key.
#[allow(dead_code)]
pub fn create_test_jwt(uid: &str, signing_key: &[u8]) -> String {
    gauntlet_connect::middleware::auth::create_jwt(uid, signing_key).expect("JWT creation failed")
}

/// Generate a unique user id for test isolation.
#[allow(dead_code)]
pub fn unique_uid(prefix: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}")
}
