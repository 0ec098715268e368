// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn authed_json_request(uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_create_post_rejects_empty_content() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_json_request(
            "/api/posts",
            &token,
            serde_json::json!({"content": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_post_rejects_oversized_content() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let long_content = "a".repeat(3001);

    let response = app
        .oneshot(authed_json_request(
            "/api/posts",
            &token,
            serde_json::json!({"content": long_content}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_message_rejects_empty_text() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_json_request(
            "/api/messages",
            &token,
            serde_json::json!({"receiverId": "u2", "text": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_message_rejects_missing_receiver() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_json_request(
            "/api/messages",
            &token,
            serde_json::json!({"text": "hello"}),
        ))
        .await
        .unwrap();

    // Missing field fails JSON deserialization before the handler runs
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_job_rejects_blank_title() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("u1", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed_json_request(
            "/api/jobs",
            &token,
            serde_json::json!({
                "title": "",
                "company": "Gauntlet AI",
                "location": "Remote",
                "type": "Full-time",
                "salary": "$150k",
                "description": "Build things",
                "skills": ["Rust"],
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
