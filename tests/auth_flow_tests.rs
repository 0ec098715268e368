// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session flow tests against the mock identity provider.
//!
//! The mock provider never touches the network and the offline mock DB
//! errors on any operation, so these tests also pin the property that
//! domain validation rejects before any remote call is attempted.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

mod common;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_sign_in_rejects_wrong_domain_locally() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "/auth/signin",
            serde_json::json!({"email": "alice@example.com", "password": "hunter22"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "auth/invalid-email-domain");
    assert_eq!(
        body["details"],
        "Only gauntletai.com email addresses are allowed"
    );
}

#[tokio::test]
async fn test_sign_up_rejects_wrong_domain_locally() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "/auth/signup",
            serde_json::json!({"email": "bob@gmail.com", "password": "hunter22"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "auth/invalid-email-domain");
}

#[tokio::test]
async fn test_sign_in_mock_sets_session_cookie() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "/auth/signin",
            serde_json::json!({"email": "test@gauntletai.com", "password": "password"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("missing Set-Cookie header")
        .to_string();
    assert!(set_cookie.starts_with("connect_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("SameSite=Lax"));

    let body = body_json(response).await;
    assert_eq!(body["user"]["uid"], "mock-user-id");
    assert_eq!(body["user"]["email"], "test@gauntletai.com");
    assert_eq!(body["user"]["emailVerified"], true);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_session_token_from_sign_in_opens_protected_routes() {
    let (app, _) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "/auth/signin",
            serde_json::json!({"email": "test@gauntletai.com", "password": "password"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/posts")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sign_out_clears_session_cookie() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/signout")
                .header(header::COOKIE, "connect_session=whatever")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("missing Set-Cookie header");
    assert!(set_cookie.starts_with("connect_session="));
    assert!(set_cookie.contains("Max-Age=0"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_sign_in_requires_email_and_password() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "/auth/signin",
            serde_json::json!({"email": "", "password": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_me_requires_session() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
