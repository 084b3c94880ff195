//! Tests driving the full router, covering the bearer token gate in front of every protected
//! endpoint.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Duration;
use haven::{
    model::{
        api::{ErrorDto, HealthDto},
        auth::TokenDto,
    },
    server::{
        model::app::AppState,
        router::routes,
        util::token::{TokenIdentity, TokenService},
    },
};
use haven_test_utils::prelude::*;
use jsonwebtoken::Algorithm;
use tower::ServiceExt;

use crate::util::{json_body, TestContextExt};

fn app(state: AppState) -> Router {
    routes().with_state(state)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, token: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn identity() -> TokenIdentity {
    TokenIdentity {
        username: TEST_USERNAME.to_string(),
        user_id: Some(1),
        role: None,
    }
}

/// Expect health check to succeed without a token
#[tokio::test]
async fn health_is_public() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(get("/health", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthDto = json_body(resp).await;
    assert_eq!(health.status, "healthy");

    Ok(())
}

/// Expect health check to succeed with an invalid token as well
#[tokio::test]
async fn health_ignores_invalid_token() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(get("/health", Some("garbage")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect API metadata without a token
#[tokio::test]
async fn api_info_is_public() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(get("/api", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["status"], "running");

    Ok(())
}

/// Expect 401 with a bearer challenge on every protected route without a token
#[tokio::test]
async fn protected_routes_require_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.to_app_state();

    for uri in [
        "/api/auth/me",
        "/api/users",
        "/api/users/1",
        "/api/shelters",
        "/api/shelters/1",
        "/api/shelters/1/residents",
        "/api/shelters/1/events",
        "/api/shelters/1/alerts",
        "/api/shelters/1/research",
        "/api/residents",
        "/api/events",
        "/api/alerts",
        "/api/research",
        "/api/dashboard/stats",
    ] {
        let resp = app(state.clone()).oneshot(get(uri, None)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    Ok(())
}

/// Expect 200 on protected routes with a valid token
#[tokio::test]
async fn protected_routes_accept_valid_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME)
        .with_shelter("Riverside", 50)
        .build()
        .await?;
    let state = test.to_app_state();
    let token = state.tokens.issue(&identity()).unwrap();

    for uri in [
        "/api/auth/me",
        "/api/users",
        "/api/shelters",
        "/api/shelters/1",
        "/api/shelters/1/residents",
        "/api/residents",
        "/api/events",
        "/api/alerts",
        "/api/research",
        "/api/dashboard/stats",
    ] {
        let resp = app(state.clone())
            .oneshot(get(uri, Some(&token)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
    }

    Ok(())
}

/// Expect 401 for an expired token
#[tokio::test]
async fn rejects_expired_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.to_app_state();
    let token = state
        .tokens
        .issue_with_ttl(&identity(), Duration::minutes(-1))
        .unwrap();

    let resp = app(state)
        .oneshot(get("/api/shelters", Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for a token signed with another secret
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let foreign = TokenService::new("another-secret", Algorithm::HS256, Duration::minutes(30));
    let token = foreign.issue(&identity()).unwrap();

    let resp = app(test.to_app_state())
        .oneshot(get("/api/shelters", Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the token returned by login to open protected routes
#[tokio::test]
async fn login_token_opens_protected_routes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME)
        .build()
        .await?;
    let state = test.to_app_state();

    let login = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }).to_string(),
        ))
        .unwrap();
    let resp = app(state.clone()).oneshot(login).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let token: TokenDto = json_body(resp).await;

    let resp = app(state)
        .oneshot(get("/api/auth/me", Some(&token.access_token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["username"], TEST_USERNAME);

    Ok(())
}

/// Expect the OpenAPI document to be served without a token
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = json_body(resp).await;
    assert!(doc["paths"]["/api/shelters/{shelter_id}/residents"].is_object());

    Ok(())
}

/// Expect 400 with a JSON error body for a path ID that is not a number
#[tokio::test]
async fn rejects_unparsable_path_with_json_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.to_app_state();
    let token = state.tokens.issue(&identity()).unwrap();

    let resp = app(state)
        .oneshot(get("/api/shelters/abc", Some(&token)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let error: ErrorDto = json_body(resp).await;
    assert!(error.error.contains("abc"));

    Ok(())
}

/// Expect 422 with a JSON error body for a request body missing required fields
#[tokio::test]
async fn rejects_incomplete_body_with_json_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.to_app_state();
    let token = state.tokens.issue(&identity()).unwrap();

    let resp = app(state)
        .oneshot(post_json("/api/shelters", &token, r#"{"name":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorDto = json_body(resp).await;
    assert!(error.error.contains("location"));

    Ok(())
}

/// Expect 400 with a JSON error body for a body that is not valid JSON
#[tokio::test]
async fn rejects_invalid_json_with_json_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.to_app_state();
    let token = state.tokens.issue(&identity()).unwrap();

    let resp = app(state)
        .oneshot(post_json("/api/residents", &token, "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert!(!error.error.is_empty());

    Ok(())
}

/// Expect 415 with a JSON error body when the content type is not JSON
#[tokio::test]
async fn rejects_missing_json_content_type_with_json_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .body(Body::from("username=alice"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let error: ErrorDto = json_body(resp).await;
    assert!(!error.error.is_empty());

    Ok(())
}
