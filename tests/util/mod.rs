//! Test utilities for building application state around a test database

use std::sync::Arc;

use axum::{body::to_bytes, response::Response};
use haven::server::{
    config::Config,
    controller::util::auth::AuthenticatedUser,
    model::app::AppState,
    util::token::TokenIdentity,
};
use haven_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create AppState
pub trait TestContextExt {
    fn to_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn to_app_state(&self) -> AppState {
        let config = Config {
            secret_key: "integration-test-secret".to_string(),
            bcrypt_cost: 4,
            ..Default::default()
        };

        AppState::new(self.db.clone(), Arc::new(config))
    }
}

/// Caller identity as the bearer extractor would produce it for `username`
pub fn authenticated(username: &str) -> AuthenticatedUser {
    AuthenticatedUser(TokenIdentity {
        username: username.to_string(),
        user_id: None,
        role: None,
    })
}

/// Deserializes a JSON response body
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
