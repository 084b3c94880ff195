use axum::{extract::State, http::StatusCode, response::IntoResponse};
use entity::sea_orm_active_enums::UserRole;
use haven::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterUserDto, TokenDto},
        user::UserDto,
    },
    server::controller::auth::{get_current_user, login, register},
};

use super::*;

fn credentials(username: &str, password: &str) -> LoginDto {
    LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn registration(username: &str) -> RegisterUserDto {
    RegisterUserDto {
        username: username.to_string(),
        email: None,
        full_name: None,
        role: Default::default(),
        password: "registered-password".to_string(),
    }
}

/// Expect 200 with a bearer token that validates to the user
#[tokio::test]
async fn login_returns_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME)
        .build()
        .await?;
    let state = test.to_app_state();

    let result = login(
        State(state.clone()),
        ApiJson(credentials(TEST_USERNAME, TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let token: TokenDto = json_body(resp).await;
    assert_eq!(token.token_type, "bearer");
    assert_eq!(
        state.tokens.validate(&token.access_token).unwrap().username,
        TEST_USERNAME
    );

    Ok(())
}

/// Expect 401 for a wrong password
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME)
        .build()
        .await?;

    let result = login(
        State(test.to_app_state()),
        ApiJson(credentials(TEST_USERNAME, "wrong-password")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Invalid credentials");

    Ok(())
}

/// Expect 400 and no token for a deactivated account
#[tokio::test]
async fn login_rejects_inactive_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user_as(TEST_USERNAME, UserRole::Volunteer, false)
        .build()
        .await?;

    let result = login(
        State(test.to_app_state()),
        ApiJson(credentials(TEST_USERNAME, TEST_PASSWORD)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Inactive user");

    Ok(())
}

/// Expect 500 internal server error when required database tables don't exist
#[tokio::test]
async fn login_fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(test.to_app_state()),
        ApiJson(credentials(TEST_USERNAME, TEST_PASSWORD)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Internal server error");

    Ok(())
}

/// Expect 200 without any password field in the body
#[tokio::test]
async fn register_returns_user_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = register(State(test.to_app_state()), ApiJson(registration("bob"))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["username"], "bob");
    assert_eq!(body["role"], "volunteer");
    assert!(body.get("password").is_none());
    assert!(body.get("hashed_password").is_none());

    Ok(())
}

/// Expect 409 when registering a username twice
#[tokio::test]
async fn register_rejects_duplicate_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.to_app_state();

    let first = register(State(state.clone()), ApiJson(registration("bob"))).await;
    let second = register(State(state), ApiJson(registration("bob"))).await;

    assert_eq!(first.into_response().status(), StatusCode::OK);
    let resp = second.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "User already exists");

    Ok(())
}

/// Expect 200 with the user named by the token
#[tokio::test]
async fn me_returns_token_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME)
        .build()
        .await?;

    let result = get_current_user(State(test.to_app_state()), authenticated(TEST_USERNAME)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.username, TEST_USERNAME);

    Ok(())
}

/// Expect 401 when the token names a user that no longer exists
#[tokio::test]
async fn me_rejects_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_current_user(State(test.to_app_state()), authenticated("ghost")).await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
