use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::auth::LoginDto,
    server::error::{auth::AuthError, Error},
};

use super::*;

fn credentials(username: &str, password: &str) -> LoginDto {
    LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Expect a bearer token asserting the user's identity for valid credentials
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user_as(TEST_USERNAME, UserRole::Director, true)
        .build()
        .await?;
    let state = test_state(&test);

    let auth_service = AuthService::new(&state.db, &state.tokens, &state.hasher);
    let result = auth_service
        .login(credentials(TEST_USERNAME, TEST_PASSWORD))
        .await;

    assert!(result.is_ok());
    let token = result.unwrap();
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.user.username, TEST_USERNAME);

    let identity = state.tokens.validate(&token.access_token).unwrap();
    assert_eq!(identity.username, TEST_USERNAME);
    assert_eq!(identity.user_id, Some(token.user.id));
    assert_eq!(identity.role, Some(crate::model::user::UserRole::Director));

    Ok(())
}

/// Expect InvalidCredentials for a wrong password
#[tokio::test]
async fn fails_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME)
        .build()
        .await?;
    let state = test_state(&test);

    let auth_service = AuthService::new(&state.db, &state.tokens, &state.hasher);
    let result = auth_service
        .login(credentials(TEST_USERNAME, "wrong-password"))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expect InvalidCredentials for an unknown username
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test_state(&test);

    let auth_service = AuthService::new(&state.db, &state.tokens, &state.hasher);
    let result = auth_service
        .login(credentials("mallory", TEST_PASSWORD))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expect InactiveAccount and no token for a deactivated account with valid credentials
#[tokio::test]
async fn fails_for_inactive_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user_as(TEST_USERNAME, UserRole::Volunteer, false)
        .build()
        .await?;
    let state = test_state(&test);

    let auth_service = AuthService::new(&state.db, &state.tokens, &state.hasher);
    let result = auth_service
        .login(credentials(TEST_USERNAME, TEST_PASSWORD))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InactiveAccount(_)))
    ));

    Ok(())
}

/// Expect Error when required tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test_state(&test);

    let auth_service = AuthService::new(&state.db, &state.tokens, &state.hasher);
    let result = auth_service
        .login(credentials(TEST_USERNAME, TEST_PASSWORD))
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
