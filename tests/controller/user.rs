use axum::{extract::State, http::StatusCode, response::IntoResponse};
use haven::{
    model::user::UserDto,
    server::controller::user::{get_user, get_users},
};

use super::*;

/// Expect 200 with every user
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME)
        .with_user("bob")
        .build()
        .await?;

    let result = get_users(State(test.to_app_state()), authenticated(TEST_USERNAME)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<UserDto> = json_body(resp).await;
    assert_eq!(users.len(), 2);

    Ok(())
}

/// Expect 200 with the requested user
#[tokio::test]
async fn returns_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user_model = test.user().insert_user(TEST_USERNAME).await?;

    let result = get_user(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiPath(user_model.id),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.id, user_model.id);

    Ok(())
}

/// Expect 404 not found for user that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let nonexistent_user_id = 1;
    let result = get_user(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiPath(nonexistent_user_id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
