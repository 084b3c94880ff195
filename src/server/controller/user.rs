use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        controller::util::{auth::AuthenticatedUser, extract::ApiPath},
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List all staff users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    _: AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a staff user by ID
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}
