use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterUserDto, TokenDto},
        user::UserDto,
    },
    server::{
        controller::util::{auth::AuthenticatedUser, extract::ApiJson},
        error::Error,
        model::app::AppState,
        service::{auth::AuthService, user::UserService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Exchange username & password for an access token
///
/// # Responses
/// - 200 (Success): Token to send as `Authorization: Bearer <token>` along with the user
/// - 400 (Bad Request): Credentials are valid but the account is inactive
/// - 401 (Unauthorized): Unknown username or wrong password
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successful login", body = TokenDto),
        (status = 400, description = "Inactive user", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.tokens, &state.hasher);

    let token = auth_service.login(credentials).await?;

    Ok((StatusCode::OK, Json(token)))
}

/// Register a new staff account
///
/// # Responses
/// - 200 (Success): The created user, without password
/// - 409 (Conflict): Username is already taken
/// - 500 (Internal Server Error): A database or password hashing error occurred
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered", body = UserDto),
        (status = 409, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(registration): ApiJson<RegisterUserDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.tokens, &state.hasher);

    let user = auth_service.register(registration).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Get the user the access token was issued to
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 400, description = "Inactive user", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_current(&identity).await?;

    Ok((StatusCode::OK, Json(user)))
}
