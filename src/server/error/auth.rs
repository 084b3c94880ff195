use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons an access token was rejected by the token service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Access token is malformed")]
    Malformed,
    #[error("Access token signature is invalid")]
    InvalidSignature,
    #[error("Access token has expired")]
    Expired,
    #[error("Access token does not carry a subject claim")]
    MissingSubject,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request did not provide a bearer token")]
    MissingToken,
    #[error(transparent)]
    InvalidToken(#[from] TokenError),
    #[error("Invalid username or password for login attempt")]
    InvalidCredentials,
    #[error("Login attempt for inactive user {0:?}")]
    InactiveAccount(String),
    #[error("Valid token for user {0:?} who no longer exists")]
    UnknownUser(String),
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => Self::unauthorized("Not authenticated"),
            Self::InvalidToken(TokenError::Expired) => Self::unauthorized("Token has expired"),
            Self::InvalidToken(_) | Self::UnknownUser(_) => {
                Self::unauthorized("Could not validate credentials")
            }
            Self::InvalidCredentials => Self::unauthorized("Invalid credentials"),
            Self::InactiveAccount(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Inactive user".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
