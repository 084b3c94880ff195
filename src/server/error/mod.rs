//! Error types for the Haven server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, data access). All errors implement `IntoResponse`
//! for Axum HTTP responses and use `thiserror` for ergonomic error definitions. Responses
//! always carry an [`ErrorDto`] with a human-readable message; internal details such as SQL
//! errors are logged, never returned.

pub mod auth;
pub mod config;
pub mod data;
pub mod request;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, data::DataError, request::RequestError,
    },
};

/// Main error type for the Haven server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Authentication errors (credentials, inactive accounts, bearer tokens)
/// - Data errors (missing records, conflicts, dangling references, invalid fields)
/// - Request errors (malformed JSON body or path parameter)
/// - External library errors (database, password hashing, token signing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (login failures, missing or invalid tokens).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Data error with a client facing cause (not found, conflict, invalid reference).
    #[error(transparent)]
    DataError(#[from] DataError),
    /// Malformed request body or path parameter.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing error (invalid work factor).
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// Access token signing error.
    #[error(transparent)]
    TokenEncodeError(#[from] jsonwebtoken::errors::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Inactive account, dangling reference, invalid field value, unparsable path
/// - 415/422 - Request body is not JSON or does not match the expected shape
/// - 401 Unauthorized - Bad credentials, missing or invalid bearer token
/// - 404 Not Found - Requested record does not exist
/// - 409 Conflict - Username already taken
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::DataError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::RequestError(rejection.into())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::RequestError(rejection.into())
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
