use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Data errors caused by the request rather than by the server.
#[derive(Error, Debug)]
pub enum DataError {
    /// The record addressed by the request path does not exist.
    #[error("{entity} ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// The record conflicts with an existing one (duplicate username).
    #[error("{0}")]
    Conflict(String),
    /// A foreign key in the request body points to a record that does not exist.
    #[error("{entity} ID {id} referenced by the request does not exist")]
    InvalidReference { entity: &'static str, id: i32 },
    /// A field value breaks an invariant of the record being created.
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::NotFound { entity, .. } => (StatusCode::NOT_FOUND, format!("{} not found", entity)),
            Self::Conflict(message) => (StatusCode::CONFLICT, message.clone()),
            Self::InvalidReference { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
