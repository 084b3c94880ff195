use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Requests rejected by an extractor before reaching a handler.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Body is not JSON, lacks a field or has a field of the wrong type.
    #[error(transparent)]
    Json(#[from] JsonRejection),
    /// A path segment cannot be parsed into the expected type.
    #[error(transparent)]
    Path(#[from] PathRejection),
}

/// Keeps axum's status (400, 415 or 422) and message but answers with an [`ErrorDto`] body.
impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Json(rejection) => (rejection.status(), rejection.body_text()),
            Self::Path(rejection) => (rejection.status(), rejection.body_text()),
        };

        tracing::debug!("Rejected request: {}", message);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
