use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// JSON request body whose rejection is answered with an `ErrorDto` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// Path parameters whose rejection is answered with an `ErrorDto` body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);
