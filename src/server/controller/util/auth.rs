use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    error::{
        auth::{AuthError, TokenError},
        Error,
    },
    model::app::AppState,
    util::token::TokenIdentity,
};

/// Identity of the caller recovered from a valid `Authorization: Bearer <token>` header.
///
/// Adding this extractor to a handler makes the endpoint require authentication; requests
/// without a valid token are rejected with 401 before the handler runs. The role is carried
/// along but no endpoint restricts access by it.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub TokenIdentity);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let identity = state.tokens.validate(token).map_err(AuthError::from)?;

        Ok(Self(identity))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Err(AuthError::MissingToken);
    };

    let value = header
        .to_str()
        .map_err(|_| AuthError::InvalidToken(TokenError::Malformed))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(AuthError::MissingToken),
    }
}
