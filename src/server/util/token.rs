//! Signed access tokens.
//!
//! Tokens are stateless HMAC-signed JWTs: nothing is stored server-side, so a token stays
//! valid until it expires and cannot be revoked early.

use chrono::{Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::user::UserRole,
    server::{
        config::Config,
        error::{auth::TokenError, Error},
    },
};

/// Identity asserted by an access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenIdentity {
    /// Username from the `sub` claim
    pub username: String,
    pub user_id: Option<i32>,
    /// `None` when the token carries no role or a role this server does not know
    pub role: Option<UserRole>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    iat: i64,
    exp: i64,
}

/// Issues and validates access tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Creates a new instance of [`TokenService`]
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    /// - `algorithm` - One of `HS256`, `HS384` or `HS512`
    /// - `ttl` - Lifetime of tokens created with [`TokenService::issue`]
    pub fn new(secret: &str, algorithm: Algorithm, ttl: Duration) -> Self {
        Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.secret_key,
            config.jwt_algorithm,
            Duration::minutes(config.access_token_expire_minutes),
        )
    }

    /// Issues a token for `identity` valid for the configured lifetime.
    pub fn issue(&self, identity: &TokenIdentity) -> Result<String, Error> {
        self.issue_with_ttl(identity, self.ttl)
    }

    /// Issues a token for `identity` valid for `ttl`.
    ///
    /// A negative `ttl` yields a token that is already expired.
    pub fn issue_with_ttl(&self, identity: &TokenIdentity, ttl: Duration) -> Result<String, Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: Some(identity.username.clone()),
            id: identity.user_id,
            role: identity.role.map(|role| role.as_str().to_string()),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(self.algorithm),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Validates signature and expiry of `token` and returns the identity it asserts.
    ///
    /// # Returns
    /// - `Ok(TokenIdentity)` - Token is authentic and unexpired
    /// - `Err(TokenError::Expired)` - Token expiry is in the past
    /// - `Err(TokenError::InvalidSignature)` - Token was signed with another secret or algorithm
    /// - `Err(TokenError::MissingSubject)` - Token has no or an empty `sub` claim
    /// - `Err(TokenError::Malformed)` - Token could not be decoded at all
    pub fn validate(&self, token: &str) -> Result<TokenIdentity, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                _ => TokenError::Malformed,
            })?;

        let claims = data.claims;
        let username = claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or(TokenError::MissingSubject)?;

        Ok(TokenIdentity {
            username,
            user_id: claims.id,
            role: claims.role.as_deref().and_then(UserRole::parse),
        })
    }
}
