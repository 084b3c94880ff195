use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{UserDto, UserRole};

/// Credentials submitted to `POST /api/auth/login`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// New account submitted to `POST /api/auth/register`
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Defaults to `volunteer` when omitted
    #[serde(default)]
    pub role: UserRole,
    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Successful login response
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    /// Signed access token to send as `Authorization: Bearer <token>`
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
    pub user: UserDto,
}
