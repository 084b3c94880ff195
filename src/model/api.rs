use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Liveness report returned by `GET /health`
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// Always `healthy` while the process can answer requests
    pub status: String,
    /// API version from configuration
    pub version: String,
}

/// Application metadata returned by `GET /api`
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiInfoDto {
    pub app: String,
    pub version: String,
    pub status: String,
}
