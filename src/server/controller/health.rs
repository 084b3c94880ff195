use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ApiInfoDto, HealthDto},
    server::model::app::AppState,
};

pub static HEALTH_TAG: &str = "health";

/// Liveness check, available without authentication
///
/// Does not touch the database: a healthy response only means the process is serving requests.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
            version: state.config.api_version.clone(),
        }),
    )
}

/// Application name and version, available without authentication
#[utoipa::path(
    get,
    path = "/api",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API metadata", body = ApiInfoDto)
    ),
)]
pub async fn api_info(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiInfoDto {
            app: state.config.app_name.clone(),
            version: state.config.api_version.clone(),
            status: "running".to_string(),
        }),
    )
}
