use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{
        controller::util::auth::AuthenticatedUser, error::Error, model::app::AppState,
        service::dashboard::DashboardService,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Get network-wide resident, shelter, alert and event figures
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    _: AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let stats = DashboardService::new(&state.db).get_stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}
