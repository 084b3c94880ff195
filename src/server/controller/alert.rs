use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        alert::{CreateRiskAlertDto, RiskAlertDto},
        api::ErrorDto,
    },
    server::{
        controller::util::{auth::AuthenticatedUser, extract::ApiJson},
        error::Error,
        model::app::AppState,
        service::alert::AlertService,
    },
};

pub static ALERT_TAG: &str = "alert";

/// List all risk alerts
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = ALERT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All alerts", body = Vec<RiskAlertDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    _: AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let alerts = AlertService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(alerts)))
}

/// Raise a risk alert
///
/// An alert created as already resolved is stamped with its creation time as resolution time.
#[utoipa::path(
    post,
    path = "/api/alerts",
    tag = ALERT_TAG,
    security(("bearer" = [])),
    request_body = CreateRiskAlertDto,
    responses(
        (status = 200, description = "Risk alert raised", body = RiskAlertDto),
        (status = 400, description = "Unknown shelter or creator", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_alert(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiJson(alert): ApiJson<CreateRiskAlertDto>,
) -> Result<impl IntoResponse, Error> {
    let alert = AlertService::new(&state.db).create(alert).await?;

    Ok((StatusCode::OK, Json(alert)))
}
