use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        resident::{CreateResidentDto, ResidentDto},
    },
    server::{
        controller::util::{auth::AuthenticatedUser, extract::ApiJson},
        error::Error,
        model::app::AppState,
        service::resident::ResidentService,
    },
};

pub static RESIDENT_TAG: &str = "resident";

/// List all residents
#[utoipa::path(
    get,
    path = "/api/residents",
    tag = RESIDENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All residents", body = Vec<ResidentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_residents(
    State(state): State<AppState>,
    _: AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let residents = ResidentService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(residents)))
}

/// Check a resident into a shelter
///
/// # Responses
/// - 200 (Success): The created resident, checked in at the time of the request
/// - 400 (Bad Request): Negative age or the shelter does not exist
/// - 401 (Unauthorized): Missing or invalid token
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/residents",
    tag = RESIDENT_TAG,
    security(("bearer" = [])),
    request_body = CreateResidentDto,
    responses(
        (status = 200, description = "Resident checked in", body = ResidentDto),
        (status = 400, description = "Negative age or unknown shelter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_resident(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiJson(resident): ApiJson<CreateResidentDto>,
) -> Result<impl IntoResponse, Error> {
    let resident = ResidentService::new(&state.db).create(resident).await?;

    Ok((StatusCode::OK, Json(resident)))
}
