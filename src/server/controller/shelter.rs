use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        alert::RiskAlertDto,
        api::ErrorDto,
        event::EventDto,
        research::ResearchDataDto,
        resident::ResidentDto,
        shelter::{CreateShelterDto, ShelterDto},
    },
    server::{
        controller::util::{auth::AuthenticatedUser, extract::{ApiJson, ApiPath}},
        error::Error,
        model::app::AppState,
        service::shelter::ShelterService,
    },
};

pub static SHELTER_TAG: &str = "shelter";

/// List all shelters
#[utoipa::path(
    get,
    path = "/api/shelters",
    tag = SHELTER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All shelters", body = Vec<ShelterDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shelters(
    State(state): State<AppState>,
    _: AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let shelters = ShelterService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(shelters)))
}

/// Create a shelter
///
/// # Responses
/// - 200 (Success): The created shelter
/// - 400 (Bad Request): Negative capacity or occupancy, occupancy above capacity, or unknown manager
/// - 401 (Unauthorized): Missing or invalid token
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/shelters",
    tag = SHELTER_TAG,
    security(("bearer" = [])),
    request_body = CreateShelterDto,
    responses(
        (status = 200, description = "Shelter created", body = ShelterDto),
        (status = 400, description = "Invalid occupancy or unknown manager", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shelter(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiJson(shelter): ApiJson<CreateShelterDto>,
) -> Result<impl IntoResponse, Error> {
    let shelter = ShelterService::new(&state.db).create(shelter).await?;

    Ok((StatusCode::OK, Json(shelter)))
}

/// Get a shelter by ID
#[utoipa::path(
    get,
    path = "/api/shelters/{shelter_id}",
    tag = SHELTER_TAG,
    security(("bearer" = [])),
    params(("shelter_id" = i32, Path, description = "ID of the shelter")),
    responses(
        (status = 200, description = "Shelter found", body = ShelterDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shelter(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiPath(shelter_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let shelter = ShelterService::new(&state.db).get_by_id(shelter_id).await?;

    Ok((StatusCode::OK, Json(shelter)))
}

/// List residents housed at a shelter
#[utoipa::path(
    get,
    path = "/api/shelters/{shelter_id}/residents",
    tag = SHELTER_TAG,
    security(("bearer" = [])),
    params(("shelter_id" = i32, Path, description = "ID of the shelter")),
    responses(
        (status = 200, description = "Residents of the shelter", body = Vec<ResidentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shelter_residents(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiPath(shelter_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let residents = ShelterService::new(&state.db)
        .get_residents(shelter_id)
        .await?;

    Ok((StatusCode::OK, Json(residents)))
}

/// List events of a shelter
#[utoipa::path(
    get,
    path = "/api/shelters/{shelter_id}/events",
    tag = SHELTER_TAG,
    security(("bearer" = [])),
    params(("shelter_id" = i32, Path, description = "ID of the shelter")),
    responses(
        (status = 200, description = "Events of the shelter", body = Vec<EventDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shelter_events(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiPath(shelter_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let events = ShelterService::new(&state.db).get_events(shelter_id).await?;

    Ok((StatusCode::OK, Json(events)))
}

/// List risk alerts of a shelter
#[utoipa::path(
    get,
    path = "/api/shelters/{shelter_id}/alerts",
    tag = SHELTER_TAG,
    security(("bearer" = [])),
    params(("shelter_id" = i32, Path, description = "ID of the shelter")),
    responses(
        (status = 200, description = "Risk alerts of the shelter", body = Vec<RiskAlertDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shelter_alerts(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiPath(shelter_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let alerts = ShelterService::new(&state.db).get_alerts(shelter_id).await?;

    Ok((StatusCode::OK, Json(alerts)))
}

/// List research records of a shelter
#[utoipa::path(
    get,
    path = "/api/shelters/{shelter_id}/research",
    tag = SHELTER_TAG,
    security(("bearer" = [])),
    params(("shelter_id" = i32, Path, description = "ID of the shelter")),
    responses(
        (status = 200, description = "Research records of the shelter", body = Vec<ResearchDataDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Shelter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shelter_research(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiPath(shelter_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let research = ShelterService::new(&state.db)
        .get_research(shelter_id)
        .await?;

    Ok((StatusCode::OK, Json(research)))
}
