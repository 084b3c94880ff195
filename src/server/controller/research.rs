use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        research::{CreateResearchDataDto, ResearchDataDto},
    },
    server::{
        controller::util::{auth::AuthenticatedUser, extract::ApiJson},
        error::Error,
        model::app::AppState,
        service::research::ResearchService,
    },
};

pub static RESEARCH_TAG: &str = "research";

/// List all research records
#[utoipa::path(
    get,
    path = "/api/research",
    tag = RESEARCH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All research records", body = Vec<ResearchDataDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_research(
    State(state): State<AppState>,
    _: AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let research = ResearchService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(research)))
}

/// Record research data collected at a shelter
#[utoipa::path(
    post,
    path = "/api/research",
    tag = RESEARCH_TAG,
    security(("bearer" = [])),
    request_body = CreateResearchDataDto,
    responses(
        (status = 200, description = "Research recorded", body = ResearchDataDto),
        (status = 400, description = "Unknown shelter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_research(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiJson(research): ApiJson<CreateResearchDataDto>,
) -> Result<impl IntoResponse, Error> {
    let research = ResearchService::new(&state.db).create(research).await?;

    Ok((StatusCode::OK, Json(research)))
}
