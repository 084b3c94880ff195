use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDto},
    },
    server::{
        controller::util::{auth::AuthenticatedUser, extract::ApiJson},
        error::Error,
        model::app::AppState,
        service::event::EventService,
    },
};

pub static EVENT_TAG: &str = "event";

/// List all events
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    _: AuthenticatedUser,
) -> Result<impl IntoResponse, Error> {
    let events = EventService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Schedule an event at a shelter
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    security(("bearer" = [])),
    request_body = CreateEventDto,
    responses(
        (status = 200, description = "Event scheduled", body = EventDto),
        (status = 400, description = "Unknown shelter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    _: AuthenticatedUser,
    ApiJson(event): ApiJson<CreateEventDto>,
) -> Result<impl IntoResponse, Error> {
    let event = EventService::new(&state.db).create(event).await?;

    Ok((StatusCode::OK, Json(event)))
}
