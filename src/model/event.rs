use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDateTime,
    pub location: String,
    pub shelter_id: i32,
    /// Free-form category such as `training`, `meeting` or `emergency`
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::event::Model> for EventDto {
    fn from(event: entity::event::Model) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            event_date: event.event_date,
            location: event.location,
            shelter_id: event.shelter_id,
            event_type: event.event_type,
            created_at: event.created_at,
        }
    }
}

/// Event base fields submitted to `POST /api/events`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEventDto {
    pub title: String,
    pub description: String,
    pub event_date: NaiveDateTime,
    pub location: String,
    pub shelter_id: i32,
    #[serde(rename = "type")]
    pub event_type: String,
}
