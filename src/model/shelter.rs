use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ShelterDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub manager_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::shelter::Model> for ShelterDto {
    fn from(shelter: entity::shelter::Model) -> Self {
        Self {
            id: shelter.id,
            name: shelter.name,
            location: shelter.location,
            capacity: shelter.capacity,
            current_occupancy: shelter.current_occupancy,
            phone: shelter.phone,
            email: shelter.email,
            address: shelter.address,
            manager_id: shelter.manager_id,
            created_at: shelter.created_at,
            updated_at: shelter.updated_at,
        }
    }
}

/// Shelter base fields submitted to `POST /api/shelters`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateShelterDto {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    #[serde(default)]
    pub current_occupancy: i32,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub manager_id: Option<i32>,
}
