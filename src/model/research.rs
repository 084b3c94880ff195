use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchDataDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Free-form collection method such as `survey`, `interview` or `observation`
    pub data_type: String,
    pub shelter_id: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::research_data::Model> for ResearchDataDto {
    fn from(research: entity::research_data::Model) -> Self {
        Self {
            id: research.id,
            title: research.title,
            description: research.description,
            data_type: research.data_type,
            shelter_id: research.shelter_id,
            created_at: research.created_at,
        }
    }
}

/// Research base fields submitted to `POST /api/research`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateResearchDataDto {
    pub title: String,
    pub description: String,
    pub data_type: String,
    pub shelter_id: i32,
}
