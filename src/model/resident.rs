use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResidentStatus {
    #[default]
    Active,
    Inactive,
    Transferred,
}

impl From<entity::sea_orm_active_enums::ResidentStatus> for ResidentStatus {
    fn from(status: entity::sea_orm_active_enums::ResidentStatus) -> Self {
        use entity::sea_orm_active_enums::ResidentStatus as Db;

        match status {
            Db::Active => Self::Active,
            Db::Inactive => Self::Inactive,
            Db::Transferred => Self::Transferred,
        }
    }
}

impl From<ResidentStatus> for entity::sea_orm_active_enums::ResidentStatus {
    fn from(status: ResidentStatus) -> Self {
        match status {
            ResidentStatus::Active => Self::Active,
            ResidentStatus::Inactive => Self::Inactive,
            ResidentStatus::Transferred => Self::Transferred,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ResidentDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub phone: Option<String>,
    pub shelter_id: i32,
    pub status: ResidentStatus,
    pub check_in_date: NaiveDateTime,
    pub check_out_date: Option<NaiveDateTime>,
}

impl From<entity::resident::Model> for ResidentDto {
    fn from(resident: entity::resident::Model) -> Self {
        Self {
            id: resident.id,
            name: resident.name,
            age: resident.age,
            gender: resident.gender,
            phone: resident.phone,
            shelter_id: resident.shelter_id,
            status: resident.status.into(),
            check_in_date: resident.check_in_date,
            check_out_date: resident.check_out_date,
        }
    }
}

/// Resident base fields submitted to `POST /api/residents`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateResidentDto {
    pub name: String,
    pub age: i32,
    pub gender: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub shelter_id: i32,
    #[serde(default)]
    pub status: ResidentStatus,
}
