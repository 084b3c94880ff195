use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl From<entity::sea_orm_active_enums::RiskLevel> for RiskLevel {
    fn from(level: entity::sea_orm_active_enums::RiskLevel) -> Self {
        use entity::sea_orm_active_enums::RiskLevel as Db;

        match level {
            Db::Low => Self::Low,
            Db::Medium => Self::Medium,
            Db::High => Self::High,
            Db::Critical => Self::Critical,
        }
    }
}

impl From<RiskLevel> for entity::sea_orm_active_enums::RiskLevel {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Self::Low,
            RiskLevel::Medium => Self::Medium,
            RiskLevel::High => Self::High,
            RiskLevel::Critical => Self::Critical,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RiskAlertDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub risk_level: RiskLevel,
    pub shelter_id: i32,
    pub is_resolved: bool,
    pub created_by_id: i32,
    pub created_at: NaiveDateTime,
    /// Set exactly when `is_resolved` is true
    pub resolved_at: Option<NaiveDateTime>,
}

impl From<entity::risk_alert::Model> for RiskAlertDto {
    fn from(alert: entity::risk_alert::Model) -> Self {
        Self {
            id: alert.id,
            title: alert.title,
            description: alert.description,
            risk_level: alert.risk_level.into(),
            shelter_id: alert.shelter_id,
            is_resolved: alert.is_resolved,
            created_by_id: alert.created_by_id,
            created_at: alert.created_at,
            resolved_at: alert.resolved_at,
        }
    }
}

/// Risk alert base fields submitted to `POST /api/alerts`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRiskAlertDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub risk_level: RiskLevel,
    pub shelter_id: i32,
    #[serde(default)]
    pub is_resolved: bool,
    pub created_by_id: i32,
}
