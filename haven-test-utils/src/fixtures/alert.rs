use chrono::Utc;
use entity::sea_orm_active_enums::RiskLevel;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::RiskAlertModel, TestContext};

impl TestContext {
    pub fn alert(&self) -> AlertFixtures<'_> {
        AlertFixtures { setup: self }
    }
}

pub struct AlertFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AlertFixtures<'a> {
    /// Insert a high risk alert, resolved now when `is_resolved` is set.
    pub async fn insert_alert(
        &self,
        shelter_id: i32,
        created_by_id: i32,
        is_resolved: bool,
    ) -> Result<RiskAlertModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::RiskAlert::insert(entity::risk_alert::ActiveModel {
            title: ActiveValue::Set("Flooding".to_string()),
            description: ActiveValue::Set("Water in the basement".to_string()),
            risk_level: ActiveValue::Set(RiskLevel::High),
            shelter_id: ActiveValue::Set(shelter_id),
            is_resolved: ActiveValue::Set(is_resolved),
            created_by_id: ActiveValue::Set(created_by_id),
            created_at: ActiveValue::Set(now),
            resolved_at: ActiveValue::Set(is_resolved.then_some(now)),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
