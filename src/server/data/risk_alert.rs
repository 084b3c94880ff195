use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::alert::CreateRiskAlertDto, server::model::db::RiskAlertModel};

pub struct RiskAlertRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RiskAlertRepository<'a, C> {
    /// Creates a new instance of [`RiskAlertRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new risk alert
    ///
    /// An alert created as resolved is stamped as resolved at its creation time, an
    /// unresolved alert has no resolution time.
    pub async fn create(
        &self,
        alert: CreateRiskAlertDto,
    ) -> Result<RiskAlertModel, DbErr> {
        let now = Utc::now().naive_utc();

        let alert = entity::risk_alert::ActiveModel {
            title: ActiveValue::Set(alert.title),
            description: ActiveValue::Set(alert.description),
            risk_level: ActiveValue::Set(alert.risk_level.into()),
            shelter_id: ActiveValue::Set(alert.shelter_id),
            is_resolved: ActiveValue::Set(alert.is_resolved),
            created_by_id: ActiveValue::Set(alert.created_by_id),
            created_at: ActiveValue::Set(now),
            resolved_at: ActiveValue::Set(alert.is_resolved.then_some(now)),
            ..Default::default()
        };

        alert.insert(self.db).await
    }

    /// Single risk alert lookup, no route reads risk alerts by ID yet
    pub async fn get_by_id(
        &self,
        alert_id: i32,
    ) -> Result<Option<RiskAlertModel>, DbErr> {
        entity::prelude::RiskAlert::find_by_id(alert_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<RiskAlertModel>, DbErr> {
        entity::prelude::RiskAlert::find()
            .order_by_asc(entity::risk_alert::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_shelter_id(
        &self,
        shelter_id: i32,
    ) -> Result<Vec<RiskAlertModel>, DbErr> {
        entity::prelude::RiskAlert::find()
            .filter(entity::risk_alert::Column::ShelterId.eq(shelter_id))
            .order_by_asc(entity::risk_alert::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_unresolved(&self) -> Result<u64, DbErr> {
        entity::prelude::RiskAlert::find()
            .filter(entity::risk_alert::Column::IsResolved.eq(false))
            .count(self.db)
            .await
    }
}
