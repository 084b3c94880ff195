use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::alert::{CreateRiskAlertDto, RiskAlertDto},
    server::{
        data::{risk_alert::RiskAlertRepository, shelter::ShelterRepository, user::UserRepository},
        error::{data::DataError, Error},
    },
};

pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertService<'a> {
    /// Creates a new instance of [`AlertService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Raises a risk alert for an existing shelter on behalf of an existing user.
    ///
    /// # Returns
    /// - `Ok(RiskAlertDto)` - Alert created, `resolved_at` set only if created as resolved
    /// - `Err(Error::DataError(DataError::InvalidReference))` - Shelter or creator does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, alert: CreateRiskAlertDto) -> Result<RiskAlertDto, Error> {
        let txn = self.db.begin().await?;

        if !ShelterRepository::new(&txn).exists(alert.shelter_id).await? {
            return Err(DataError::InvalidReference {
                entity: "Shelter",
                id: alert.shelter_id,
            }
            .into());
        }

        if UserRepository::new(&txn)
            .get_by_id(alert.created_by_id)
            .await?
            .is_none()
        {
            return Err(DataError::InvalidReference {
                entity: "User",
                id: alert.created_by_id,
            }
            .into());
        }

        let alert = RiskAlertRepository::new(&txn).create(alert).await?;

        txn.commit().await?;

        if alert.risk_level == entity::sea_orm_active_enums::RiskLevel::Critical && !alert.is_resolved
        {
            tracing::warn!(
                "Critical risk alert ID {} raised for shelter ID {}",
                alert.id,
                alert.shelter_id
            );
        }

        Ok(alert.into())
    }

    pub async fn get_all(&self) -> Result<Vec<RiskAlertDto>, Error> {
        let alerts = RiskAlertRepository::new(self.db).get_all().await?;

        Ok(alerts.into_iter().map(RiskAlertDto::from).collect())
    }
}
