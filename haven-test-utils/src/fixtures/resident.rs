use chrono::Utc;
use entity::sea_orm_active_enums::ResidentStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::ResidentModel, TestContext};

impl TestContext {
    pub fn resident(&self) -> ResidentFixtures<'_> {
        ResidentFixtures { setup: self }
    }
}

pub struct ResidentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ResidentFixtures<'a> {
    /// Insert an active resident checked in now.
    pub async fn insert_resident(
        &self,
        shelter_id: i32,
        name: &str,
    ) -> Result<ResidentModel, TestError> {
        Ok(entity::prelude::Resident::insert(entity::resident::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            age: ActiveValue::Set(34),
            gender: ActiveValue::Set("female".to_string()),
            phone: ActiveValue::Set(None),
            shelter_id: ActiveValue::Set(shelter_id),
            status: ActiveValue::Set(ResidentStatus::Active),
            check_in_date: ActiveValue::Set(Utc::now().naive_utc()),
            check_out_date: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
