use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::ShelterModel, TestContext};

impl TestContext {
    pub fn shelter(&self) -> ShelterFixtures<'_> {
        ShelterFixtures { setup: self }
    }
}

pub struct ShelterFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ShelterFixtures<'a> {
    /// Insert an empty shelter with the provided capacity.
    pub async fn insert_shelter(
        &self,
        name: &str,
        capacity: i32,
        manager_id: Option<i32>,
    ) -> Result<ShelterModel, TestError> {
        self.insert_shelter_with_occupancy(name, capacity, 0, manager_id)
            .await
    }

    pub async fn insert_shelter_with_occupancy(
        &self,
        name: &str,
        capacity: i32,
        current_occupancy: i32,
        manager_id: Option<i32>,
    ) -> Result<ShelterModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Shelter::insert(entity::shelter::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            location: ActiveValue::Set("Test District".to_string()),
            capacity: ActiveValue::Set(capacity),
            current_occupancy: ActiveValue::Set(current_occupancy),
            phone: ActiveValue::Set("+1 555 0100".to_string()),
            email: ActiveValue::Set("shelter@example.org".to_string()),
            address: ActiveValue::Set("1 Test Street".to_string()),
            manager_id: ActiveValue::Set(manager_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
