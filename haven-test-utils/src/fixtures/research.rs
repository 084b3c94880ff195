use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::ResearchDataModel, TestContext};

impl TestContext {
    pub fn research(&self) -> ResearchFixtures<'_> {
        ResearchFixtures { setup: self }
    }
}

pub struct ResearchFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ResearchFixtures<'a> {
    /// Insert a survey record for the shelter.
    pub async fn insert_research(
        &self,
        shelter_id: i32,
        title: &str,
    ) -> Result<ResearchDataModel, TestError> {
        Ok(
            entity::prelude::ResearchData::insert(entity::research_data::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set("Weekly wellbeing survey".to_string()),
                data_type: ActiveValue::Set("survey".to_string()),
                shelter_id: ActiveValue::Set(shelter_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
