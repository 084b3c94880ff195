use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::EventModel, TestContext};

impl TestContext {
    pub fn event(&self) -> EventFixtures<'_> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> EventFixtures<'a> {
    /// Insert a training event taking place at `event_date`.
    pub async fn insert_event(
        &self,
        shelter_id: i32,
        title: &str,
        event_date: NaiveDateTime,
    ) -> Result<EventModel, TestError> {
        Ok(entity::prelude::Event::insert(entity::event::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set("Test event".to_string()),
            event_date: ActiveValue::Set(event_date),
            location: ActiveValue::Set("Main hall".to_string()),
            shelter_id: ActiveValue::Set(shelter_id),
            event_type: ActiveValue::Set("training".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
