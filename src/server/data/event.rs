use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::event::CreateEventDto, server::model::db::EventModel};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, event: CreateEventDto) -> Result<EventModel, DbErr> {
        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(event.title),
            description: ActiveValue::Set(event.description),
            event_date: ActiveValue::Set(event.event_date),
            location: ActiveValue::Set(event.location),
            shelter_id: ActiveValue::Set(event.shelter_id),
            event_type: ActiveValue::Set(event.event_type),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    /// Single event lookup, no route reads events by ID yet
    pub async fn get_by_id(&self, event_id: i32) -> Result<Option<EventModel>, DbErr> {
        entity::prelude::Event::find_by_id(event_id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<EventModel>, DbErr> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_shelter_id(
        &self,
        shelter_id: i32,
    ) -> Result<Vec<EventModel>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::ShelterId.eq(shelter_id))
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts events scheduled strictly after `now`
    pub async fn count_upcoming(&self, now: NaiveDateTime) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::EventDate.gt(now))
            .count(self.db)
            .await
    }
}
