use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::shelter::CreateShelterDto, server::model::db::ShelterModel};

pub struct ShelterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShelterRepository<'a, C> {
    /// Creates a new instance of [`ShelterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new shelter
    ///
    /// Fails with a foreign key violation if `manager_id` does not reference a user.
    pub async fn create(&self, shelter: CreateShelterDto) -> Result<ShelterModel, DbErr> {
        let now = Utc::now().naive_utc();

        let shelter = entity::shelter::ActiveModel {
            name: ActiveValue::Set(shelter.name),
            location: ActiveValue::Set(shelter.location),
            capacity: ActiveValue::Set(shelter.capacity),
            current_occupancy: ActiveValue::Set(shelter.current_occupancy),
            phone: ActiveValue::Set(shelter.phone),
            email: ActiveValue::Set(shelter.email),
            address: ActiveValue::Set(shelter.address),
            manager_id: ActiveValue::Set(shelter.manager_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        shelter.insert(self.db).await
    }

    pub async fn get_by_id(&self, shelter_id: i32) -> Result<Option<ShelterModel>, DbErr> {
        entity::prelude::Shelter::find_by_id(shelter_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<ShelterModel>, DbErr> {
        entity::prelude::Shelter::find()
            .order_by_asc(entity::shelter::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether a shelter with `shelter_id` exists without loading it
    pub async fn exists(&self, shelter_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Shelter::find()
            .filter(entity::shelter::Column::Id.eq(shelter_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
