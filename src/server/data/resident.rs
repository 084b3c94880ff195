use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::resident::CreateResidentDto, server::model::db::ResidentModel};

pub struct ResidentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResidentRepository<'a, C> {
    /// Creates a new instance of [`ResidentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks a new resident in at the current time
    ///
    /// The check-out date is always left empty.
    pub async fn create(
        &self,
        resident: CreateResidentDto,
    ) -> Result<ResidentModel, DbErr> {
        let resident = entity::resident::ActiveModel {
            name: ActiveValue::Set(resident.name),
            age: ActiveValue::Set(resident.age),
            gender: ActiveValue::Set(resident.gender),
            phone: ActiveValue::Set(resident.phone),
            shelter_id: ActiveValue::Set(resident.shelter_id),
            status: ActiveValue::Set(resident.status.into()),
            check_in_date: ActiveValue::Set(Utc::now().naive_utc()),
            check_out_date: ActiveValue::Set(None),
            ..Default::default()
        };

        resident.insert(self.db).await
    }

    /// Single resident lookup, no route reads residents by ID yet
    pub async fn get_by_id(
        &self,
        resident_id: i32,
    ) -> Result<Option<ResidentModel>, DbErr> {
        entity::prelude::Resident::find_by_id(resident_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<ResidentModel>, DbErr> {
        entity::prelude::Resident::find()
            .order_by_asc(entity::resident::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_shelter_id(
        &self,
        shelter_id: i32,
    ) -> Result<Vec<ResidentModel>, DbErr> {
        entity::prelude::Resident::find()
            .filter(entity::resident::Column::ShelterId.eq(shelter_id))
            .order_by_asc(entity::resident::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts residents across all shelters
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Resident::find().count(self.db).await
    }
}
