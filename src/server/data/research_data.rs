use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{model::research::CreateResearchDataDto, server::model::db::ResearchDataModel};

pub struct ResearchDataRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResearchDataRepository<'a, C> {
    /// Creates a new instance of [`ResearchDataRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        research: CreateResearchDataDto,
    ) -> Result<ResearchDataModel, DbErr> {
        let research = entity::research_data::ActiveModel {
            title: ActiveValue::Set(research.title),
            description: ActiveValue::Set(research.description),
            data_type: ActiveValue::Set(research.data_type),
            shelter_id: ActiveValue::Set(research.shelter_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        research.insert(self.db).await
    }

    /// Single research record lookup, no route reads research records by ID yet
    pub async fn get_by_id(
        &self,
        research_id: i32,
    ) -> Result<Option<ResearchDataModel>, DbErr> {
        entity::prelude::ResearchData::find_by_id(research_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<ResearchDataModel>, DbErr> {
        entity::prelude::ResearchData::find()
            .order_by_asc(entity::research_data::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_shelter_id(
        &self,
        shelter_id: i32,
    ) -> Result<Vec<ResearchDataModel>, DbErr> {
        entity::prelude::ResearchData::find()
            .filter(entity::research_data::Column::ShelterId.eq(shelter_id))
            .order_by_asc(entity::research_data::Column::Id)
            .all(self.db)
            .await
    }
}
