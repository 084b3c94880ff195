use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::research::{CreateResearchDataDto, ResearchDataDto},
    server::{
        data::{research_data::ResearchDataRepository, shelter::ShelterRepository},
        error::{data::DataError, Error},
    },
};

pub struct ResearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResearchService<'a> {
    /// Creates a new instance of [`ResearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records research data collected at an existing shelter.
    ///
    /// # Returns
    /// - `Ok(ResearchDataDto)` - Record created
    /// - `Err(Error::DataError(DataError::InvalidReference))` - Shelter does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, research: CreateResearchDataDto) -> Result<ResearchDataDto, Error> {
        let txn = self.db.begin().await?;

        if !ShelterRepository::new(&txn).exists(research.shelter_id).await? {
            return Err(DataError::InvalidReference {
                entity: "Shelter",
                id: research.shelter_id,
            }
            .into());
        }

        let research = ResearchDataRepository::new(&txn).create(research).await?;

        txn.commit().await?;

        Ok(research.into())
    }

    pub async fn get_all(&self) -> Result<Vec<ResearchDataDto>, Error> {
        let research = ResearchDataRepository::new(self.db).get_all().await?;

        Ok(research.into_iter().map(ResearchDataDto::from).collect())
    }
}
