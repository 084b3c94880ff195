use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::resident::{CreateResidentDto, ResidentDto},
    server::{
        data::{resident::ResidentRepository, shelter::ShelterRepository},
        error::{data::DataError, Error},
    },
};

pub struct ResidentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResidentService<'a> {
    /// Creates a new instance of [`ResidentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a resident into an existing shelter.
    ///
    /// # Returns
    /// - `Ok(ResidentDto)` - Resident created with the current time as check-in date
    /// - `Err(Error::DataError(DataError::Validation))` - Negative age
    /// - `Err(Error::DataError(DataError::InvalidReference))` - Shelter does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, resident: CreateResidentDto) -> Result<ResidentDto, Error> {
        if resident.age < 0 {
            return Err(
                DataError::Validation("Resident age must not be negative".to_string()).into(),
            );
        }

        let txn = self.db.begin().await?;

        if !ShelterRepository::new(&txn).exists(resident.shelter_id).await? {
            return Err(DataError::InvalidReference {
                entity: "Shelter",
                id: resident.shelter_id,
            }
            .into());
        }

        let resident = ResidentRepository::new(&txn).create(resident).await?;

        txn.commit().await?;

        Ok(resident.into())
    }

    pub async fn get_all(&self) -> Result<Vec<ResidentDto>, Error> {
        let residents = ResidentRepository::new(self.db).get_all().await?;

        Ok(residents.into_iter().map(ResidentDto::from).collect())
    }
}
