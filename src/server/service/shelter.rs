use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        alert::RiskAlertDto, event::EventDto, research::ResearchDataDto, resident::ResidentDto,
        shelter::{CreateShelterDto, ShelterDto},
    },
    server::{
        data::{
            event::EventRepository, research_data::ResearchDataRepository,
            resident::ResidentRepository, risk_alert::RiskAlertRepository,
            shelter::ShelterRepository, user::UserRepository,
        },
        error::{data::DataError, Error},
    },
};

/// Service for shelters and the records attached to them.
pub struct ShelterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShelterService<'a> {
    /// Creates a new instance of [`ShelterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a shelter after checking its occupancy figures and manager reference.
    ///
    /// # Returns
    /// - `Ok(ShelterDto)` - Shelter created
    /// - `Err(Error::DataError(DataError::Validation))` - Negative capacity or occupancy, or
    ///   occupancy above capacity
    /// - `Err(Error::DataError(DataError::InvalidReference))` - Manager user does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, shelter: CreateShelterDto) -> Result<ShelterDto, Error> {
        validate_occupancy(shelter.capacity, shelter.current_occupancy)?;

        let txn = self.db.begin().await?;

        if let Some(manager_id) = shelter.manager_id {
            if UserRepository::new(&txn).get_by_id(manager_id).await?.is_none() {
                return Err(DataError::InvalidReference {
                    entity: "User",
                    id: manager_id,
                }
                .into());
            }
        }

        let shelter = ShelterRepository::new(&txn).create(shelter).await?;

        txn.commit().await?;

        Ok(shelter.into())
    }

    pub async fn get_all(&self) -> Result<Vec<ShelterDto>, Error> {
        let shelters = ShelterRepository::new(self.db).get_all().await?;

        Ok(shelters.into_iter().map(ShelterDto::from).collect())
    }

    /// Retrieves a shelter by ID, `DataError::NotFound` if it does not exist.
    pub async fn get_by_id(&self, shelter_id: i32) -> Result<ShelterDto, Error> {
        match ShelterRepository::new(self.db).get_by_id(shelter_id).await? {
            Some(shelter) => Ok(shelter.into()),
            None => Err(not_found(shelter_id)),
        }
    }

    /// Residents of a shelter, `DataError::NotFound` if the shelter does not exist.
    pub async fn get_residents(&self, shelter_id: i32) -> Result<Vec<ResidentDto>, Error> {
        self.ensure_exists(shelter_id).await?;

        let residents = ResidentRepository::new(self.db)
            .get_by_shelter_id(shelter_id)
            .await?;

        Ok(residents.into_iter().map(ResidentDto::from).collect())
    }

    /// Events of a shelter, `DataError::NotFound` if the shelter does not exist.
    pub async fn get_events(&self, shelter_id: i32) -> Result<Vec<EventDto>, Error> {
        self.ensure_exists(shelter_id).await?;

        let events = EventRepository::new(self.db)
            .get_by_shelter_id(shelter_id)
            .await?;

        Ok(events.into_iter().map(EventDto::from).collect())
    }

    /// Risk alerts of a shelter, `DataError::NotFound` if the shelter does not exist.
    pub async fn get_alerts(&self, shelter_id: i32) -> Result<Vec<RiskAlertDto>, Error> {
        self.ensure_exists(shelter_id).await?;

        let alerts = RiskAlertRepository::new(self.db)
            .get_by_shelter_id(shelter_id)
            .await?;

        Ok(alerts.into_iter().map(RiskAlertDto::from).collect())
    }

    /// Research records of a shelter, `DataError::NotFound` if the shelter does not exist.
    pub async fn get_research(&self, shelter_id: i32) -> Result<Vec<ResearchDataDto>, Error> {
        self.ensure_exists(shelter_id).await?;

        let research = ResearchDataRepository::new(self.db)
            .get_by_shelter_id(shelter_id)
            .await?;

        Ok(research.into_iter().map(ResearchDataDto::from).collect())
    }

    async fn ensure_exists(&self, shelter_id: i32) -> Result<(), Error> {
        if !ShelterRepository::new(self.db).exists(shelter_id).await? {
            return Err(not_found(shelter_id));
        }

        Ok(())
    }
}

fn not_found(shelter_id: i32) -> Error {
    DataError::NotFound {
        entity: "Shelter",
        id: shelter_id,
    }
    .into()
}

fn validate_occupancy(capacity: i32, current_occupancy: i32) -> Result<(), DataError> {
    if capacity < 0 {
        return Err(DataError::Validation(
            "Shelter capacity must not be negative".to_string(),
        ));
    }

    if current_occupancy < 0 {
        return Err(DataError::Validation(
            "Shelter occupancy must not be negative".to_string(),
        ));
    }

    if current_occupancy > capacity {
        return Err(DataError::Validation(format!(
            "Shelter occupancy {} exceeds its capacity {}",
            current_occupancy, capacity
        )));
    }

    Ok(())
}
