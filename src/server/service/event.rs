use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::event::{CreateEventDto, EventDto},
    server::{
        data::{event::EventRepository, shelter::ShelterRepository},
        error::{data::DataError, Error},
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules an event at an existing shelter.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - Event created
    /// - `Err(Error::DataError(DataError::InvalidReference))` - Shelter does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, event: CreateEventDto) -> Result<EventDto, Error> {
        let txn = self.db.begin().await?;

        if !ShelterRepository::new(&txn).exists(event.shelter_id).await? {
            return Err(DataError::InvalidReference {
                entity: "Shelter",
                id: event.shelter_id,
            }
            .into());
        }

        let event = EventRepository::new(&txn).create(event).await?;

        txn.commit().await?;

        Ok(event.into())
    }

    pub async fn get_all(&self) -> Result<Vec<EventDto>, Error> {
        let events = EventRepository::new(self.db).get_all().await?;

        Ok(events.into_iter().map(EventDto::from).collect())
    }
}
