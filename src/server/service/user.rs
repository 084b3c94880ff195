use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, data::DataError, Error},
        util::token::TokenIdentity,
    },
};

/// Service for reading staff accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::DataError(DataError::NotFound))` - No user with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_by_id(&self, user_id: i32) -> Result<UserDto, Error> {
        match UserRepository::new(self.db).get_by_id(user_id).await? {
            Some(user) => Ok(user.into()),
            None => Err(DataError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into()),
        }
    }

    /// Resolves the user a validated access token was issued to.
    ///
    /// The username is authoritative: tokens carry it as their subject while the ID claim is
    /// optional.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User exists and is active
    /// - `Err(Error::AuthError(AuthError::UnknownUser))` - User no longer exists
    /// - `Err(Error::AuthError(AuthError::InactiveAccount))` - User was deactivated after the token was issued
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_current(&self, identity: &TokenIdentity) -> Result<UserDto, Error> {
        let Some(user) = UserRepository::new(self.db)
            .get_by_username(&identity.username)
            .await?
        else {
            tracing::warn!(
                "Valid access token presented for user {:?} who does not exist",
                identity.username
            );

            return Err(AuthError::UnknownUser(identity.username.clone()).into());
        };

        if !user.is_active {
            return Err(AuthError::InactiveAccount(user.username).into());
        }

        Ok(user.into())
    }
}
