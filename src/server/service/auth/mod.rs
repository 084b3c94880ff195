//! Authentication service layer.
//!
//! This module contains the business logic for logging in with a username and password and
//! for registering new staff accounts.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::{
        auth::{LoginDto, RegisterUserDto, TokenDto},
        user::UserDto,
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, data::DataError, Error},
        util::{
            password::PasswordHasher,
            token::{TokenIdentity, TokenService},
        },
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    hasher: &'a PasswordHasher,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        hasher: &'a PasswordHasher,
    ) -> Self {
        Self { db, tokens, hasher }
    }

    /// Verifies credentials and issues an access token.
    ///
    /// # Returns
    /// - `Ok(TokenDto)` - Credentials valid, token embeds the username, user ID & role
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(Error::AuthError(AuthError::InactiveAccount))` - Credentials valid but account deactivated
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login(&self, credentials: LoginDto) -> Result<TokenDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get_by_username(&credentials.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self
            .hasher
            .verify(&credentials.password, &user.hashed_password)
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::InactiveAccount(user.username).into());
        }

        let identity = TokenIdentity {
            username: user.username.clone(),
            user_id: Some(user.id),
            role: Some(user.role.into()),
        };
        let access_token = self.tokens.issue(&identity)?;

        tracing::debug!("Issued access token for user ID {}", user.id);

        Ok(TokenDto {
            access_token,
            token_type: "bearer".to_string(),
            user: user.into(),
        })
    }

    /// Creates a new active account with the submitted password hashed.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Account created
    /// - `Err(Error::DataError(DataError::Conflict))` - Username already taken, including when a
    ///   concurrent registration claims it first
    /// - `Err(Error::PasswordHashError)` - Password could not be hashed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, registration: RegisterUserDto) -> Result<UserDto, Error> {
        let hashed_password = self.hasher.hash(&registration.password)?;

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo
            .get_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(user_exists());
        }

        let user = user_repo
            .create(registration, hashed_password)
            .await
            .map_err(map_unique_violation)?;

        txn.commit().await?;

        tracing::info!("Registered user ID {} as {:?}", user.id, user.role);

        Ok(user.into())
    }
}

fn user_exists() -> Error {
    DataError::Conflict("User already exists".to_string()).into()
}

/// A concurrent registration can pass the username check and still lose on the unique index.
fn map_unique_violation(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => user_exists(),
        _ => Error::from(err),
    }
}
