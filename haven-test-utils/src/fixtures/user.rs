use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_PASSWORD},
    error::TestError,
    model::UserModel,
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active volunteer whose password is [`TEST_PASSWORD`].
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        self.insert_user_with(username, UserRole::Volunteer, true)
            .await
    }

    /// Insert a user with an explicit role and activation state.
    pub async fn insert_user_with(
        &self,
        username: &str,
        role: UserRole,
        is_active: bool,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();
        let hashed_password = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?;

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(Some(format!("{}@example.org", username))),
            full_name: ActiveValue::Set(Some(format!("Test {}", username))),
            role: ActiveValue::Set(role),
            hashed_password: ActiveValue::Set(hashed_password),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
