//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Tables are created in the order they were requested, after which fixtures are inserted
/// in the order users, shelters so a shelter fixture may reference a user fixture as its manager.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, UserRole, bool)>, // (username, role, is_active)
    shelters: Vec<(String, i32)>,         // (name, capacity)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            shelters: Vec::new(),
        }
    }

    /// Create every application table, parents before children.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Create the table for a single entity.
    ///
    /// Tables referenced by the entity's foreign keys must be added first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an active volunteer with the standard test password.
    pub fn with_user(self, username: impl Into<String>) -> Self {
        self.with_user_as(username, UserRole::Volunteer, true)
    }

    /// Insert a user with an explicit role and activation state.
    pub fn with_user_as(
        mut self,
        username: impl Into<String>,
        role: UserRole,
        is_active: bool,
    ) -> Self {
        self.users.push((username.into(), role, is_active));
        self
    }

    /// Insert a shelter without a manager.
    pub fn with_shelter(mut self, name: impl Into<String>, capacity: i32) -> Self {
        self.shelters.push((name.into(), capacity));
        self
    }

    /// Build the test context, creating tables then inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all requested tables and fixtures
    /// - `Err(TestError)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Shelter),
                schema.create_table_from_entity(entity::prelude::Resident),
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::RiskAlert),
                schema.create_table_from_entity(entity::prelude::ResearchData),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (username, role, is_active) in self.users {
            setup
                .user()
                .insert_user_with(&username, role, is_active)
                .await?;
        }

        for (name, capacity) in self.shelters {
            setup.shelter().insert_shelter(&name, capacity, None).await?;
        }

        Ok(setup)
    }
}
