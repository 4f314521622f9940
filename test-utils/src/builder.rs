use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{DroneCategory, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(DroneCategory)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the identity tables: User and Token.
    pub fn with_identity_tables(self) -> Self {
        self.with_table(User).with_table(Token)
    }

    /// Adds all tables required for drone operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Token
    /// - DroneCategory
    /// - Drone
    pub fn with_drone_tables(self) -> Self {
        self.with_identity_tables()
            .with_table(DroneCategory)
            .with_table(Drone)
    }

    /// Adds all tables required for competition operations.
    ///
    /// Equivalent to `with_drone_tables()` followed by Pilot and Competition.
    pub fn with_competition_tables(self) -> Self {
        self.with_drone_tables()
            .with_table(Pilot)
            .with_table(Competition)
    }

    /// Adds every table of the application schema.
    pub fn with_all_tables(self) -> Self {
        self.with_competition_tables().with_table(Toy)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
