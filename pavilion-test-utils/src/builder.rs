//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and queued, then executed in order during the
//! final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Collects the tables and fixtures a test needs and creates them in a fresh
/// in-memory SQLite database when `build()` is called.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_club_tables: bool,
    include_trainer_tables: bool,
    include_tournament_tables: bool,

    // Database fixtures to insert
    teams: Vec<String>,
    players: Vec<(String, Option<i32>)>, // (name, team_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance with no tables or fixtures configured
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_club_tables: false,
            include_trainer_tables: false,
            include_tournament_tables: false,
            teams: Vec::new(),
            players: Vec::new(),
        }
    }

    /// Add the core club tables to the test database.
    ///
    /// Creates Team, Player, CricketMatch and Score, which every other table depends on.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_club_tables(mut self) -> Self {
        self.include_club_tables = true;
        self
    }

    /// Add trainer tables (and the club tables they reference) to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_trainer_tables(mut self) -> Self {
        self.include_club_tables = true;
        self.include_trainer_tables = true;
        self
    }

    /// Add tournament tables (and the club tables they reference) to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_tournament_tables(mut self) -> Self {
        self.include_club_tables = true;
        self.include_tournament_tables = true;
        self
    }

    /// Add every application table to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_trainer_tables().with_tournament_tables()
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pavilion_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), pavilion_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Team)
    ///     .with_table(Player)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a team into the database during `build()`.
    ///
    /// Teams receive sequential IDs starting at 1 in the order they are added.
    ///
    /// # Arguments
    /// - `name` - Team name
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_team(mut self, name: impl Into<String>) -> Self {
        self.teams.push(name.into());
        self
    }

    /// Insert a player into the database during `build()`.
    ///
    /// Players are inserted after all teams, so `team_id` may reference any team
    /// added with `with_mock_team`.
    ///
    /// # Arguments
    /// - `name` - Player name
    /// - `team_id` - Optional ID of the team the player belongs to
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_player(mut self, name: impl Into<String>, team_id: Option<i32>) -> Self {
        self.players.push((name.into(), team_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (table groups first, then custom tables)
    /// 2. Inserts teams, then players
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_club_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::CricketMatch),
                schema.create_table_from_entity(entity::prelude::Score),
            ]);
        }

        if self.include_trainer_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Trainer),
                schema.create_table_from_entity(entity::prelude::TrainerAchievement),
                schema.create_table_from_entity(entity::prelude::TrainerTeam),
                schema.create_table_from_entity(entity::prelude::TrainerPlayer),
            ]);
        }

        if self.include_tournament_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Tournament),
                schema.create_table_from_entity(entity::prelude::TournamentTeam),
                schema.create_table_from_entity(entity::prelude::TournamentMatch),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.teams {
            setup.club().insert_team(&name).await?;
        }

        for (name, team_id) in self.players {
            setup.club().insert_player(&name, team_id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
