//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods are chained together and all operations are queued and
//! executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Mock location endpoint: (character_id, solar_system_id, station_id, structure_id, expected)
type LocationEndpoint = (i64, i64, Option<i64>, Option<i64>, usize);
/// Mock ship endpoint: (character_id, ship_item_id, ship_name, ship_type_id, expected)
type ShipEndpoint = (i64, i64, String, i64, usize);

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// fixtures, and mock ESI endpoints.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_location_tables: bool,

    character_statuses: Vec<i64>,
    character_tokens: Vec<i64>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    location_endpoints: Vec<LocationEndpoint>,
    ship_endpoints: Vec<ShipEndpoint>,
    failed_endpoints: Vec<(i64, &'static str, usize, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_location_tables: false,
            character_statuses: Vec::new(),
            character_tokens: Vec::new(),
            mock_builders: Vec::new(),
            location_endpoints: Vec::new(),
            ship_endpoints: Vec::new(),
            failed_endpoints: Vec::new(),
        }
    }

    /// Add every table used by the location sync: CharacterStatus, ShipHistory and
    /// EveCharacterToken.
    pub fn with_location_tables(mut self) -> Self {
        self.include_location_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// ```no_run
    /// use wayfinder_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), wayfinder_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::CharacterStatus)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an unsynced character status record for the character.
    pub fn with_character_status(mut self, character_id: i64) -> Self {
        self.character_statuses.push(character_id);
        self
    }

    /// Insert a valid ESI access token for the character.
    pub fn with_character_token(mut self, character_id: i64) -> Self {
        self.character_tokens.push(character_id);
        self
    }

    /// Add a mock location endpoint, see
    /// [`EsiFixtures::create_location_endpoint`](crate::fixtures::EsiFixtures::create_location_endpoint).
    pub fn with_location_endpoint(
        mut self,
        character_id: i64,
        solar_system_id: i64,
        station_id: Option<i64>,
        structure_id: Option<i64>,
        expected_requests: usize,
    ) -> Self {
        self.location_endpoints.push((
            character_id,
            solar_system_id,
            station_id,
            structure_id,
            expected_requests,
        ));
        self
    }

    /// Add a mock ship endpoint, see
    /// [`EsiFixtures::create_ship_endpoint`](crate::fixtures::EsiFixtures::create_ship_endpoint).
    pub fn with_ship_endpoint(
        mut self,
        character_id: i64,
        ship_item_id: i64,
        ship_name: &str,
        ship_type_id: i64,
        expected_requests: usize,
    ) -> Self {
        self.ship_endpoints.push((
            character_id,
            ship_item_id,
            ship_name.to_string(),
            ship_type_id,
            expected_requests,
        ));
        self
    }

    /// Add a mock location endpoint that fails with `status`.
    pub fn with_failed_location_endpoint(
        mut self,
        character_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.failed_endpoints
            .push((character_id, "location", status, expected_requests));
        self
    }

    /// Add a mock ship endpoint that fails with `status`.
    pub fn with_failed_ship_endpoint(
        mut self,
        character_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.failed_endpoints
            .push((character_id, "ship", status, expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Build the test context, executing all queued operations.
    ///
    /// Operations run in order: tables, database fixtures, mock endpoints.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_location_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::CharacterStatus),
                schema.create_table_from_entity(entity::prelude::ShipHistory),
                schema.create_table_from_entity(entity::prelude::EveCharacterToken),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for character_id in self.character_statuses {
            setup.status().insert_character_status(character_id).await?;
        }

        for character_id in self.character_tokens {
            setup.token().insert_character_token(character_id).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (character_id, resource, status, expected) in self.failed_endpoints {
            mocks.push(
                setup
                    .esi()
                    .create_failed_endpoint(character_id, resource, status, expected),
            );
        }

        for (character_id, solar_system_id, station_id, structure_id, expected) in
            self.location_endpoints
        {
            mocks.push(setup.esi().create_location_endpoint(
                character_id,
                solar_system_id,
                station_id,
                structure_id,
                expected,
            ));
        }

        for (character_id, ship_item_id, ship_name, ship_type_id, expected) in self.ship_endpoints
        {
            mocks.push(setup.esi().create_ship_endpoint(
                character_id,
                ship_item_id,
                &ship_name,
                ship_type_id,
                expected,
            ));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
