//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database and a mock ESI server.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// This struct is the result of calling `TestBuilder::build()` and provides access to the
/// test environment including:
/// - Mock ESI server
/// - Database connection
/// - Collection of mock endpoints for assertion
///
/// ```ignore
/// let mut test = TestBuilder::new().with_location_tables().build().await?;
///
/// let status = test.status().insert_character_status(1).await?;
/// let esi_client = EsiClient::new(test.esi_url(), ...);
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for ESI endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty in-memory database and a fresh mock server.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock ESI server.
    pub fn esi_url(&self) -> String {
        self.server.url()
    }

    /// Mutable access to the mock server for ad-hoc endpoints.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Execute table creation statements against the test database.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Keep a mock alive for the rest of the test and include it in `assert_mocks`.
    pub fn add_mock(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
