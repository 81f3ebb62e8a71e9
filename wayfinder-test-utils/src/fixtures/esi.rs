//! ESI HTTP mock endpoint creation utilities.
//!
//! This module provides methods for creating mock HTTP endpoints that simulate the
//! character location and ship ESI endpoints. Endpoints only match requests carrying
//! the test bearer token and verify they were called the expected number of times.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{constant::TEST_ACCESS_TOKEN, fixtures::EsiFixtures};

fn bearer() -> Matcher {
    Matcher::Exact(format!("Bearer {}", TEST_ACCESS_TOKEN))
}

impl<'a> EsiFixtures<'a> {
    /// Create a mock endpoint at `/characters/{character_id}/location/`.
    ///
    /// # Arguments
    /// - `character_id` - The character ID for the endpoint path
    /// - `solar_system_id` - Solar system to report
    /// - `station_id` - Optional docked station
    /// - `structure_id` - Optional docked structure
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_location_endpoint(
        &mut self,
        character_id: i64,
        solar_system_id: i64,
        station_id: Option<i64>,
        structure_id: Option<i64>,
        expected_requests: usize,
    ) -> Mock {
        let mut body = json!({ "solar_system_id": solar_system_id });
        if let Some(station_id) = station_id {
            body["station_id"] = json!(station_id);
        }
        if let Some(structure_id) = structure_id {
            body["structure_id"] = json!(structure_id);
        }

        let url = format!("/characters/{}/location/", character_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_header("authorization", bearer())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/characters/{character_id}/ship/`.
    ///
    /// # Arguments
    /// - `character_id` - The character ID for the endpoint path
    /// - `ship_item_id` - Item ID of the active ship
    /// - `ship_name` - Raw ship name, as ESI would return it
    /// - `ship_type_id` - Type ID of the active ship
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_ship_endpoint(
        &mut self,
        character_id: i64,
        ship_item_id: i64,
        ship_name: &str,
        ship_type_id: i64,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "ship_item_id": ship_item_id,
            "ship_name": ship_name,
            "ship_type_id": ship_type_id,
        });

        let url = format!("/characters/{}/ship/", character_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_header("authorization", bearer())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/characters/{character_id}/{resource}/` returning an
    /// ESI-style error body with the given status.
    ///
    /// # Arguments
    /// - `character_id` - The character ID for the endpoint path
    /// - `resource` - Either `location` or `ship`
    /// - `status` - HTTP status code to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_failed_endpoint(
        &mut self,
        character_id: i64,
        resource: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/characters/{}/{}/", character_id, resource);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "mock ESI error" }).to_string())
            .expect(expected_requests)
            .create()
    }
}
