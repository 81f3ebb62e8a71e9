//! Tests for LocationSyncService::sync method.
//!
//! This module verifies the location sync behavior: skipping missing records, aborting
//! without writes when either ESI request fails, writing location and ship together,
//! queueing an event only when something changed, normalizing ship names, and passing
//! every observed ship to the ship history recorder.

use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;
use sea_orm::EntityTrait;
use wayfinder::server::{
    data::ship_history::ShipHistoryRepository,
    error::Error,
    esi::EsiClient,
    service::{
        location::{LocationSyncService, SyncOutcome},
        ship_history::{ShipHistoryRecorder, ShipHistoryService},
    },
};
use wayfinder_test_utils::{fixtures::status::SyncedValues, prelude::*};

use crate::TestContextExt;

const CHARACTER_ID: i64 = 2114794365;
const JITA: i64 = 30000142;
const JITA_STATION: i64 = 60003760;
const RIFTER_ITEM: i64 = 1000000001;
const RIFTER_TYPE: i64 = 587;

/// Ship history recorder that keeps every call in memory
#[derive(Default)]
struct RecordingRecorder {
    calls: Mutex<Vec<(i64, i64, i64, String)>>,
}

impl RecordingRecorder {
    fn calls(&self) -> Vec<(i64, i64, i64, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShipHistoryRecorder for RecordingRecorder {
    async fn record(
        &self,
        character_id: i64,
        ship_item_id: i64,
        ship_type_id: i64,
        ship_name: &str,
    ) -> Result<(), Error> {
        self.calls.lock().unwrap().push((
            character_id,
            ship_item_id,
            ship_type_id,
            ship_name.to_string(),
        ));
        Ok(())
    }
}

/// Ship history recorder that always fails
struct FailingRecorder;

#[async_trait]
impl ShipHistoryRecorder for FailingRecorder {
    async fn record(&self, _: i64, _: i64, _: i64, _: &str) -> Result<(), Error> {
        Err(Error::DbErr(sea_orm::DbErr::Custom(
            "ship history unavailable".to_string(),
        )))
    }
}

fn synced_rifter() -> SyncedValues {
    SyncedValues {
        solarsystem_id: JITA,
        station_id: Some(JITA_STATION),
        structure_id: None,
        ship_name: "Rifter".to_string(),
        ship_type_id: RIFTER_TYPE,
        ship_item_id: RIFTER_ITEM,
    }
}

async fn find_status(test: &TestContext, id: i32) -> entity::character_status::Model {
    entity::prelude::CharacterStatus::find_by_id(id)
        .one(&test.db)
        .await
        .expect("Failed to query character status")
        .expect("Character status should exist")
}

/// Tests syncing a record that does not exist.
///
/// Expected: Ok(NotFound) without any ESI request or history entry
#[tokio::test]
async fn skips_missing_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, JITA, None, None, 0)
        .with_ship_endpoint(CHARACTER_ID, RIFTER_ITEM, "Rifter", RIFTER_TYPE, 0)
        .build()
        .await?;
    let esi = test.esi_client();
    let recorder = RecordingRecorder::default();

    let result = LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(42)
        .await;

    assert!(matches!(result, Ok(SyncOutcome::NotFound)));
    assert!(recorder.calls().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests a failed location request.
///
/// Verifies that the ship is never requested and the record is left untouched.
///
/// Expected: Ok(LocationUnavailable) with no writes
#[tokio::test]
async fn aborts_when_location_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_failed_location_endpoint(CHARACTER_ID, 503, 1)
        .with_ship_endpoint(CHARACTER_ID, RIFTER_ITEM, "Rifter", RIFTER_TYPE, 0)
        .build()
        .await?;
    let before = test.status().insert_character_status(CHARACTER_ID).await?;
    let esi = test.esi_client();
    let recorder = RecordingRecorder::default();

    let result = LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(before.id)
        .await;

    assert!(matches!(result, Ok(SyncOutcome::LocationUnavailable)));
    assert_eq!(find_status(&test, before.id).await, before);
    assert!(recorder.calls().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests a failed ship request after a successful location request.
///
/// Expected: Ok(ShipUnavailable) with the location not written either
#[tokio::test]
async fn aborts_when_ship_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, JITA, Some(JITA_STATION), None, 1)
        .with_failed_ship_endpoint(CHARACTER_ID, 403, 1)
        .build()
        .await?;
    let before = test.status().insert_character_status(CHARACTER_ID).await?;
    let esi = test.esi_client();
    let recorder = RecordingRecorder::default();

    let result = LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(before.id)
        .await;

    assert!(matches!(result, Ok(SyncOutcome::ShipUnavailable)));
    assert_eq!(find_status(&test, before.id).await, before);
    assert!(recorder.calls().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests a character without a stored access token.
///
/// Expected: Ok(LocationUnavailable) without any ESI request
#[tokio::test]
async fn aborts_without_access_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_location_endpoint(CHARACTER_ID, JITA, None, None, 0)
        .build()
        .await?;
    let before = test.status().insert_character_status(CHARACTER_ID).await?;
    let esi = test.esi_client();
    let recorder = RecordingRecorder::default();

    let result = LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(before.id)
        .await;

    assert!(matches!(result, Ok(SyncOutcome::LocationUnavailable)));
    assert_eq!(find_status(&test, before.id).await, before);
    test.assert_mocks();

    Ok(())
}

/// Tests the first sync of a record with no stored location or ship.
///
/// Expected: Ok(Changed) with every field written and an event queued
#[tokio::test]
async fn writes_location_and_ship_on_first_sync() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, JITA, Some(JITA_STATION), None, 1)
        .with_ship_endpoint(CHARACTER_ID, RIFTER_ITEM, "Rifter", RIFTER_TYPE, 1)
        .build()
        .await?;
    let before = test.status().insert_character_status(CHARACTER_ID).await?;
    let esi = test.esi_client();
    let recorder = RecordingRecorder::default();

    let result = LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(before.id)
        .await;

    assert!(matches!(result, Ok(SyncOutcome::Changed)));

    let after = find_status(&test, before.id).await;
    assert_eq!(after.solarsystem_id, Some(JITA));
    assert_eq!(after.station_id, Some(JITA_STATION));
    assert_eq!(after.structure_id, None);
    assert_eq!(after.ship_name.as_deref(), Some("Rifter"));
    assert_eq!(after.ship_type_id, Some(RIFTER_TYPE));
    assert_eq!(after.ship_item_id, Some(RIFTER_ITEM));
    assert!(after.event_queued_at.is_some());
    assert!(after.updated_at > before.updated_at);

    assert_eq!(
        recorder.calls(),
        vec![(CHARACTER_ID, RIFTER_ITEM, RIFTER_TYPE, "Rifter".to_string())]
    );
    test.assert_mocks();

    Ok(())
}

/// Tests a sync where ESI reports exactly what is already stored.
///
/// Verifies that neither the data write nor the event write happen, while the ship is still
/// passed to the history recorder.
///
/// Expected: Ok(Unchanged) with the record identical to before
#[tokio::test]
async fn leaves_unchanged_record_untouched() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, JITA, Some(JITA_STATION), None, 1)
        .with_ship_endpoint(CHARACTER_ID, RIFTER_ITEM, "Rifter", RIFTER_TYPE, 1)
        .build()
        .await?;
    let before = test
        .status()
        .insert_synced_character_status(CHARACTER_ID, synced_rifter())
        .await?;
    let esi = test.esi_client();
    let recorder = RecordingRecorder::default();

    let result = LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(before.id)
        .await;

    assert!(matches!(result, Ok(SyncOutcome::Unchanged)));

    let after = find_status(&test, before.id).await;
    assert_eq!(after, before);
    assert!(after.event_queued_at.is_none());
    assert_eq!(recorder.calls().len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Tests undocking: only the station changes.
///
/// Expected: Ok(Changed) with station cleared and an event queued
#[tokio::test]
async fn queues_event_when_only_station_changes() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, JITA, None, None, 1)
        .with_ship_endpoint(CHARACTER_ID, RIFTER_ITEM, "Rifter", RIFTER_TYPE, 1)
        .build()
        .await?;
    let before = test
        .status()
        .insert_synced_character_status(CHARACTER_ID, synced_rifter())
        .await?;
    let esi = test.esi_client();
    let recorder = RecordingRecorder::default();

    let result = LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(before.id)
        .await;

    assert!(matches!(result, Ok(SyncOutcome::Changed)));

    let after = find_status(&test, before.id).await;
    assert_eq!(after.station_id, None);
    assert_eq!(after.solarsystem_id, Some(JITA));
    assert!(after.event_queued_at.is_some());
    test.assert_mocks();

    Ok(())
}

/// Tests a ship name reported as a unicode literal.
///
/// Expected: the decoded name is stored and passed to the history recorder
#[tokio::test]
async fn stores_normalized_ship_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, JITA, None, None, 1)
        .with_ship_endpoint(CHARACTER_ID, RIFTER_ITEM, r"u'Caf\u00e9 Ship'", RIFTER_TYPE, 1)
        .build()
        .await?;
    let before = test.status().insert_character_status(CHARACTER_ID).await?;
    let esi = test.esi_client();
    let recorder = RecordingRecorder::default();

    LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(before.id)
        .await
        .unwrap();

    let after = find_status(&test, before.id).await;
    assert_eq!(after.ship_name.as_deref(), Some("Café Ship"));
    assert_eq!(recorder.calls()[0].3, "Café Ship");
    test.assert_mocks();

    Ok(())
}

/// Tests that a raw name decoding to the stored name counts as unchanged.
///
/// Expected: Ok(Unchanged) since comparison happens after normalization
#[tokio::test]
async fn compares_normalized_ship_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, JITA, Some(JITA_STATION), None, 1)
        .with_ship_endpoint(CHARACTER_ID, RIFTER_ITEM, "u'Rifter'", RIFTER_TYPE, 1)
        .build()
        .await?;
    let before = test
        .status()
        .insert_synced_character_status(CHARACTER_ID, synced_rifter())
        .await?;
    let esi = test.esi_client();
    let recorder = RecordingRecorder::default();

    let result = LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(before.id)
        .await;

    assert!(matches!(result, Ok(SyncOutcome::Unchanged)));
    test.assert_mocks();

    Ok(())
}

/// Tests a history recorder failure after the record was written.
///
/// Expected: Err propagated, location and event writes already applied
#[tokio::test]
async fn propagates_ship_history_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, JITA, None, None, 1)
        .with_ship_endpoint(CHARACTER_ID, RIFTER_ITEM, "Rifter", RIFTER_TYPE, 1)
        .build()
        .await?;
    let before = test.status().insert_character_status(CHARACTER_ID).await?;
    let esi = test.esi_client();

    let result = LocationSyncService::new(&test.db, &esi, &FailingRecorder)
        .sync(before.id)
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    let after = find_status(&test, before.id).await;
    assert_eq!(after.solarsystem_id, Some(JITA));
    assert!(after.event_queued_at.is_some());

    Ok(())
}

/// Tests ESI being unreachable.
///
/// Expected: Err(EsiRequestError) with nothing written
#[tokio::test]
async fn propagates_transport_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .build()
        .await?;
    let before = test.status().insert_character_status(CHARACTER_ID).await?;
    // Nothing listens on port 1
    let esi = EsiClient::new(
        "http://127.0.0.1:1",
        constant::TEST_USER_AGENT,
        Duration::from_secs(5),
        test.db.clone(),
    )
    .unwrap();
    let recorder = RecordingRecorder::default();

    let result = LocationSyncService::new(&test.db, &esi, &recorder)
        .sync(before.id)
        .await;

    assert!(matches!(result, Err(Error::EsiRequestError(_))));
    assert_eq!(find_status(&test, before.id).await, before);

    Ok(())
}

/// Tests the sync together with the database backed ship history.
///
/// Expected: two syncs in the same ship leave a single history entry
#[tokio::test]
async fn records_ship_history() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_location_tables()
        .with_character_token(CHARACTER_ID)
        .with_location_endpoint(CHARACTER_ID, JITA, None, None, 2)
        .with_ship_endpoint(CHARACTER_ID, RIFTER_ITEM, "Rifter", RIFTER_TYPE, 2)
        .build()
        .await?;
    let status = test.status().insert_character_status(CHARACTER_ID).await?;
    let esi = test.esi_client();
    let ship_history = ShipHistoryService::new(&test.db);
    let service = LocationSyncService::new(&test.db, &esi, &ship_history);

    let first = service.sync(status.id).await;
    let second = service.sync(status.id).await;

    assert!(matches!(first, Ok(SyncOutcome::Changed)));
    assert!(matches!(second, Ok(SyncOutcome::Unchanged)));

    let entries = ShipHistoryRepository::new(&test.db)
        .get_by_character_id(CHARACTER_ID)
        .await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].ship_item_id, RIFTER_ITEM);
    test.assert_mocks();

    Ok(())
}
