//! Tests for bulk loading into the trips table

use super::make_trip;
use crate::app::services::store_loader::{StoreLoader, round2};
use crate::config::LoaderConfig;
use rusqlite::Connection;

fn loader_with_interval(commit_interval: usize) -> StoreLoader {
    StoreLoader::new(LoaderConfig { commit_interval })
}

#[test]
fn test_round2() {
    assert_eq!(round2(0.259641), 0.26);
    assert_eq!(round2(2.054303), 2.05);
    assert_eq!(round2(1.006), 1.01);
    assert_eq!(round2(3.0), 3.0);
    assert_eq!(round2(0.0), 0.0);
}

#[test]
fn test_load_persists_rows_in_given_order() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("trips.db");

    let trips = vec![make_trip(7), make_trip(42), make_trip(2875421)];
    let stats = loader_with_interval(1000).load(&db_path, &trips).unwrap();
    assert_eq!(stats.rows_inserted, 3);
    assert_eq!(stats.commits, 1);

    let conn = Connection::open(&db_path).unwrap();
    let mut stmt = conn
        .prepare("SELECT numeric_id, original_id FROM trips ORDER BY rowid")
        .unwrap();
    let rows: Vec<(i64, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(
        rows,
        vec![
            (7, "id7".to_string()),
            (42, "id42".to_string()),
            (2875421, "id2875421".to_string()),
        ]
    );
}

#[test]
fn test_distance_and_speed_stored_rounded() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("trips.db");

    loader_with_interval(1000)
        .load(&db_path, &[make_trip(1)])
        .unwrap();

    let conn = Connection::open(&db_path).unwrap();
    let (distance, speed): (f64, f64) = conn
        .query_row(
            "SELECT trip_distance_km, speed_kmph FROM trips WHERE numeric_id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();

    assert!((distance - 0.26).abs() < 1e-9);
    assert!((speed - 2.05).abs() < 1e-9);
}

#[test]
fn test_round_trip_flag_stored_as_integer() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("trips.db");

    let mut round_trip = make_trip(2);
    round_trip.is_round_trip = true;
    loader_with_interval(1000)
        .load(&db_path, &[make_trip(1), round_trip])
        .unwrap();

    let conn = Connection::open(&db_path).unwrap();
    let flags: Vec<i64> = conn
        .prepare("SELECT is_round_trip FROM trips ORDER BY numeric_id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(flags, vec![0, 1]);
}

#[test]
fn test_reload_replaces_prior_contents() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("trips.db");
    let loader = loader_with_interval(1000);

    loader
        .load(&db_path, &[make_trip(1), make_trip(2), make_trip(3)])
        .unwrap();
    loader.load(&db_path, &[make_trip(99)]).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    let ids: Vec<i64> = conn
        .prepare("SELECT numeric_id FROM trips")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(ids, vec![99]);
}

#[test]
fn test_commit_interval_chunks_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("trips.db");

    let trips: Vec<_> = (1..=7).map(make_trip).collect();
    let stats = loader_with_interval(3).load(&db_path, &trips).unwrap();

    // 3 + 3 + 1 rows
    assert_eq!(stats.rows_inserted, 7);
    assert_eq!(stats.commits, 3);

    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM trips", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 7);
}

#[test]
fn test_empty_batch_leaves_empty_table_with_schema() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("trips.db");

    let stats = loader_with_interval(1000).load(&db_path, &[]).unwrap();
    assert_eq!(stats.rows_inserted, 0);
    assert_eq!(stats.commits, 0);

    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM trips", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);

    let columns: Vec<String> = conn
        .prepare("SELECT name FROM pragma_table_info('trips')")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(
        columns,
        vec![
            "numeric_id",
            "original_id",
            "vendor_id",
            "pickup_datetime",
            "dropoff_datetime",
            "passenger_count",
            "pickup_longitude",
            "pickup_latitude",
            "dropoff_longitude",
            "dropoff_latitude",
            "store_and_fwd_flag",
            "trip_duration",
            "trip_distance_km",
            "speed_kmph",
            "is_round_trip",
        ]
    );
}

#[test]
fn test_null_passthroughs_stored_as_null() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("trips.db");

    let mut trip = make_trip(5);
    trip.vendor_id = None;
    trip.passenger_count = None;
    trip.store_and_fwd_flag = None;
    loader_with_interval(1000).load(&db_path, &[trip]).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    let (vendor, passengers, flag): (Option<String>, Option<i64>, Option<String>) = conn
        .query_row(
            "SELECT vendor_id, passenger_count, store_and_fwd_flag FROM trips WHERE numeric_id = 5",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();

    assert_eq!(vendor, None);
    assert_eq!(passengers, None);
    assert_eq!(flag, None);
}
