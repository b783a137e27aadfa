//! Schema definition for the persistent `trips` table
//!
//! The column set and affinities are a contract with the read-only query
//! service that consumes the table: paged listing and lookup key on
//! `numeric_id`, two-decimal distance and speed, 0/1 round-trip flag.

use crate::Result;
use rusqlite::Connection;

/// Drop statement preceding every load
pub const DROP_TRIPS_TABLE_SQL: &str = "DROP TABLE IF EXISTS trips";

/// Fixed schema of the trip table
pub const CREATE_TRIPS_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS trips (
        numeric_id INTEGER PRIMARY KEY,
        original_id TEXT,
        vendor_id TEXT,
        pickup_datetime TEXT,
        dropoff_datetime TEXT,
        passenger_count INTEGER,
        pickup_longitude REAL,
        pickup_latitude REAL,
        dropoff_longitude REAL,
        dropoff_latitude REAL,
        store_and_fwd_flag TEXT,
        trip_duration INTEGER,
        trip_distance_km REAL,
        speed_kmph REAL,
        is_round_trip INTEGER
    )";

/// Positional insert statement matching the schema column order
pub const INSERT_TRIP_SQL: &str = "
    INSERT INTO trips (
        numeric_id, original_id, vendor_id, pickup_datetime, dropoff_datetime,
        passenger_count, pickup_longitude, pickup_latitude, dropoff_longitude,
        dropoff_latitude, store_and_fwd_flag, trip_duration, trip_distance_km,
        speed_kmph, is_round_trip
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)";

/// Replace the trip table: drop any prior version, recreate empty
pub fn recreate_trips_table(conn: &Connection) -> Result<()> {
    conn.execute(DROP_TRIPS_TABLE_SQL, [])?;
    conn.execute(CREATE_TRIPS_TABLE_SQL, [])?;
    Ok(())
}
