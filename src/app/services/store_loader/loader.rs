//! Bulk loader for the `trips` table

use crate::app::models::AcceptedTrip;
use crate::config::LoaderConfig;
use crate::{Error, Result};
use rusqlite::{Connection, params};
use std::path::Path;
use tracing::{debug, info};

use super::schema;

/// Round a value to two decimal places for persistence
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Statistics from one bulk load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows inserted into the trip table
    pub rows_inserted: usize,
    /// Transaction commits issued, including the final one
    pub commits: usize,
}

/// Bulk writer that replaces the persistent trip table with one batch
///
/// The loader assumes its input is already ordered by numeric id ascending
/// and that ids are unique — both are the upstream pipeline's guarantees and
/// are not re-verified here.
#[derive(Debug)]
pub struct StoreLoader {
    config: LoaderConfig,
}

impl StoreLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Open (or create) the database at `db_path` and replace the trip table
    pub fn load(&self, db_path: &Path, trips: &[AcceptedTrip]) -> Result<LoadStats> {
        let mut conn = Connection::open(db_path).map_err(|e| {
            Error::storage(format!("cannot open database '{}'", db_path.display()), e)
        })?;
        let stats = self.load_into(&mut conn, trips)?;

        info!(
            "Stored {} trips into {} ({} commits)",
            stats.rows_inserted,
            db_path.display(),
            stats.commits
        );
        Ok(stats)
    }

    /// Replace the trip table on an open connection
    pub fn load_into(&self, conn: &mut Connection, trips: &[AcceptedTrip]) -> Result<LoadStats> {
        schema::recreate_trips_table(conn)?;
        debug!("Trip table recreated, inserting {} rows", trips.len());

        let mut stats = LoadStats::default();

        // One transaction per chunk: the commit interval bounds how much
        // work a crash can discard, the final partial chunk commits the rest
        for chunk in trips.chunks(self.config.commit_interval) {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare_cached(schema::INSERT_TRIP_SQL)?;
                for trip in chunk {
                    stmt.execute(params![
                        trip.numeric_id,
                        trip.original_id,
                        trip.vendor_id,
                        trip.pickup_datetime,
                        trip.dropoff_datetime,
                        trip.passenger_count,
                        trip.pickup_longitude,
                        trip.pickup_latitude,
                        trip.dropoff_longitude,
                        trip.dropoff_latitude,
                        trip.store_and_fwd_flag,
                        trip.trip_duration,
                        round2(trip.trip_distance_km),
                        round2(trip.speed_kmph),
                        i64::from(trip.is_round_trip),
                    ])?;
                }
            }
            tx.commit()?;

            stats.rows_inserted += chunk.len();
            stats.commits += 1;
        }

        Ok(stats)
    }
}
