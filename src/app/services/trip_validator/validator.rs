//! Trip validator implementation
//!
//! Applies the fixed check order to one raw record at a time and produces a
//! [`Verdict`]: either an enriched [`AcceptedTrip`] (possibly carrying
//! advisory log entries) or a single [`RejectedEntry`]. The first failing
//! hard check wins and short-circuits the rest.

use crate::app::models::{AcceptedTrip, RawTripRecord, RejectedEntry, RejectionReason, Verdict};
use crate::config::ValidationConfig;
use crate::constants::{DATETIME_FORMAT, columns};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use tracing::debug;

use super::geo;
use super::id_extract::extract_numeric_id;

/// Check whether a computed speed is outside the plausible range
///
/// A speed above the configured maximum or exactly zero is implausible.
/// Standalone so the zero case stays testable in isolation.
pub fn speed_is_unrealistic(speed_kmph: f64, max_kmph: f64) -> bool {
    speed_kmph > max_kmph || speed_kmph == 0.0
}

/// Validator for raw trip records
///
/// Owns the batch-scoped set of seen original identifiers: the set's
/// lifetime is exactly one load invocation, so duplicate detection never
/// leaks across batches. Create one validator per run.
#[derive(Debug)]
pub struct TripValidator {
    config: ValidationConfig,
    seen_ids: HashSet<String>,
}

impl TripValidator {
    /// Create a validator for one batch run
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            seen_ids: HashSet::new(),
        }
    }

    /// Number of distinct identifiers seen so far in this batch
    pub fn seen_id_count(&self) -> usize {
        self.seen_ids.len()
    }

    /// Validate one raw record and derive its features
    ///
    /// Checks are evaluated in a fixed order; the first hard failure
    /// produces a `Rejected` verdict with exactly one reason code. The
    /// outside-of-region check is advisory: it attaches a log entry to an
    /// `Accepted` verdict without excluding the record.
    pub fn validate(&mut self, record: &RawTripRecord) -> Verdict {
        // 1. Identifier present
        let Some(raw_id) = record.get_non_blank(columns::ID) else {
            return Verdict::Rejected(RejectedEntry::new(
                "",
                RejectionReason::MissingId,
                format!(
                    "pickup_datetime={}",
                    record.get(columns::PICKUP_DATETIME).unwrap_or_default()
                ),
            ));
        };

        // 2. Identifier not already seen in this batch. The id enters the
        // seen set here, before later checks, so a record rejected further
        // down still blocks subsequent repeats of its id.
        if !self.seen_ids.insert(raw_id.to_string()) {
            return Verdict::Rejected(RejectedEntry::new(
                raw_id,
                RejectionReason::DuplicateId,
                format!(
                    "pickup_datetime={}",
                    record.get(columns::PICKUP_DATETIME).unwrap_or_default()
                ),
            ));
        }

        // 3. Identifier carries a usable digit run
        let Some(extracted) = extract_numeric_id(raw_id) else {
            return Verdict::Rejected(RejectedEntry::new(
                raw_id,
                RejectionReason::InvalidIdFormat,
                format!(
                    "pickup_datetime={}",
                    record.get(columns::PICKUP_DATETIME).unwrap_or_default()
                ),
            ));
        };

        // 4. Both timestamps present and parseable
        let pickup_raw = record.get(columns::PICKUP_DATETIME).unwrap_or_default();
        let dropoff_raw = record.get(columns::DROPOFF_DATETIME).unwrap_or_default();
        let pickup_time = record.get_non_blank(columns::PICKUP_DATETIME);
        let dropoff_time = record.get_non_blank(columns::DROPOFF_DATETIME);
        let timestamps_ok = match (pickup_time, dropoff_time) {
            (Some(pickup), Some(dropoff)) => {
                NaiveDateTime::parse_from_str(pickup, DATETIME_FORMAT).is_ok()
                    && NaiveDateTime::parse_from_str(dropoff, DATETIME_FORMAT).is_ok()
            }
            _ => false,
        };
        if !timestamps_ok {
            return Verdict::Rejected(RejectedEntry::new(
                raw_id,
                RejectionReason::MissingDatetime,
                format!("pickup={pickup_raw}, dropoff={dropoff_raw}"),
            ));
        }

        // 5. All four coordinates parse as floating-point numbers
        let coordinate_context = format!(
            "pickup_long={}, pickup_lat={}, dropoff_long={}, dropoff_lat={}",
            record.get(columns::PICKUP_LONGITUDE).unwrap_or_default(),
            record.get(columns::PICKUP_LATITUDE).unwrap_or_default(),
            record.get(columns::DROPOFF_LONGITUDE).unwrap_or_default(),
            record.get(columns::DROPOFF_LATITUDE).unwrap_or_default(),
        );
        let parsed = (
            parse_coordinate(record, columns::PICKUP_LONGITUDE),
            parse_coordinate(record, columns::PICKUP_LATITUDE),
            parse_coordinate(record, columns::DROPOFF_LONGITUDE),
            parse_coordinate(record, columns::DROPOFF_LATITUDE),
        );
        let (
            Some(pickup_longitude),
            Some(pickup_latitude),
            Some(dropoff_longitude),
            Some(dropoff_latitude),
        ) = parsed
        else {
            return Verdict::Rejected(RejectedEntry::new(
                raw_id,
                RejectionReason::InvalidCoordinates,
                coordinate_context,
            ));
        };

        // 6. Duration is a strictly positive integer
        let duration_raw = record.get(columns::TRIP_DURATION).unwrap_or_default();
        let trip_duration = record
            .get_non_blank(columns::TRIP_DURATION)
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|&d| d > 0);
        let Some(trip_duration) = trip_duration else {
            return Verdict::Rejected(RejectedEntry::new(
                raw_id,
                RejectionReason::InvalidTripDuration,
                format!("trip_duration={duration_raw}"),
            ));
        };

        // 7. Distance computation yields a usable result. A computed zero is
        // treated the same as no result here, matching the historical
        // behavior of this check.
        let distance = geo::trip_distance_km(
            self.config.coordinate_pairing,
            (pickup_latitude, pickup_longitude),
            (dropoff_latitude, dropoff_longitude),
        );
        let trip_distance_km = match distance {
            Some(d) if d != 0.0 => d,
            _ => {
                return Verdict::Rejected(RejectedEntry::new(
                    raw_id,
                    RejectionReason::DistanceCalcError,
                    coordinate_context,
                ));
            }
        };

        // 8. Speed within the plausible range
        let speed_kmph = trip_distance_km / (trip_duration as f64 / 3600.0);
        if speed_is_unrealistic(speed_kmph, self.config.max_reasonable_speed_kmph) {
            return Verdict::Rejected(RejectedEntry::new(
                raw_id,
                RejectionReason::UnrealisticSpeed,
                format!("trip_speed={speed_kmph}"),
            ));
        }

        // 9. Advisory region check: logs without excluding
        let bbox = &self.config.bounding_box;
        let in_region = bbox.contains(pickup_latitude, pickup_longitude)
            && bbox.contains(dropoff_latitude, dropoff_longitude);
        let mut advisories = Vec::new();
        if !in_region {
            debug!("Trip {} has an endpoint outside the region", raw_id);
            advisories.push(RejectedEntry::new(
                raw_id,
                RejectionReason::OutsideOfNyc,
                coordinate_context,
            ));
        }

        let trip = AcceptedTrip {
            numeric_id: extracted.value,
            original_id: raw_id.to_string(),
            vendor_id: record.get(columns::VENDOR_ID).map(str::to_string),
            pickup_datetime: pickup_raw.to_string(),
            dropoff_datetime: dropoff_raw.to_string(),
            passenger_count: record
                .get_non_blank(columns::PASSENGER_COUNT)
                .and_then(|s| s.parse::<i64>().ok()),
            pickup_longitude,
            pickup_latitude,
            dropoff_longitude,
            dropoff_latitude,
            store_and_fwd_flag: record.get(columns::STORE_AND_FWD_FLAG).map(str::to_string),
            trip_duration,
            trip_distance_km,
            speed_kmph,
            is_round_trip: trip_distance_km < self.config.round_trip_threshold_km,
            in_region,
        };

        Verdict::Accepted {
            trip: Box::new(trip),
            advisories,
        }
    }
}

/// Parse one coordinate field, `None` when absent, blank or unparseable
fn parse_coordinate(record: &RawTripRecord, column: &str) -> Option<f64> {
    record
        .get_non_blank(column)
        .and_then(|s| s.parse::<f64>().ok())
}
