//! Application constants for the trip processor
//!
//! This module contains the validation thresholds, regional bounds, input
//! column names and storage defaults used throughout the application.

// =============================================================================
// Validation Thresholds
// =============================================================================

/// Maximum speed in km/h considered physically plausible for a trip
///
/// Trips faster than this are rejected as `unrealistic_speed`. The default
/// approximates the highest posted speed limit in the NYC region.
pub const DEFAULT_MAX_REASONABLE_SPEED_KMPH: f64 = 80.0;

/// Distance in km under which a trip is classified as a round trip
pub const DEFAULT_ROUND_TRIP_THRESHOLD_KM: f64 = 0.2;

/// Expected timestamp format for pickup/dropoff fields
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Regional Bounds
// =============================================================================

/// Approximate bounding box for the NYC region
///
/// Coordinates falling outside this rectangle trigger the advisory
/// `outside_of_nyc` rejection reason without excluding the record.
pub mod nyc_bounds {
    pub const MIN_LATITUDE: f64 = 40.4774;
    pub const MAX_LATITUDE: f64 = 40.9176;
    pub const MIN_LONGITUDE: f64 = -74.2591;
    pub const MAX_LONGITUDE: f64 = -73.7004;
}

/// Mean Earth radius in kilometers used by the haversine approximation
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// =============================================================================
// Input Column Names
// =============================================================================

/// Column names expected in the source CSV header row
pub mod columns {
    pub const ID: &str = "id";
    pub const VENDOR_ID: &str = "vendor_id";
    pub const PICKUP_DATETIME: &str = "pickup_datetime";
    pub const DROPOFF_DATETIME: &str = "dropoff_datetime";
    pub const PASSENGER_COUNT: &str = "passenger_count";
    pub const PICKUP_LONGITUDE: &str = "pickup_longitude";
    pub const PICKUP_LATITUDE: &str = "pickup_latitude";
    pub const DROPOFF_LONGITUDE: &str = "dropoff_longitude";
    pub const DROPOFF_LATITUDE: &str = "dropoff_latitude";
    pub const STORE_AND_FWD_FLAG: &str = "store_and_fwd_flag";
    pub const TRIP_DURATION: &str = "trip_duration";
}

// =============================================================================
// Storage Defaults
// =============================================================================

/// Number of inserted rows per commit during bulk load
pub const DEFAULT_COMMIT_INTERVAL: usize = 1000;

/// Header row written to the rejection log
pub const REJECTION_LOG_HEADER: &[&str] = &["raw_id", "reason", "sample_fields"];
