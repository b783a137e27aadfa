//! Tests for trip validation, identifier extraction and geo derivation

mod id_extract_tests;

use crate::app::models::{ColumnMap, RawTripRecord, Verdict};
use crate::app::services::trip_validator::TripValidator;
use csv::StringRecord;

/// Header row matching the standard source layout
pub const TEST_HEADERS: &[&str] = &[
    "id",
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
];

/// A fully valid Midtown trip row with the given id
pub fn valid_row(id: &str) -> Vec<String> {
    vec![
        id.to_string(),
        "2".to_string(),
        "2016-03-14 17:24:55".to_string(),
        "2016-03-14 17:32:30".to_string(),
        "1".to_string(),
        "-73.982155".to_string(),
        "40.767937".to_string(),
        "-73.964630".to_string(),
        "40.765602".to_string(),
        "N".to_string(),
        "455".to_string(),
    ]
}

/// Run one row through a validator, building the record view in place
pub fn validate_row(validator: &mut TripValidator, values: &[String]) -> Verdict {
    let header = StringRecord::from(TEST_HEADERS.to_vec());
    let columns = ColumnMap::from_header(&header);
    let record = StringRecord::from(values.to_vec());
    let raw = RawTripRecord::new(&columns, &record);
    validator.validate(&raw)
}

/// Replace one column of a row by header name
pub fn with_field(mut row: Vec<String>, column: &str, value: &str) -> Vec<String> {
    let index = TEST_HEADERS
        .iter()
        .position(|&name| name == column)
        .expect("known column");
    row[index] = value.to_string();
    row
}
