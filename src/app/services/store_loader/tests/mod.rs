//! Tests for the store loader

mod loader_tests;

use crate::app::models::AcceptedTrip;

/// Build a minimal valid trip with the given numeric id
pub fn make_trip(numeric_id: i64) -> AcceptedTrip {
    AcceptedTrip {
        numeric_id,
        original_id: format!("id{numeric_id}"),
        vendor_id: Some("1".to_string()),
        pickup_datetime: "2016-03-14 17:24:55".to_string(),
        dropoff_datetime: "2016-03-14 17:32:30".to_string(),
        passenger_count: Some(1),
        pickup_longitude: -73.982155,
        pickup_latitude: 40.767937,
        dropoff_longitude: -73.964630,
        dropoff_latitude: 40.765602,
        store_and_fwd_flag: Some("N".to_string()),
        trip_duration: 455,
        trip_distance_km: 0.259641,
        speed_kmph: 2.054303,
        is_round_trip: false,
        in_region: true,
    }
}
