//! Great-circle distance and regional containment
//!
//! Distance uses the haversine approximation on a sphere of radius
//! 6371.0 km. The computation never panics: non-finite inputs or a
//! non-finite result signal "no result" with `None`. A legitimately computed
//! zero distance is a valid value here — treating zero as a failure is the
//! validator's concern, not the calculator's.

use crate::config::CoordinatePairing;
use crate::constants::EARTH_RADIUS_KM;

/// Haversine great-circle distance in kilometers between two
/// (latitude, longitude) pairs in degrees
///
/// Returns `None` when any input or the computed result is not a finite
/// number.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> Option<f64> {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    if ![lat1, lon1, lat2, lon2].iter().all(|v| v.is_finite()) {
        return None;
    }

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance = EARTH_RADIUS_KM * c;

    distance.is_finite().then_some(distance)
}

/// Trip distance under the configured coordinate pairing policy
///
/// `Legacy` reproduces the historical pairing: the effective points are
/// (pickup_lat, dropoff_lon) and (dropoff_lat, dropoff_lon), so the
/// longitude delta collapses to zero and only the latitude difference
/// contributes. `Corrected` pairs pickup and dropoff properly.
pub fn trip_distance_km(
    pairing: CoordinatePairing,
    pickup: (f64, f64),
    dropoff: (f64, f64),
) -> Option<f64> {
    match pairing {
        CoordinatePairing::Legacy => haversine_km((pickup.0, dropoff.1), (dropoff.0, dropoff.1)),
        CoordinatePairing::Corrected => haversine_km(pickup, dropoff),
    }
}
