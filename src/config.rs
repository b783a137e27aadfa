//! Configuration management and validation.
//!
//! Provides configuration structures for the validation thresholds, regional
//! bounding box, distance pairing policy and store loader behavior.

use crate::constants::{
    DEFAULT_COMMIT_INTERVAL, DEFAULT_MAX_REASONABLE_SPEED_KMPH, DEFAULT_ROUND_TRIP_THRESHOLD_KM,
    nyc_bounds,
};
use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Latitude/longitude rectangle approximating a city region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Check whether a coordinate pair falls inside the box (inclusive)
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&latitude)
            && (self.min_longitude..=self.max_longitude).contains(&longitude)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min_latitude: nyc_bounds::MIN_LATITUDE,
            max_latitude: nyc_bounds::MAX_LATITUDE,
            min_longitude: nyc_bounds::MIN_LONGITUDE,
            max_longitude: nyc_bounds::MAX_LONGITUDE,
        }
    }
}

/// Coordinate pairing policy for the great-circle distance computation
///
/// The reference pipeline this tool replaces computed distance from the
/// effective points (pickup_lat, dropoff_lon) and (dropoff_lat, dropoff_lon),
/// collapsing the longitude delta to zero. `Legacy` reproduces that pairing
/// so stored distances stay comparable with historical loads; `Corrected`
/// uses the true pickup/dropoff pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CoordinatePairing {
    /// Reproduce the historical pairing (latitude-only distance)
    Legacy,
    /// True pickup/dropoff great-circle distance
    Corrected,
}

/// Validation configuration for one batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Maximum plausible trip speed in km/h
    pub max_reasonable_speed_kmph: f64,

    /// Distance in km below which a trip counts as a round trip
    pub round_trip_threshold_km: f64,

    /// Regional bounding box for the advisory outside-of-region check
    pub bounding_box: BoundingBox,

    /// Distance computation pairing policy
    pub coordinate_pairing: CoordinatePairing,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_reasonable_speed_kmph: DEFAULT_MAX_REASONABLE_SPEED_KMPH,
            round_trip_threshold_km: DEFAULT_ROUND_TRIP_THRESHOLD_KM,
            bounding_box: BoundingBox::default(),
            coordinate_pairing: CoordinatePairing::Legacy,
        }
    }
}

/// Store loader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Number of inserted rows per transaction commit
    pub commit_interval: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            commit_interval: DEFAULT_COMMIT_INTERVAL,
        }
    }
}

/// Top-level configuration for a batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub validation: ValidationConfig,
    pub loader: LoaderConfig,
}

impl Config {
    /// Validate configuration values for consistency and sane ranges
    pub fn validate(&self) -> Result<()> {
        if self.validation.max_reasonable_speed_kmph <= 0.0 {
            return Err(Error::configuration(format!(
                "Maximum reasonable speed must be positive, got {}",
                self.validation.max_reasonable_speed_kmph
            )));
        }

        if self.validation.round_trip_threshold_km < 0.0 {
            return Err(Error::configuration(format!(
                "Round trip threshold cannot be negative, got {}",
                self.validation.round_trip_threshold_km
            )));
        }

        let bbox = &self.validation.bounding_box;
        if bbox.min_latitude > bbox.max_latitude || bbox.min_longitude > bbox.max_longitude {
            return Err(Error::configuration(
                "Bounding box minimum exceeds maximum".to_string(),
            ));
        }

        if self.loader.commit_interval == 0 {
            return Err(Error::configuration(
                "Commit interval must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
