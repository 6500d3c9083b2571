//! Geographic observer coordinates

use serde::{Deserialize, Serialize};

use super::angle::wrap_degrees;
use crate::{Result, SunfieldError};

/// Observer location on Earth's surface.
///
/// Longitude is east positive. Every formula that consumes it relies on that
/// sign convention, so western longitudes must be given as negative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, east positive. Range: (-180, 180].
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a validated coordinate.
    ///
    /// Latitude outside [-90, 90] is rejected. Any finite longitude is
    /// accepted and wrapped into (-180, 180], so `-180.0` becomes `180.0`
    /// and `270.0` becomes `-90.0`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() {
            return Err(SunfieldError::NonFiniteInput("latitude"));
        }
        if !longitude.is_finite() {
            return Err(SunfieldError::NonFiniteInput("longitude"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SunfieldError::InvalidLatitude(latitude));
        }
        Ok(Self {
            latitude,
            longitude: wrap_degrees(longitude),
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude as a time offset from Greenwich, in hours (east positive).
    pub fn longitude_hours(&self) -> f64 {
        self.longitude / 15.0
    }
}
