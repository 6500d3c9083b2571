//! Hour angle and horizontal (altitude/azimuth) coordinates of the Sun

use serde::{Deserialize, Serialize};

use super::EquatorialPosition;
use crate::constants::{DEG2RAD, RAD2DEG};
use crate::coordinates::angle::{hours_to_degrees, normalize_degrees};
use crate::coordinates::GeoCoordinate;
use crate::time::sidereal::greenwich_sidereal_time;

/// Sun's position on the observer's sky
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPosition {
    /// Geometric altitude of the disk centre above the horizon, degrees.
    /// No refraction is applied.
    pub altitude: f64,
    /// Azimuth in degrees, measured from north through east, [0, 360)
    pub azimuth: f64,
    /// Local hour angle in degrees, [0, 360)
    pub hour_angle: f64,
}

/// Local hour angle of the Sun in degrees, [0, 360).
///
/// H = 15·GMST(d) + longitude − 15·RA, with the sidereal time taken at the
/// instant `d` and longitude east positive.
pub fn hour_angle(d: f64, longitude: f64) -> f64 {
    let ra = EquatorialPosition::at(d).right_ascension;
    local_hour_angle(d, longitude, ra)
}

fn local_hour_angle(d: f64, longitude: f64, right_ascension: f64) -> f64 {
    normalize_degrees(
        hours_to_degrees(greenwich_sidereal_time(d)) + longitude - hours_to_degrees(right_ascension),
    )
}

/// Altitude in degrees for latitude, declination and hour angle in degrees.
///
/// sin h = sin φ·sin δ + cos φ·cos δ·cos H
pub fn altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let (phi, delta, h) = (latitude * DEG2RAD, declination * DEG2RAD, hour_angle * DEG2RAD);
    let sin_alt = phi.sin() * delta.sin() + phi.cos() * delta.cos() * h.cos();
    sin_alt.clamp(-1.0, 1.0).asin() * RAD2DEG
}

/// Azimuth in degrees from north through east, [0, 360).
///
/// A = atan2(sin H, cos H·sin φ − tan δ·cos φ) + 180°
pub fn azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let (phi, delta, h) = (latitude * DEG2RAD, declination * DEG2RAD, hour_angle * DEG2RAD);
    let south_based = h.sin().atan2(h.cos() * phi.sin() - delta.tan() * phi.cos());
    normalize_degrees(south_based * RAD2DEG + 180.0)
}

/// Altitude, azimuth and hour angle of the Sun for an observer at day count `d`.
pub fn horizontal_position(d: f64, geo: &GeoCoordinate) -> HorizontalPosition {
    let pos = EquatorialPosition::at(d);
    let h = local_hour_angle(d, geo.longitude, pos.right_ascension);

    HorizontalPosition {
        altitude: altitude(geo.latitude, pos.declination, h),
        azimuth: azimuth(geo.latitude, pos.declination, h),
        hour_angle: h,
    }
}
