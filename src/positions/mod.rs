//! Geocentric position of the Sun
//!
//! Builds the Sun's ecliptic rectangular position from the orbital elements,
//! then rotates it about the vernal-equinox axis by the obliquity of the
//! ecliptic to obtain right ascension and declination. Neither depends on the
//! observer's location.

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{DEG2RAD, RAD2DEG};
use crate::coordinates::angle::{degrees_to_hours, normalize};
use crate::orbit::OrbitalState;

pub mod horizontal;

pub use horizontal::{altitude, azimuth, hour_angle, horizontal_position, HorizontalPosition};

/// Sun's equatorial coordinates and distance at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialPosition {
    /// Right ascension in hours, [0, 24)
    pub right_ascension: f64,
    /// Declination in degrees, [-90, 90]
    pub declination: f64,
    /// Earth–Sun distance in AU
    pub radius_vector: f64,
}

impl EquatorialPosition {
    /// Compute the position at day count `d`.
    pub fn at(d: f64) -> Self {
        Self::from_elements(&OrbitalState::at(d), obliquity(d))
    }

    /// Compute the position from precomputed orbital elements and obliquity
    /// (radians).
    pub fn from_elements(state: &OrbitalState, obliquity: f64) -> Self {
        let r = orbital_radius(state.eccentric_anomaly, state.eccentricity);
        let ecliptic = ecliptic_vector(r, state.true_longitude);
        let equatorial = Rotation3::from_axis_angle(&Vector3::x_axis(), obliquity) * ecliptic;

        Self {
            right_ascension: ra_hours(&equatorial),
            declination: dec_degrees(&equatorial),
            radius_vector: r,
        }
    }
}

/// Sun's equatorial position at day count `d`.
pub fn solar_position(d: f64) -> EquatorialPosition {
    EquatorialPosition::at(d)
}

fn orbital_radius(eccentric_anomaly: f64, e: f64) -> f64 {
    let x = eccentric_anomaly.cos() - e;
    let y = (1.0 - e * e).sqrt() * eccentric_anomaly.sin();
    x.hypot(y)
}

fn ecliptic_vector(r: f64, true_longitude: f64) -> Vector3<f64> {
    Vector3::new(r * true_longitude.cos(), r * true_longitude.sin(), 0.0)
}

fn ra_hours(v: &Vector3<f64>) -> f64 {
    degrees_to_hours(normalize(v.y.atan2(v.x)) * RAD2DEG)
}

fn dec_degrees(v: &Vector3<f64>) -> f64 {
    v.z.atan2(v.x.hypot(v.y)) * RAD2DEG
}

/// Earth–Sun distance in AU.
///
/// From the orbital-plane coordinates `x = cos E − e`,
/// `y = sqrt(1 − e²)·sin E`.
pub fn radius_vector(d: f64) -> f64 {
    let state = OrbitalState::at(d);
    orbital_radius(state.eccentric_anomaly, state.eccentricity)
}

/// Ecliptic rectangular coordinates (x, y, 0) in AU, x toward the equinox.
pub fn ecliptic_position(d: f64) -> Vector3<f64> {
    let state = OrbitalState::at(d);
    let r = orbital_radius(state.eccentric_anomaly, state.eccentricity);
    ecliptic_vector(r, state.true_longitude)
}

/// Mean obliquity of the ecliptic in radians.
///
/// ε = 23.439291° − 3.563e−7°·d
pub fn obliquity(d: f64) -> f64 {
    (23.439_291 - 3.563e-7 * d) * DEG2RAD
}

/// Right ascension in hours, [0, 24).
pub fn right_ascension(d: f64) -> f64 {
    EquatorialPosition::at(d).right_ascension
}

/// Declination in degrees.
pub fn declination(d: f64) -> f64 {
    EquatorialPosition::at(d).declination
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use crate::time::julian_day_number;
    use approx::assert_abs_diff_eq;

    const D_2003: f64 = 1385.312_847_222;

    #[test]
    fn test_radius_vector() {
        assert_abs_diff_eq!(radius_vector(0.0), 0.997_235_842_199, epsilon = 1e-9);
        assert_abs_diff_eq!(radius_vector(D_2003), 1.015_081_789_743, epsilon = 1e-9);
    }

    #[test]
    fn test_ecliptic_position() {
        let v = ecliptic_position(D_2003);
        assert_abs_diff_eq!(v.x, -0.927_166_542, epsilon = 1e-8);
        assert_abs_diff_eq!(v.y, -0.413_222_994, epsilon = 1e-8);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_obliquity() {
        assert_abs_diff_eq!(obliquity(0.0), 0.409_092_802_283, epsilon = 1e-12);
        assert!(obliquity(10_000.0) < obliquity(0.0));
    }

    #[test]
    fn test_position_2003_10_17() {
        let pos = solar_position(D_2003);
        assert_abs_diff_eq!(pos.right_ascension, 13.482_670_7, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.declination, -9.318_663_9, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.radius_vector, 1.015_081_79, epsilon = 1e-8);
    }

    #[test]
    fn test_position_j2000() {
        let pos = solar_position(0.0);
        // Astronomical Almanac: RA 18h45m09s, Dec −23°01′
        assert_abs_diff_eq!(pos.right_ascension, 18.7526, epsilon = 0.01);
        assert_abs_diff_eq!(pos.declination, -23.03, epsilon = 0.05);
    }

    #[test]
    fn test_equinox_declination_near_zero() {
        // March equinox 2000-03-20 07:35 UT
        let d = julian_day_number(2000, 3, 20) as f64 - 0.5 + 7.58 / 24.0 - J2000;
        assert!(declination(d).abs() < 0.5, "equinox dec = {}", declination(d));
        // September equinox 2016-09-22 14:21 UT
        let d = julian_day_number(2016, 9, 22) as f64 - 0.5 + 14.35 / 24.0 - J2000;
        assert!(declination(d).abs() < 0.5, "equinox dec = {}", declination(d));
    }

    #[test]
    fn test_june_solstice_declination() {
        for year in [2000, 2016, 2050] {
            let d = julian_day_number(year, 6, 21) as f64 - J2000;
            assert_abs_diff_eq!(declination(d), 23.44, epsilon = 0.2);
        }
    }

    #[test]
    fn test_december_solstice_declination() {
        let d = julian_day_number(2024, 12, 21) as f64 - J2000;
        assert_abs_diff_eq!(declination(d), -23.44, epsilon = 0.2);
    }

    #[test]
    fn test_right_ascension_range() {
        let mut d = -36_000.0;
        while d < 36_000.0 {
            let ra = right_ascension(d);
            assert!((0.0..24.0).contains(&ra), "RA {ra} at d={d}");
            d += 11.7;
        }
    }

    #[test]
    fn test_right_ascension_tracks_true_longitude() {
        // RA and ecliptic longitude coincide at the equinoxes and solstices
        // and never differ by more than ~2.5°.
        for k in 0..73 {
            let d = k as f64 * 5.0;
            let lambda_h = crate::orbit::true_longitude(d).to_degrees() / 15.0;
            let diff = crate::coordinates::wrap_hours(right_ascension(d) - lambda_h);
            assert!(diff.abs() < 2.6 / 15.0, "d={d}: diff {diff}h");
        }
    }
}
