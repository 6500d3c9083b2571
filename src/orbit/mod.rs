//! Orbital elements of the Sun's apparent geocentric orbit
//!
//! Low-precision elements as functions of the day count
//! `d = JD - 2451545.0`. Every angle is returned in radians and reduced into
//! `[0, 2π)` with [`normalize`], except the true and eccentric anomalies,
//! which are sums of already-reduced terms and are used only as arguments
//! to trigonometric functions.
//!
//! Two choices are fixed here:
//!
//! - the equation of center is the series expansion in the eccentricity
//!   carried through the fifth harmonic (terms to e⁵);
//! - the longitude of perihelion is derived as `L − M`, so the true
//!   longitude computed as `L + C` or `ν + ϖ` agrees exactly.

use serde::{Deserialize, Serialize};

use crate::constants::DEG2RAD;
use crate::coordinates::angle::normalize;

/// Mean anomaly M, radians.
///
/// M = 357.5291° + 0.98560028°·d
pub fn mean_anomaly(d: f64) -> f64 {
    normalize((357.5291 + 0.985_600_28 * d) * DEG2RAD)
}

/// Eccentricity of the Earth's orbit.
///
/// e = 0.016709 − 1.151e−9·d
pub fn eccentricity(d: f64) -> f64 {
    0.016_709 - 1.151e-9 * d
}

/// Equation of center C = ν − M, radians.
pub fn equation_of_center(d: f64) -> f64 {
    equation_of_center_series(mean_anomaly(d), eccentricity(d))
}

fn equation_of_center_series(m: f64, e: f64) -> f64 {
    let e2 = e * e;
    let e3 = e2 * e;
    let e4 = e3 * e;
    let e5 = e4 * e;

    (2.0 * e - e3 / 4.0 + 5.0 * e5 / 96.0) * m.sin()
        + (5.0 * e2 / 4.0 - 11.0 * e4 / 24.0) * (2.0 * m).sin()
        + (13.0 * e3 / 12.0 - 43.0 * e5 / 64.0) * (3.0 * m).sin()
        + (103.0 * e4 / 96.0) * (4.0 * m).sin()
        + (1097.0 * e5 / 960.0) * (5.0 * m).sin()
}

/// True anomaly ν = M + C, radians.
pub fn true_anomaly(d: f64) -> f64 {
    mean_anomaly(d) + equation_of_center(d)
}

/// Mean longitude L, radians.
///
/// L = 280.4664567° + 0.9856473601037645°·d
pub fn mean_longitude(d: f64) -> f64 {
    normalize((280.466_456_7 + 0.985_647_360_103_764_5 * d) * DEG2RAD)
}

/// Eccentric anomaly, one-step approximation from the mean longitude.
///
/// E = L + e·sin L·(1 + e·cos L)
pub fn eccentric_anomaly(d: f64) -> f64 {
    let l = mean_longitude(d);
    let e = eccentricity(d);
    l + e * l.sin() * (1.0 + e * l.cos())
}

/// Longitude of perihelion ϖ = L − M, radians.
pub fn longitude_of_perihelion(d: f64) -> f64 {
    normalize(mean_longitude(d) - mean_anomaly(d))
}

/// True (geometric) ecliptic longitude λ = L + C, radians.
pub fn true_longitude(d: f64) -> f64 {
    normalize(mean_longitude(d) + equation_of_center(d))
}

/// All orbital elements at one instant, radians unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalState {
    pub mean_anomaly: f64,
    /// Dimensionless
    pub eccentricity: f64,
    pub equation_of_center: f64,
    pub true_anomaly: f64,
    pub mean_longitude: f64,
    pub eccentric_anomaly: f64,
    pub longitude_of_perihelion: f64,
    pub true_longitude: f64,
}

impl OrbitalState {
    /// Evaluate every element at day count `d`, sharing intermediate terms.
    pub fn at(d: f64) -> Self {
        let m = mean_anomaly(d);
        let e = eccentricity(d);
        let c = equation_of_center_series(m, e);
        let l = mean_longitude(d);

        Self {
            mean_anomaly: m,
            eccentricity: e,
            equation_of_center: c,
            true_anomaly: m + c,
            mean_longitude: l,
            eccentric_anomaly: l + e * l.sin() * (1.0 + e * l.cos()),
            longitude_of_perihelion: normalize(l - m),
            true_longitude: normalize(l + c),
        }
    }
}
