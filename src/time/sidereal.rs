//! Greenwich and local mean sidereal time.
//!
//! Two flavours are provided:
//!
//! - [`mean_sidereal_time`] / [`local_sidereal_time`]: the noon-referenced
//!   sidereal time used by the transit solver. Whole rotations of the Earth
//!   are dropped, so the value only drifts with the Sun's mean motion
//!   (~0.9856°/day) as `d` moves within a day. For integral `d` (12h UT) it
//!   equals GMST.
//! - [`greenwich_sidereal_time`] / [`local_sidereal_time_at`]: sidereal time
//!   at the instant `d`, advancing ~360.9856°/day. Hour angles and
//!   horizontal coordinates use these.
//!
//! All results are in hours, normalized into [0, 24).
//!
//! Source: Meeus, Astronomical Algorithms, 2nd ed., eq. 12.4.

use crate::constants::{DAYS_PER_CENTURY, HOURS_PER_DAY};
use crate::coordinates::angle::{degrees_to_hours, normalize_degrees, normalize_hours};
use crate::time::{day_start, days_since_j2000};

/// Mean sidereal time at Greenwich, noon-referenced, in hours.
///
/// θ = 280.46061837° + 36000.770053608°·T + 0.000387933°·T² − T³/38710000
/// where T = d / 36525 Julian centuries from J2000.0.
pub fn mean_sidereal_time(d: f64) -> f64 {
    let t = d / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let theta = 280.460_618_37 + 36_000.770_053_608 * t + 0.000_387_933 * t2 - t3 / 38_710_000.0;
    degrees_to_hours(normalize_degrees(theta))
}

/// Noon-referenced local sidereal time for an east-positive longitude, in hours.
pub fn local_sidereal_time(d: f64, longitude: f64) -> f64 {
    normalize_hours(mean_sidereal_time(d) + degrees_to_hours(longitude))
}

/// Greenwich mean sidereal time at the instant `d`, in hours.
///
/// Adds the Earth's rotation since noon back onto [`mean_sidereal_time`]:
/// GMST = θ + 24h·d (mod 24h), the full 360.98564736629°/day rate.
pub fn greenwich_sidereal_time(d: f64) -> f64 {
    normalize_hours(mean_sidereal_time(d) + HOURS_PER_DAY * d.rem_euclid(1.0))
}

/// Local mean sidereal time at the instant `d`, in hours.
pub fn local_sidereal_time_at(d: f64, longitude: f64) -> f64 {
    normalize_hours(greenwich_sidereal_time(d) + degrees_to_hours(longitude))
}

/// Greenwich mean sidereal time at 0h UT of the calendar day containing `jd`.
pub fn sidereal_time_at_midnight(jd: f64) -> f64 {
    greenwich_sidereal_time(days_since_j2000(day_start(jd)))
}
