//! # Angle Normalization Module
//!
//! Every angle produced by the solar pipeline passes through the helpers in
//! this module, so wrap-around is handled the same way everywhere.
//!
//! ## Conventions
//!
//! - [`normalize`], [`normalize_degrees`] and [`normalize_hours`] return the
//!   least non-negative representative of an angle: `[0, 2π)`, `[0°, 360°)`
//!   and `[0h, 24h)` respectively.
//! - [`wrap_hours`] and [`wrap_degrees`] return the representative nearest to
//!   zero, in `(-12h, 12h]` and `(-180°, 180°]`. Differences of angles
//!   (hour angles, transit offsets) use these so that the result lands on the
//!   intended side of the day boundary.
//!
//! ## Examples
//!
//! ```rust
//! use sunfield::coordinates::angle::{normalize_degrees, wrap_hours};
//!
//! assert_eq!(normalize_degrees(-90.0), 270.0);
//! assert_eq!(wrap_hours(23.0), -1.0);
//! assert_eq!(wrap_hours(-12.0), 12.0);
//! ```

use crate::constants::{DEGREES_PER_HOUR, HOURS_PER_DAY, TAU};

/// Reduce `x` into `[0, period)`.
///
/// `rem_euclid` can round up to exactly `period` for tiny negative inputs;
/// that case is folded back to zero so the upper bound stays open.
pub fn normalize_period(x: f64, period: f64) -> f64 {
    let r = x.rem_euclid(period);
    if r >= period {
        0.0
    } else {
        r
    }
}

/// Reduce an angle in radians into `[0, 2π)`.
pub fn normalize(radians: f64) -> f64 {
    normalize_period(radians, TAU)
}

/// Reduce an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    normalize_period(degrees, 360.0)
}

/// Reduce a time angle in hours into `[0, 24)`.
pub fn normalize_hours(hours: f64) -> f64 {
    normalize_period(hours, HOURS_PER_DAY)
}

/// Nearest representative of `x` in `(-period/2, period/2]`.
pub fn wrap_period(x: f64, period: f64) -> f64 {
    let half = period / 2.0;
    let w = x - period * (x / period + 0.5).floor();
    if w <= -half {
        w + period
    } else {
        w
    }
}

/// Nearest representative of a time angle in `(-12, 12]` hours.
pub fn wrap_hours(hours: f64) -> f64 {
    wrap_period(hours, HOURS_PER_DAY)
}

/// Nearest representative of an angle in `(-180, 180]` degrees.
pub fn wrap_degrees(degrees: f64) -> f64 {
    wrap_period(degrees, 360.0)
}

/// Convert a time angle in hours to degrees
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * DEGREES_PER_HOUR
}

/// Convert an angle in degrees to hours
pub fn degrees_to_hours(degrees: f64) -> f64 {
    degrees / DEGREES_PER_HOUR
}
