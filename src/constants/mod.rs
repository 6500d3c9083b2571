//! Constants module for solar calculations

use std::f64::consts::PI;

// Time constants
/// J2000.0 epoch as Julian date (2000-01-01 12:00 TT)
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// Hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;

/// First Julian date of the accuracy window (1901-01-01 0h UT)
pub const VALID_FROM_JD: f64 = 2_415_385.5;
/// Last Julian date of the accuracy window (2100-01-01 0h UT)
pub const VALID_UNTIL_JD: f64 = 2_488_069.5;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees of rotation per hour of time
pub const DEGREES_PER_HOUR: f64 = 15.0;

// Sun
/// Apparent angular radius of the Sun at 1 AU, in degrees
pub const SUN_ANGULAR_RADIUS_DEG: f64 = 0.2666;
/// Atmospheric refraction at the horizon used for rise and set, in degrees
pub const HORIZON_REFRACTION_DEG: f64 = 35.0 / 60.0;
