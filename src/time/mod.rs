//! Time module for solar calculations
//!
//! The solar pipeline runs on a single continuous day count,
//! `d = JD - 2451545.0` (days since J2000.0). This module converts between
//! that count, Julian dates and `chrono` calendar values. No leap seconds or
//! time-scale differences are modelled: UT, TT and the day count are treated
//! as one uniform scale.
//!
//! The formulas are accurate for roughly 1901–2099. Outside that window they
//! keep working but degrade silently; front ends can use
//! [`is_within_accuracy_range`] to warn.

use crate::constants::{DAY_S, HOURS_PER_DAY, J2000, VALID_FROM_JD, VALID_UNTIL_JD};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use thiserror::Error;

pub mod equation;
pub mod sidereal;

/// Julian date of the Unix epoch (1970-01-01 0h UT)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Parsing error: {0}")]
    ParseError(String),

    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Days since J2000.0 for a Julian date.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000
}

/// Julian date for a J2000 day count.
pub fn julian_day(d: f64) -> f64 {
    d + J2000
}

/// Whether `jd` lies in 1901–2099, where the low-precision formulas hold
/// their stated accuracy.
pub fn is_within_accuracy_range(jd: f64) -> bool {
    (VALID_FROM_JD..VALID_UNTIL_JD).contains(&jd)
}

/// Julian date of 0h UT on the calendar day containing `jd`.
pub fn day_start(jd: f64) -> f64 {
    (jd + 0.5).floor() - 0.5
}

/// Day count of local mean noon on the calendar day containing `jd`.
///
/// This is 12h UT of that day shifted by `-longitude/360` (east positive).
/// Solar positions evaluated here are the best single-sample estimate for
/// that day's events at the given longitude.
pub fn local_noon_days(jd: f64, longitude: f64) -> f64 {
    days_since_j2000(day_start(jd) + 0.5) - longitude / 360.0
}

/// Convert (year, month, day) to a Julian day number
///
/// Uses the proleptic Gregorian calendar. The result is the Julian date of
/// noon UT on that day.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let janfeb = month < 3;

    1461 * (year + 4800 - if janfeb { 1 } else { 0 }) / 4
        + 367 * (month - 2 + if janfeb { 12 } else { 0 }) / 12
        - 3 * ((year + 4900 - if janfeb { 1 } else { 0 }) / 100) / 4
        - 32075
        + day
}

/// Convert a Julian day number to a calendar date (year, month, day)
///
/// Proleptic Gregorian calendar. See the Explanatory Supplement to the
/// Astronomical Almanac 15.11.
pub fn calendar_date(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + (4 * jdn + 274_277) / 146_097 * 3 / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

    (year as i32, month as u32, day as u32)
}

/// Julian date of 0h UT on a calendar date.
pub fn julian_day_from_date(date: NaiveDate) -> f64 {
    julian_day_number(date.year(), date.month(), date.day()) as f64 - 0.5
}

/// Julian date of a UTC instant.
pub fn julian_day_from_datetime(dt: &DateTime<Utc>) -> f64 {
    let seconds = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;
    julian_day_from_date(dt.date_naive()) + seconds / DAY_S
}

/// UTC instant of a Julian date, to the nearest millisecond.
pub fn datetime_from_julian_day(jd: f64) -> Result<DateTime<Utc>> {
    if !jd.is_finite() {
        return Err(TimeError::OutOfRange(format!("Julian date {jd}")));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * DAY_S * 1000.0).round();
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .ok_or_else(|| TimeError::OutOfRange(format!("Julian date {jd}")))
}

/// UTC instant `hours` after 0h UT of the day starting at `day_start_jd`.
///
/// Event times are reported as hours on their calendar day and may fall
/// outside [0, 24); the instant then lands on the neighbouring day.
pub fn datetime_from_ut_hours(day_start_jd: f64, hours: f64) -> Result<DateTime<Utc>> {
    datetime_from_julian_day(day_start_jd + hours / HOURS_PER_DAY)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| TimeError::ParseError(format!("'{s}' is not a YYYY-MM-DD date: {e}")))
}

/// Format a Julian date as a calendar date string (YYYY-MM-DD)
pub fn format_date(jd: f64) -> String {
    let (year, month, day) = calendar_date((jd + 0.5).floor() as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Format UT hours as `HH:MM:SS`, wrapped into [0, 24).
pub fn format_hours(hours: f64) -> String {
    let total = (hours.rem_euclid(HOURS_PER_DAY) * 3600.0).round() as i64 % 86_400;
    format!("{:02}:{:02}:{:02}", total / 3600, total / 60 % 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(2000, 1, 1, 2_451_545)]
    #[case(2020, 1, 1, 2_458_850)]
    #[case(1969, 7, 20, 2_440_423)]
    #[case(1900, 1, 1, 2_415_021)]
    #[case(2016, 11, 29, 2_457_722)]
    fn test_julian_day_number(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: i64,
    ) {
        assert_eq!(julian_day_number(year, month, day), expected);
        assert_eq!(calendar_date(expected), (year, month, day));
    }

    #[test]
    fn test_days_since_j2000() {
        assert_eq!(days_since_j2000(J2000), 0.0);
        assert_eq!(julian_day(days_since_j2000(2_452_930.25)), 2_452_930.25);
    }

    #[test]
    fn test_day_start() {
        // 2003-10-17 19:30 UT
        assert_eq!(day_start(2_452_930.3128), 2_452_929.5);
        // exactly midnight stays on its own day
        assert_eq!(day_start(2_452_929.5), 2_452_929.5);
        // just before midnight belongs to the previous day
        assert_eq!(day_start(2_452_929.499), 2_452_928.5);
    }

    #[test]
    fn test_local_noon_days() {
        let jd = julian_day_number(2016, 11, 29) as f64;
        let d = local_noon_days(jd - 0.3, -88.743);
        assert_relative_eq!(d, 6177.0 + 88.743 / 360.0, epsilon = 1e-9);
        // Greenwich noon on J2000 day
        assert_eq!(local_noon_days(J2000, 0.0), 0.0);
    }

    #[test]
    fn test_accuracy_range() {
        assert!(is_within_accuracy_range(J2000));
        assert!(!is_within_accuracy_range(2_415_020.5)); // 1900-01-01
        assert!(!is_within_accuracy_range(2_488_100.0)); // 2100
    }

    #[test]
    fn test_from_datetime() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_relative_eq!(julian_day_from_datetime(&dt), J2000, epsilon = 1e-9);

        let dt = Utc.with_ymd_and_hms(2017, 1, 11, 0, 10, 10).unwrap();
        assert_relative_eq!(julian_day_from_datetime(&dt), 2_457_764.507_060_185, epsilon = 1e-8);
    }

    #[test]
    fn test_datetime_round_trip() {
        let jd = 2_452_930.312_847_222;
        let dt = datetime_from_julian_day(jd).unwrap();
        assert_eq!(dt.to_rfc3339(), "2003-10-17T19:30:30+00:00");
        assert_relative_eq!(julian_day_from_datetime(&dt), jd, epsilon = 1e-7);
    }

    #[test]
    fn test_datetime_from_ut_hours_spills_into_next_day() {
        let start = julian_day_from_date(NaiveDate::from_ymd_opt(2003, 10, 17).unwrap());
        let dt = datetime_from_ut_hours(start, 24.5).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2003, 10, 18, 0, 30, 0).unwrap());
    }

    #[test]
    fn test_datetime_out_of_range() {
        assert!(matches!(
            datetime_from_julian_day(f64::NAN),
            Err(TimeError::OutOfRange(_))
        ));
        assert!(datetime_from_julian_day(1e15).is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2016-11-29").unwrap();
        assert_eq!(julian_day_from_date(date), 2_457_721.5);
        assert!(matches!(parse_date("29/11/2016"), Err(TimeError::ParseError(_))));
        assert!(parse_date("2016-02-30").is_err());
    }

    #[rstest]
    #[case(0.0, "00:00:00")]
    #[case(13.5, "13:30:00")]
    #[case(24.327_292, "00:19:38")]
    #[case(-0.5, "23:30:00")]
    #[case(23.999_999_9, "00:00:00")]
    fn test_format_hours(#[case] hours: f64, #[case] expected: &str) {
        assert_eq!(format_hours(hours), expected);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(J2000), "2000-01-01");
        assert_eq!(format_date(2_452_929.5), "2003-10-17");
    }
}
