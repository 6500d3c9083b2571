//! Sunfield: low-precision solar ephemeris and daily sun events
//!
//! This crate computes the Sun's apparent position for an observer on Earth
//! and derives sunrise, sunset, solar transit and civil, nautical and
//! astronomical twilight, together with the equation of time, sidereal time
//! and horizontal coordinates. Accuracy is about one arcminute (roughly one
//! minute of time for events) over 1901–2099.
//!
//! The pipeline is built from pure functions of a day count
//! `d = JD − 2451545.0`:
//!
//! - [`orbit`]: mean and true anomaly, eccentricity, mean and true longitude
//! - [`positions`]: right ascension, declination, radius vector, altitude and azimuth
//! - [`time::sidereal`]: mean and local sidereal time
//! - [`almanac`]: transit, diurnal arcs and the daily events
//! - [`time::equation`]: equation of time
//!
//! The functions at the crate root take Julian dates and raw coordinates and
//! validate their input.
//!
//! ```rust
//! let events = sunfield::sun_events(2_457_721.5, 41.9475, -88.743).unwrap();
//! let rise = events.rise().hours().unwrap();
//! assert!((rise - 13.03).abs() < 0.05);
//! ```

use thiserror::Error;

pub mod almanac;
pub mod constants;
pub mod coordinates;
pub mod orbit;
pub mod positions;
pub mod time;

// Re-export commonly used types
pub use almanac::{AltitudeThreshold, DiurnalArc, EventResult, EventTime, SunEvents};
pub use coordinates::GeoCoordinate;
pub use orbit::OrbitalState;
pub use positions::{EquatorialPosition, HorizontalPosition};
pub use time::TimeError;

/// Main error type for the sunfield library
#[derive(Debug, Error)]
pub enum SunfieldError {
    #[error("Latitude {0} is outside [-90, 90] degrees")]
    InvalidLatitude(f64),

    #[error("Non-finite value for {0}")]
    NonFiniteInput(&'static str),

    #[error("Time error: {0}")]
    Time(#[from] TimeError),
}

/// Result type for sunfield operations
pub type Result<T> = std::result::Result<T, SunfieldError>;

fn finite_julian_day(julian_day: f64) -> Result<f64> {
    if julian_day.is_finite() {
        Ok(julian_day)
    } else {
        Err(SunfieldError::NonFiniteInput("julian day"))
    }
}

/// Sun's right ascension, declination and distance at a Julian date.
pub fn solar_position(julian_day: f64) -> EquatorialPosition {
    positions::solar_position(time::days_since_j2000(julian_day))
}

/// Sun events on the UT calendar day containing `julian_day`.
pub fn sun_events(julian_day: f64, latitude: f64, longitude: f64) -> Result<SunEvents> {
    Observer::new(latitude, longitude)?.sun_events(julian_day)
}

/// Equation of time at a Julian date, in minutes.
pub fn equation_of_time(julian_day: f64) -> f64 {
    time::equation::equation_of_time_minutes(time::days_since_j2000(julian_day))
}

/// Sun's altitude and azimuth for an observer at a Julian date.
pub fn altitude_azimuth(julian_day: f64, latitude: f64, longitude: f64) -> Result<HorizontalPosition> {
    Observer::new(latitude, longitude)?.altitude_azimuth(julian_day)
}

/// An observer at a fixed place on Earth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub location: GeoCoordinate,
}

impl Observer {
    /// Create an observer, validating latitude and longitude in degrees
    /// (east positive).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            location: GeoCoordinate::new(latitude, longitude)?,
        })
    }

    /// Sun events on the UT calendar day containing `julian_day`.
    pub fn sun_events(&self, julian_day: f64) -> Result<SunEvents> {
        let jd = finite_julian_day(julian_day)?;
        Ok(almanac::sun_events_for_day(jd, &self.location))
    }

    /// Events for `days` consecutive days starting with the one containing
    /// `julian_day`.
    pub fn sun_events_range(
        &self,
        julian_day: f64,
        days: u32,
    ) -> Result<impl Iterator<Item = (f64, SunEvents)>> {
        let jd = finite_julian_day(julian_day)?;
        Ok(almanac::sun_events_range(jd, days, self.location))
    }

    /// Sun's altitude, azimuth and hour angle at `julian_day`.
    pub fn altitude_azimuth(&self, julian_day: f64) -> Result<HorizontalPosition> {
        let jd = finite_julian_day(julian_day)?;
        Ok(positions::horizontal_position(
            time::days_since_j2000(jd),
            &self.location,
        ))
    }

    /// Local mean sidereal time at `julian_day`, in hours.
    pub fn local_sidereal_time(&self, julian_day: f64) -> f64 {
        time::sidereal::local_sidereal_time_at(
            time::days_since_j2000(julian_day),
            self.location.longitude,
        )
    }
}

impl From<GeoCoordinate> for Observer {
    fn from(location: GeoCoordinate) -> Self {
        Self { location }
    }
}
