//! Equation of time
//!
//! The difference between apparent and mean solar time. Positive values mean
//! the sundial runs ahead of the clock (early November peak of about +16
//! minutes); negative values mean it runs behind (mid-February, about −14
//! minutes).

use crate::coordinates::angle::{hours_to_degrees, wrap_degrees};
use crate::orbit::OrbitalState;
use crate::positions::{obliquity, EquatorialPosition};

/// Minutes of time per degree of arc
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Equation of time in degrees, (−180, 180].
///
/// EoT = M − ν + λ − 15·RA. The mean-Sun terms `M − ν + λ` reduce to the
/// mean longitude, so this is the angle between the mean Sun and the true
/// Sun's right ascension.
pub fn equation_of_time(d: f64) -> f64 {
    let state = OrbitalState::at(d);
    let position = EquatorialPosition::from_elements(&state, obliquity(d));
    let mean_sun = (state.mean_anomaly - state.true_anomaly + state.true_longitude).to_degrees();

    wrap_degrees(mean_sun - hours_to_degrees(position.right_ascension))
}

/// Equation of time in minutes of time.
pub fn equation_of_time_minutes(d: f64) -> f64 {
    equation_of_time(d) * MINUTES_PER_DEGREE
}

/// Equation of time as a fraction of a day.
pub fn equation_of_time_day_fraction(d: f64) -> f64 {
    equation_of_time(d) / 360.0
}
