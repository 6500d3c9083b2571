//! Routines to solve for circumstances like sunrise, sunset, and twilight
//!
//! Everything here is closed form: the Sun's position is sampled once at the
//! requested day count and its diurnal circle is intersected with an altitude
//! threshold. Times are UT hours relative to 0h UT of the day the sample
//! belongs to and are left unwrapped, so a sunset after midnight UT comes
//! back as a value above 24.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::constants::{DEG2RAD, HORIZON_REFRACTION_DEG, RAD2DEG, SUN_ANGULAR_RADIUS_DEG};
use crate::coordinates::angle::{degrees_to_hours, wrap_hours};
use crate::coordinates::GeoCoordinate;
use crate::positions::EquatorialPosition;
use crate::time::sidereal::local_sidereal_time;

pub mod events;

pub use events::{sun_events, sun_events_for_day, sun_events_range, SunEvents};

/// Altitude the Sun must cross for each kind of event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AltitudeThreshold {
    /// Upper limb at −35′, the standard refraction at the horizon
    RiseSet,
    /// Disk centre at −6°
    CivilTwilight,
    /// Disk centre at −12°
    NauticalTwilight,
    /// Disk centre at −18°
    AstronomicalTwilight,
}

impl AltitudeThreshold {
    pub const ALL: [AltitudeThreshold; 4] = [
        AltitudeThreshold::RiseSet,
        AltitudeThreshold::CivilTwilight,
        AltitudeThreshold::NauticalTwilight,
        AltitudeThreshold::AstronomicalTwilight,
    ];

    /// Target altitude in degrees
    pub fn altitude_deg(self) -> f64 {
        match self {
            Self::RiseSet => -HORIZON_REFRACTION_DEG,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
        }
    }

    /// Whether the threshold refers to the Sun's upper limb rather than its centre
    pub fn upper_limb(self) -> bool {
        matches!(self, Self::RiseSet)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::RiseSet => "sunrise/sunset",
            Self::CivilTwilight => "civil twilight",
            Self::NauticalTwilight => "nautical twilight",
            Self::AstronomicalTwilight => "astronomical twilight",
        }
    }
}

/// Outcome of intersecting the Sun's diurnal circle with an altitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventResult {
    /// The Sun crosses the altitude twice; times in UT hours
    Normal { rise: f64, set: f64 },
    /// The Sun stays above the altitude all day
    AlwaysAbove,
    /// The Sun never reaches the altitude
    AlwaysBelow,
}

impl EventResult {
    /// Time of the upward crossing
    pub fn rise(self) -> EventTime {
        match self {
            Self::Normal { rise, .. } => EventTime::At(rise),
            Self::AlwaysAbove => EventTime::AlwaysAbove,
            Self::AlwaysBelow => EventTime::AlwaysBelow,
        }
    }

    /// Time of the downward crossing
    pub fn set(self) -> EventTime {
        match self {
            Self::Normal { set, .. } => EventTime::At(set),
            Self::AlwaysAbove => EventTime::AlwaysAbove,
            Self::AlwaysBelow => EventTime::AlwaysBelow,
        }
    }

    /// Hours spent above the altitude: 24 for [`EventResult::AlwaysAbove`],
    /// 0 for [`EventResult::AlwaysBelow`].
    pub fn duration(self) -> f64 {
        match self {
            Self::Normal { rise, set } => set - rise,
            Self::AlwaysAbove => 24.0,
            Self::AlwaysBelow => 0.0,
        }
    }

    pub fn is_normal(self) -> bool {
        matches!(self, Self::Normal { .. })
    }
}

/// A single crossing time, or the reason there is none
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum EventTime {
    At(f64),
    AlwaysAbove,
    AlwaysBelow,
}

impl EventTime {
    /// UT hours of the crossing, if there is one
    pub fn hours(self) -> Option<f64> {
        match self {
            Self::At(hours) => Some(hours),
            _ => None,
        }
    }
}

/// Transit time plus the half-width of the arc spent above an altitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiurnalArc {
    /// UT hours of the meridian passage, [0, 24)
    pub transit: f64,
    /// Half the time above the altitude, hours in [0, 12]
    pub half_arc: f64,
    pub result: EventResult,
}

/// UT hours of the Sun's meridian transit at an east-positive longitude.
///
/// transit = 12 − wrap(LST − RA), with the sidereal time taken at `d` and
/// the difference reduced to its nearest representative in (−12, 12].
pub fn transit_time(d: f64, longitude: f64) -> f64 {
    let position = EquatorialPosition::at(d);
    transit_from(d, longitude, &position)
}

fn transit_from(d: f64, longitude: f64, position: &EquatorialPosition) -> f64 {
    12.0 - wrap_hours(local_sidereal_time(d, longitude) - position.right_ascension)
}

/// Transit and diurnal arc for an arbitrary altitude in degrees.
///
/// With `upper_limb` set the altitude is lowered by the Sun's apparent
/// radius, `0.2666° / r`, so the crossing is that of the upper edge.
pub fn diurnal_arc(d: f64, geo: &GeoCoordinate, altitude_deg: f64, upper_limb: bool) -> DiurnalArc {
    let position = EquatorialPosition::at(d);
    let transit = transit_from(d, geo.longitude, &position);
    arc_from_position(&position, transit, geo.latitude, altitude_deg, upper_limb)
}

/// Solve one threshold at day count `d`.
pub fn solve(d: f64, geo: &GeoCoordinate, threshold: AltitudeThreshold) -> EventResult {
    diurnal_arc(d, geo, threshold.altitude_deg(), threshold.upper_limb()).result
}

pub(crate) fn arc_from_position(
    position: &EquatorialPosition,
    transit: f64,
    latitude: f64,
    altitude_deg: f64,
    upper_limb: bool,
) -> DiurnalArc {
    let altitude = if upper_limb {
        altitude_deg - SUN_ANGULAR_RADIUS_DEG / position.radius_vector
    } else {
        altitude_deg
    };

    let phi = latitude * DEG2RAD;
    let delta = position.declination * DEG2RAD;
    let cos_h = ((altitude * DEG2RAD).sin() - phi.sin() * delta.sin()) / (phi.cos() * delta.cos());
    trace!("altitude {altitude:.4}°, dec {:.4}°: cos H = {cos_h:.6}", position.declination);

    let (half_arc, result) = if cos_h >= 1.0 {
        debug!("Sun stays below {altitude:.3}° at latitude {latitude}");
        (0.0, EventResult::AlwaysBelow)
    } else if cos_h <= -1.0 {
        debug!("Sun stays above {altitude:.3}° at latitude {latitude}");
        (12.0, EventResult::AlwaysAbove)
    } else {
        let h = degrees_to_hours(cos_h.acos() * RAD2DEG);
        (
            h,
            EventResult::Normal {
                rise: transit - h,
                set: transit + h,
            },
        )
    };

    DiurnalArc {
        transit,
        half_arc,
        result,
    }
}
