//! Full set of daily solar events for an observer

use log::debug;
use serde::{Deserialize, Serialize};

use super::{arc_from_position, transit_from, AltitudeThreshold, EventResult, EventTime};
use crate::coordinates::GeoCoordinate;
use crate::positions::EquatorialPosition;
use crate::time::{day_start, local_noon_days};

/// Transit, sunrise/sunset and the three twilights for one day.
///
/// All times are UT hours relative to 0h UT of the calendar day and may fall
/// outside [0, 24).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunEvents {
    pub transit: f64,
    pub rise_set: EventResult,
    pub civil: EventResult,
    pub nautical: EventResult,
    pub astronomical: EventResult,
}

impl SunEvents {
    pub fn rise(&self) -> EventTime {
        self.rise_set.rise()
    }

    pub fn set(&self) -> EventTime {
        self.rise_set.set()
    }

    pub fn civil_start(&self) -> EventTime {
        self.civil.rise()
    }

    pub fn civil_end(&self) -> EventTime {
        self.civil.set()
    }

    pub fn nautical_start(&self) -> EventTime {
        self.nautical.rise()
    }

    pub fn nautical_end(&self) -> EventTime {
        self.nautical.set()
    }

    pub fn astronomical_start(&self) -> EventTime {
        self.astronomical.rise()
    }

    pub fn astronomical_end(&self) -> EventTime {
        self.astronomical.set()
    }

    /// Hours between sunrise and sunset (0 or 24 on polar days)
    pub fn day_length(&self) -> f64 {
        self.rise_set.duration()
    }

    /// Result for one threshold
    pub fn get(&self, threshold: AltitudeThreshold) -> EventResult {
        match threshold {
            AltitudeThreshold::RiseSet => self.rise_set,
            AltitudeThreshold::CivilTwilight => self.civil,
            AltitudeThreshold::NauticalTwilight => self.nautical,
            AltitudeThreshold::AstronomicalTwilight => self.astronomical,
        }
    }
}

/// Solve every threshold with the Sun sampled once at day count `d`.
///
/// For results that refer to a particular calendar day at the observer's
/// longitude, pass the local-noon day count or use [`sun_events_for_day`].
pub fn sun_events(d: f64, geo: &GeoCoordinate) -> SunEvents {
    let position = EquatorialPosition::at(d);
    let transit = transit_from(d, geo.longitude, &position);
    let solve = |threshold: AltitudeThreshold| {
        arc_from_position(
            &position,
            transit,
            geo.latitude,
            threshold.altitude_deg(),
            threshold.upper_limb(),
        )
        .result
    };

    SunEvents {
        transit,
        rise_set: solve(AltitudeThreshold::RiseSet),
        civil: solve(AltitudeThreshold::CivilTwilight),
        nautical: solve(AltitudeThreshold::NauticalTwilight),
        astronomical: solve(AltitudeThreshold::AstronomicalTwilight),
    }
}

/// Events on the calendar day (UT) containing the Julian date `jd`.
///
/// The Sun is sampled at local mean noon for the observer's longitude.
pub fn sun_events_for_day(jd: f64, geo: &GeoCoordinate) -> SunEvents {
    let d = local_noon_days(jd, geo.longitude);
    debug!("events for day starting JD {} sampled at d = {d:.6}", day_start(jd));
    sun_events(d, geo)
}

/// Events for `days` consecutive calendar days starting with the one that
/// contains `start_jd`.
///
/// Yields the Julian date of each day's 0h UT together with its events.
pub fn sun_events_range(
    start_jd: f64,
    days: u32,
    geo: GeoCoordinate,
) -> impl Iterator<Item = (f64, SunEvents)> {
    let first = day_start(start_jd);
    (0..days).map(move |i| {
        let jd = first + f64::from(i);
        (jd, sun_events_for_day(jd, &geo))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::julian_day_number;
    use approx::assert_abs_diff_eq;

    fn jd(year: i32, month: u32, day: u32) -> f64 {
        julian_day_number(year, month, day) as f64 - 0.5
    }

    #[test]
    fn test_dekalb_november() {
        let geo = GeoCoordinate::new(41.9475, -88.743).unwrap();
        let events = sun_events_for_day(jd(2016, 11, 29), &geo);

        // NOAA: 13:01:41, 17:43:32, 22:25:05 UT
        assert_abs_diff_eq!(events.transit, 17.7254, epsilon = 1.0 / 60.0);
        assert_abs_diff_eq!(events.rise().hours().unwrap(), 13.0281, epsilon = 1.0 / 60.0);
        assert_abs_diff_eq!(events.set().hours().unwrap(), 22.4181, epsilon = 1.0 / 60.0);
        assert_abs_diff_eq!(events.civil_start().hours().unwrap(), 12.515_373, epsilon = 1e-5);
        assert_abs_diff_eq!(events.nautical_end().hours().unwrap(), 23.512_743, epsilon = 1e-5);
        assert_abs_diff_eq!(events.astronomical_end().hours().unwrap(), 24.071_922, epsilon = 1e-5);
    }

    #[test]
    fn test_twilights_nest_around_daylight() {
        let geo = GeoCoordinate::new(-33.87, 151.21).unwrap();
        let events = sun_events_for_day(jd(2021, 8, 1), &geo);
        let starts = [
            events.astronomical_start(),
            events.nautical_start(),
            events.civil_start(),
            events.rise(),
        ]
        .map(|t| t.hours().unwrap());
        let ends = [events.set(), events.civil_end(), events.nautical_end(), events.astronomical_end()]
            .map(|t| t.hours().unwrap());

        assert!(starts.windows(2).all(|w| w[0] < w[1]), "{starts:?}");
        assert!(ends.windows(2).all(|w| w[0] < w[1]), "{ends:?}");
        assert!(starts[3] < events.transit && events.transit < ends[0]);
    }

    #[test]
    fn test_equator_day_length() {
        let geo = GeoCoordinate::new(0.0, 0.0).unwrap();
        for (start, events) in sun_events_range(jd(2023, 1, 1), 365, geo) {
            let length = events.day_length();
            assert!(
                (length - 12.0).abs() < 10.0 / 60.0,
                "day length {length} on JD {start}"
            );
        }
    }

    #[test]
    fn test_polar_day_and_night() {
        let north = GeoCoordinate::new(75.0, 0.0).unwrap();
        let south = GeoCoordinate::new(-75.0, 0.0).unwrap();

        let summer = sun_events(172.0, &north);
        assert_eq!(summer.rise(), EventTime::AlwaysAbove);
        assert_eq!(summer.astronomical, EventResult::AlwaysAbove);
        assert_eq!(summer.day_length(), 24.0);

        let winter = sun_events(172.0, &south);
        assert_eq!(winter.set(), EventTime::AlwaysBelow);
        assert_eq!(winter.civil, EventResult::AlwaysBelow);
        assert!(winter.nautical.is_normal());
        assert_eq!(winter.day_length(), 0.0);
    }

    #[test]
    fn test_single_threshold_agrees() {
        let geo = GeoCoordinate::new(28.6139, 77.209).unwrap();
        let d = local_noon_days(jd(2024, 3, 20), geo.longitude);
        let events = sun_events(d, &geo);
        for threshold in AltitudeThreshold::ALL {
            assert_eq!(events.get(threshold), super::super::solve(d, &geo, threshold));
        }
        // New Delhi: astronomical dawn falls on the previous UT day
        assert!(events.astronomical_start().hours().unwrap() < 0.0);
    }

    #[test]
    fn test_range_days_are_consecutive() {
        let geo = GeoCoordinate::new(51.48, 0.0).unwrap();
        let days: Vec<_> = sun_events_range(jd(2024, 2, 27) + 0.7, 4, geo).collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[0].0, jd(2024, 2, 27));
        assert_eq!(days[3].0, jd(2024, 3, 1));
        // Days lengthen in late February at Greenwich
        assert!(days[3].1.day_length() > days[0].1.day_length());
    }

    #[test]
    fn test_serialize_events() {
        let geo = GeoCoordinate::new(75.0, 0.0).unwrap();
        let value = serde_json::to_value(sun_events(172.0, &geo)).unwrap();
        assert_eq!(value["rise_set"]["kind"], "always_above");
        assert!(value["transit"].as_f64().is_some());
    }
}
