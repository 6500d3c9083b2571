//! Print the earliest and latest sunrise and sunset of a year, plus the
//! longest and shortest day, for a handful of cities.
//!
//! Usage:
//!   cargo run --example year_of_sunrises

use sunfield::time::{format_date, format_hours, julian_day_number};
use sunfield::{EventTime, Observer};

fn main() -> sunfield::Result<()> {
    let cities = [
        ("Reykjavik", 64.1466, -21.9426),
        ("London", 51.5072, -0.1276),
        ("Chicago", 41.8781, -87.6298),
        ("Singapore", 1.3521, 103.8198),
        ("Cape Town", -33.9249, 18.4241),
    ];
    let start = julian_day_number(2024, 1, 1) as f64 - 0.5;

    println!("Sunfield: sun events through 2024 (times in UT)");
    println!("===============================================\n");

    for (name, latitude, longitude) in cities {
        let observer = Observer::new(latitude, longitude)?;
        let days: Vec<_> = observer
            .sun_events_range(start, 366)?
            .filter_map(|(jd, events)| match (events.rise(), events.set()) {
                (EventTime::At(rise), EventTime::At(set)) => Some((jd, rise, set)),
                _ => None,
            })
            .collect();

        let Some(&first) = days.first() else {
            println!("{name}: no sunrise all year\n");
            continue;
        };
        let (mut earliest, mut latest, mut longest, mut shortest) = (first, first, first, first);
        for &day in &days {
            let (_, rise, set) = day;
            if rise < earliest.1 {
                earliest = day;
            }
            if rise > latest.1 {
                latest = day;
            }
            if set - rise > longest.2 - longest.1 {
                longest = day;
            }
            if set - rise < shortest.2 - shortest.1 {
                shortest = day;
            }
        }

        println!("{name} ({latitude:.4}, {longitude:.4})");
        println!("  earliest sunrise  {}  {}", format_date(earliest.0), format_hours(earliest.1));
        println!("  latest sunrise    {}  {}", format_date(latest.0), format_hours(latest.1));
        println!("  longest day       {}  {:.2} h", format_date(longest.0), longest.2 - longest.1);
        println!("  shortest day      {}  {:.2} h\n", format_date(shortest.0), shortest.2 - shortest.1);
    }

    Ok(())
}
