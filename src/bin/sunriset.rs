//! Sunrise, sunset and twilight calculator
//!
//! Prints the daily solar events for a place, the Sun's position at an
//! instant, or a year-long table of equation of time and declination (the
//! data behind an analemma plot).
//!
//! Usage:
//!   cargo run --bin sunriset -- events --lat 41.9475 --lon -88.743 --date 2016-11-29
//!   cargo run --bin sunriset -- position --date 2003-10-17T19:30:30Z --lat 39.74 --lon -105.18
//!   cargo run --bin sunriset -- table --year 2024

use chrono::{DateTime, NaiveDate, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, warn};
use serde::Serialize;

use sunfield::almanac::{sun_events_range, EventTime, SunEvents};
use sunfield::time::equation::equation_of_time_minutes;
use sunfield::time::sidereal::{greenwich_sidereal_time, local_sidereal_time_at};
use sunfield::time::{
    days_since_j2000, format_date, format_hours, is_within_accuracy_range,
    julian_day_from_date, julian_day_from_datetime, parse_date,
};
use sunfield::{positions, GeoCoordinate};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sun events and position calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes sunrise, sunset, twilight and the Sun's position",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transit, sunrise/sunset and twilights for one or more days
    Events(EventsArgs),
    /// Sun's position at an instant
    Position(PositionArgs),
    /// Daily equation of time, RA, declination, sunrise and sunset for a year
    Table(TableArgs),
}

#[derive(Args, Debug)]
struct Location {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
}

#[derive(Args, Debug)]
struct EventsArgs {
    #[command(flatten)]
    location: Location,

    /// Calendar date (YYYY-MM-DD), defaults to today (UTC)
    #[arg(long)]
    date: Option<String>,

    /// Number of consecutive days
    #[arg(long, default_value_t = 1)]
    days: u32,

    /// Hours added to UT when printing times
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    utc_offset: f64,

    /// Print JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Args, Debug)]
struct PositionArgs {
    /// Julian date of the instant
    #[arg(long, conflicts_with = "date")]
    jd: Option<f64>,

    /// UTC instant (RFC 3339) or date (YYYY-MM-DD, 0h UT), defaults to now
    #[arg(long)]
    date: Option<String>,

    /// Observer latitude in degrees, for hour angle, altitude and azimuth
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,

    /// Print JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Calendar year
    #[arg(long, allow_hyphen_values = true)]
    year: i32,

    /// Latitude for the sunrise and sunset columns
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude for the sunrise and sunset columns
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lon: f64,
}

#[derive(Serialize)]
struct DayReport {
    date: String,
    julian_day: f64,
    utc_offset: f64,
    day_length: f64,
    events: SunEvents,
}

#[derive(Serialize)]
struct PositionReport {
    julian_day: f64,
    utc: String,
    right_ascension: f64,
    declination: f64,
    radius_vector: f64,
    equation_of_time: f64,
    greenwich_sidereal_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_sidereal_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    horizontal: Option<positions::HorizontalPosition>,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn check_accuracy_range(jd: f64) {
    if !is_within_accuracy_range(jd) {
        warn!(
            "{} is outside 1901-2099; results will be less accurate",
            format_date(jd)
        );
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Julian date from `--date`, accepting RFC 3339 instants or plain dates
fn parse_instant(s: &str) -> Result<f64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s.trim()) {
        return Ok(julian_day_from_datetime(&dt.with_timezone(&Utc)));
    }
    Ok(julian_day_from_date(parse_date(s)?))
}

fn format_event(time: EventTime, utc_offset: f64) -> String {
    match time {
        EventTime::At(hours) => format_hours(hours + utc_offset),
        EventTime::AlwaysAbove => "always above".to_string(),
        EventTime::AlwaysBelow => "always below".to_string(),
    }
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:<24}{}", format!("{}:", name), value);
}

fn print_day(report: &DayReport) {
    let events = &report.events;
    let offset = report.utc_offset;

    print_section_header(&report.date);
    print_named_value("Astronomical dawn", format_event(events.astronomical_start(), offset));
    print_named_value("Nautical dawn", format_event(events.nautical_start(), offset));
    print_named_value("Civil dawn", format_event(events.civil_start(), offset));
    print_named_value("Sunrise", format_event(events.rise(), offset));
    print_named_value("Solar noon", format_hours(events.transit + offset));
    print_named_value("Sunset", format_event(events.set(), offset));
    print_named_value("Civil dusk", format_event(events.civil_end(), offset));
    print_named_value("Nautical dusk", format_event(events.nautical_end(), offset));
    print_named_value("Astronomical dusk", format_event(events.astronomical_end(), offset));
    print_named_value("Day length", format!("{:.3} h", report.day_length));
}

fn run_events(args: EventsArgs) -> Result<()> {
    let geo = GeoCoordinate::new(args.location.lat, args.location.lon)?;
    let date = match &args.date {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let start = julian_day_from_date(date);
    check_accuracy_range(start);
    debug!("events for {geo:?} from {date}, {} day(s)", args.days);

    let reports: Vec<DayReport> = sun_events_range(start, args.days, geo)
        .map(|(jd, events)| DayReport {
            date: format_date(jd),
            julian_day: jd,
            utc_offset: args.utc_offset,
            day_length: events.day_length(),
            events,
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "Sun events at latitude {}, longitude {} (UTC{:+})",
        geo.latitude, geo.longitude, args.utc_offset
    );
    for report in &reports {
        print_day(report);
    }
    Ok(())
}

fn run_position(args: PositionArgs) -> Result<()> {
    let jd = match (args.jd, &args.date) {
        (Some(jd), _) => jd,
        (None, Some(s)) => parse_instant(s)?,
        (None, None) => julian_day_from_datetime(&Utc::now()),
    };
    check_accuracy_range(jd);

    let d = days_since_j2000(jd);
    let position = positions::solar_position(d);
    let geo = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(GeoCoordinate::new(lat, lon)?),
        _ => None,
    };

    let report = PositionReport {
        julian_day: jd,
        utc: sunfield::time::datetime_from_julian_day(jd)?.to_rfc3339(),
        right_ascension: position.right_ascension,
        declination: position.declination,
        radius_vector: position.radius_vector,
        equation_of_time: equation_of_time_minutes(d),
        greenwich_sidereal_time: greenwich_sidereal_time(d),
        local_sidereal_time: geo.map(|g| local_sidereal_time_at(d, g.longitude)),
        horizontal: geo.map(|g| positions::horizontal_position(d, &g)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section_header("Sun position");
    print_named_value("Julian date", format!("{:.6}", report.julian_day));
    print_named_value("UTC", &report.utc);
    print_named_value("Right ascension", format!("{:.6} h", report.right_ascension));
    print_named_value("Declination", format!("{:.5}°", report.declination));
    print_named_value("Radius vector", format!("{:.7} AU", report.radius_vector));
    print_named_value("Equation of time", format!("{:.3} min", report.equation_of_time));
    print_named_value("GMST", format!("{:.6} h", report.greenwich_sidereal_time));
    if let Some(lst) = report.local_sidereal_time {
        print_named_value("LMST", format!("{:.6} h", lst));
    }
    if let Some(h) = report.horizontal {
        print_named_value("Hour angle", format!("{:.4}°", h.hour_angle));
        print_named_value("Altitude", format!("{:.4}°", h.altitude));
        print_named_value("Azimuth", format!("{:.4}°", h.azimuth));
    }
    Ok(())
}

fn run_table(args: TableArgs) -> Result<()> {
    let geo = GeoCoordinate::new(args.lat, args.lon)?;
    let first = NaiveDate::from_ymd_opt(args.year, 1, 1)
        .ok_or_else(|| format!("year {} is out of range", args.year))?;
    let next = NaiveDate::from_ymd_opt(args.year + 1, 1, 1)
        .ok_or_else(|| format!("year {} is out of range", args.year + 1))?;
    let days = (next - first).num_days() as u32;
    let start = julian_day_from_date(first);
    check_accuracy_range(start);

    println!(
        "{:<12}{:>14}{:>10}{:>12}{:>11}{:>11}{:>11}",
        "date", "jd", "eot_min", "ra_h", "dec_deg", "rise", "set"
    );
    for (jd, events) in sun_events_range(start, days, geo) {
        let d = days_since_j2000(jd + 0.5);
        let position = positions::solar_position(d);
        println!(
            "{:<12}{:>14.1}{:>10.3}{:>12.5}{:>11.4}{:>11}{:>11}",
            format_date(jd),
            jd,
            equation_of_time_minutes(d),
            position.right_ascension,
            position.declination,
            format_event(events.rise(), 0.0),
            format_event(events.set(), 0.0),
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Events(args) => run_events(args),
        Command::Position(args) => run_position(args),
        Command::Table(args) => run_table(args),
    }
}
