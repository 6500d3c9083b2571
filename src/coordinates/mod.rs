//! Angle handling and observer coordinates

pub mod angle;
pub mod geo;

pub use angle::{normalize, normalize_degrees, normalize_hours, wrap_degrees, wrap_hours};
pub use geo::GeoCoordinate;
