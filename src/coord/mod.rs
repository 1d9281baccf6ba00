mod mercator;

pub use mercator::{web_mercator_to_wgs84, wgs84_to_web_mercator};

use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::error::MapCenterError;
use geo_types::{Coord, Point};

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples, `geo_types::Coord<f64>` and `geo_types::Point<f64>`.
/// This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude or mercator easting).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude or mercator northing).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Checks that a coordinate is a finite WGS84 longitude/latitude pair.
///
/// Bounds are inclusive, so the antimeridian and the poles are accepted.
pub fn validate_lon_lat<C: Coordinate>(coord: &C) -> Result<(), MapCenterError> {
    let (lon, lat) = (coord.x(), coord.y());

    if !lon.is_finite() || !lat.is_finite() {
        return Err(MapCenterError::NonFiniteCoordinate);
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        return Err(MapCenterError::InvalidLongitude(lon));
    }
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(MapCenterError::InvalidLatitude(lat));
    }
    Ok(())
}
