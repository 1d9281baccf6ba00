use super::{Coordinate, validate_lon_lat};
use crate::core::constants::MAX_MERCATOR_LATITUDE;
use crate::error::MapCenterError;
use geo_types::Point;
use log::debug;
use proj::Proj;

/// Projects a WGS84 longitude/latitude to Web Mercator (EPSG:3857) metres.
///
/// Latitudes beyond ±85.0511° have no Web Mercator representation and are rejected.
pub fn wgs84_to_web_mercator<C: Coordinate>(coord: &C) -> Result<Point<f64>, MapCenterError> {
    validate_lon_lat(coord)?;
    if coord.y().abs() > MAX_MERCATOR_LATITUDE {
        return Err(MapCenterError::InvalidLatitude(coord.y()));
    }

    let proj = Proj::new_known_crs("EPSG:4326", "EPSG:3857", None)
        .map_err(|e| MapCenterError::ProjectionError(e.to_string()))?;

    let (x, y) = proj
        .convert((coord.x(), coord.y()))
        .map_err(|e| MapCenterError::ProjectionError(e.to_string()))?;
    debug!("projected ({}, {}) to web mercator ({}, {})", coord.x(), coord.y(), x, y);
    Ok(Point::new(x, y))
}

/// Unprojects Web Mercator (EPSG:3857) metres back to WGS84 longitude/latitude.
pub fn web_mercator_to_wgs84<C: Coordinate>(coord: &C) -> Result<Point<f64>, MapCenterError> {
    if !coord.x().is_finite() || !coord.y().is_finite() {
        return Err(MapCenterError::NonFiniteCoordinate);
    }

    let proj = Proj::new_known_crs("EPSG:3857", "EPSG:4326", None)
        .map_err(|e| MapCenterError::ProjectionError(e.to_string()))?;

    let (lon, lat) = proj
        .convert((coord.x(), coord.y()))
        .map_err(|e| MapCenterError::ProjectionError(e.to_string()))?;
    Ok(Point::new(lon, lat))
}
