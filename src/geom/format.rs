use geo_types::Point;
use wkt::ToWkt;

/// Formats a point as WKT, e.g. `POINT(-100 40)`.
pub fn point_to_wkt(point: &Point<f64>) -> String {
    point.wkt_string()
}

/// Converts a point to a GeoJSON `Point` geometry.
pub fn point_to_geojson(point: &Point<f64>) -> geojson::Geometry {
    geojson::Geometry::from(point)
}
