use crate::coord::validate_lon_lat;
use crate::error::MapCenterError;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a point from text, auto-detecting GeoJSON, WKT or a plain `lon,lat` pair.
///
/// GeoJSON is detected by a leading `{`, WKT by a leading `POINT` keyword. Anything
/// else is read as two numbers separated by a comma and/or whitespace. The parsed
/// point must be a valid longitude/latitude.
///
/// # Example
/// ```
/// use map_centers::parse_point;
///
/// # fn main() -> Result<(), map_centers::MapCenterError> {
/// let a = parse_point("-79.3832, 43.6532")?;
/// let b = parse_point("POINT(-79.3832 43.6532)")?;
/// assert_eq!(a, b);
/// # Ok(())
/// # }
/// ```
pub fn parse_point(s: &str) -> Result<Point<f64>, MapCenterError> {
    let trimmed = s.trim();
    let point = if trimmed.starts_with('{') {
        parse_geojson_point(trimmed)?
    } else if trimmed
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case("POINT"))
    {
        parse_wkt_point(trimmed)?
    } else {
        parse_lon_lat(trimmed)?
    };

    validate_lon_lat(&point)?;
    Ok(point)
}

/// Parses `lon,lat`, `lon lat` or `lon, lat`.
pub fn parse_lon_lat(s: &str) -> Result<Point<f64>, MapCenterError> {
    let parts: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != 2 {
        return Err(MapCenterError::GeometryParseError(format!(
            "Expected two numbers (lon,lat), got '{}'",
            s
        )));
    }

    let lon = parts[0]
        .parse::<f64>()
        .map_err(|e| MapCenterError::GeometryParseError(e.to_string()))?;
    let lat = parts[1]
        .parse::<f64>()
        .map_err(|e| MapCenterError::GeometryParseError(e.to_string()))?;

    Ok(Point::new(lon, lat))
}

/// Parses a GeoJSON `Point` geometry, or a `Feature` whose geometry is a `Point`.
pub fn parse_geojson_point(s: &str) -> Result<Point<f64>, MapCenterError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| MapCenterError::GeometryParseError(e.to_string()))?;

    let geometry = match geojson {
        GeoJson::Geometry(geom) => geom,
        GeoJson::Feature(feat) => feat.geometry.ok_or_else(|| {
            MapCenterError::GeometryParseError("Feature has no geometry".to_string())
        })?,
        GeoJson::FeatureCollection(_) => {
            return Err(MapCenterError::GeometryParseError(
                "FeatureCollection not supported, use a single Point".to_string(),
            ));
        }
    };

    let geometry = Geometry::<f64>::try_from(geometry)
        .map_err(|e| MapCenterError::GeometryParseError(e.to_string()))?;
    into_point(geometry)
}

/// Parses a WKT `POINT`.
pub fn parse_wkt_point(s: &str) -> Result<Point<f64>, MapCenterError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| MapCenterError::GeometryParseError(e.to_string()))?;

    let geometry: Geometry<f64> = wkt.try_into().map_err(|_| {
        MapCenterError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })?;
    into_point(geometry)
}

fn into_point(geometry: Geometry<f64>) -> Result<Point<f64>, MapCenterError> {
    match geometry {
        Geometry::Point(pt) => Ok(pt),
        _ => Err(MapCenterError::GeometryParseError(
            "Expected a Point geometry".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lon_lat_variants() -> Result<(), MapCenterError> {
        for text in ["-100,40", "-100, 40", "-100 40", "  -100\t40  "] {
            let pt = parse_point(text)?;
            assert_eq!(pt, Point::new(-100.0, 40.0));
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_point() -> Result<(), MapCenterError> {
        let json = r#"{"type":"Point","coordinates":[-79.3832,43.6532]}"#;
        let pt = parse_point(json)?;
        assert!((pt.x() - (-79.3832)).abs() < 1e-9);
        assert!((pt.y() - 43.6532).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature() -> Result<(), MapCenterError> {
        let json = r#"{"type":"Feature","properties":{"name":"x"},"geometry":{"type":"Point","coordinates":[-100.0,40.0]}}"#;
        let pt = parse_point(json)?;
        assert_eq!(pt, Point::new(-100.0, 40.0));
        Ok(())
    }

    #[test]
    fn test_parse_geojson_rejects_linestring() {
        let json = r#"{"type":"LineString","coordinates":[[-0.1,51.5],[-0.2,51.6]]}"#;
        let result = parse_point(json);
        assert!(matches!(result, Err(MapCenterError::GeometryParseError(_))));
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), MapCenterError> {
        let pt = parse_point("POINT(-79.3832 43.6532)")?;
        assert!((pt.x() - (-79.3832)).abs() < 1e-9);
        assert!((pt.y() - 43.6532).abs() < 1e-9);

        let lower = parse_point("point(-100 40)")?;
        assert_eq!(lower, Point::new(-100.0, 40.0));
        Ok(())
    }

    #[test]
    fn test_parse_rejects_garbage_and_out_of_range() {
        assert!(matches!(
            parse_point("north-ish"),
            Err(MapCenterError::GeometryParseError(_))
        ));
        assert!(matches!(
            parse_point("1,2,3"),
            Err(MapCenterError::GeometryParseError(_))
        ));
        assert_eq!(
            parse_point("-100, 95"),
            Err(MapCenterError::InvalidLatitude(95.0))
        );
    }
}
