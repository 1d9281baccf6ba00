use crate::center::MapCenter;
use crate::error::MapCenterError;
use geojson::{Feature, FeatureCollection};
use std::fs;
use std::path::Path;

/// Builds a FeatureCollection with one Point feature per center.
pub fn to_feature_collection(centers: &[MapCenter]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: centers.iter().map(MapCenter::to_geojson).collect(),
        foreign_members: None,
    }
}

fn with_mercator(center: &MapCenter) -> Result<Feature, MapCenterError> {
    let merc = center.to_web_mercator()?;
    let mut feature = center.to_geojson();
    feature.set_property("mercator_x", merc.x());
    feature.set_property("mercator_y", merc.y());
    Ok(feature)
}

/// Writes centers as a GeoJSON FeatureCollection.
///
/// With `include_mercator`, each feature also carries `mercator_x` and
/// `mercator_y` properties. The geometry itself stays in WGS84.
pub fn write_centers_geojson(
    centers: &[MapCenter],
    output_path: impl AsRef<Path>,
    include_mercator: bool,
) -> Result<(), MapCenterError> {
    let collection = if include_mercator {
        FeatureCollection {
            bbox: None,
            features: centers
                .iter()
                .map(with_mercator)
                .collect::<Result<Vec<_>, _>>()?,
            foreign_members: None,
        }
    } else {
        to_feature_collection(centers)
    };

    let json = serde_json::to_string_pretty(&collection)
        .map_err(|e| MapCenterError::SerializationError(e.to_string()))?;
    fs::write(output_path, json).map_err(|e| MapCenterError::IoError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::parse_geojson_point;
    use crate::preset::all_centers;
    use geojson::GeoJson;
    use tempfile::tempdir;

    #[test]
    fn test_to_feature_collection() {
        let collection = to_feature_collection(&all_centers());
        assert_eq!(collection.features.len(), 2);
        assert_eq!(
            collection.features[0]
                .property("name")
                .and_then(|v| v.as_str()),
            Some("middle-of-usa")
        );
    }

    #[test]
    fn test_feature_geometry_parses_back() -> Result<(), MapCenterError> {
        let collection = to_feature_collection(&all_centers());
        let feature_json = serde_json::to_string(&collection.features[1])
            .map_err(|e| MapCenterError::SerializationError(e.to_string()))?;

        let pt = parse_geojson_point(&feature_json)?;
        assert!((pt.x() - (-79.3832)).abs() < 1e-9);
        assert!((pt.y() - 43.6532).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_write_centers_geojson_with_mercator() -> Result<(), MapCenterError> {
        let dir = tempdir().map_err(|e| MapCenterError::IoError(e.to_string()))?;
        let output_path = dir.path().join("centers.geojson");

        write_centers_geojson(&all_centers(), &output_path, true)?;

        let text = fs::read_to_string(&output_path)
            .map_err(|e| MapCenterError::IoError(e.to_string()))?;
        let geojson: GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| MapCenterError::GeometryParseError(e.to_string()))?;
        match geojson {
            GeoJson::FeatureCollection(fc) => {
                assert_eq!(fc.features.len(), 2);
                assert!(fc.features.iter().all(|f| f.contains_property("mercator_x")));
            }
            _ => panic!("Expected FeatureCollection"),
        }
        Ok(())
    }
}
