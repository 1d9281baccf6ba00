use crate::coord::{Coordinate, validate_lon_lat, wgs84_to_web_mercator};
use crate::error::MapCenterError;
use crate::geom::{point_to_geojson, point_to_wkt};
use crate::preset::Preset;
use geo::{Distance, Haversine};
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named point to center a map view on.
///
/// The point is a WGS84 longitude/latitude pair. Construction always validates it,
/// so every `MapCenter` holds finite coordinates within the valid ranges.
///
/// # Example
///
/// ```
/// use map_centers::MapCenter;
///
/// # fn main() -> Result<(), map_centers::MapCenterError> {
/// let center = MapCenter::new("home", &(-79.3832, 43.6532))?
///     .with_description("Toronto area");
/// assert_eq!(center.to_lng_lat(), [-79.3832, 43.6532]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "MapCenterRecord", try_from = "MapCenterRecord")]
pub struct MapCenter {
    name: String,
    description: Option<String>,
    point: Point<f64>,
}

impl MapCenter {
    /// Creates a validated map center from any coordinate in (longitude, latitude) order.
    pub fn new<C: Coordinate>(name: impl Into<String>, coord: &C) -> Result<Self, MapCenterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MapCenterError::InvalidName);
        }
        validate_lon_lat(coord)?;

        Ok(Self {
            name,
            description: None,
            point: Point::new(coord.x(), coord.y()),
        })
    }

    /// Attaches a human-readable description, shown in exports and GeoJSON properties.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The center's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The description, if one was set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The center as a point, x = longitude, y = latitude.
    pub fn point(&self) -> Point<f64> {
        self.point
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    /// Returns `[lng, lat]`, the array form mapping libraries accept as a center.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.longitude(), self.latitude()]
    }

    /// WKT form, e.g. `POINT(-100 40)`.
    pub fn to_wkt(&self) -> String {
        point_to_wkt(&self.point)
    }

    /// Converts the center to a GeoJSON Feature with `name` and `description` properties.
    pub fn to_geojson(&self) -> geojson::Feature {
        let mut feature = geojson::Feature::from(point_to_geojson(&self.point));
        feature.set_property("name", self.name.clone());
        if let Some(description) = &self.description {
            feature.set_property("description", description.clone());
        }
        feature
    }

    /// Projects the center to Web Mercator (EPSG:3857) metres.
    pub fn to_web_mercator(&self) -> Result<Point<f64>, MapCenterError> {
        wgs84_to_web_mercator(&self.point)
    }

    /// Great-circle distance to another center, in metres.
    pub fn distance_to(&self, other: &MapCenter) -> f64 {
        Haversine.distance(self.point, other.point)
    }
}

impl fmt::Display for MapCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.longitude(), self.latitude())
    }
}

impl From<Preset> for MapCenter {
    fn from(preset: Preset) -> Self {
        Self {
            name: preset.name().to_string(),
            description: Some(preset.description().to_string()),
            point: preset.point(),
        }
    }
}

/// Flat serialized form of a [`MapCenter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapCenterRecord {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    longitude: f64,
    latitude: f64,
}

impl From<MapCenter> for MapCenterRecord {
    fn from(center: MapCenter) -> Self {
        Self {
            longitude: center.longitude(),
            latitude: center.latitude(),
            name: center.name,
            description: center.description,
        }
    }
}

impl TryFrom<MapCenterRecord> for MapCenter {
    type Error = MapCenterError;

    fn try_from(record: MapCenterRecord) -> Result<Self, Self::Error> {
        let center = MapCenter::new(record.name, &(record.longitude, record.latitude))?;
        Ok(match record.description {
            Some(description) => center.with_description(description),
            None => center,
        })
    }
}
