/// Error type for map-centers operations.
#[derive(Debug, PartialEq)]
pub enum MapCenterError {
    /// Longitude is outside the valid range (-180 to 180).
    InvalidLongitude(f64),
    /// Latitude is outside the valid range (-90 to 90, or the Web Mercator limit when projecting).
    InvalidLatitude(f64),
    /// A coordinate component is NaN or infinite.
    NonFiniteCoordinate,
    /// A map center name is empty.
    InvalidName,
    /// No preset matches the given name.
    UnknownPreset(String),
    /// Coordinate projection failed (WGS84 to/from Web Mercator).
    ProjectionError(String),
    /// Failed to parse a point from text (lon/lat pair, GeoJSON or WKT).
    GeometryParseError(String),
    /// File I/O error.
    IoError(String),
    /// CSV writing error.
    CsvError(String),
    /// JSON serialization error.
    SerializationError(String),
}

impl std::fmt::Display for MapCenterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapCenterError::InvalidLongitude(lon) => write!(f, "Invalid longitude: {}", lon),
            MapCenterError::InvalidLatitude(lat) => write!(f, "Invalid latitude: {}", lat),
            MapCenterError::NonFiniteCoordinate => write!(f, "Coordinate is not finite"),
            MapCenterError::InvalidName => write!(f, "Map center name must not be empty"),
            MapCenterError::UnknownPreset(name) => write!(f, "Unknown preset: {}", name),
            MapCenterError::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
            MapCenterError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            MapCenterError::IoError(msg) => write!(f, "IO error: {}", msg),
            MapCenterError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            MapCenterError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for MapCenterError {}
