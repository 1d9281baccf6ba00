//! # map-centers
//!
//! Named map center points for web mapping, with validation and the
//! conversions a map view needs.
//!
//! ### 1. Constants
//!
//! ```
//! use map_centers::{MIDDLE_OF_USA, SOUTHERN_ONTARIO};
//!
//! assert_eq!((MIDDLE_OF_USA.x(), MIDDLE_OF_USA.y()), (-100.0, 40.0));
//! assert_eq!((SOUTHERN_ONTARIO.x(), SOUTHERN_ONTARIO.y()), (-79.3832, 43.6532));
//! ```
//!
//! ### 2. `Preset` and `MapCenter`
//!
//! ```
//! use map_centers::Preset;
//!
//! # fn main() -> Result<(), map_centers::MapCenterError> {
//! let preset: Preset = "southern-ontario".parse()?;
//! let center = preset.center();
//! println!("{} -> {:?}", center, center.to_lng_lat());
//! println!("{}", center.to_wkt());
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Export
//!
//! ```no_run
//! use map_centers::{ExportConfig, ExportFormat, all_centers, export_centers};
//!
//! let config = ExportConfig::new()
//!     .format(ExportFormat::Csv)
//!     .include_mercator(true);
//!
//! export_centers(&all_centers(), "centers.csv", &config).unwrap();
//! ```
//!

pub mod center;
pub mod coord;
pub mod core;
pub mod error;
pub mod geom;
pub mod io;
pub mod preset;

pub use center::MapCenter;
pub use coord::{Coordinate, validate_lon_lat, web_mercator_to_wgs84, wgs84_to_web_mercator};
pub use self::core::{
    MAX_LATITUDE, MAX_LONGITUDE, MAX_MERCATOR_LATITUDE, MIDDLE_OF_USA, MIN_LATITUDE,
    MIN_LONGITUDE, SOUTHERN_ONTARIO,
};
pub use error::MapCenterError;
pub use geom::{parse_point, point_to_geojson, point_to_wkt};
pub use io::{
    ExportCenters, ExportConfig, ExportFormat, export_centers, to_feature_collection,
    write_centers_csv, write_centers_geojson,
};
pub use preset::{Preset, all_centers};

pub use geo_types;
pub use geojson;
