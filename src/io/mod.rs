pub mod csv;
pub mod export;
pub mod geojson;

pub use self::csv::write_centers_csv;
pub use self::export::{ExportCenters, ExportConfig, ExportFormat, export_centers};
pub use self::geojson::{to_feature_collection, write_centers_geojson};
