use crate::center::MapCenter;
use crate::error::MapCenterError;
use crate::io::csv::write_centers_csv;
use crate::io::geojson::write_centers_geojson;
use log::debug;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One row per center: name, description, longitude, latitude
    #[default]
    Csv,
    /// A GeoJSON FeatureCollection of Point features
    GeoJson,
}

#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub include_mercator: bool,
}

impl ExportConfig {
    /// Create a CSV export config without projected coordinates.
    ///
    /// # Example
    /// ```
    /// use map_centers::{ExportConfig, ExportFormat};
    ///
    /// let config = ExportConfig::new()
    ///     .format(ExportFormat::GeoJson)
    ///     .include_mercator(true);
    /// assert!(config.include_mercator);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    // Adds Web Mercator x/y (EPSG:3857) alongside longitude/latitude.
    pub fn include_mercator(mut self, include: bool) -> Self {
        self.include_mercator = include;
        self
    }
}

pub trait ExportCenters {
    fn export_to(
        &self,
        output_path: impl AsRef<Path>,
        config: &ExportConfig,
    ) -> Result<(), MapCenterError>;
}

impl ExportCenters for [MapCenter] {
    fn export_to(
        &self,
        output_path: impl AsRef<Path>,
        config: &ExportConfig,
    ) -> Result<(), MapCenterError> {
        export_centers(self, output_path, config)
    }
}

impl ExportCenters for Vec<MapCenter> {
    fn export_to(
        &self,
        output_path: impl AsRef<Path>,
        config: &ExportConfig,
    ) -> Result<(), MapCenterError> {
        export_centers(self, output_path, config)
    }
}

/// Writes map centers to a file in the configured format.
///
/// Missing parent directories are created.
///
/// # Example
///
/// ```no_run
/// use map_centers::{ExportConfig, ExportFormat, all_centers, export_centers};
///
/// let config = ExportConfig::new().format(ExportFormat::GeoJson);
/// export_centers(&all_centers(), "web/centers.geojson", &config).unwrap();
/// ```
pub fn export_centers(
    centers: &[MapCenter],
    output_path: impl AsRef<Path>,
    config: &ExportConfig,
) -> Result<(), MapCenterError> {
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| MapCenterError::IoError(e.to_string()))?;
    }

    match config.format {
        ExportFormat::Csv => write_centers_csv(centers, output_path, config.include_mercator)?,
        ExportFormat::GeoJson => {
            write_centers_geojson(centers, output_path, config.include_mercator)?
        }
    }

    debug!(
        "exported {} centers to {} as {:?}",
        centers.len(),
        output_path.display(),
        config.format
    );
    Ok(())
}
