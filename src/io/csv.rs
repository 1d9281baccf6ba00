use crate::center::MapCenter;
use crate::error::MapCenterError;
use std::fs::File;
use std::path::Path;

const HEADER: [&str; 4] = ["name", "description", "longitude", "latitude"];
const MERCATOR_HEADER: [&str; 2] = ["mercator_x", "mercator_y"];

fn center_row(center: &MapCenter, include_mercator: bool) -> Result<Vec<String>, MapCenterError> {
    let mut row = vec![
        center.name().to_string(),
        center.description().unwrap_or_default().to_string(),
        center.longitude().to_string(),
        center.latitude().to_string(),
    ];
    if include_mercator {
        let merc = center.to_web_mercator()?;
        row.push(merc.x().to_string());
        row.push(merc.y().to_string());
    }
    Ok(row)
}

/// Writes centers as CSV with a header row.
///
/// Columns are `name,description,longitude,latitude`, followed by
/// `mercator_x,mercator_y` when `include_mercator` is set. A missing
/// description is written as an empty field. Every row is built before the
/// file is created, so a center that cannot be projected leaves no output behind.
pub fn write_centers_csv(
    centers: &[MapCenter],
    output_path: impl AsRef<Path>,
    include_mercator: bool,
) -> Result<(), MapCenterError> {
    let rows = centers
        .iter()
        .map(|c| center_row(c, include_mercator))
        .collect::<Result<Vec<_>, _>>()?;

    let mut header_row: Vec<&str> = HEADER.to_vec();
    if include_mercator {
        header_row.extend_from_slice(&MERCATOR_HEADER);
    }

    let file = File::create(output_path).map_err(|e| MapCenterError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(&header_row)
        .map_err(|e| MapCenterError::CsvError(e.to_string()))?;
    for row in &rows {
        writer
            .write_record(row)
            .map_err(|e| MapCenterError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| MapCenterError::CsvError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MIDDLE_OF_USA;
    use crate::preset::all_centers;
    use tempfile::tempdir;

    #[test]
    fn test_write_centers_csv() -> Result<(), MapCenterError> {
        let dir = tempdir().map_err(|e| MapCenterError::IoError(e.to_string()))?;
        let output_path = dir.path().join("centers.csv");

        write_centers_csv(&all_centers(), &output_path, false)?;

        let mut reader =
            csv::Reader::from_path(&output_path).map_err(|e| MapCenterError::CsvError(e.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|e| MapCenterError::CsvError(e.to_string()))?
            .clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["name", "description", "longitude", "latitude"]
        );

        let rows: Vec<csv::StringRecord> = reader
            .records()
            .collect::<Result<_, _>>()
            .map_err(|e| MapCenterError::CsvError(e.to_string()))?;
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "southern-ontario");
        assert_eq!(rows[1][2].parse::<f64>().ok(), Some(-79.3832));
        assert_eq!(rows[1][3].parse::<f64>().ok(), Some(43.6532));
        Ok(())
    }

    #[test]
    fn test_write_centers_csv_with_mercator() -> Result<(), MapCenterError> {
        let dir = tempdir().map_err(|e| MapCenterError::IoError(e.to_string()))?;
        let output_path = dir.path().join("centers.csv");

        let centers = vec![MapCenter::new("usa", &MIDDLE_OF_USA)?];
        write_centers_csv(&centers, &output_path, true)?;

        let output = std::fs::read_to_string(&output_path)
            .map_err(|e| MapCenterError::IoError(e.to_string()))?;
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("name,description,longitude,latitude,mercator_x,mercator_y")
        );
        let row: Vec<&str> = lines.next().unwrap_or_default().split(',').collect();
        assert_eq!(row[0], "usa");
        assert_eq!(row[1], "");
        let x: f64 = row[4].parse().map_err(|_| MapCenterError::CsvError("x".into()))?;
        assert!((x - -11_131_949.08).abs() < 1.0);
        Ok(())
    }

    #[test]
    fn test_write_empty_centers_keeps_header() -> Result<(), MapCenterError> {
        let dir = tempdir().map_err(|e| MapCenterError::IoError(e.to_string()))?;
        let output_path = dir.path().join("centers.csv");

        write_centers_csv(&[], &output_path, false)?;

        let output = std::fs::read_to_string(&output_path)
            .map_err(|e| MapCenterError::IoError(e.to_string()))?;
        assert_eq!(output, "name,description,longitude,latitude\n");
        Ok(())
    }

    #[test]
    fn test_unprojectable_center_writes_nothing() -> Result<(), MapCenterError> {
        let dir = tempdir().map_err(|e| MapCenterError::IoError(e.to_string()))?;
        let output_path = dir.path().join("centers.csv");

        let centers = vec![
            MapCenter::new("usa", &MIDDLE_OF_USA)?,
            MapCenter::new("pole", &(0.0, 89.0))?,
        ];
        let result = write_centers_csv(&centers, &output_path, true);

        assert_eq!(result, Err(MapCenterError::InvalidLatitude(89.0)));
        assert!(!output_path.exists());
        Ok(())
    }
}
