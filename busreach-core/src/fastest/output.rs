//! GeoJSON and CSV snapshots of a result table

use std::fs;
use std::path::{Path, PathBuf};

use geojson::{Feature, FeatureCollection, Geometry, GeometryValue, JsonObject};
use log::info;
use serde_json::json;

use super::ResultTable;
use crate::{
    Error,
    staging::{StagedFile, commit_all},
};

pub const GEOJSON_FILE: &str = "fastestmode.geojson";
pub const CSV_FILE: &str = "fastestmode.csv";

const ID_COLUMN: &str = "osm_id";
const FASTEST_COLUMN: &str = "fastest_route";
const FASTEST_METHOD_COLUMN: &str = "fastest_route_method";

/// Paths of the files written by [`write_outputs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub geojson: PathBuf,
    pub csv: PathBuf,
}

impl ResultTable {
    /// Converts the table to a `GeoJSON` `FeatureCollection`, one point
    /// feature per row
    ///
    /// # Errors
    ///
    /// `GeoJsonError` if a feature cannot be built
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let features = (0..self.len())
            .map(|row| self.row_feature(row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    fn row_feature(&self, row: usize) -> Result<Feature, Error> {
        let point = self
            .geometry(row)
            .ok_or_else(|| Error::GeoJsonError(format!("No row {row} in result table")))?;
        let geometry = Geometry::new(GeometryValue::from(&point));

        let mut properties = JsonObject::new();
        properties.insert(ID_COLUMN.into(), json!(self.ids()[row].to_string()));
        for (method, value) in self.methods().iter().zip(self.row(row)) {
            properties.insert(method.name().into(), json!(value));
        }
        properties.insert(FASTEST_COLUMN.into(), json!(self.fastest_value(row)));
        properties.insert(
            FASTEST_METHOD_COLUMN.into(),
            json!(self.fastest_method(row).map(|m| m.name())),
        );

        Ok(Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        })
    }

    /// # Errors
    ///
    /// `GeoJsonError` if serialization fails
    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    /// Writes the tabular snapshot: id, one column per method, fastest time
    /// and method. Unreachable cells are empty.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails
    pub fn to_csv_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let header = std::iter::once(ID_COLUMN)
            .chain(self.methods().iter().map(|m| m.name()))
            .chain([FASTEST_COLUMN, FASTEST_METHOD_COLUMN]);
        csv_writer.write_record(header)?;

        let cell = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
        for (row, id) in self.ids().iter().enumerate() {
            let record = std::iter::once(id.to_string())
                .chain(self.row(row).map(cell))
                .chain([
                    cell(self.fastest_value(row)),
                    self.fastest_method(row)
                        .map(|m| m.name().to_string())
                        .unwrap_or_default(),
                ]);
            csv_writer.write_record(record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Writes `fastestmode.geojson` and `fastestmode.csv` into `dir`, creating
/// it if needed. Both files are staged first and switched together: on
/// failure the previous pair of outputs is left in place.
///
/// # Errors
///
/// Returns an error if either file cannot be written
pub fn write_outputs(table: &ResultTable, dir: &Path) -> Result<OutputFiles, Error> {
    fs::create_dir_all(dir)?;
    let files = OutputFiles {
        geojson: dir.join(GEOJSON_FILE),
        csv: dir.join(CSV_FILE),
    };

    let geojson = table.to_geojson_string()?;
    let staged_geojson = StagedFile::write(&files.geojson, |writer| {
        std::io::Write::write_all(writer, geojson.as_bytes()).map_err(Error::from)
    })?;
    let staged_csv = StagedFile::write(&files.csv, |writer| table.to_csv_writer(writer))?;

    commit_all(vec![staged_geojson, staged_csv])?;

    info!(
        "Results for {} points saved to {} and {}",
        table.len(),
        files.geojson.display(),
        files.csv.display()
    );
    Ok(files)
}
