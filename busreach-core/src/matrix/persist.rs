//! CSV persistence of the walking matrix.
//!
//! Layout: an `osm_id` column holding the point id, then one column per
//! stop id. Cells hold walking seconds; an empty cell means unreachable.

use std::io::{Read, Write};
use std::path::Path;

use log::info;

use super::WalkingMatrix;
use crate::{Error, OsmId, WalkingTime, staging::StagedFile};

const ID_COLUMN: &str = "osm_id";

impl WalkingMatrix {
    /// # Errors
    ///
    /// Returns an error if the CSV cannot be written
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        let header = std::iter::once(ID_COLUMN.to_string())
            .chain(self.stops.iter().map(ToString::to_string));
        csv_writer.write_record(header)?;

        let width = self.stops.len();
        for (row, point) in self.points.iter().enumerate() {
            let cells = self.values[row * width..(row + 1) * width]
                .iter()
                .map(|value| value.map(|v| v.to_string()).unwrap_or_default());
            csv_writer.write_record(std::iter::once(point.to_string()).chain(cells))?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error on malformed headers, ids or cells
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut columns = headers.iter();
        if columns.next() != Some(ID_COLUMN) {
            return Err(Error::InvalidData(format!(
                "Walking matrix must start with an '{ID_COLUMN}' column"
            )));
        }
        let stops = columns
            .map(str::parse::<OsmId>)
            .collect::<Result<Vec<_>, _>>()?;

        let mut points = Vec::new();
        let mut values = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let mut cells = record.iter();
            let point = cells
                .next()
                .ok_or_else(|| Error::InvalidData("Empty walking matrix row".into()))?
                .parse::<OsmId>()?;

            for cell in cells {
                values.push(parse_cell(point, cell)?);
            }
            points.push(point);
        }

        WalkingMatrix::new(points, stops, values)
    }

    /// Writes the matrix to `path`, replacing any previous file only once the
    /// new one is complete
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn write_csv(&self, path: &Path) -> Result<(), Error> {
        StagedFile::write(path, |writer| self.to_writer(writer))?.commit()?;
        info!(
            "Walking matrix with {} points and {} stops saved to {}",
            self.points.len(),
            self.stops.len(),
            path.display()
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed
    pub fn read_csv(path: &Path) -> Result<Self, Error> {
        let file = std::fs::File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open walking matrix '{}': {}", path.display(), e),
            )
        })?;
        let matrix = Self::from_reader(std::io::BufReader::new(file))?;
        info!(
            "Loaded walking matrix with {} points and {} stops",
            matrix.points.len(),
            matrix.stops.len()
        );
        Ok(matrix)
    }
}

fn parse_cell(point: OsmId, cell: &str) -> Result<Option<WalkingTime>, Error> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<WalkingTime>().map(Some).map_err(|_| {
        Error::InvalidData(format!(
            "Invalid walking time '{cell}' in row of point {point}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_layout_uses_empty_cells_for_unreachable() {
        let matrix = WalkingMatrix::new(
            vec![OsmId::node(1), OsmId::way(2)],
            vec![OsmId::node(10), OsmId::node(11)],
            vec![Some(60), None, Some(0), Some(5)],
        )
        .unwrap();

        let mut buffer = Vec::new();
        matrix.to_writer(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "osm_id,n10,n11\nn1,60,\nw2,0,5\n");

        let reread = WalkingMatrix::from_reader(text.as_bytes()).unwrap();
        assert_eq!(reread, matrix);
    }

    #[test]
    fn rejects_bad_headers_and_cells() {
        assert!(WalkingMatrix::from_reader("id,n10\nn1,5\n".as_bytes()).is_err());
        assert!(WalkingMatrix::from_reader("osm_id,x10\nn1,5\n".as_bytes()).is_err());
        assert!(WalkingMatrix::from_reader("osm_id,n10\nn1,-5\n".as_bytes()).is_err());
        assert!(WalkingMatrix::from_reader("osm_id,n10\nbad,5\n".as_bytes()).is_err());
    }

    #[test]
    fn short_rows_are_rejected() {
        // csv refuses ragged rows unless configured to be flexible
        assert!(WalkingMatrix::from_reader("osm_id,n10,n11\nn1,5\n".as_bytes()).is_err());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walking_matrix.csv");
        let matrix = WalkingMatrix::new(
            vec![OsmId::node(3)],
            vec![OsmId::node(4)],
            vec![Some(42)],
        )
        .unwrap();

        matrix.write_csv(&path).unwrap();
        assert_eq!(WalkingMatrix::read_csv(&path).unwrap(), matrix);
    }
}
