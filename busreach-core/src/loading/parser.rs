use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::Error;

/// Reads every row of a headed CSV file.
///
/// Unlike feed files, cached tables are produced by this tool, so a
/// malformed row is an error rather than something to skip.
pub fn deserialize_csv_file<T>(path: &Path) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open '{}': {}", path.display(), e),
        )
    })?;
    deserialize_csv(BufReader::new(file))
}

pub fn deserialize_csv<T, R>(reader: R) -> Result<Vec<T>, Error>
where
    T: for<'de> serde::Deserialize<'de>,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(Error::from)
}
