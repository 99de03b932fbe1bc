use thiserror::Error;

use crate::model::OsmId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid OSM identifier '{0}', expected n123, w123 or r123")]
    InvalidOsmId(String),
    #[error("Time of day {0} is outside of [0, 1440)")]
    InvalidTime(u32),
    #[error("Schedule of stop {0} is not sorted")]
    UnsortedSchedule(OsmId),
    #[error("No nearby points found for snapping")]
    NoPointsFound,
    #[error("Location {0} is neither a street node nor present in the location table")]
    UnresolvedLocation(OsmId),
    #[error("Walking matrix has no entry for point {point} and stop {stop}")]
    MissingDistanceEntry { point: OsmId, stop: OsmId },
    #[error("Walking matrix is stale, missing stops: {}", format_ids(.missing))]
    StaleMatrix { missing: Vec<OsmId> },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Worker pool error: {0}")]
    WorkerPool(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn format_ids(ids: &[OsmId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
