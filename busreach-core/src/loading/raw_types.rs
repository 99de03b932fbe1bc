use serde::Deserialize;

use crate::OsmId;

/// Row of the street node, point and location tables
#[derive(Debug, Deserialize)]
pub struct LocatedRow {
    pub osm_id: OsmId,
    pub lon: f64,
    pub lat: f64,
}

/// Row of the street edge table, `length` in metres
#[derive(Debug, Deserialize)]
pub struct EdgeRow {
    pub source: OsmId,
    pub target: OsmId,
    pub length: f64,
}
