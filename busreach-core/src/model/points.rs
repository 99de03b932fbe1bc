//! Spatial points evaluated by the fastest-mode search

use geo::Point;
use hashbrown::HashSet;

use crate::{Error, OsmId, StreetGraph, StreetNodeId};

/// A location with a stable identifier, snapped to the street network
#[derive(Debug, Clone)]
pub struct SpatialPoint {
    pub id: OsmId,
    pub geometry: Point<f64>,
    /// Nearest street graph node
    pub node: StreetNodeId,
}

impl SpatialPoint {
    /// Snaps `geometry` to the nearest node of `graph`
    ///
    /// # Errors
    ///
    /// `NoPointsFound` if the street graph is empty
    pub fn new(id: OsmId, geometry: Point<f64>, graph: &StreetGraph) -> Result<Self, Error> {
        let (node, walking_time) = graph.nearest_node(&geometry).ok_or(Error::NoPointsFound)?;
        log::trace!("Point {id} snapped to street node {node:?}, {walking_time}s away");
        Ok(Self {
            id,
            geometry,
            node,
        })
    }
}

/// Rejects point sets with repeated identifiers, which would make matrix rows
/// ambiguous
pub(crate) fn ensure_unique_ids(points: &[SpatialPoint]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(point.id) {
            return Err(Error::InvalidData(format!(
                "Duplicate spatial point {}",
                point.id
            )));
        }
    }
    Ok(())
}
