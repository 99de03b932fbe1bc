//! Loading of the cached inputs: street network, spatial points and the
//! location table used to place stops and points of interest.

mod parser;
mod raw_types;

use std::path::Path;

use geo::Point;
use hashbrown::HashMap;
use log::{info, warn};
use rayon::prelude::*;

pub use parser::{deserialize_csv, deserialize_csv_file};
pub use raw_types::{EdgeRow, LocatedRow};

use crate::{
    Error, OsmId, SpatialPoint, StreetGraph,
    model::{points::ensure_unique_ids, streets::StreetNode},
};

/// Builds the street graph from `osm_id,lon,lat` node rows and
/// `source,target,length` edge rows
///
/// # Errors
///
/// Returns an error if either table cannot be read or the graph is
/// inconsistent, see [`StreetGraph::from_segments`]
pub fn load_street_graph(
    nodes_path: &Path,
    edges_path: &Path,
    walking_speed_kmh: f64,
) -> Result<StreetGraph, Error> {
    let nodes: Vec<LocatedRow> = deserialize_csv_file(nodes_path)?;
    let edges: Vec<EdgeRow> = deserialize_csv_file(edges_path)?;
    info!(
        "Loaded {} street nodes and {} street segments",
        nodes.len(),
        edges.len()
    );

    street_graph_from_rows(nodes, &edges, walking_speed_kmh)
}

/// # Errors
///
/// See [`StreetGraph::from_segments`]
pub fn street_graph_from_rows(
    nodes: Vec<LocatedRow>,
    edges: &[EdgeRow],
    walking_speed_kmh: f64,
) -> Result<StreetGraph, Error> {
    let nodes = nodes
        .into_iter()
        .map(|row| StreetNode {
            id: row.osm_id,
            geometry: Point::new(row.lon, row.lat),
        })
        .collect();
    let segments: Vec<_> = edges
        .iter()
        .map(|row| (row.source, row.target, row.length))
        .collect();

    StreetGraph::from_segments(nodes, &segments, walking_speed_kmh)
}

/// Loads the point set and snaps every point to the street network
///
/// # Errors
///
/// Returns an error if the table cannot be read, holds duplicate ids, or
/// the graph is empty
pub fn load_points(path: &Path, graph: &StreetGraph) -> Result<Vec<SpatialPoint>, Error> {
    let rows: Vec<LocatedRow> = deserialize_csv_file(path)?;
    let points = points_from_rows(rows, graph)?;
    info!("Loaded {} spatial points", points.len());
    Ok(points)
}

/// Snaps rows in parallel, keeping their order
///
/// # Errors
///
/// `InvalidData` on duplicate ids, `NoPointsFound` for an empty graph
pub fn points_from_rows(
    rows: Vec<LocatedRow>,
    graph: &StreetGraph,
) -> Result<Vec<SpatialPoint>, Error> {
    let points = rows
        .into_par_iter()
        .map(|row| SpatialPoint::new(row.osm_id, Point::new(row.lon, row.lat), graph))
        .collect::<Result<Vec<_>, _>>()?;
    ensure_unique_ids(&points)?;

    if points.is_empty() {
        warn!("Point set is empty, nothing will be evaluated");
    }
    Ok(points)
}

/// Coordinates of stops and points of interest by id. A repeated id keeps
/// its last row.
///
/// # Errors
///
/// Returns an error if the table cannot be read
pub fn load_locations(path: &Path) -> Result<HashMap<OsmId, Point<f64>>, Error> {
    let rows: Vec<LocatedRow> = deserialize_csv_file(path)?;
    let total = rows.len();
    let locations: HashMap<_, _> = rows
        .into_iter()
        .map(|row| (row.osm_id, Point::new(row.lon, row.lat)))
        .collect();

    if locations.len() < total {
        warn!(
            "Location table has {} repeated ids, the last row of each wins",
            total - locations.len()
        );
    }
    info!("Loaded {} locations", locations.len());
    Ok(locations)
}
