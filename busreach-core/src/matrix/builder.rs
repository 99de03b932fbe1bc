use geo::Point;
use hashbrown::HashMap;
use log::{debug, info, warn};
use petgraph::Direction;
use rayon::prelude::*;

use super::WalkingMatrix;
use crate::{
    Error, OsmId, RouteRegistry, SpatialPoint, StreetGraph, StreetNodeId, WalkingTime,
    model::points::ensure_unique_ids, routing::dijkstra_path_weights,
};

/// Resolves every stop to a street node, see [`StreetGraph::resolve`]
///
/// # Errors
///
/// `UnresolvedLocation` for a stop that is neither a street node nor in
/// `locations`
pub fn resolve_stop_nodes(
    graph: &StreetGraph,
    stops: &[OsmId],
    locations: &HashMap<OsmId, Point<f64>>,
) -> Result<Vec<(OsmId, StreetNodeId)>, Error> {
    stops
        .iter()
        .map(|stop| graph.resolve(stop, locations).map(|node| (*stop, node)))
        .collect()
}

/// Walking times from every point to every stop.
///
/// One task per stop runs in parallel; each task is a single backwards
/// Dijkstra search rooted at the stop, which yields the walking time from
/// every point to that stop at once. Points in another component of the
/// street network get `None`.
///
/// # Errors
///
/// `InvalidData` on duplicate point or stop ids
pub fn build_walking_matrix(
    graph: &StreetGraph,
    points: &[SpatialPoint],
    stops: &[(OsmId, StreetNodeId)],
) -> Result<WalkingMatrix, Error> {
    ensure_unique_ids(points)?;

    info!(
        "Calculating walking times from {} points to {} stops",
        points.len(),
        stops.len()
    );

    let columns: Vec<Vec<Option<WalkingTime>>> = stops
        .par_iter()
        .map(|&(stop, stop_node)| {
            let reached = dijkstra_path_weights(graph, stop_node, Direction::Incoming, None);
            let column: Vec<Option<WalkingTime>> = points
                .iter()
                .map(|point| reached.get(&point.node).copied())
                .collect();

            let unreachable = column.iter().filter(|value| value.is_none()).count();
            if unreachable > 0 {
                warn!("Stop {stop}: {unreachable} points have no walking path");
            }
            debug!("Stop {stop} done, {} street nodes reached", reached.len());
            column
        })
        .collect();

    // Columns are gathered per stop, the matrix is stored per point
    let mut values = Vec::with_capacity(points.len() * stops.len());
    for row in 0..points.len() {
        values.extend(columns.iter().map(|column| column[row]));
    }

    WalkingMatrix::new(
        points.iter().map(|point| point.id).collect(),
        stops.iter().map(|(stop, _)| *stop).collect(),
        values,
    )
}

/// Walking times from a single street node to each of `stops`, for
/// locations that are not part of a precomputed matrix
pub fn walking_row(
    graph: &StreetGraph,
    from: StreetNodeId,
    stops: &[(OsmId, StreetNodeId)],
) -> Vec<Option<WalkingTime>> {
    let reached = dijkstra_path_weights(graph, from, Direction::Outgoing, None);
    stops
        .iter()
        .map(|(_, node)| reached.get(node).copied())
        .collect()
}

/// Builds the matrix for every stop of `registry`
///
/// # Errors
///
/// See [`resolve_stop_nodes`] and [`build_walking_matrix`]
pub fn precompute_walking_matrix(
    graph: &StreetGraph,
    points: &[SpatialPoint],
    registry: &RouteRegistry,
    locations: &HashMap<OsmId, Point<f64>>,
) -> Result<WalkingMatrix, Error> {
    let stop_ids = registry.stop_ids();
    info!(
        "Resolving {} stops of {} routes, walking at {} km/h",
        stop_ids.len(),
        registry.len(),
        graph.walking_speed_kmh()
    );
    let stops = resolve_stop_nodes(graph, &stop_ids, locations)?;
    build_walking_matrix(graph, points, &stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::streets::StreetNode;

    fn node(id: u64, x: f64, y: f64) -> StreetNode {
        StreetNode {
            id: OsmId::node(id),
            geometry: Point::new(x, y),
        }
    }

    /// n1 -100m- n2 -50m- n3, and a separate n9 -10m- n10 island, at 1 m/s
    fn graph() -> StreetGraph {
        StreetGraph::from_segments(
            vec![
                node(1, 0.0, 0.0),
                node(2, 0.001, 0.0),
                node(3, 0.002, 0.0),
                node(9, 1.0, 1.0),
                node(10, 1.0001, 1.0),
            ],
            &[
                (OsmId::node(1), OsmId::node(2), 100.0),
                (OsmId::node(2), OsmId::node(3), 50.0),
                (OsmId::node(9), OsmId::node(10), 10.0),
            ],
            3.6,
        )
        .unwrap()
    }

    fn points(graph: &StreetGraph) -> Vec<SpatialPoint> {
        [
            (OsmId::way(1), Point::new(0.0, 0.0)),
            (OsmId::way(3), Point::new(0.002, 0.0)),
            (OsmId::way(9), Point::new(1.0, 1.0)),
        ]
        .into_iter()
        .map(|(id, at)| SpatialPoint::new(id, at, graph).unwrap())
        .collect()
    }

    fn stops(graph: &StreetGraph) -> Vec<(OsmId, StreetNodeId)> {
        resolve_stop_nodes(
            graph,
            &[OsmId::node(2), OsmId::node(3)],
            &HashMap::new(),
        )
        .unwrap()
    }

    #[test]
    fn rows_follow_points_and_columns_follow_stops() {
        let graph = graph();
        let points = points(&graph);
        let matrix = build_walking_matrix(&graph, &points, &stops(&graph)).unwrap();

        assert_eq!(matrix.stops(), &[OsmId::node(2), OsmId::node(3)]);
        assert_eq!(matrix.row(&OsmId::way(1)).unwrap(), &[Some(100), Some(150)]);
        assert_eq!(matrix.row(&OsmId::way(3)).unwrap(), &[Some(50), Some(0)]);
    }

    #[test]
    fn disconnected_points_are_unreachable() {
        let graph = graph();
        let matrix = build_walking_matrix(&graph, &points(&graph), &stops(&graph)).unwrap();

        assert_eq!(matrix.row(&OsmId::way(9)).unwrap(), &[None, None]);
        assert_eq!(matrix.unreachable_count(), 2);
    }

    #[test]
    fn rebuild_is_identical() {
        let graph = graph();
        let points = points(&graph);
        let stops = stops(&graph);
        let first = build_walking_matrix(&graph, &points, &stops).unwrap();
        let second = build_walking_matrix(&graph, &points, &stops).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn extra_row_matches_built_row() {
        let graph = graph();
        let points = points(&graph);
        let stops = stops(&graph);
        let matrix = build_walking_matrix(&graph, &points, &stops).unwrap();

        let row = walking_row(&graph, points[0].node, &stops);
        assert_eq!(matrix.row(&points[0].id).unwrap(), row.as_slice());
    }

    #[test]
    fn stops_off_the_network_use_locations() {
        let graph = graph();
        let mut locations = HashMap::new();
        locations.insert(OsmId::node(500), Point::new(0.0019, 0.0));

        let resolved = resolve_stop_nodes(&graph, &[OsmId::node(500)], &locations).unwrap();
        assert_eq!(graph.graph[resolved[0].1].id, OsmId::node(3));

        assert!(matches!(
            resolve_stop_nodes(&graph, &[OsmId::node(501)], &locations),
            Err(Error::UnresolvedLocation(_))
        ));
    }

    #[test]
    fn duplicate_points_are_rejected() {
        let graph = graph();
        let mut points = points(&graph);
        points.push(points[0].clone());
        assert!(build_walking_matrix(&graph, &points, &stops(&graph)).is_err());
    }
}
