//! Street graph with a spatial index for snapping locations to nodes

use geo::{Distance, Haversine, Point};
use hashbrown::HashMap;
use log::debug;
use petgraph::{
    Directed, Direction,
    graph::{DiGraph, Edges, NodeIndex},
};
use rstar::{RTree, primitives::GeomWithData};

use super::{StreetEdge, StreetNode};
use crate::{Error, OsmId, WalkingTime};

/// Street node position stored in the R-tree, `[lon, lat]`
pub type IndexedPoint = GeomWithData<[f64; 2], NodeIndex>;

/// Walkable street network
///
/// Every segment is walkable in both directions, so each cached segment is
/// stored as a pair of opposite directed edges with the same weight.
#[derive(Debug, Clone)]
pub struct StreetGraph {
    pub graph: DiGraph<StreetNode, StreetEdge>,
    rtree: RTree<IndexedPoint>,
    osm_nodes: HashMap<OsmId, NodeIndex>,
    walking_speed_kmh: f64,
}

impl StreetGraph {
    /// Builds the graph from nodes and `(from, to, length in metres)` segments
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate node ids, segments referencing unknown
    /// nodes, negative lengths or a non-positive walking speed.
    pub fn from_segments(
        nodes: Vec<StreetNode>,
        segments: &[(OsmId, OsmId, f64)],
        walking_speed_kmh: f64,
    ) -> Result<Self, Error> {
        if !(walking_speed_kmh.is_finite() && walking_speed_kmh > 0.0) {
            return Err(Error::InvalidData(format!(
                "Walking speed must be positive, got {walking_speed_kmh}"
            )));
        }

        let mut graph = DiGraph::with_capacity(nodes.len(), segments.len() * 2);
        let mut osm_nodes = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let id = node.id;
            let index = graph.add_node(node);
            if osm_nodes.insert(id, index).is_some() {
                return Err(Error::InvalidData(format!("Duplicate street node {id}")));
            }
        }

        for &(from, to, length) in segments {
            let lookup = |id: OsmId| {
                osm_nodes.get(&id).copied().ok_or_else(|| {
                    Error::InvalidData(format!("Street segment references unknown node {id}"))
                })
            };
            let (source, target) = (lookup(from)?, lookup(to)?);

            if !(length.is_finite() && length >= 0.0) {
                return Err(Error::InvalidData(format!(
                    "Street segment {from} -> {to} has invalid length {length}"
                )));
            }

            let edge = StreetEdge::from_length(length, walking_speed_kmh);
            graph.add_edge(source, target, edge.clone());
            graph.add_edge(target, source, edge);
        }

        let rtree = RTree::bulk_load(
            graph
                .node_indices()
                .map(|index| {
                    let point = graph[index].geometry;
                    IndexedPoint::new([point.x(), point.y()], index)
                })
                .collect(),
        );

        debug!(
            "Street graph built with {} nodes and {} directed edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self {
            graph,
            rtree,
            osm_nodes,
            walking_speed_kmh,
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn walking_speed_kmh(&self) -> f64 {
        self.walking_speed_kmh
    }

    /// Outgoing edges of a node
    pub fn edges(&self, node: NodeIndex) -> Edges<'_, StreetEdge, Directed> {
        self.graph.edges(node)
    }

    pub fn edges_directed(
        &self,
        node: NodeIndex,
        direction: Direction,
    ) -> Edges<'_, StreetEdge, Directed> {
        self.graph.edges_directed(node, direction)
    }

    /// Graph node carrying this OSM id, if the id is a street node
    pub fn node_by_osm_id(&self, id: &OsmId) -> Option<NodeIndex> {
        self.osm_nodes.get(id).copied()
    }

    /// Nearest street node to `point` and the time needed to walk there in a
    /// straight line
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn nearest_node(&self, point: &Point<f64>) -> Option<(NodeIndex, WalkingTime)> {
        let nearest = self.rtree.nearest_neighbor(&[point.x(), point.y()])?;
        let [x, y] = *nearest.geom();
        let metres = Haversine.distance(*point, Point::new(x, y));
        let seconds = (metres / (self.walking_speed_kmh / 3.6)).round() as WalkingTime;
        Some((nearest.data, seconds))
    }

    /// Resolves a location to a street node.
    ///
    /// Node ids that are part of the street network map to themselves, any
    /// other id is looked up in `locations` and snapped to the nearest node.
    ///
    /// # Errors
    ///
    /// `UnresolvedLocation` when the id is unknown, `NoPointsFound` when the
    /// graph is empty.
    pub fn resolve(
        &self,
        id: &OsmId,
        locations: &HashMap<OsmId, Point<f64>>,
    ) -> Result<NodeIndex, Error> {
        if let Some(node) = self.node_by_osm_id(id) {
            return Ok(node);
        }

        let location = locations
            .get(id)
            .ok_or(Error::UnresolvedLocation(*id))?;
        self.nearest_node(location)
            .map(|(node, _)| node)
            .ok_or(Error::NoPointsFound)
    }
}
