use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::{Direction, graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::{WalkingTime, model::StreetGraph};

/// Dijkstra's algorithm over the walking network.
///
/// With `Direction::Outgoing` the result holds walking times from `start` to
/// every reached node. With `Direction::Incoming` edges are followed
/// backwards, giving walking times from every reached node to `start`.
/// Nodes beyond `max_cost` seconds, or in another component, are absent
/// from the returned map.
pub fn dijkstra_path_weights(
    graph: &StreetGraph,
    start: NodeIndex,
    direction: Direction,
    max_cost: Option<WalkingTime>,
) -> HashMap<NodeIndex, WalkingTime> {
    let mut distances: HashMap<NodeIndex, WalkingTime> = HashMap::new();
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0,
        node: start,
    });
    distances.insert(start, 0);

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        // Examine neighbors
        for edge in graph.edges_directed(node, direction) {
            let next = match direction {
                Direction::Outgoing => edge.target(),
                Direction::Incoming => edge.source(),
            };
            let next_cost = cost.saturating_add(edge.weight().walking_time());

            if max_cost.is_some_and(|max| next_cost > max) {
                continue;
            }

            // Add or update distance if better using Entry API
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    distances
}
