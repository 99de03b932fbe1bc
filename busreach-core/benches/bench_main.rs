use std::hint::black_box;

use busreach_core::model::streets::StreetNode;
use busreach_core::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use geo::Point;

const GRID: u64 = 40;

/// Square street grid with 100 m blocks and every node a point
fn grid() -> (StreetGraph, Vec<SpatialPoint>) {
    let id = |row: u64, col: u64| OsmId::node(row * GRID + col + 1);

    #[allow(clippy::cast_precision_loss)]
    let nodes = (0..GRID)
        .flat_map(|row| (0..GRID).map(move |col| (row, col)))
        .map(|(row, col)| StreetNode {
            id: id(row, col),
            geometry: Point::new(col as f64 * 0.001, row as f64 * 0.001),
        })
        .collect();

    let mut segments = Vec::new();
    for row in 0..GRID {
        for col in 0..GRID {
            if col + 1 < GRID {
                segments.push((id(row, col), id(row, col + 1), 100.0));
            }
            if row + 1 < GRID {
                segments.push((id(row, col), id(row + 1, col), 100.0));
            }
        }
    }

    let graph = StreetGraph::from_segments(nodes, &segments, DEFAULT_WALKING_SPEED_KMH).unwrap();
    let points = graph
        .graph
        .node_indices()
        .map(|node| SpatialPoint {
            id: OsmId::way(graph.graph[node].id.id),
            geometry: graph.graph[node].geometry,
            node,
        })
        .collect();
    (graph, points)
}

fn bench_matrix(c: &mut Criterion) {
    let (graph, points) = grid();
    let stops: Vec<_> = (0..GRID)
        .map(|i| {
            let id = OsmId::node(i * GRID + i + 1);
            (id, graph.node_by_osm_id(&id).unwrap())
        })
        .collect();

    c.bench_function("build_walking_matrix", |b| {
        b.iter(|| build_walking_matrix(black_box(&graph), black_box(&points), &stops).unwrap());
    });
}

fn bench_travel_time(c: &mut Criterion) {
    let registry = RouteRegistry::merced();
    let route = registry
        .routes()
        .iter()
        .max_by_key(|route| route.stops.len())
        .unwrap();

    let stops: Vec<OsmId> = route.stop_ids().copied().collect();
    let origin = OsmId::way(1);
    let destination = OsmId::way(2);
    #[allow(clippy::cast_possible_truncation)]
    let values = (0..2 * stops.len())
        .map(|i| Some((i as WalkingTime * 97) % 1200))
        .collect();
    let matrix = WalkingMatrix::new(vec![origin, destination], stops, values).unwrap();

    c.bench_function("travel_time", |b| {
        b.iter(|| {
            travel_time(
                black_box(&matrix),
                black_box(route),
                black_box(480),
                &origin,
                &destination,
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_matrix, bench_travel_time);
criterion_main!(benches);
