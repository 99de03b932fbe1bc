mod regular_dijkstra;
mod state;

pub use regular_dijkstra::dijkstra_path_weights;
