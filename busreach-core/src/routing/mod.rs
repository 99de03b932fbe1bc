//! Walking shortest paths and bus schedule search

pub mod dijkstra;
pub mod schedule;

pub use dijkstra::dijkstra_path_weights;
pub use schedule::{BusJourney, best_journey, travel_time};
