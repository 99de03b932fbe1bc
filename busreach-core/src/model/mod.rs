//! Data model for walking and bus travel time estimation
//!
//! Contains the street network, the spatial points being evaluated and the
//! bus route registry.

pub mod osm_id;
pub mod points;
pub mod streets;
pub mod transit;

pub use osm_id::{OsmCategory, OsmId};
pub use points::SpatialPoint;

// Re-export of basic types for convenience
pub use streets::network::StreetGraph;
pub use transit::registry::RouteRegistry;
pub use transit::types::{DayType, Route, Stop};
