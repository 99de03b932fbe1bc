//! Walking and single-route bus travel time estimation over a street network.
//!
//! The crate combines a walking network (street graph with travel-time
//! weighted edges) with fixed-schedule bus routes. The two entry points are
//! [`fastest_mode`], which compares walking with every eligible route for a
//! whole set of points, and [`precompute_walking_matrix`], which builds the
//! point-to-stop walking table that the bus search relies on.

pub mod error;
pub mod fastest;
pub mod loading;
pub mod matrix;
pub mod model;
pub mod prelude;
pub mod routing;
mod staging;

pub use error::Error;
pub use fastest::{
    FastestModeRequest, Method, OutputFiles, PoiRole, ResultTable, fastest_mode, write_outputs,
};
pub use matrix::{WalkingMatrix, build_walking_matrix, precompute_walking_matrix};
pub use model::{
    DayType, OsmCategory, OsmId, Route, RouteRegistry, SpatialPoint, Stop, StreetGraph,
};
pub use routing::{BusJourney, best_journey, travel_time};

/// Walking time in whole seconds
pub type WalkingTime = u32;

/// Scheduled time in minutes since midnight
pub type Minutes = u32;

/// Street graph node index
pub type StreetNodeId = petgraph::graph::NodeIndex;

/// Number of minutes in a service day, exclusive upper bound for departures
pub const MINUTES_PER_DAY: Minutes = 1440;

/// Pedestrian speed applied uniformly to every street edge
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

/// Converts walking seconds to fractional minutes
pub(crate) fn seconds_to_minutes(seconds: WalkingTime) -> f64 {
    f64::from(seconds) / 60.0
}
