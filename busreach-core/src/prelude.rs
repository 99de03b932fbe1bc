pub use crate::Error;

// Data model
pub use crate::model::{
    DayType, OsmCategory, OsmId, Route, RouteRegistry, SpatialPoint, Stop, StreetGraph,
};
pub use crate::matrix::WalkingMatrix;

// Loading cached inputs
pub use crate::loading::{load_locations, load_points, load_street_graph};

// Computation
pub use crate::fastest::{
    FastestModeRequest, Method, OutputFiles, PoiRole, ResultTable, fastest_mode, write_outputs,
};
pub use crate::matrix::{
    build_walking_matrix, precompute_walking_matrix, resolve_stop_nodes, walking_row,
};
pub use crate::routing::{BusJourney, best_journey, travel_time};

// Core types
pub use crate::{DEFAULT_WALKING_SPEED_KMH, MINUTES_PER_DAY};
pub use crate::Minutes; // minutes since midnight
pub use crate::StreetNodeId;
pub use crate::WalkingTime; // seconds
