//! Street network components - nodes and edges

use geo::Point;

use crate::{OsmId, WalkingTime};

/// Street graph node
#[derive(Debug, Clone)]
pub struct StreetNode {
    /// OSM ID of the node
    pub id: OsmId,
    /// Node coordinates (lon, lat)
    pub geometry: Point<f64>,
}

/// Street graph edge (street segment)
#[derive(Debug, Clone)]
pub struct StreetEdge {
    /// Pedestrian crossing time in seconds
    pub weight: WalkingTime,
    /// Segment length in metres
    pub length: f64,
}

impl StreetEdge {
    /// Edge weighted with the time needed to walk `length` metres at `speed_kmh`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_length(length: f64, speed_kmh: f64) -> Self {
        let metres_per_second = speed_kmh / 3.6;
        Self {
            weight: (length / metres_per_second).round() as WalkingTime,
            length,
        }
    }

    pub fn walking_time(&self) -> WalkingTime {
        self.weight
    }
}
