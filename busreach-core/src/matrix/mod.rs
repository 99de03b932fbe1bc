//! Point-to-stop walking time table used by the bus search.
//!
//! The table only depends on the street network, the point set and the stop
//! set, so it is built once (see [`precompute_walking_matrix`]) and reloaded
//! from CSV for every fastest-mode run.

mod builder;
mod persist;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;

pub use builder::{
    build_walking_matrix, precompute_walking_matrix, resolve_stop_nodes, walking_row,
};

use crate::{Error, OsmId, WalkingTime};

/// Walking seconds from each point to each stop, `None` when the stop cannot
/// be reached on foot
#[derive(Debug, Clone, PartialEq)]
pub struct WalkingMatrix {
    points: Vec<OsmId>,
    point_index: HashMap<OsmId, usize>,
    stops: Vec<OsmId>,
    stop_index: HashMap<OsmId, usize>,
    /// Row-major, one row per point
    values: Vec<Option<WalkingTime>>,
}

impl WalkingMatrix {
    /// # Errors
    ///
    /// `InvalidData` on repeated point or stop ids, or when `values` does not
    /// hold exactly one entry per (point, stop) pair
    pub fn new(
        points: Vec<OsmId>,
        stops: Vec<OsmId>,
        values: Vec<Option<WalkingTime>>,
    ) -> Result<Self, Error> {
        if values.len() != points.len() * stops.len() {
            return Err(Error::InvalidData(format!(
                "Walking matrix expects {} x {} values, got {}",
                points.len(),
                stops.len(),
                values.len()
            )));
        }

        let point_index = index_of("point", &points)?;
        let stop_index = index_of("stop", &stops)?;

        Ok(Self {
            points,
            point_index,
            stops,
            stop_index,
            values,
        })
    }

    /// Walking time from `point` to `stop`
    ///
    /// # Errors
    ///
    /// `MissingDistanceEntry` when either id is not part of the matrix
    pub fn get(&self, point: &OsmId, stop: &OsmId) -> Result<Option<WalkingTime>, Error> {
        let missing = || Error::MissingDistanceEntry {
            point: *point,
            stop: *stop,
        };
        let row = *self.point_index.get(point).ok_or_else(missing)?;
        let column = *self.stop_index.get(stop).ok_or_else(missing)?;
        Ok(self.values[row * self.stops.len() + column])
    }

    pub fn row(&self, point: &OsmId) -> Option<&[Option<WalkingTime>]> {
        let row = *self.point_index.get(point)?;
        let width = self.stops.len();
        Some(&self.values[row * width..(row + 1) * width])
    }

    pub fn points(&self) -> &[OsmId] {
        &self.points
    }

    pub fn stops(&self) -> &[OsmId] {
        &self.stops
    }

    pub fn contains_point(&self, point: &OsmId) -> bool {
        self.point_index.contains_key(point)
    }

    pub fn contains_stop(&self, stop: &OsmId) -> bool {
        self.stop_index.contains_key(stop)
    }

    /// Stops from `stops` the matrix has no column for, without repeats
    pub fn missing_stops<'a>(&self, stops: impl IntoIterator<Item = &'a OsmId>) -> Vec<OsmId> {
        stops
            .into_iter()
            .filter(|stop| !self.contains_stop(stop))
            .unique()
            .copied()
            .collect()
    }

    /// Appends a row for a point that is not part of the matrix yet
    ///
    /// # Errors
    ///
    /// `InvalidData` if the point already has a row or `row` has the wrong
    /// width
    pub fn insert_point(
        &mut self,
        point: OsmId,
        row: Vec<Option<WalkingTime>>,
    ) -> Result<(), Error> {
        if self.contains_point(&point) {
            return Err(Error::InvalidData(format!(
                "Walking matrix already has a row for {point}"
            )));
        }
        if row.len() != self.stops.len() {
            return Err(Error::InvalidData(format!(
                "Row for {point} has {} values, matrix has {} stops",
                row.len(),
                self.stops.len()
            )));
        }

        self.point_index.insert(point, self.points.len());
        self.points.push(point);
        self.values.extend(row);
        Ok(())
    }

    /// Number of (point, stop) pairs without a walking path
    pub fn unreachable_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_none()).count()
    }
}

fn index_of(kind: &str, ids: &[OsmId]) -> Result<HashMap<OsmId, usize>, Error> {
    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(duplicate) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(Error::InvalidData(format!(
            "Walking matrix has duplicate {kind} {duplicate}"
        )));
    }
    Ok(ids.iter().enumerate().map(|(idx, id)| (*id, idx)).collect())
}
