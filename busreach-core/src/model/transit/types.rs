//! Bus stops, routes and service day types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Minutes, OsmId};

/// Days a route operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => f.write_str("Weekday"),
            DayType::Weekend => f.write_str("Weekend"),
        }
    }
}

/// A bus stop with its own timetable.
///
/// Times are minutes since midnight in non-decreasing order. Schedules of
/// different stops on a route are not aligned trip by trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStop")]
pub struct Stop {
    pub id: OsmId,
    times: Vec<Minutes>,
}

#[derive(Deserialize)]
struct RawStop {
    id: OsmId,
    times: Vec<Minutes>,
}

impl TryFrom<RawStop> for Stop {
    type Error = Error;

    fn try_from(raw: RawStop) -> Result<Self, Self::Error> {
        Stop::new(raw.id, raw.times)
    }
}

impl Stop {
    /// # Errors
    ///
    /// `UnsortedSchedule` if `times` is not in non-decreasing order
    pub fn new(id: OsmId, times: Vec<Minutes>) -> Result<Self, Error> {
        if times.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(Error::UnsortedSchedule(id));
        }
        Ok(Self { id, times })
    }

    /// Builds a stop from an arbitrary timetable, sorting it first
    pub fn sorted(id: OsmId, mut times: Vec<Minutes>) -> Self {
        times.sort_unstable();
        Self { id, times }
    }

    pub fn times(&self) -> &[Minutes] {
        &self.times
    }

    /// Earliest scheduled time strictly later than `threshold`
    pub fn next_after(&self, threshold: f64) -> Option<Minutes> {
        let idx = self
            .times
            .partition_point(|&time| f64::from(time) <= threshold);
        self.times.get(idx).copied()
    }
}

/// A fixed bus route: ordered stops served by one operator on one day type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub day_type: DayType,
    pub name: String,
    pub operator: String,
    pub stops: Vec<Stop>,
}

impl Route {
    /// # Errors
    ///
    /// `InvalidData` for a route without stops or with an empty name
    pub fn new(
        day_type: DayType,
        name: impl Into<String>,
        operator: impl Into<String>,
        stops: Vec<Stop>,
    ) -> Result<Self, Error> {
        let route = Self {
            day_type,
            name: name.into(),
            operator: operator.into(),
            stops,
        };
        route.validate()?;
        Ok(route)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidData("Route name must not be empty".into()));
        }
        if self.stops.is_empty() {
            return Err(Error::InvalidData(format!(
                "Route '{}' has no stops",
                self.name
            )));
        }
        Ok(())
    }

    pub fn stop_ids(&self) -> impl Iterator<Item = &OsmId> {
        self.stops.iter().map(|stop| &stop.id)
    }
}
