//! Immutable registry of bus routes

use std::path::Path;

use hashbrown::HashSet;
use itertools::Itertools;

use super::merced::merced_routes;
use super::types::{DayType, Route};
use crate::{Error, OsmId};

/// All known routes. Built once and shared read-only by every search.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRegistry {
    routes: Vec<Route>,
}

impl RouteRegistry {
    /// # Errors
    ///
    /// Returns an error for invalid routes or repeated route names, since the
    /// name is used as the result column header.
    pub fn new(routes: Vec<Route>) -> Result<Self, Error> {
        for route in &routes {
            route.validate()?;
        }
        ensure_unique_names(&routes)?;
        Ok(Self { routes })
    }

    /// Built-in Merced County registry (UC Merced shuttles and Merced Bus M1)
    pub fn merced() -> Self {
        Self {
            routes: merced_routes(),
        }
    }

    /// Reads a JSON array of routes
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a route is invalid
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let routes: Vec<Route> = serde_json::from_str(json)?;
        Self::new(routes)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open route file '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json_str(&json)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn by_day_type(&self, day_type: DayType) -> impl Iterator<Item = &Route> {
        self.routes
            .iter()
            .filter(move |route| route.day_type == day_type)
    }

    pub fn weekday_routes(&self) -> impl Iterator<Item = &Route> {
        self.by_day_type(DayType::Weekday)
    }

    pub fn weekend_routes(&self) -> impl Iterator<Item = &Route> {
        self.by_day_type(DayType::Weekend)
    }

    /// Routes run by any of `operators` on any of `day_types`.
    ///
    /// Ordered by operator (as requested), then day type (as requested), then
    /// registry order. Repeated operators or day types do not repeat routes.
    pub fn select(&self, operators: &[String], day_types: &[DayType]) -> Vec<&Route> {
        operators
            .iter()
            .unique()
            .cartesian_product(day_types.iter().unique())
            .flat_map(|(operator, &day_type)| {
                self.by_day_type(day_type)
                    .filter(move |route| &route.operator == operator)
            })
            .collect()
    }

    /// Every stop used by any route, in first-seen order
    pub fn stop_ids(&self) -> Vec<OsmId> {
        self.routes
            .iter()
            .flat_map(Route::stop_ids)
            .copied()
            .unique()
            .collect()
    }

    pub fn operators(&self) -> Vec<&str> {
        self.routes
            .iter()
            .map(|route| route.operator.as_str())
            .unique()
            .collect()
    }
}

fn ensure_unique_names(routes: &[Route]) -> Result<(), Error> {
    let mut names = HashSet::with_capacity(routes.len());
    for route in routes {
        if !names.insert(route.name.as_str()) {
            return Err(Error::InvalidData(format!(
                "Duplicate route name '{}'",
                route.name
            )));
        }
    }
    Ok(())
}
