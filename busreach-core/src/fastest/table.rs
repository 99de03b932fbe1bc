//! Per-point travel times for every evaluated method

use std::fmt;

use geo::Point;

use crate::{OsmId, SpatialPoint};

pub(crate) const WALKING_COLUMN: &str = "Walking";

/// A travel method, one result column each
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Walking,
    /// Bus route, by route name
    Route(String),
}

impl Method {
    /// Column header used in the output files
    pub fn name(&self) -> &str {
        match self {
            Method::Walking => WALKING_COLUMN,
            Method::Route(name) => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fastest-mode result: one row per point in input order, one column per
/// method in evaluation order, times in minutes
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    ids: Vec<OsmId>,
    geometries: Vec<Point<f64>>,
    methods: Vec<Method>,
    columns: Vec<Vec<Option<f64>>>,
    /// Per row, index of the winning method and its time
    fastest: Vec<Option<(usize, f64)>>,
}

impl ResultTable {
    pub(crate) fn new(
        points: &[SpatialPoint],
        methods: Vec<Method>,
        columns: Vec<Vec<Option<f64>>>,
    ) -> Self {
        debug_assert_eq!(methods.len(), columns.len());
        let fastest = (0..points.len())
            .map(|row| fastest_of(columns.iter().map(|column| column[row])))
            .collect();

        Self {
            ids: points.iter().map(|point| point.id).collect(),
            geometries: points.iter().map(|point| point.geometry).collect(),
            methods,
            columns,
            fastest,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[OsmId] {
        &self.ids
    }

    pub fn geometry(&self, row: usize) -> Option<Point<f64>> {
        self.geometries.get(row).copied()
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// All values of one method, in row order
    pub fn column(&self, method: &Method) -> Option<&[Option<f64>]> {
        let idx = self.methods.iter().position(|m| m == method)?;
        Some(&self.columns[idx])
    }

    /// Values of one row, in method order
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        self.columns.iter().map(move |column| column[row])
    }

    /// Minimum time of the row, `None` when every method is unreachable
    pub fn fastest_value(&self, row: usize) -> Option<f64> {
        self.fastest.get(row).copied().flatten().map(|(_, value)| value)
    }

    pub fn fastest_method(&self, row: usize) -> Option<&Method> {
        self.fastest
            .get(row)
            .copied()
            .flatten()
            .map(|(idx, _)| &self.methods[idx])
    }

    /// Number of rows no method reaches
    pub fn unreachable_count(&self) -> usize {
        self.fastest.iter().filter(|fastest| fastest.is_none()).count()
    }
}

/// Smallest populated value and its position. Ties keep the earlier
/// position.
fn fastest_of(values: impl Iterator<Item = Option<f64>>) -> Option<(usize, f64)> {
    values
        .enumerate()
        .filter_map(|(idx, value)| value.map(|v| (idx, v)))
        .fold(None, |best, (idx, value)| match best {
            Some((_, best_value)) if best_value <= value => best,
            _ => Some((idx, value)),
        })
}
