//! Units of work dispatched to the worker pool

use hashbrown::HashMap;
use rayon::prelude::*;

use super::PoiRole;
use crate::{
    Error, Minutes, OsmId, Route, SpatialPoint, StreetNodeId, WalkingMatrix, WalkingTime,
    routing::travel_time, seconds_to_minutes,
};

/// What a task evaluates for its point
#[derive(Debug, Clone, Copy)]
pub(crate) enum TaskMethod<'a> {
    /// Lookup in a walking tree rooted at the POI
    Walking(&'a HashMap<StreetNodeId, WalkingTime>),
    /// Single-route bus search between the point and the POI
    Bus(&'a Route),
}

/// Evaluation of one method for one point. `index` is the point's row in the
/// result table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Task<'a> {
    pub index: usize,
    pub point: &'a SpatialPoint,
    pub method: TaskMethod<'a>,
}

/// Inputs shared read-only by every task of a run
#[derive(Debug, Clone, Copy)]
pub(crate) struct TaskContext<'a> {
    pub matrix: &'a WalkingMatrix,
    pub poi: OsmId,
    pub poi_role: PoiRole,
    pub time_of_day: Minutes,
}

impl Task<'_> {
    /// Travel time in minutes, `None` when unreachable
    pub(crate) fn evaluate(&self, ctx: &TaskContext<'_>) -> Result<Option<f64>, Error> {
        match self.method {
            TaskMethod::Walking(tree) => Ok(tree
                .get(&self.point.node)
                .copied()
                .map(seconds_to_minutes)),
            TaskMethod::Bus(route) => {
                let (origin, destination) = match ctx.poi_role {
                    PoiRole::Origin => (&ctx.poi, &self.point.id),
                    PoiRole::Destination => (&self.point.id, &ctx.poi),
                };
                travel_time(ctx.matrix, route, ctx.time_of_day, origin, destination)
            }
        }
    }
}

/// Runs one task per point on the current pool and returns the values in
/// point order. The first failing task fails the whole batch.
pub(crate) fn run_batch<'a>(
    points: &'a [SpatialPoint],
    method: TaskMethod<'a>,
    ctx: &TaskContext<'_>,
) -> Result<Vec<Option<f64>>, Error> {
    let tasks: Vec<Task<'a>> = points
        .iter()
        .enumerate()
        .map(|(index, point)| Task {
            index,
            point,
            method,
        })
        .collect();

    let tagged = tasks
        .par_iter()
        .map(|task| task.evaluate(ctx).map(|value| (task.index, value)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut column = vec![None; points.len()];
    for (index, value) in tagged {
        column[index] = value;
    }
    Ok(column)
}
