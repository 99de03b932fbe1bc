//! Fastest-mode search: walking and every eligible bus route evaluated for
//! each point against a single point of interest, then reduced to the
//! fastest time and method per point.

mod output;
mod table;
mod task;

use log::{info, warn};
use petgraph::Direction;
use serde::{Deserialize, Serialize};

pub use output::{CSV_FILE, GEOJSON_FILE, OutputFiles, write_outputs};
pub use table::{Method, ResultTable};

use table::WALKING_COLUMN;

use task::{TaskContext, TaskMethod, run_batch};

use crate::{
    DayType, Error, MINUTES_PER_DAY, Minutes, OsmId, Route, RouteRegistry, SpatialPoint,
    StreetGraph, StreetNodeId, WalkingMatrix, WalkingTime, model::points::ensure_unique_ids,
    routing::dijkstra_path_weights,
};

/// Whether the point of interest is where journeys start or end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoiRole {
    Origin,
    #[default]
    Destination,
}

/// Parameters of a fastest-mode run
#[derive(Debug, Clone)]
pub struct FastestModeRequest {
    pub poi: OsmId,
    /// Street node the POI is snapped to, root of the walking search
    pub poi_node: StreetNodeId,
    pub poi_role: PoiRole,
    pub time_of_day: Minutes,
    /// Include the walking column
    pub walking: bool,
    /// Bus operators whose routes are evaluated, none for walking only
    pub operators: Vec<String>,
    pub day_types: Vec<DayType>,
    /// Walking searches stop after this many seconds
    pub max_walking_time: Option<WalkingTime>,
    /// Worker threads, `None` for one per available core
    pub threads: Option<usize>,
}

impl FastestModeRequest {
    /// Walking-only request towards `poi` on weekdays
    pub fn new(poi: OsmId, poi_node: StreetNodeId, time_of_day: Minutes) -> Self {
        Self {
            poi,
            poi_node,
            poi_role: PoiRole::Destination,
            time_of_day,
            walking: true,
            operators: Vec::new(),
            day_types: vec![DayType::Weekday],
            max_walking_time: None,
            threads: None,
        }
    }

    fn validate(&self, matrix: &WalkingMatrix, routes: &[&Route]) -> Result<(), Error> {
        if self.time_of_day >= MINUTES_PER_DAY {
            return Err(Error::InvalidTime(self.time_of_day));
        }
        if !self.walking && routes.is_empty() {
            return Err(Error::InvalidData(
                "No travel method selected: walking is off and no route matches".into(),
            ));
        }

        let mut columns = hashbrown::HashSet::new();
        let names = self
            .walking
            .then_some(WALKING_COLUMN)
            .into_iter()
            .chain(routes.iter().map(|route| route.name.as_str()));
        for name in names {
            if !columns.insert(name) || RESERVED_COLUMNS.contains(&name) {
                return Err(Error::InvalidData(format!(
                    "Route name '{name}' clashes with another result column"
                )));
            }
        }

        let missing = matrix.missing_stops(routes.iter().flat_map(|route| route.stop_ids()));
        if !missing.is_empty() {
            return Err(Error::StaleMatrix { missing });
        }

        if let Some(stop) = routes.first().and_then(|route| route.stop_ids().next()) {
            if !matrix.contains_point(&self.poi) {
                return Err(Error::MissingDistanceEntry {
                    point: self.poi,
                    stop: *stop,
                });
            }
        }
        Ok(())
    }
}

const RESERVED_COLUMNS: [&str; 3] = ["osm_id", "fastest_route", "fastest_route_method"];

/// Evaluates every selected method for every point.
///
/// Walking is a single search rooted at the POI. Each selected route is one
/// batch with a task per point, run on a dedicated pool; batches run one
/// after another and each keeps the point order of `points`.
///
/// # Errors
///
/// Returns an error before any work starts for an invalid request or a
/// matrix lacking stops of the selected routes. Any failing task aborts the
/// run.
pub fn fastest_mode(
    request: &FastestModeRequest,
    graph: &StreetGraph,
    matrix: &WalkingMatrix,
    registry: &RouteRegistry,
    points: &[SpatialPoint],
) -> Result<ResultTable, Error> {
    let routes = registry.select(&request.operators, &request.day_types);
    request.validate(matrix, &routes)?;
    ensure_unique_ids(points)?;

    if !request.operators.is_empty() && routes.is_empty() {
        warn!(
            "No route of {:?} runs on {:?}",
            request.operators, request.day_types
        );
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(request.threads.unwrap_or(0))
        .build()
        .map_err(|e| Error::WorkerPool(e.to_string()))?;

    let ctx = TaskContext {
        matrix,
        poi: request.poi,
        poi_role: request.poi_role,
        time_of_day: request.time_of_day,
    };

    info!(
        "Fastest mode for {} points, POI {} as {:?}, {} routes, {} threads",
        points.len(),
        request.poi,
        request.poi_role,
        routes.len(),
        pool.current_num_threads()
    );

    let (methods, columns) = pool.install(|| {
        let mut methods = Vec::with_capacity(routes.len() + 1);
        let mut columns = Vec::with_capacity(routes.len() + 1);

        if request.walking {
            let direction = match request.poi_role {
                PoiRole::Destination => Direction::Incoming,
                PoiRole::Origin => Direction::Outgoing,
            };
            let tree =
                dijkstra_path_weights(graph, request.poi_node, direction, request.max_walking_time);
            let column = run_batch(points, TaskMethod::Walking(&tree), &ctx)?;
            log_column(&Method::Walking, &column);
            methods.push(Method::Walking);
            columns.push(column);
        }

        for route in &routes {
            let column = run_batch(points, TaskMethod::Bus(route), &ctx)?;
            let method = Method::Route(route.name.clone());
            log_column(&method, &column);
            methods.push(method);
            columns.push(column);
        }

        Ok::<_, Error>((methods, columns))
    })?;

    let table = ResultTable::new(points, methods, columns);
    let unreachable = table.unreachable_count();
    if unreachable > 0 {
        warn!("{unreachable} points are unreachable by every selected method");
    }
    Ok(table)
}

fn log_column(method: &Method, column: &[Option<f64>]) {
    let reached = column.iter().filter(|value| value.is_some()).count();
    info!("{method}: {reached} of {} points reachable", column.len());
}
