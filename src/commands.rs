//! The two run modes: walking matrix precomputation and fastest mode

use std::path::PathBuf;

use busreach_core::loading::{load_locations, load_points, load_street_graph};
use busreach_core::prelude::*;
use tracing::info;

use crate::config::{Config, DataConfig, FastestConfig};
use crate::error::CliError;

/// Command line values that take precedence over the `[fastest]` section
#[derive(Debug, Clone, Default)]
pub struct FastestOverrides {
    pub poi: Option<OsmId>,
    pub time_of_day: Option<Minutes>,
    pub threads: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

impl FastestOverrides {
    fn apply(&self, mut fastest: FastestConfig) -> Result<FastestConfig, CliError> {
        if let Some(poi) = self.poi {
            fastest.poi = poi;
        }
        if let Some(minutes) = self.time_of_day {
            fastest.time_of_day.0 = minutes;
        }
        if let Some(threads) = self.threads {
            fastest.threads = threads;
        }
        if let Some(dir) = &self.output_dir {
            fastest.output_dir.clone_from(dir);
        }
        fastest.validate()?;
        Ok(fastest)
    }
}

fn load_registry(data: &DataConfig) -> Result<RouteRegistry, CliError> {
    let registry = match &data.routes {
        Some(path) => RouteRegistry::from_json_file(path)?,
        None => RouteRegistry::merced(),
    };
    info!(
        "Route registry with {} routes ({} weekday, {} weekend), operators: {}",
        registry.len(),
        registry.weekday_routes().count(),
        registry.weekend_routes().count(),
        registry.operators().join(", ")
    );
    Ok(registry)
}

/// Builds the walking matrix for every registry stop and saves it
pub fn precompute(config: &Config) -> Result<WalkingMatrix, CliError> {
    let data = &config.data;
    let graph = load_street_graph(&data.street_nodes, &data.street_edges, data.walking_speed_kmh)?;
    let points = load_points(&data.points, &graph)?;
    let locations = load_locations(&data.locations)?;
    let registry = load_registry(data)?;

    let matrix = precompute_walking_matrix(&graph, &points, &registry, &locations)?;
    if let Some(parent) = data.walking_matrix.parent() {
        std::fs::create_dir_all(parent).map_err(busreach_core::Error::from)?;
    }
    matrix.write_csv(&data.walking_matrix)?;
    info!(
        "{} of {} point/stop pairs have no walking path",
        matrix.unreachable_count(),
        matrix.points().len() * matrix.stops().len()
    );
    Ok(matrix)
}

/// Runs fastest mode from a saved walking matrix and writes the outputs
pub fn fastest(config: &Config, overrides: &FastestOverrides) -> Result<OutputFiles, CliError> {
    let data = &config.data;
    let fastest = overrides.apply(config.fastest()?.clone())?;

    let graph = load_street_graph(&data.street_nodes, &data.street_edges, data.walking_speed_kmh)?;
    let points = load_points(&data.points, &graph)?;
    let locations = load_locations(&data.locations)?;
    let registry = load_registry(data)?;
    let mut matrix = WalkingMatrix::read_csv(&data.walking_matrix)?;

    let poi_node = graph.resolve(&fastest.poi, &locations)?;
    if !matrix.contains_point(&fastest.poi) {
        // Streets are walkable both ways, so walking from the POI gives the
        // same times as walking to it
        let stops = resolve_stop_nodes(&graph, matrix.stops(), &locations)?;
        matrix.insert_point(fastest.poi, walking_row(&graph, poi_node, &stops))?;
        info!("Added walking times from POI {} to the matrix", fastest.poi);
    }

    let request = FastestModeRequest {
        poi: fastest.poi,
        poi_node,
        poi_role: fastest.poi_role,
        time_of_day: fastest.time_of_day.0,
        walking: fastest.walking,
        operators: fastest.operators.clone(),
        day_types: fastest.day_types.clone(),
        max_walking_time: fastest.max_walking_time,
        threads: (fastest.threads > 0).then_some(fastest.threads),
    };

    let table = fastest_mode(&request, &graph, &matrix, &registry, &points)?;
    Ok(write_outputs(&table, &fastest.output_dir)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    /// Three nodes in a row, 600 m apart, one bus stop at each end
    fn write_inputs(dir: &std::path::Path) -> PathBuf {
        let files = [
            ("nodes.csv", "osm_id,lon,lat\nn1,0.0,0.0\nn2,0.005,0.0\nn3,0.01,0.0\n"),
            ("edges.csv", "source,target,length\nn1,n2,600\nn2,n3,600\n"),
            ("points.csv", "osm_id,lon,lat\nw1,0.0,0.0\nw2,0.005,0.0\n"),
            ("locations.csv", "osm_id,lon,lat\nn90,0.0101,0.0\n"),
            (
                "routes.json",
                r#"[{"day_type": "weekday", "name": "Line", "operator": "Town",
                    "stops": [{"id": "n1", "times": [605]}, {"id": "n3", "times": [607]}]}]"#,
            ),
        ];
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }

        let config = r#"
[data]
street_nodes = "nodes.csv"
street_edges = "edges.csv"
points = "points.csv"
locations = "locations.csv"
walking_matrix = "cache/walking_matrix.csv"
routes = "routes.json"
walking_speed_kmh = 3.6

[fastest]
poi = "n90"
time_of_day = "10:00"
operators = ["Town"]
threads = 2
"#;
        let path = dir.join("busreach.toml");
        fs::write(&path, config).unwrap();
        path
    }

    #[test]
    fn precompute_then_fastest() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::read(&write_inputs(dir.path())).unwrap();

        let matrix = precompute(&config).unwrap();
        assert_eq!(matrix.stops(), &[OsmId::node(1), OsmId::node(3)]);
        assert!(dir.path().join("cache/walking_matrix.csv").exists());

        let files = fastest(&config, &FastestOverrides::default()).unwrap();
        let csv = fs::read_to_string(files.csv).unwrap();
        // w1: walk 20 min, or bus 605 -> 607 and a 0 min walk to n90 at n3
        assert_eq!(
            csv,
            "osm_id,Walking,Line,fastest_route,fastest_route_method\n\
             w1,20,7,7,Line\n\
             w2,10,,10,Walking\n"
        );
    }

    #[test]
    fn overrides_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::read(&write_inputs(dir.path())).unwrap();
        precompute(&config).unwrap();

        let overrides = FastestOverrides {
            time_of_day: Some(606),
            output_dir: Some(dir.path().join("late")),
            ..FastestOverrides::default()
        };
        let files = fastest(&config, &overrides).unwrap();
        assert!(files.geojson.starts_with(dir.path().join("late")));

        let csv = fs::read_to_string(files.csv).unwrap();
        assert!(csv.contains("w1,20,,20,Walking\n"));
    }

    #[test]
    fn missing_matrix_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::read(&write_inputs(dir.path())).unwrap();
        assert!(fastest(&config, &FastestOverrides::default()).is_err());
        assert!(!dir.path().join("out").exists());
    }
}
