//! TOML configuration of the `precompute` and `fastest` commands

use std::fs;
use std::path::{Path, PathBuf};

use busreach_core::{DayType, MINUTES_PER_DAY, Minutes, OsmId, PoiRole, WalkingTime};
use chrono::{NaiveTime, Timelike};
use serde::Deserialize;
use tracing::info;

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub data: DataConfig,
    pub fastest: Option<FastestConfig>,
}

/// Cached inputs and the walking matrix location. Relative paths are taken
/// relative to the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    pub street_nodes: PathBuf,
    pub street_edges: PathBuf,
    pub points: PathBuf,
    pub locations: PathBuf,
    pub walking_matrix: PathBuf,
    /// JSON route file, the built-in Merced registry when absent
    pub routes: Option<PathBuf>,
    #[serde(default = "default_walking_speed")]
    pub walking_speed_kmh: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FastestConfig {
    pub poi: OsmId,
    #[serde(default)]
    pub poi_role: PoiRole,
    pub time_of_day: TimeOfDay,
    #[serde(default = "default_true")]
    pub walking: bool,
    #[serde(default)]
    pub operators: Vec<String>,
    #[serde(default = "default_day_types")]
    pub day_types: Vec<DayType>,
    /// Seconds
    pub max_walking_time: Option<WalkingTime>,
    /// 0 for one thread per core
    #[serde(default)]
    pub threads: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Minutes since midnight, written either as an integer or as `"HH:MM"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTimeOfDay")]
pub struct TimeOfDay(pub Minutes);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimeOfDay {
    Minutes(Minutes),
    Clock(String),
}

impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = String;

    fn try_from(raw: RawTimeOfDay) -> Result<Self, Self::Error> {
        match raw {
            RawTimeOfDay::Minutes(minutes) => Ok(TimeOfDay(minutes)),
            RawTimeOfDay::Clock(clock) => parse_time_of_day(&clock),
        }
    }
}

/// Parses `"HH:MM"` or a plain minute count
pub fn parse_time_of_day(value: &str) -> Result<TimeOfDay, String> {
    let value = value.trim();
    if let Ok(minutes) = value.parse::<Minutes>() {
        return Ok(TimeOfDay(minutes));
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .map(|time| TimeOfDay(time.hour() * 60 + time.minute()))
        .map_err(|e| format!("invalid time of day '{value}', expected HH:MM or minutes: {e}"))
}

fn default_walking_speed() -> f64 {
    busreach_core::DEFAULT_WALKING_SPEED_KMH
}

fn default_true() -> bool {
    true
}

fn default_day_types() -> Vec<DayType> {
    vec![DayType::Weekday]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

impl Config {
    pub fn read(path: &Path) -> Result<Self, CliError> {
        info!("Reading config from file {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content)?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        config.data.validate()?;
        if let Some(fastest) = &config.fastest {
            fastest.validate()?;
        }
        Ok(config)
    }

    fn rebase(&mut self, base: &Path) {
        let data = &mut self.data;
        for path in [
            &mut data.street_nodes,
            &mut data.street_edges,
            &mut data.points,
            &mut data.locations,
            &mut data.walking_matrix,
        ] {
            *path = base.join(&*path);
        }
        if let Some(routes) = &mut data.routes {
            *routes = base.join(&*routes);
        }
        if let Some(fastest) = &mut self.fastest {
            fastest.output_dir = base.join(&fastest.output_dir);
        }
    }

    /// The `[fastest]` section, required by the fastest command
    pub fn fastest(&self) -> Result<&FastestConfig, CliError> {
        self.fastest
            .as_ref()
            .ok_or_else(|| CliError::InvalidConfig("missing [fastest] section".into()))
    }
}

impl DataConfig {
    fn validate(&self) -> Result<(), CliError> {
        if !(self.walking_speed_kmh.is_finite() && self.walking_speed_kmh > 0.0) {
            return Err(CliError::InvalidConfig(format!(
                "walking_speed_kmh must be positive, got {}",
                self.walking_speed_kmh
            )));
        }
        Ok(())
    }
}

impl FastestConfig {
    pub fn validate(&self) -> Result<(), CliError> {
        if self.time_of_day.0 >= MINUTES_PER_DAY {
            return Err(CliError::InvalidConfig(format!(
                "time_of_day must be below {MINUTES_PER_DAY} minutes, got {}",
                self.time_of_day.0
            )));
        }
        if !self.walking && self.operators.is_empty() {
            return Err(CliError::InvalidConfig(
                "select walking or at least one operator".into(),
            ));
        }
        if !self.operators.is_empty() && self.day_types.is_empty() {
            return Err(CliError::InvalidConfig(
                "day_types must not be empty when operators are selected".into(),
            ));
        }
        Ok(())
    }
}
