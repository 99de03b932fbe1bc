//! `busreach`: walking and bus travel times to a point of interest

mod commands;
mod config;
mod error;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use busreach_core::OsmId;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use commands::FastestOverrides;
use config::{Config, parse_time_of_day};
use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "busreach", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the point-to-stop walking matrix and save it as CSV
    Precompute(ConfigArgs),
    /// Fastest travel method from every point to (or from) the POI
    Fastest(FastestArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// TOML configuration file
    #[arg(short, long)]
    config: PathBuf,
}

#[derive(Args, Debug)]
struct FastestArgs {
    #[command(flatten)]
    config: ConfigArgs,
    /// Point of interest, e.g. n12162711342
    #[arg(long)]
    poi: Option<OsmId>,
    /// Time of day as HH:MM or minutes since midnight
    #[arg(long, value_parser = parse_time_of_day)]
    time: Option<config::TimeOfDay>,
    /// Worker threads, 0 for one per core
    #[arg(long)]
    threads: Option<usize>,
    /// Output directory
    #[arg(long)]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Precompute(args) => {
            let config = Config::read(&args.config)?;
            commands::precompute(&config)?;
        }
        Command::Fastest(args) => {
            let config = Config::read(&args.config.config)?;
            let overrides = FastestOverrides {
                poi: args.poi,
                time_of_day: args.time.map(|time| time.0),
                threads: args.threads,
                output_dir: args.output,
            };
            let files = commands::fastest(&config, &overrides)?;
            info!(
                "Done: {} and {}",
                files.geojson.display(),
                files.csv.display()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fastest_flags_parse() {
        let cli = Cli::try_parse_from([
            "busreach", "fastest", "--config", "run.toml", "--poi", "w42", "--time", "08:30",
        ])
        .unwrap();
        let Command::Fastest(args) = cli.command else {
            panic!("expected the fastest command");
        };
        assert_eq!(args.poi, Some(OsmId::way(42)));
        assert_eq!(args.time.map(|t| t.0), Some(510));
        assert_eq!(args.config.config, PathBuf::from("run.toml"));
    }

    #[test]
    fn malformed_poi_is_rejected() {
        assert!(
            Cli::try_parse_from(["busreach", "fastest", "-c", "run.toml", "--poi", "42"]).is_err()
        );
    }
}
