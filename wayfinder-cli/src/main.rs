mod config;
mod error;
mod host;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wayfinder::WayfinderSession;
use wayfinder_core::prelude::*;

use config::CliConfig;
use error::CliError;
use host::{LoggingMap, LoggingScene};

/// Plan a route through the building and step through its floor-by-floor tour
#[derive(Parser, Debug)]
#[command(name = "wayfinder", version, about)]
struct Args {
    /// Start waypoint id
    from: WaypointId,

    /// Destination waypoint id
    to: WaypointId,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Waypoint dataset (JSON), overrides the configuration
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Simulated frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Jump to each segment instead of flying along it
    #[arg(long)]
    no_cinematic: bool,

    /// Print the route as GeoJSON on stdout
    #[arg(long)]
    geojson: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => CliConfig::from_path(path)?,
        None => CliConfig::default(),
    };
    let dataset = args
        .dataset
        .clone()
        .or_else(|| config.dataset.clone())
        .ok_or(CliError::MissingDataset)?;

    let graph = load_graph(&dataset)?;
    let mut session_config = config.session_config();
    if args.no_cinematic {
        session_config.tour.cinematic = false;
    }
    let frame = Duration::from_secs(1) / args.fps.unwrap_or(config.frame_rate).max(1);

    let mut session =
        WayfinderSession::new(graph, session_config, LoggingMap::default(), LoggingScene);

    let route = session.request_route(args.from, args.to)?;
    let names: Vec<&str> = route.waypoints().iter().map(|w| w.name.as_str()).collect();
    info!("Route: {}", names.join(" -> "));
    if args.geojson {
        println!("{}", route.to_geojson_string()?);
    }

    // Step through every segment, letting each flight run to the end first
    let mut now = Duration::ZERO;
    loop {
        while session.tick(now) {
            now += frame;
        }
        now += frame;
        if session.request_advance()? == TourEvent::Completed {
            break;
        }
    }

    info!(
        "Tour complete after {} camera frames ({:.1} s simulated)",
        session.map().frames,
        now.as_secs_f64()
    );
    Ok(())
}
