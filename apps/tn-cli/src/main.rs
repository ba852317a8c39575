mod error;
mod network;

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tn_core::{Color, TnError};
use tn_graph::{Algorithm, Path, TransitGraph};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;
use crate::network::{RouteSpec, StationSpec};

#[derive(Parser)]
#[command(name = "tn-cli")]
#[command(about = "TransitNet CLI - path queries over a light-rail network", long_about = None)]
struct Cli {
    /// Define a station as NAME:X:Y (repeatable; replaces the demo network)
    #[arg(long = "station", value_name = "NAME:X:Y", global = true)]
    stations: Vec<StationSpec>,

    /// Define a route as FROM:TO:WEIGHT:COLOR (repeatable; replaces the demo network)
    #[arg(long = "route", value_name = "FROM:TO:WEIGHT:COLOR", global = true)]
    routes: Vec<RouteSpec>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stations and their coordinates
    Stations,
    /// List every route record (both directions)
    Routes,
    /// List stations one hop away, in route order
    Neighbors {
        /// Station name
        station: String,
    },
    /// Show the weight of the direct route between two stations
    Weight {
        /// Origin station
        from: String,
        /// Destination station
        to: String,
    },
    /// Find a path between two stations
    Path {
        /// Start station
        start: String,
        /// End station
        end: String,
        /// Search algorithm: bfs, dfs or dijkstra
        #[arg(short, long, default_value = "dijkstra")]
        algorithm: Algorithm,
    },
    /// Run all three searches side by side
    Compare {
        /// Start station
        start: String,
        /// End station
        end: String,
    },
}

#[derive(Serialize)]
struct RouteView<'a> {
    from: &'a str,
    to: &'a str,
    weight: u32,
    color: Color,
}

#[derive(Serialize)]
struct WeightReport<'a> {
    from: &'a str,
    to: &'a str,
    weight: Option<u32>,
}

#[derive(Serialize)]
struct PathReport {
    algorithm: Algorithm,
    path: Option<Path>,
    weight: Option<u64>,
}

impl PathReport {
    fn run(graph: &TransitGraph, algorithm: Algorithm, start: &str, end: &str) -> Self {
        let path = graph.find_path(algorithm, start, end);
        let weight = path.as_ref().and_then(|p| graph.path_weight(p));
        Self {
            algorithm,
            path,
            weight,
        }
    }

    fn render(&self) -> String {
        match (&self.path, self.weight) {
            (Some(path), Some(weight)) => format!(
                "{:<9} {}  (weight {}, {} hops)",
                self.algorithm,
                path,
                weight,
                path.hops()
            ),
            (Some(path), None) => format!("{:<9} {}", self.algorithm, path),
            (None, _) => format!("{:<9} no path found", self.algorithm),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let graph = load_network(cli)?;
    tracing::debug!(
        stations = graph.station_count(),
        routes = graph.route_count(),
        "network loaded"
    );

    match &cli.command {
        Commands::Stations => cmd_stations(&graph, cli.json),
        Commands::Routes => cmd_routes(&graph, cli.json),
        Commands::Neighbors { station } => cmd_neighbors(&graph, station, cli.json),
        Commands::Weight { from, to } => cmd_weight(&graph, from, to, cli.json),
        Commands::Path {
            start,
            end,
            algorithm,
        } => cmd_path(&graph, &[*algorithm], start, end, cli.json),
        Commands::Compare { start, end } => cmd_path(&graph, &Algorithm::ALL, start, end, cli.json),
    }
}

/// The demo network, unless any `--station` or `--route` was given.
fn load_network(cli: &Cli) -> CliResult<TransitGraph> {
    let graph = if cli.stations.is_empty() && cli.routes.is_empty() {
        network::demo_network()?
    } else {
        network::from_specs(&cli.stations, &cli.routes)?
    };
    Ok(graph)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn require_station(graph: &TransitGraph, name: &str) -> CliResult<()> {
    if graph.station_by_name(name).is_none() {
        return Err(TnError::NotFound {
            what: "station",
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_stations(graph: &TransitGraph, json: bool) -> CliResult<()> {
    if json {
        return print_json(graph.stations());
    }

    if graph.is_empty() {
        println!("No stations in network");
    } else {
        println!("Stations:");
        for station in graph.stations() {
            println!("  {} ({}, {})", station.name, station.x, station.y);
        }
    }
    Ok(())
}

fn cmd_routes(graph: &TransitGraph, json: bool) -> CliResult<()> {
    let views: Vec<RouteView<'_>> = graph
        .routes()
        .iter()
        .filter_map(|route| {
            let (from, to) = graph.route_endpoints(route)?;
            Some(RouteView {
                from,
                to,
                weight: route.weight,
                color: route.color,
            })
        })
        .collect();

    if json {
        return print_json(&views);
    }

    if views.is_empty() {
        println!("No routes in network");
    } else {
        println!("Routes:");
        for view in &views {
            println!(
                "  {} -> {}  weight={}  color={}",
                view.from, view.to, view.weight, view.color
            );
        }
    }
    Ok(())
}

fn cmd_neighbors(graph: &TransitGraph, station: &str, json: bool) -> CliResult<()> {
    require_station(graph, station)?;
    let adjacent = graph.adjacent_stations(station);

    if json {
        return print_json(&adjacent);
    }

    if adjacent.is_empty() {
        println!("{} has no connections", station);
    } else {
        println!("Adjacent to {}:", station);
        for name in adjacent {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn cmd_weight(graph: &TransitGraph, from: &str, to: &str, json: bool) -> CliResult<()> {
    require_station(graph, from)?;
    require_station(graph, to)?;
    let weight = graph.route_weight(from, to);

    if json {
        return print_json(&WeightReport { from, to, weight });
    }

    match weight {
        Some(w) => println!("{} -> {}: {}", from, to, w),
        None => println!("No direct route from {} to {}", from, to),
    }
    Ok(())
}

fn cmd_path(
    graph: &TransitGraph,
    algorithms: &[Algorithm],
    start: &str,
    end: &str,
    json: bool,
) -> CliResult<()> {
    require_station(graph, start)?;
    require_station(graph, end)?;

    let reports: Vec<PathReport> = algorithms
        .iter()
        .map(|&algo| PathReport::run(graph, algo, start, end))
        .collect();

    if json {
        return match reports.as_slice() {
            [single] => print_json(single),
            _ => print_json(&reports),
        };
    }

    println!("{} -> {}", start, end);
    for report in &reports {
        println!("  {}", report.render());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn cli_parses_adhoc_network() {
        let cli = Cli::try_parse_from([
            "tn-cli",
            "--station",
            "A:0:0",
            "--station",
            "B:1:1",
            "--route",
            "A:B:3:green",
            "path",
            "A",
            "B",
            "-a",
            "bfs",
        ])
        .unwrap();

        assert_eq!(cli.stations.len(), 2);
        assert_eq!(cli.routes.len(), 1);
        assert!(matches!(
            cli.command,
            Commands::Path {
                algorithm: Algorithm::Bfs,
                ..
            }
        ));
    }

    #[test]
    fn cli_rejects_bad_specs() {
        assert!(Cli::try_parse_from(["tn-cli", "--route", "A:B:x:red", "routes"]).is_err());
        assert!(Cli::try_parse_from(["tn-cli", "path", "A", "B", "-a", "astar"]).is_err());
    }

    #[test]
    fn report_rendering() {
        let graph = network::demo_network().unwrap();

        let found = PathReport::run(&graph, Algorithm::Dijkstra, "Old Town", "Middletown");
        assert_eq!(
            found.render(),
            "dijkstra  Old Town -> Washington Street -> Middletown  (weight 5, 2 hops)"
        );

        let missing = PathReport::run(&graph, Algorithm::Bfs, "Old Town", "Old Town");
        assert_eq!(missing.render(), "bfs       no path found");
    }

    #[test]
    fn unknown_station_is_an_error() {
        let graph = network::demo_network().unwrap();
        let err = require_station(&graph, "Atlantis").unwrap_err();
        assert_eq!(err.to_string(), "Unknown station: Atlantis");
        assert!(require_station(&graph, "SDSU").is_ok());
    }

    #[test]
    fn routes_without_stations_do_not_fall_back_to_demo() {
        let cli = Cli::try_parse_from(["tn-cli", "--route", "X:Y:1:red", "routes"]).unwrap();
        let err = load_network(&cli).unwrap_err();
        assert!(matches!(
            err,
            CliError::Network(TnError::InvalidArg { .. })
        ));
        assert!(err.to_string().contains("unknown station 'X'"));
    }

    #[test]
    fn no_specs_loads_demo_network() {
        let cli = Cli::try_parse_from(["tn-cli", "stations"]).unwrap();
        let graph = load_network(&cli).unwrap();
        assert_eq!(graph.station_count(), 20);
    }
}
