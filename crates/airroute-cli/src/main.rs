use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airroute_lib::RouteColumns;

mod commands;
mod output;

use commands::route::RouteArgs;
use output::OutputFormat;

/// Environment variable consulted when `--routes` is not given.
const ROUTES_ENV: &str = "AIRROUTE_ROUTES";
const DEFAULT_ROUTES_FILE: &str = "flight_routes_distance.csv";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest and alternative flight routes over a CSV route table"
)]
struct Cli {
    /// Route table to load. Defaults to $AIRROUTE_ROUTES, then
    /// ./flight_routes_distance.csv.
    #[arg(long, global = true)]
    routes: Option<PathBuf>,

    /// Column layout of the route table.
    #[arg(long, value_enum, default_value_t = Layout::FlightRoutes, global = true)]
    layout: Layout,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the shortest route, or several candidate routes, between two airports.
    Route(RouteArgs),
    /// Report whether the route table holds one-way links, two-way links, or both.
    Classify,
    /// Write a copy of the route table with a great-circle distance column.
    Annotate {
        /// Destination CSV file.
        #[arg(long)]
        output: PathBuf,
    },
}

/// Column layouts understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Layout {
    /// Airline route export with airport metadata and coordinates.
    FlightRoutes,
    /// Three columns: source, destination, distance.
    Simple,
}

impl Layout {
    fn columns(self) -> RouteColumns {
        match self {
            Layout::FlightRoutes => RouteColumns::default(),
            Layout::Simple => RouteColumns::simple(),
        }
    }
}

/// Where the route table comes from and how to read it.
#[derive(Debug, Clone)]
pub struct RouteSource {
    pub path: PathBuf,
    pub columns: RouteColumns,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = RouteSource {
        path: resolve_routes_path(cli.routes),
        columns: cli.layout.columns(),
    };

    match cli.command {
        Command::Route(args) => commands::route::handle_route_command(&source, &args, cli.format),
        Command::Classify => commands::classify::handle_classify_command(&source, cli.format),
        Command::Annotate { output } => {
            commands::annotate::handle_annotate_command(&source, &output, cli.format)
        }
    }
}

fn resolve_routes_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(ROUTES_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROUTES_FILE))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_routes_flag_wins() {
        let path = resolve_routes_path(Some(PathBuf::from("custom.csv")));
        assert_eq!(path, PathBuf::from("custom.csv"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn layouts_map_to_columns() {
        assert_eq!(Layout::Simple.columns(), RouteColumns::simple());
        assert_eq!(Layout::FlightRoutes.columns(), RouteColumns::default());
    }
}
