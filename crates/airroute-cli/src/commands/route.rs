use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use airroute_lib::{
    load_graph, plan_route, routing::DEFAULT_ALTERNATIVES, Error as LibError, GraphBuildOptions,
    GraphMode, MalformedRecordPolicy, RouteAlgorithm, RouteRequest, RouteSummary,
};

use crate::output::OutputFormat;
use crate::RouteSource;

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting airport name.
    #[arg(long = "from")]
    pub from: String,
    /// Destination airport name.
    #[arg(long = "to")]
    pub to: String,
    /// Search strategy.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
    pub algorithm: AlgorithmArg,
    /// Maximum number of candidate routes returned by the bfs algorithm.
    #[arg(
        long,
        default_value_t = DEFAULT_ALTERNATIVES,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub alternatives: usize,
    /// Treat every route as one-way instead of mirroring it.
    #[arg(long)]
    pub directed: bool,
    /// Fail on the first malformed row instead of skipping it.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Dijkstra,
    Bfs,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::Bfs => RouteAlgorithm::Bfs,
        }
    }
}

impl RouteArgs {
    fn build_options(&self) -> GraphBuildOptions {
        GraphBuildOptions {
            mode: if self.directed {
                GraphMode::Directed
            } else {
                GraphMode::Undirected
            },
            on_malformed: if self.strict {
                MalformedRecordPolicy::Abort
            } else {
                MalformedRecordPolicy::Skip
            },
        }
    }

    fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            algorithm: self.algorithm.into(),
            alternatives: self.alternatives,
        }
    }
}

pub fn handle_route_command(
    source: &RouteSource,
    args: &RouteArgs,
    format: OutputFormat,
) -> Result<()> {
    let graph = load_graph(&source.path, &source.columns, &args.build_options())
        .with_context(|| format!("failed to load routes from {}", source.path.display()))?;

    let request = args.to_request();
    let plan = plan_route(&graph, &request).map_err(|err| handle_route_failure(args, err))?;

    let summary = RouteSummary::from_plan(&plan);
    println!("{}", format.render_route(&summary)?);
    Ok(())
}

fn handle_route_failure(args: &RouteArgs, err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownNode { name, suggestions } => {
            anyhow::anyhow!(format_unknown_node_message(&name, &suggestions))
        }
        LibError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal, args.directed))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_node_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown node '{name}'.");
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {joined}?"));
        }
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str, directed: bool) -> String {
    let mut message = format!("No route found between {start} and {goal}.");
    if directed {
        message.push_str(" Some links may be one-way; try again without --directed.");
    } else {
        message.push_str(" The two airports are not connected in the route table.");
    }
    message
}
