use std::fs::File;

use anyhow::{Context, Result};
use tracing::info;

use airroute_lib::{read_connections, DirectionReport};

use crate::output::OutputFormat;
use crate::RouteSource;

pub fn handle_classify_command(source: &RouteSource, format: OutputFormat) -> Result<()> {
    let file = File::open(&source.path)
        .with_context(|| format!("failed to open routes file {}", source.path.display()))?;
    let pairs = read_connections(file, &source.columns)
        .with_context(|| format!("failed to read routes from {}", source.path.display()))?;
    info!(connections = pairs.len(), "classifying route directions");

    let report = DirectionReport::from_pairs(pairs);
    println!("{}", format.render_classification(&report)?);
    Ok(())
}
