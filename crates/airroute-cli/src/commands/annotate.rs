use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use airroute_lib::annotate_distances;

use crate::output::OutputFormat;
use crate::RouteSource;

pub fn handle_annotate_command(
    source: &RouteSource,
    output: &Path,
    format: OutputFormat,
) -> Result<()> {
    let input = File::open(&source.path)
        .with_context(|| format!("failed to open routes file {}", source.path.display()))?;
    let writer = File::create(output)
        .map(BufWriter::new)
        .with_context(|| format!("failed to create {}", output.display()))?;

    let rows = annotate_distances(input, writer, &source.columns)
        .with_context(|| format!("failed to annotate {}", source.path.display()))?;
    info!(rows, output = %output.display(), "wrote annotated routes");

    println!("{}", format.render_annotation(rows, output)?);
    Ok(())
}
