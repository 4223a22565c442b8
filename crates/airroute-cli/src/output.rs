use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use serde_json::json;

use airroute_lib::{DirectionReport, GraphMode, RouteSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn render_route(self, summary: &RouteSummary) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(summary.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        }
    }

    pub fn render_classification(self, report: &DirectionReport) -> Result<String> {
        let kind = report.classify();
        let mode = report.recommended_mode();
        match self {
            OutputFormat::Text => Ok(format!(
                "The route table contains {kind}.\n\
                 Two-way links: {}\n\
                 One-way links: {}\n\
                 Recommended graph mode: {}",
                report.two_way(),
                report.one_way(),
                mode_label(mode)
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "kind": kind,
                "two_way": report.two_way(),
                "one_way": report.one_way(),
                "recommended_mode": mode,
            }))?),
        }
    }

    pub fn render_annotation(self, rows: usize, output: &Path) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(format!(
                "Annotated {rows} routes into {}",
                output.display()
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "rows": rows,
                "output": output.display().to_string(),
            }))?),
        }
    }
}

fn mode_label(mode: GraphMode) -> &'static str {
    match mode {
        GraphMode::Directed => "directed",
        GraphMode::Undirected => "undirected",
    }
}
