//! Analyze command implementation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use hitoffset_core::{
    ChartDocument, ReplayDocument, format_histogram_console, format_report_console,
};

use crate::cli::AnalysisOptions;
use crate::cli_utils::build_analyzer;

const HISTOGRAM_WIDTH: usize = 40;

/// Run the analyze command
pub fn run(
    replay_path: &Path,
    chart_path: &Path,
    options: &AnalysisOptions,
    json: bool,
    histogram: Option<f64>,
) -> Result<()> {
    let analyzer = build_analyzer(options)?;

    let replay = ReplayDocument::load(replay_path)
        .with_context(|| format!("Failed to load replay {}", replay_path.display()))?;
    let chart = ChartDocument::load(chart_path)
        .with_context(|| format!("Failed to load chart {}", chart_path.display()))?;

    let report = analyzer.analyze(&replay, &chart)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", format_report_console(&report));

    if let Some(bucket_ms) = histogram {
        match report.histogram(bucket_ms) {
            Some(hist) => print!("{}", format_histogram_console(&hist, HISTOGRAM_WIDTH)),
            None => bail!("Histogram bucket width must be a positive number, got {}", bucket_ms),
        }
    }

    Ok(())
}
