//! Batch command implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use hitoffset_core::{ChartDocument, ReplayDocument, format_report_console};
use tracing::{error, info};

use crate::cli::AnalysisOptions;
use crate::cli_utils::build_analyzer;

/// Run the batch command
pub fn run(
    chart_path: &Path,
    replay_paths: &[PathBuf],
    options: &AnalysisOptions,
    json: bool,
) -> Result<()> {
    let analyzer = build_analyzer(options)?;
    let chart = ChartDocument::load(chart_path)
        .with_context(|| format!("Failed to load chart {}", chart_path.display()))?;

    let replays = replay_paths
        .iter()
        .map(|path| {
            ReplayDocument::load(path)
                .with_context(|| format!("Failed to load replay {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    info!("Analyzing {} replays", replays.len());

    let results = analyzer.analyze_batch(&replays, &chart);

    let mut reports = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for (path, result) in replay_paths.iter().zip(results) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("Analysis of {} failed: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", format_report_console(report));
        }
        println!();
        for report in &reports {
            println!("{}", report.headline());
        }
    }

    if failures > 0 {
        bail!("{} of {} replays failed to analyze", failures, replay_paths.len());
    }
    Ok(())
}
