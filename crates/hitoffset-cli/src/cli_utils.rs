//! Helpers shared by CLI commands.

use anyhow::{Context, Result};
use hitoffset_core::{AnalysisConfig, Analyzer, TriggerPolicy};
use tracing::info;

use crate::cli::AnalysisOptions;

/// Build the analysis config: file (if any), then command-line overrides.
pub fn resolve_config(options: &AnalysisOptions) -> Result<AnalysisConfig> {
    let mut config = match &options.config {
        Some(path) => {
            let config = AnalysisConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            info!("Loaded config from {:?}", path);
            config
        }
        None => AnalysisConfig::default(),
    };

    if let Some(calibration) = options.calibration {
        config.calibration_offset_ms = calibration;
    }
    if let Some(threshold) = options.threshold {
        anyhow::ensure!(
            threshold.is_finite() && threshold >= 0.0,
            "--threshold must be a non-negative number"
        );
        config.tendency_threshold_ms = threshold;
    }
    if let Some(difficulty) = options.difficulty {
        config.default_difficulty = Some(difficulty);
    }
    if options.level_trigger {
        config.trigger_policy = TriggerPolicy::Level;
    }
    if options.scale_by_rate {
        config.scale_targets_by_rate = true;
    }

    Ok(config)
}

/// Resolve the config and build an analyzer from it.
pub fn build_analyzer(options: &AnalysisOptions) -> Result<Analyzer> {
    let analyzer = Analyzer::new(resolve_config(options)?);
    let config = analyzer.config();
    info!(
        "Calibration {:+} ms, {:?} trigger, tendency threshold {} ms",
        config.calibration_offset_ms, config.trigger_policy, config.tendency_threshold_ms
    );
    Ok(analyzer)
}
