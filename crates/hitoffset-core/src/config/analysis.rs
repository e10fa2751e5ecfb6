use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::replay::TriggerPolicy;

use super::{replay, stats, window};

/// Parameters for a single analysis run.
///
/// Nothing here is global: the same values are passed explicitly to the
/// decoder, the window model and the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Added to every decoded input timestamp (ms, may be negative).
    pub calibration_offset_ms: i32,
    /// Mean offset beyond which a run is classified early or late.
    pub tendency_threshold_ms: f64,
    pub trigger_policy: TriggerPolicy,
    /// Used when neither the replay nor the chart carries a difficulty.
    /// `None` makes a missing difficulty an error.
    pub default_difficulty: Option<f64>,
    /// Divide target times by the playback rate before correlating.
    pub scale_targets_by_rate: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            calibration_offset_ms: replay::DEFAULT_CALIBRATION_OFFSET_MS,
            tendency_threshold_ms: stats::DEFAULT_TENDENCY_THRESHOLD_MS,
            trigger_policy: TriggerPolicy::default(),
            default_difficulty: Some(window::DEFAULT_DIFFICULTY),
            scale_targets_by_rate: false,
        }
    }
}

impl AnalysisConfig {
    /// Load a config from a TOML file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.tendency_threshold_ms.is_finite() || self.tendency_threshold_ms < 0.0 {
            return Err(Error::ConfigParseError(format!(
                "tendency_threshold_ms must be a non-negative number, got {}",
                self.tendency_threshold_ms
            )));
        }
        if let Some(d) = self.default_difficulty
            && (!d.is_finite() || d < 0.0)
        {
            return Err(Error::InvalidDifficulty(d));
        }
        Ok(())
    }
}
