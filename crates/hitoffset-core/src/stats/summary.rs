use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::config::stats::UNSTABLE_RATE_SCALE;

/// Coarse direction of the mean offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
pub enum Tendency {
    #[strum(serialize = "EARLY")]
    Early,
    #[strum(serialize = "ON TIME")]
    OnTime,
    #[strum(serialize = "LATE")]
    Late,
}

impl Tendency {
    /// Strictly beyond `threshold_ms` in either direction is early/late.
    pub fn classify(mean_offset_ms: f64, threshold_ms: f64) -> Self {
        if mean_offset_ms < -threshold_ms {
            Self::Early
        } else if mean_offset_ms > threshold_ms {
            Self::Late
        } else {
            Self::OnTime
        }
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Tendency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub mean_offset_ms: f64,
    /// Sample standard deviation (n - 1), 0.0 for a single offset.
    pub stdev_offset_ms: f64,
    pub unstable_rate: f64,
    pub tendency: Tendency,
    pub sample_count: usize,
}

/// Reduce offsets to summary statistics. `None` when there is nothing to
/// summarize.
pub fn summarize(offsets: &[f64], tendency_threshold_ms: f64) -> Option<AnalysisSummary> {
    if offsets.is_empty() {
        return None;
    }

    let n = offsets.len() as f64;
    let mean = offsets.iter().sum::<f64>() / n;

    let stdev = if offsets.len() > 1 {
        let squares: f64 = offsets.iter().map(|x| (x - mean).powi(2)).sum();
        (squares / (n - 1.0)).sqrt()
    } else {
        0.0
    };

    Some(AnalysisSummary {
        mean_offset_ms: mean,
        stdev_offset_ms: stdev,
        unstable_rate: stdev * UNSTABLE_RATE_SCALE,
        tendency: Tendency::classify(mean, tendency_threshold_ms),
        sample_count: offsets.len(),
    })
}
