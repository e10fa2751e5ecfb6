use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::chart::HitWindow;
use crate::correlate::CorrelationRecord;
use crate::replay::Mods;
use crate::stats::{AnalysisSummary, OffsetHistogram};

/// Output of the engine proper, before any naming or timestamping.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub event_count: usize,
    pub window: HitWindow,
    pub record: CorrelationRecord,
    /// `None` when nothing correlated.
    pub summary: Option<AnalysisSummary>,
}

/// Everything known about one analyzed replay, ready for display or export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub replay_name: String,
    pub chart_name: Option<String>,
    pub mods: Mods,
    pub difficulty: f64,
    pub calibration_offset_ms: i32,
    pub event_count: usize,
    pub window: HitWindow,
    pub record: CorrelationRecord,
    pub summary: Option<AnalysisSummary>,
    pub analyzed_at: DateTime<Local>,
}

impl AnalysisReport {
    pub fn histogram(&self, bucket_ms: f64) -> Option<OffsetHistogram> {
        OffsetHistogram::from_offsets(&self.record.offsets_ms, bucket_ms)
    }

    /// One-line result, e.g. `play: Average Hit Offset: +1.25 ms (ON TIME)`.
    pub fn headline(&self) -> String {
        match &self.summary {
            Some(summary) => format!(
                "{}: Average Hit Offset: {:+.2} ms ({})",
                self.replay_name, summary.mean_offset_ms, summary.tendency
            ),
            None => format!("{}: no hits correlated", self.replay_name),
        }
    }
}
