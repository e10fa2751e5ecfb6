//! End-to-end analysis of one replay against one chart.
//!
//! Decoding and window derivation feed the correlation pass, whose offsets
//! are then summarized. All caller-boundary policy lives here: difficulty
//! fallback, input validation and optional rate scaling of target times.

mod console;
mod report;

pub use console::*;
pub use report::*;

use std::thread;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::chart::{HitWindow, Target, first_unsorted_target};
use crate::config::AnalysisConfig;
use crate::correlate::correlate;
use crate::document::{ChartDocument, ReplayDocument};
use crate::error::{Error, Result};
use crate::replay::{Mods, ReplayFrame, decode_frames, first_unsorted_event};
use crate::stats::summarize;

/// Runs analyses with a fixed configuration.
///
/// Holds no mutable state, so one `Analyzer` can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Pick the difficulty for a run: replay override, then chart value,
    /// then the configured fallback.
    pub fn resolve_difficulty(
        &self,
        replay_difficulty: Option<f64>,
        chart_difficulty: Option<f64>,
    ) -> Result<f64> {
        let difficulty = match replay_difficulty.or(chart_difficulty) {
            Some(d) => d,
            None => {
                let fallback = self.config.default_difficulty.ok_or(Error::MissingDifficulty)?;
                warn!("No difficulty available, falling back to {}", fallback);
                fallback
            }
        };

        if !difficulty.is_finite() || difficulty < 0.0 {
            return Err(Error::InvalidDifficulty(difficulty));
        }
        Ok(difficulty)
    }

    /// Analyze raw parts. `targets` must be sorted by time.
    pub fn analyze_parts(
        &self,
        frames: &[ReplayFrame],
        mods: Mods,
        difficulty: f64,
        targets: &[Target],
    ) -> Result<AnalysisOutcome> {
        if let Some(index) = first_unsorted_target(targets) {
            return Err(Error::UnsortedTargets { index });
        }

        let events = decode_frames(
            frames,
            self.config.calibration_offset_ms,
            self.config.trigger_policy,
        );
        if let Some(index) = first_unsorted_event(&events) {
            return Err(Error::UnsortedEvents { index });
        }
        info!(
            "Found {} input events ({:?} trigger)",
            events.len(),
            self.config.trigger_policy
        );

        let window = HitWindow::new(difficulty, mods);
        info!(
            "Using miss window: +/-{:.2} ms (OD={}, Mods={})",
            window.window_50_ms, difficulty, mods
        );

        let scaled;
        let targets = if self.config.scale_targets_by_rate {
            let rate = mods.clock_rate();
            debug!("Scaling target times by 1/{}", rate);
            scaled = targets.iter().map(|t| t.scaled(rate)).collect::<Vec<_>>();
            scaled.as_slice()
        } else {
            targets
        };

        let record = correlate(&events, targets, &window);
        let summary = summarize(&record.offsets_ms, self.config.tendency_threshold_ms);

        Ok(AnalysisOutcome {
            event_count: events.len(),
            window,
            record,
            summary,
        })
    }

    pub fn analyze(&self, replay: &ReplayDocument, chart: &ChartDocument) -> Result<AnalysisReport> {
        let replay_name = replay.name.clone().unwrap_or_else(|| "replay".to_string());
        info!("--- Starting analysis for {} ---", replay_name);

        let difficulty = self.resolve_difficulty(replay.difficulty, chart.difficulty)?;
        let outcome = self.analyze_parts(&replay.frames, replay.mods, difficulty, &chart.targets)?;

        Ok(AnalysisReport {
            replay_name,
            chart_name: chart.name.clone(),
            mods: replay.mods,
            difficulty,
            calibration_offset_ms: self.config.calibration_offset_ms,
            event_count: outcome.event_count,
            window: outcome.window,
            record: outcome.record,
            summary: outcome.summary,
            analyzed_at: Local::now(),
        })
    }

    /// Analyze several replays of the same chart on scoped worker threads.
    ///
    /// Results come back in input order; one failing replay does not affect
    /// the others.
    pub fn analyze_batch(
        &self,
        replays: &[ReplayDocument],
        chart: &ChartDocument,
    ) -> Vec<Result<AnalysisReport>> {
        thread::scope(|scope| {
            let handles: Vec<_> = replays
                .iter()
                .map(|replay| scope.spawn(move || self.analyze(replay, chart)))
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}
