//! Analysis configuration and tuning constants.
//!
//! This module contains:
//! - `AnalysisConfig` - per-run parameters threaded through the pipeline
//! - Hit window, statistics and replay constants

mod analysis;

pub use analysis::*;

/// Hit window derivation constants.
///
/// Each radius is `base - reduction * OD`, divided by the playback rate.
pub mod window {
    /// Base radius (ms) at OD 0 for the 300 / 100 / 50 judgements.
    pub const BASE_300_MS: f64 = 79.5;
    pub const BASE_100_MS: f64 = 139.5;
    pub const BASE_50_MS: f64 = 199.5;

    /// Radius reduction (ms) per OD point.
    pub const REDUCTION_300_MS: f64 = 6.0;
    pub const REDUCTION_100_MS: f64 = 8.0;
    pub const REDUCTION_50_MS: f64 = 10.0;

    /// Playback rate under DoubleTime / Nightcore.
    pub const FAST_RATE: f64 = 1.5;

    /// Playback rate under HalfTime.
    pub const SLOW_RATE: f64 = 0.75;

    /// Difficulty assumed at the caller boundary when a chart carries none.
    pub const DEFAULT_DIFFICULTY: f64 = 5.0;
}

/// Offset statistics constants.
pub mod stats {
    /// Unstable Rate is the offset standard deviation scaled by this factor.
    pub const UNSTABLE_RATE_SCALE: f64 = 10.0;

    /// Mean offsets within +/- this many ms are classified as on time.
    pub const DEFAULT_TENDENCY_THRESHOLD_MS: f64 = 2.0;
}

/// Replay decoding constants.
pub mod replay {
    /// Calibration applied to every decoded input timestamp.
    pub const DEFAULT_CALIBRATION_OFFSET_MS: i32 = -8;
}
