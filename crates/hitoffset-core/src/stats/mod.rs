//! Offset statistics.
//!
//! This module contains:
//! - `AnalysisSummary`, `Tendency` - mean / stdev / unstable rate of a run
//! - `OffsetHistogram` - bucketed offsets for graphing

mod histogram;
mod summary;

pub use histogram::*;
pub use summary::*;
