pub mod analysis;
pub mod chart;
pub mod config;
pub mod correlate;
pub mod document;
pub mod error;
pub mod replay;
pub mod stats;

pub use analysis::{
    AnalysisOutcome, AnalysisReport, Analyzer, format_histogram_console, format_report_console,
};
pub use chart::{HitWindow, Target, TargetKind};
pub use config::AnalysisConfig;
pub use correlate::{CorrelationRecord, MissBreakdown, correlate};
pub use document::{ChartDocument, ReplayDocument};
pub use error::{Error, Result};
pub use replay::{InputEvent, Keys, Mod, Mods, ReplayFrame, TriggerPolicy, decode_frames};
pub use stats::{AnalysisSummary, OffsetHistogram, Tendency, summarize};
