//! CLI argument definitions for hitoffset.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hitoffset")]
#[command(about = "Replay hit offset and unstable rate analyzer", version)]
pub struct Args {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every analysis command. Flags override the config file.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Config file (TOML)
    #[arg(long, value_name = "FILE", env = "HITOFFSET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Calibration added to replay times, in ms
    #[arg(long, allow_negative_numbers = true)]
    pub calibration: Option<i32>,

    /// Mean offset (ms) beyond which a run counts as early or late
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Difficulty (OD) to use when neither replay nor chart has one
    #[arg(long)]
    pub difficulty: Option<f64>,

    /// Count every held frame as a press instead of only key-down edges
    #[arg(long)]
    pub level_trigger: bool,

    /// Divide chart times by the playback rate before matching
    #[arg(long)]
    pub scale_by_rate: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze one replay against a chart
    Analyze {
        /// Replay document (JSON)
        #[arg(short, long)]
        replay: PathBuf,
        /// Chart document (JSON)
        #[arg(short, long)]
        chart: PathBuf,
        #[command(flatten)]
        options: AnalysisOptions,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Show an offset histogram with this bucket width (ms)
        #[arg(long, value_name = "MS")]
        histogram: Option<f64>,
    },
    /// Analyze several replays of the same chart concurrently
    Batch {
        /// Chart document (JSON)
        #[arg(short, long)]
        chart: PathBuf,
        /// Replay documents (JSON)
        #[arg(required = true)]
        replays: Vec<PathBuf>,
        #[command(flatten)]
        options: AnalysisOptions,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print hit windows for a difficulty and mod combination
    Window {
        /// Overall difficulty (OD)
        #[arg(short, long)]
        difficulty: f64,
        /// Mods, e.g. "HDDT" or "HD,DT"
        #[arg(short, long, default_value = "NM")]
        mods: String,
    },
}
