mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins unless --verbose is given; otherwise only warnings
    let env_filter = if args.verbose {
        EnvFilter::new("hitoffset=debug,hitoffset_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("hitoffset=warn,hitoffset_core=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Analyze {
            replay,
            chart,
            options,
            json,
            histogram,
        } => commands::analyze::run(&replay, &chart, &options, json, histogram),
        Command::Batch {
            chart,
            replays,
            options,
            json,
        } => commands::batch::run(&chart, &replays, &options, json),
        Command::Window { difficulty, mods } => commands::window::run(difficulty, &mods),
    }
}
