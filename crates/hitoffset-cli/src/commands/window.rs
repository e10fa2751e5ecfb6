//! Window command implementation.

use anyhow::{Context, Result, ensure};
use hitoffset_core::{HitWindow, Mods};

/// Run the window command
pub fn run(difficulty: f64, mods: &str) -> Result<()> {
    ensure!(
        difficulty.is_finite() && difficulty >= 0.0,
        "Difficulty must be a non-negative number, got {}",
        difficulty
    );
    let mods: Mods = mods
        .parse()
        .with_context(|| format!("Invalid mods: {}", mods))?;

    let window = HitWindow::new(difficulty, mods);

    println!("OD {} {} (rate {}x)", difficulty, mods, mods.clock_rate());
    println!("  300 : +/-{:.2} ms", window.window_300_ms);
    println!("  100 : +/-{:.2} ms", window.window_100_ms);
    println!("   50 : +/-{:.2} ms", window.window_50_ms);

    Ok(())
}
