use serde::{Deserialize, Serialize};

use crate::config::window::{
    BASE_100_MS, BASE_300_MS, BASE_50_MS, REDUCTION_100_MS, REDUCTION_300_MS, REDUCTION_50_MS,
};
use crate::replay::Mods;

/// Tolerance radii (ms) for the three judgement tiers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitWindow {
    pub window_300_ms: f64,
    pub window_100_ms: f64,
    pub window_50_ms: f64,
}

impl HitWindow {
    /// Derive the windows for a difficulty value under a modifier set.
    ///
    /// The difficulty is taken as given; fallbacks for a missing value are
    /// the caller's decision.
    pub fn new(difficulty: f64, mods: Mods) -> Self {
        let rate = mods.clock_rate();
        let radius = |base: f64, reduction: f64| ((base - reduction * difficulty) / rate).max(0.0);

        Self {
            window_300_ms: radius(BASE_300_MS, REDUCTION_300_MS),
            window_100_ms: radius(BASE_100_MS, REDUCTION_100_MS),
            window_50_ms: radius(BASE_50_MS, REDUCTION_50_MS),
        }
    }

    /// Largest admissible distance between a target and its matched press.
    pub fn max_distance(&self) -> f64 {
        self.window_50_ms
    }

    /// A zero or non-finite miss window cannot match anything.
    pub fn is_usable(&self) -> bool {
        self.window_50_ms.is_finite() && self.window_50_ms > 0.0
    }
}
