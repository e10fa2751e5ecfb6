//! Chart-side types.
//!
//! This module contains:
//! - `Target`, `TargetKind` - timed hit objects
//! - `HitWindow` - tolerance radii derived from difficulty and mods

mod hit_window;
mod target;

pub use hit_window::*;
pub use target::*;
