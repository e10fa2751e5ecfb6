//! Replay-side types and decoding.
//!
//! This module contains:
//! - `Keys` - per-frame control bitmask
//! - `Mods` - active modifier set
//! - `ReplayFrame`, `InputEvent` - raw frames and decoded press events
//! - `decode_frames` - delta stream to absolute press events

mod decoder;
mod keys;
mod mods;

pub use decoder::*;
pub use keys::*;
pub use mods::*;
