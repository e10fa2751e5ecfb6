//! Press-to-target correlation.
//!
//! Pairs each circle or slider head with the closest unused press inside
//! the miss window, in a single forward pass over both time-sorted lists.

mod engine;

pub use engine::*;
