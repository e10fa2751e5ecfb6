use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::chart::{HitWindow, Target, first_unsorted_target};
use crate::replay::{InputEvent, first_unsorted_event};

/// Why correlatable targets went unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MissBreakdown {
    /// No press at all inside the window.
    pub empty_window: usize,
    /// The latest press behind the match cursor was inside the window. That
    /// press was either matched to an earlier target or passed over when a
    /// closer press won, so it cannot be reused.
    pub behind_cursor: usize,
}

impl MissBreakdown {
    pub fn total(&self) -> usize {
        self.empty_window + self.behind_cursor
    }
}

/// Result of one correlation pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrelationRecord {
    /// `press time - target time` per matched target, in target order.
    /// Negative is early, positive is late.
    pub offsets_ms: Vec<f64>,
    pub matched_count: usize,
    /// Index into the event list that produced each offset.
    pub event_indices: Vec<usize>,
    /// Targets that never take part in correlation (spinners, unknown kinds).
    pub skipped_count: usize,
    pub misses: MissBreakdown,
}

impl CorrelationRecord {
    pub fn is_empty(&self) -> bool {
        self.offsets_ms.is_empty()
    }

    fn push(&mut self, event_index: usize, offset_ms: f64) {
        self.offsets_ms.push(offset_ms);
        self.event_indices.push(event_index);
        self.matched_count += 1;
    }
}

/// Correlate presses with targets.
///
/// Both slices must be sorted by time; this is checked in debug builds only,
/// callers that take untrusted input validate first (see `Analyzer`).
///
/// For each correlatable target in order, every press at or after the cursor
/// and inside `[t - w50, t + w50]` is a candidate, and the one with the
/// smallest absolute offset wins (earliest on ties). A match moves the cursor
/// past the chosen press, so no press is used twice and the cursor never
/// moves backwards. A miss leaves the cursor where it was.
pub fn correlate(events: &[InputEvent], targets: &[Target], window: &HitWindow) -> CorrelationRecord {
    debug_assert!(first_unsorted_event(events).is_none(), "events must be time-sorted");
    debug_assert!(first_unsorted_target(targets).is_none(), "targets must be time-sorted");

    let mut record = CorrelationRecord::default();
    let radius = window.max_distance();

    if events.is_empty() || !window.is_usable() {
        for target in targets {
            if target.kind.is_correlatable() {
                record.misses.empty_window += 1;
            } else {
                record.skipped_count += 1;
            }
        }
        warn!(
            "Nothing to correlate ({} events, miss window {:.2} ms)",
            events.len(),
            radius
        );
        return record;
    }

    // `cursor` only moves on a match. `scan_from` additionally skips presses
    // that are too early for the current target; those are too early for
    // every later target as well, since target times never decrease.
    // Distances are always taken as `event - target` so that the window
    // test matches the offset that gets recorded.
    let mut cursor = 0usize;
    let mut scan_from = 0usize;

    for (target_index, target) in targets.iter().enumerate() {
        if !target.kind.is_correlatable() {
            debug!("Skipping target {} ({})", target_index, target.kind);
            record.skipped_count += 1;
            continue;
        }

        scan_from = scan_from.max(cursor);
        while scan_from < events.len() && target.time_ms - events[scan_from].timestamp_ms > radius
        {
            scan_from += 1;
        }

        let mut best: Option<(usize, f64)> = None;
        for (event_index, event) in events.iter().enumerate().skip(scan_from) {
            let offset = event.timestamp_ms - target.time_ms;
            if offset > radius {
                break;
            }
            if offset.abs() > radius {
                continue;
            }
            if best.is_none_or(|(_, best_offset)| offset.abs() < best_offset.abs()) {
                best = Some((event_index, offset));
            }
        }

        match best {
            Some((event_index, offset)) => {
                debug!(
                    "Matched target {} (T={:.0}) with input {} (offset {:+.2} ms)",
                    target_index, target.time_ms, event_index, offset
                );
                record.push(event_index, offset);
                cursor = event_index + 1;
            }
            None => {
                // Everything before the cursor has been consumed or passed
                // over; the press right behind it is the latest such one.
                let behind_cursor_in_window = cursor > 0
                    && target.time_ms - events[cursor - 1].timestamp_ms <= radius;
                if behind_cursor_in_window {
                    debug!(
                        "Miss: target {} (T={:.0}) only had inputs behind the cursor in window",
                        target_index, target.time_ms
                    );
                    record.misses.behind_cursor += 1;
                } else {
                    debug!(
                        "Miss: no input for target {} (T={:.0})",
                        target_index, target.time_ms
                    );
                    record.misses.empty_window += 1;
                }
            }
        }
    }

    info!(
        "Correlation complete. Matched {} hits. Skipped {} objects. Missed {}.",
        record.matched_count,
        record.skipped_count,
        record.misses.total()
    );
    if record.is_empty() {
        warn!("No hits correlated");
    }

    record
}
