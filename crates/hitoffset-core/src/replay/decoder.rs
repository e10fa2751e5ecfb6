use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Keys;

/// One raw replay frame: time since the previous frame and control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayFrame {
    pub time_delta: i64,
    pub keys: Keys,
}

impl ReplayFrame {
    pub fn new(time_delta: i64, keys: u32) -> Self {
        Self {
            time_delta,
            keys: Keys::from_bits(keys),
        }
    }
}

/// A decoded press at an absolute, calibration-adjusted time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub timestamp_ms: f64,
    pub keys: Keys,
}

/// Which frames produce an `InputEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerPolicy {
    /// Emit when a tracked control goes from released to held. `keys` holds
    /// only the newly pressed controls, so a second key pressed while the
    /// first is still held counts as its own press.
    #[default]
    Edge,
    /// Emit for every frame in which any tracked control is held.
    Level,
}

/// Decode a delta-encoded frame stream into absolute press events.
///
/// Leading frames with a negative delta (while the clock is still at zero)
/// are seek markers and are dropped without touching the clock or the held
/// key state. Every other delta is added to the clock, negative ones
/// included. A press whose time would fall before the previous press is
/// emitted at the previous press's time instead; the clock itself is left
/// alone so later presses keep their true times.
pub fn decode_frames(
    frames: &[ReplayFrame],
    calibration_offset_ms: i32,
    policy: TriggerPolicy,
) -> Vec<InputEvent> {
    let mut events: Vec<InputEvent> = Vec::new();
    let mut clock: i64 = 0;
    let mut held = Keys::NONE;
    let calibration = f64::from(calibration_offset_ms);

    for (idx, frame) in frames.iter().enumerate() {
        if clock == 0 && frame.time_delta < 0 {
            debug!(
                "Skipping leading frame {} with negative delta {}",
                idx, frame.time_delta
            );
            continue;
        }

        clock = clock.saturating_add(frame.time_delta);

        let pressed = frame.keys.tracked();
        let emitted = match policy {
            TriggerPolicy::Edge => pressed & !held,
            TriggerPolicy::Level => pressed,
        };
        held = pressed;

        if !emitted.is_empty() {
            let mut timestamp_ms = clock as f64 + calibration;
            if let Some(last) = events.last()
                && timestamp_ms < last.timestamp_ms
            {
                debug!(
                    "Frame {} at {} ms lands before the previous press, emitted at {} ms",
                    idx, timestamp_ms, last.timestamp_ms
                );
                timestamp_ms = last.timestamp_ms;
            }
            events.push(InputEvent {
                timestamp_ms,
                keys: emitted,
            });
        }
    }

    debug!(
        "Decoded {} input events from {} frames ({:?})",
        events.len(),
        frames.len(),
        policy
    );
    events
}

/// Index of the first event that breaks time ordering, if any.
pub fn first_unsorted_event(events: &[InputEvent]) -> Option<usize> {
    events
        .windows(2)
        .position(|w| w[1].timestamp_ms < w[0].timestamp_ms)
        .map(|i| i + 1)
}
