use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Written as a lowercase name. Read from either a name or a hit-object
/// type bitfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "lowercase", from = "KindRepr")]
pub enum TargetKind {
    Circle,
    Slider,
    Spinner,
    /// Any kind this tool does not know about (e.g. mania hold notes).
    Unknown,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KindRepr {
    Bits(u32),
    Name(String),
}

impl From<KindRepr> for TargetKind {
    fn from(repr: KindRepr) -> Self {
        match repr {
            KindRepr::Bits(bits) => Self::from_type_bits(bits),
            KindRepr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "circle" => Self::Circle,
                "slider" => Self::Slider,
                "spinner" => Self::Spinner,
                _ => Self::Unknown,
            },
        }
    }
}

impl TargetKind {
    /// Build from a hit-object type bitfield (bit 0 circle, bit 1 slider,
    /// bit 3 spinner). Combo and colour bits are ignored.
    pub fn from_type_bits(bits: u32) -> Self {
        if bits & 1 != 0 {
            Self::Circle
        } else if bits & (1 << 1) != 0 {
            Self::Slider
        } else if bits & (1 << 3) != 0 {
            Self::Spinner
        } else {
            Self::Unknown
        }
    }

    /// Only circles and slider heads are matched against presses.
    pub fn is_correlatable(&self) -> bool {
        matches!(self, Self::Circle | Self::Slider)
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// A timed hit object. For sliders `time_ms` is the head.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub time_ms: f64,
    #[serde(alias = "type")]
    pub kind: TargetKind,
}

impl Target {
    pub fn new(time_ms: f64, kind: TargetKind) -> Self {
        Self { time_ms, kind }
    }

    pub fn circle(time_ms: f64) -> Self {
        Self::new(time_ms, TargetKind::Circle)
    }

    pub fn slider(time_ms: f64) -> Self {
        Self::new(time_ms, TargetKind::Slider)
    }

    pub fn spinner(time_ms: f64) -> Self {
        Self::new(time_ms, TargetKind::Spinner)
    }

    /// The same target as seen at a playback rate (times divided by `rate`).
    pub fn scaled(&self, rate: f64) -> Self {
        Self {
            time_ms: self.time_ms / rate,
            kind: self.kind,
        }
    }
}

/// Index of the first target that breaks time ordering, if any.
pub fn first_unsorted_target(targets: &[Target]) -> Option<usize> {
    targets
        .windows(2)
        .position(|w| w[1].time_ms < w[0].time_ms)
        .map(|i| i + 1)
}
