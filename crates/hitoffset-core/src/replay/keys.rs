use std::ops::{BitAnd, BitOr, Not};

use serde::{Deserialize, Serialize};

/// Control state bitmask of a replay frame.
///
/// Bit layout follows the replay format: keyboard keys also set the
/// corresponding mouse bit (K1 = M1 | 4, K2 = M2 | 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keys(u32);

impl Keys {
    pub const NONE: Self = Self(0);
    pub const M1: Self = Self(1);
    pub const M2: Self = Self(2);
    pub const K1: Self = Self(4);
    pub const K2: Self = Self(8);
    pub const SMOKE: Self = Self(16);

    /// Controls that count as a press for timing analysis.
    pub const TRACKED: Self = Self(1 | 2 | 4 | 8);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Drop everything except the tracked controls.
    pub const fn tracked(self) -> Self {
        Self(self.0 & Self::TRACKED.0)
    }
}

impl BitOr for Keys {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Keys {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Keys {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl From<u32> for Keys {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}
