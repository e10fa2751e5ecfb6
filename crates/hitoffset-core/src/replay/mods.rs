use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::config::window::{FAST_RATE, SLOW_RATE};
use crate::error::{Error, Result};

/// A single gameplay modifier, with its replay bitfield value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[repr(u32)]
pub enum Mod {
    #[strum(serialize = "NF")]
    NoFail = 1,
    #[strum(serialize = "EZ")]
    Easy = 1 << 1,
    #[strum(serialize = "TD")]
    TouchDevice = 1 << 2,
    #[strum(serialize = "HD")]
    Hidden = 1 << 3,
    #[strum(serialize = "HR")]
    HardRock = 1 << 4,
    #[strum(serialize = "SD")]
    SuddenDeath = 1 << 5,
    #[strum(serialize = "DT")]
    DoubleTime = 1 << 6,
    #[strum(serialize = "RX")]
    Relax = 1 << 7,
    #[strum(serialize = "HT")]
    HalfTime = 1 << 8,
    #[strum(serialize = "NC")]
    Nightcore = 1 << 9,
    #[strum(serialize = "FL")]
    Flashlight = 1 << 10,
    #[strum(serialize = "AT")]
    Autoplay = 1 << 11,
    #[strum(serialize = "SO")]
    SpunOut = 1 << 12,
    #[strum(serialize = "AP")]
    Autopilot = 1 << 13,
    #[strum(serialize = "PF")]
    Perfect = 1 << 14,
}

impl Mod {
    pub const fn bit(self) -> u32 {
        self as u32
    }

    pub fn acronym(self) -> &'static str {
        self.into()
    }
}

/// Set of active modifiers.
///
/// Only the playback-rate mods influence analysis; everything else is
/// carried through for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ModsRepr", into = "u32")]
pub struct Mods(u32);

#[derive(Deserialize)]
#[serde(untagged)]
enum ModsRepr {
    Bits(u32),
    Acronyms(Vec<String>),
    Joined(String),
}

impl TryFrom<ModsRepr> for Mods {
    type Error = Error;

    fn try_from(repr: ModsRepr) -> Result<Self> {
        match repr {
            ModsRepr::Bits(bits) => Ok(Self::from_bits(bits)),
            ModsRepr::Acronyms(list) => list.iter().map(|s| s.parse::<Mods>()).try_fold(
                Self::NONE,
                |acc, m| m.map(|m| acc | m),
            ),
            ModsRepr::Joined(s) => s.parse(),
        }
    }
}

impl From<Mods> for u32 {
    fn from(mods: Mods) -> Self {
        mods.0
    }
}

impl Mods {
    pub const NONE: Self = Self(0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, m: Mod) -> bool {
        self.0 & m.bit() != 0
    }

    pub const fn with(self, m: Mod) -> Self {
        Self(self.0 | m.bit())
    }

    /// DoubleTime or Nightcore.
    pub const fn is_fast(self) -> bool {
        self.contains(Mod::DoubleTime) || self.contains(Mod::Nightcore)
    }

    pub const fn is_slow(self) -> bool {
        self.contains(Mod::HalfTime)
    }

    /// Playback rate implied by the set. A fast mod wins over HalfTime if
    /// both are (invalidly) present.
    pub fn clock_rate(self) -> f64 {
        if self.is_fast() {
            FAST_RATE
        } else if self.is_slow() {
            SLOW_RATE
        } else {
            1.0
        }
    }

    pub fn iter(self) -> impl Iterator<Item = Mod> {
        Mod::iter().filter(move |m| self.contains(*m))
    }
}

impl std::ops::BitOr for Mods {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl From<Mod> for Mods {
    fn from(m: Mod) -> Self {
        Self(m.bit())
    }
}

impl FromIterator<Mod> for Mods {
    fn from_iter<I: IntoIterator<Item = Mod>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Parses acronym lists such as `"HDDT"`, `"HD,DT"`, `"hd dt"` or `"NM"`.
impl FromStr for Mods {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '+')
            .collect();

        if compact.len() % 2 != 0 {
            return Err(Error::UnknownMod(s.to_string()));
        }

        let mut mods = Self::NONE;
        for i in (0..compact.len()).step_by(2) {
            let acronym = compact
                .get(i..i + 2)
                .ok_or_else(|| Error::UnknownMod(s.to_string()))?;
            if acronym.eq_ignore_ascii_case("NM") {
                continue;
            }
            let m = Mod::from_str(acronym).map_err(|_| Error::UnknownMod(acronym.to_string()))?;
            mods = mods.with(m);
        }
        Ok(mods)
    }
}

impl std::fmt::Display for Mods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "NM");
        }
        for m in self.iter() {
            // NC and PF are stored together with the mod they extend
            if (m == Mod::DoubleTime && self.contains(Mod::Nightcore))
                || (m == Mod::SuddenDeath && self.contains(Mod::Perfect))
            {
                continue;
            }
            write!(f, "{}", m.acronym())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_rate() {
        assert_eq!(Mods::NONE.clock_rate(), 1.0);
        assert_eq!(Mods::from(Mod::DoubleTime).clock_rate(), 1.5);
        assert_eq!(Mods::from(Mod::Nightcore).clock_rate(), 1.5);
        assert_eq!(Mods::from(Mod::HalfTime).clock_rate(), 0.75);
        assert_eq!(Mods::from(Mod::Hidden).clock_rate(), 1.0);
    }

    #[test]
    fn test_fast_mod_takes_precedence() {
        let mods: Mods = [Mod::DoubleTime, Mod::HalfTime].into_iter().collect();
        assert!(mods.is_fast());
        assert!(mods.is_slow());
        assert_eq!(mods.clock_rate(), 1.5);
    }

    #[test]
    fn test_parse_acronyms() {
        let mods: Mods = "HDDT".parse().unwrap();
        assert!(mods.contains(Mod::Hidden));
        assert!(mods.contains(Mod::DoubleTime));

        let mods: Mods = "hd, ht".parse().unwrap();
        assert!(mods.contains(Mod::HalfTime));

        assert_eq!("NM".parse::<Mods>().unwrap(), Mods::NONE);
        assert_eq!("".parse::<Mods>().unwrap(), Mods::NONE);
    }

    #[test]
    fn test_parse_unknown_acronym() {
        assert!(matches!("XX".parse::<Mods>(), Err(Error::UnknownMod(_))));
        assert!(matches!("HDD".parse::<Mods>(), Err(Error::UnknownMod(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Mods::NONE.to_string(), "NM");
        // Nightcore replays carry the DoubleTime bit as well
        assert_eq!(Mods::from_bits(64 | 512 | 8).to_string(), "HDNC");
        assert_eq!(Mods::from_bits(64).to_string(), "DT");
    }

    #[test]
    fn test_deserialize_forms() {
        let from_bits: Mods = serde_json::from_str("72").unwrap();
        let from_list: Mods = serde_json::from_str(r#"["HD", "DT"]"#).unwrap();
        let from_str: Mods = serde_json::from_str(r#""HDDT""#).unwrap();
        assert_eq!(from_bits, from_list);
        assert_eq!(from_list, from_str);
        assert!(serde_json::from_str::<Mods>(r#"["ZZ"]"#).is_err());
    }

    #[test]
    fn test_serialize_as_bits() {
        let mods: Mods = "HDDT".parse().unwrap();
        assert_eq!(serde_json::to_string(&mods).unwrap(), "72");
    }
}
