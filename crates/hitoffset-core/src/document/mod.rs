//! JSON documents exchanged with replay and chart providers.
//!
//! Container decoding and chart-file parsing happen elsewhere; these are the
//! already-extracted frame and target lists.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::Target;
use crate::error::Result;
use crate::replay::{Mods, ReplayFrame};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mods: Mods,
    /// Overrides the chart's difficulty when present.
    #[serde(default)]
    pub difficulty: Option<f64>,
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub difficulty: Option<f64>,
    pub targets: Vec<Target>,
}

/// Documents that take their file stem as a name when they carry none.
trait Named: for<'de> Deserialize<'de> {
    fn name_slot(&mut self) -> &mut Option<String>;

    fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut doc: Self = serde_json::from_str(&content)?;
        let slot = doc.name_slot();
        if slot.is_none() {
            *slot = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(doc)
    }
}

impl Named for ReplayDocument {
    fn name_slot(&mut self) -> &mut Option<String> {
        &mut self.name
    }
}

impl Named for ChartDocument {
    fn name_slot(&mut self) -> &mut Option<String> {
        &mut self.name
    }
}

impl ReplayDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_from(path)
    }
}

impl ChartDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_from(path)
    }
}
