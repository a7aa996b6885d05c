use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Frequencies (Hz) tested by a standard pure-tone audiogram.
pub const STANDARD_FREQUENCIES: [u32; 6] = [250, 500, 1000, 2000, 4000, 8000];

/// Hearing threshold level (dB) per tested frequency (Hz) for one ear.
pub type EarAudiogram = BTreeMap<u32, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Ear {
    #[serde(rename = "left_ear")]
    Left,
    #[serde(rename = "right_ear")]
    Right,
}

impl Ear {
    pub const BOTH: [Ear; 2] = [Ear::Left, Ear::Right];

    /// Title-case label, e.g. "Left Ear".
    pub fn label(&self) -> &'static str {
        match self {
            Ear::Left => "Left Ear",
            Ear::Right => "Right Ear",
        }
    }

    /// Lowercase label for running prose, e.g. "left ear".
    pub fn prose(&self) -> &'static str {
        match self {
            Ear::Left => "left ear",
            Ear::Right => "right ear",
        }
    }
}

impl fmt::Display for Ear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Audiogram for a subject. Either ear may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AudiogramData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_ear: Option<EarAudiogram>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_ear: Option<EarAudiogram>,
}

impl AudiogramData {
    pub fn new(left_ear: EarAudiogram, right_ear: EarAudiogram) -> Self {
        Self {
            left_ear: Some(left_ear),
            right_ear: Some(right_ear),
        }
    }

    pub fn ear(&self, ear: Ear) -> Option<&EarAudiogram> {
        match ear {
            Ear::Left => self.left_ear.as_ref(),
            Ear::Right => self.right_ear.as_ref(),
        }
    }

    /// Present ears in left, right order.
    pub fn ears(&self) -> impl Iterator<Item = (Ear, &EarAudiogram)> {
        Ear::BOTH
            .into_iter()
            .filter_map(|ear| self.ear(ear).map(|data| (ear, data)))
    }

    pub fn is_empty(&self) -> bool {
        self.left_ear.is_none() && self.right_ear.is_none()
    }
}

/// Severity band of a hearing threshold, or of an inter-ear difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HearingSeverity {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Mild")]
    Mild,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Moderate to Severe")]
    ModerateToSevere,
}

impl HearingSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            HearingSeverity::Normal => "Normal",
            HearingSeverity::Mild => "Mild",
            HearingSeverity::Moderate => "Moderate",
            HearingSeverity::ModerateToSevere => "Moderate to Severe",
        }
    }
}

impl fmt::Display for HearingSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inter-ear comparison at a single frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsymmetryRecord {
    pub frequency: u32,
    pub left_ear_htl: f64,
    pub right_ear_htl: f64,
    pub asymmetry_db: f64,
    pub classification: HearingSeverity,
    pub worse_ear: Ear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AsymmetryFlag {
    #[serde(rename = "NORMAL_ASYMMETRY")]
    Normal,
    #[serde(rename = "MILD_ASYMMETRY")]
    Mild,
    #[serde(rename = "MODERATE_ASYMMETRY")]
    Moderate,
    #[serde(rename = "SEVERE_ASYMMETRY")]
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsymmetryReport {
    /// One record per standard frequency tested in both ears, ascending.
    pub records: Vec<AsymmetryRecord>,
    pub max_asymmetry: f64,
    pub concerning_frequencies: Vec<u32>,
    pub overall_flag: AsymmetryFlag,
    pub clinical_significance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompatibilityReport {
    pub compatible: bool,
    pub left_ear_compatible: bool,
    pub right_ear_compatible: bool,
    pub issues: Vec<String>,
}
