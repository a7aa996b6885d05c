use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk classification of a single metric reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskTier {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Borderline")]
    Borderline,
    #[serde(rename = "High Risk")]
    HighRisk,
    /// Reading is below the floor the device can measure reliably.
    #[serde(rename = "CRITICAL - RETEST REQUIRED")]
    CriticalRetest,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Normal => "Normal",
            RiskTier::Borderline => "Borderline",
            RiskTier::HighRisk => "High Risk",
            RiskTier::CriticalRetest => "CRITICAL - RETEST REQUIRED",
            RiskTier::Unknown => "Unknown",
        }
    }

    /// Borderline or high risk.
    pub fn is_abnormal(&self) -> bool {
        matches!(self, RiskTier::Borderline | RiskTier::HighRisk)
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
