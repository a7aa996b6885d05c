use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the twelve clinical metrics reported by a neurocognitive study.
///
/// Declaration order is the canonical report order; maps keyed by `Metric`
/// iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Metric {
    #[serde(rename = "Button Press Accuracy")]
    ButtonPressAccuracy,
    #[serde(rename = "False Alarms")]
    FalseAlarms,
    #[serde(rename = "Median Reaction Time")]
    MedianReactionTime,
    #[serde(rename = "P50 Amplitude")]
    P50Amplitude,
    #[serde(rename = "N100 Amplitude")]
    N100Amplitude,
    #[serde(rename = "P200 Amplitude")]
    P200Amplitude,
    #[serde(rename = "N200 Amplitude")]
    N200Amplitude,
    #[serde(rename = "P3b Amplitude")]
    P3bAmplitude,
    #[serde(rename = "P3b Latency")]
    P3bLatency,
    #[serde(rename = "Slow Wave Amplitude")]
    SlowWaveAmplitude,
    #[serde(rename = "P3a Amplitude")]
    P3aAmplitude,
    #[serde(rename = "Peak Alpha Frequency")]
    PeakAlphaFrequency,
}

impl Metric {
    pub const ALL: [Metric; 12] = [
        Metric::ButtonPressAccuracy,
        Metric::FalseAlarms,
        Metric::MedianReactionTime,
        Metric::P50Amplitude,
        Metric::N100Amplitude,
        Metric::P200Amplitude,
        Metric::N200Amplitude,
        Metric::P3bAmplitude,
        Metric::P3bLatency,
        Metric::SlowWaveAmplitude,
        Metric::P3aAmplitude,
        Metric::PeakAlphaFrequency,
    ];

    /// Display name as it appears in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::ButtonPressAccuracy => "Button Press Accuracy",
            Metric::FalseAlarms => "False Alarms",
            Metric::MedianReactionTime => "Median Reaction Time",
            Metric::P50Amplitude => "P50 Amplitude",
            Metric::N100Amplitude => "N100 Amplitude",
            Metric::P200Amplitude => "P200 Amplitude",
            Metric::N200Amplitude => "N200 Amplitude",
            Metric::P3bAmplitude => "P3b Amplitude",
            Metric::P3bLatency => "P3b Latency",
            Metric::SlowWaveAmplitude => "Slow Wave Amplitude",
            Metric::P3aAmplitude => "P3a Amplitude",
            Metric::PeakAlphaFrequency => "Peak Alpha Frequency",
        }
    }

    /// Look up a metric by its exact display name.
    pub fn from_name(name: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::from_name(s).ok_or_else(|| CoreError::UnknownMetric(s.to_string()))
    }
}
