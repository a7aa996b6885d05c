use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuroreport_core::models::metric::Metric;

/// Which way a metric moves as performance worsens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    /// Lower values are worse (e.g. accuracy, P3b amplitude).
    Lower,
    /// Higher values are worse (e.g. reaction time, false alarms).
    Higher,
}

/// Normative reference for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub metric: Metric,
    /// Healthy-population norm.
    pub normal_value: f64,
    /// Mild Alzheimer's disease norm; reaching it is high risk.
    pub at_risk_value: f64,
    pub direction: Direction,
}

impl ReferenceRange {
    pub const fn new(metric: Metric, normal_value: f64, at_risk_value: f64, direction: Direction) -> Self {
        Self {
            metric,
            normal_value,
            at_risk_value,
            direction,
        }
    }
}

/// Clinical topic a metric speaks to. Used to phrase implications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TopicGroup {
    CognitiveAttentional,
    SensoryGating,
    ExecutiveInhibitory,
    AlphaArousal,
}

impl TopicGroup {
    pub const ALL: [TopicGroup; 4] = [
        TopicGroup::CognitiveAttentional,
        TopicGroup::SensoryGating,
        TopicGroup::ExecutiveInhibitory,
        TopicGroup::AlphaArousal,
    ];

    pub fn members(&self) -> &'static [Metric] {
        match self {
            TopicGroup::CognitiveAttentional => &[
                Metric::ButtonPressAccuracy,
                Metric::MedianReactionTime,
                Metric::P3bLatency,
                Metric::P3bAmplitude,
            ],
            TopicGroup::SensoryGating => &[
                Metric::P50Amplitude,
                Metric::N100Amplitude,
                Metric::P200Amplitude,
            ],
            TopicGroup::ExecutiveInhibitory => &[
                Metric::FalseAlarms,
                Metric::N200Amplitude,
                Metric::P3aAmplitude,
            ],
            TopicGroup::AlphaArousal => &[Metric::PeakAlphaFrequency],
        }
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.members().contains(&metric)
    }
}

/// The topic group a metric belongs to. Slow wave amplitude has none.
pub fn topic_group(metric: Metric) -> Option<TopicGroup> {
    TopicGroup::ALL.into_iter().find(|g| g.contains(metric))
}
