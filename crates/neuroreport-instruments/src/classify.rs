use neuroreport_core::models::metric::Metric;
use neuroreport_core::models::tier::RiskTier;

use crate::ranges::{Direction, ReferenceRange};
use crate::{reference_range, reference_range_by_name};

/// Peak alpha frequency (Hz) below which the recording is not trusted.
pub const PEAK_ALPHA_RETEST_FLOOR: f64 = 8.0;

/// Classify a reading given the metric's display name.
///
/// Names outside the battery classify as [`RiskTier::Unknown`].
pub fn classify(name: &str, value: f64) -> RiskTier {
    match reference_range_by_name(name) {
        Ok(range) => classify_against(range, value),
        Err(_) => RiskTier::Unknown,
    }
}

pub fn classify_metric(metric: Metric, value: f64) -> RiskTier {
    match reference_range(metric) {
        Some(range) => classify_against(range, value),
        None => RiskTier::Unknown,
    }
}

/// At-risk boundary is inclusive, normal boundary exclusive.
pub fn classify_against(range: &ReferenceRange, value: f64) -> RiskTier {
    if range.metric == Metric::PeakAlphaFrequency && value < PEAK_ALPHA_RETEST_FLOOR {
        return RiskTier::CriticalRetest;
    }

    match range.direction {
        Direction::Lower => {
            if value <= range.at_risk_value {
                RiskTier::HighRisk
            } else if value < range.normal_value {
                RiskTier::Borderline
            } else {
                RiskTier::Normal
            }
        }
        Direction::Higher => {
            if value >= range.at_risk_value {
                RiskTier::HighRisk
            } else if value > range.normal_value {
                RiskTier::Borderline
            } else {
                RiskTier::Normal
            }
        }
    }
}
