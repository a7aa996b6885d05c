//! Agreement between the interpretations a report states and the ones
//! computed from its values.

use std::collections::BTreeMap;

use neuroreport_core::models::metric::Metric;
use neuroreport_core::models::result::InterpretationComparison;
use neuroreport_core::models::tier::RiskTier;
use neuroreport_instruments::ranges::Direction;
use neuroreport_instruments::reference_range;

/// Whether a stated label agrees with the computed tier.
///
/// Tier names compare literally. Direction words ("Low", "High",
/// "Delayed", "Fast") mean abnormal when they point the worse way for the
/// metric, and normal otherwise.
pub fn stated_agrees(metric: Metric, stated: &str, generated: RiskTier) -> bool {
    let worse_is_lower = reference_range(metric).map(|r| r.direction == Direction::Lower);

    match stated.trim().to_lowercase().as_str() {
        "normal" | "fast" => generated == RiskTier::Normal,
        "borderline" => generated == RiskTier::Borderline,
        "high risk" => generated == RiskTier::HighRisk,
        "low" => match worse_is_lower {
            Some(true) => generated.is_abnormal(),
            Some(false) => generated == RiskTier::Normal,
            None => false,
        },
        "high" | "delayed" => match worse_is_lower {
            Some(false) => generated.is_abnormal(),
            Some(true) => generated == RiskTier::Normal,
            None => false,
        },
        _ => false,
    }
}

/// One comparison per stated interpretation, in report order. A metric
/// that was stated but not measured never agrees.
pub fn compare_interpretations(
    stated: &BTreeMap<Metric, String>,
    generated: &BTreeMap<Metric, RiskTier>,
) -> Vec<InterpretationComparison> {
    stated
        .iter()
        .map(|(metric, label)| {
            let tier = generated.get(metric).copied();
            InterpretationComparison {
                metric: *metric,
                stated: label.clone(),
                generated: tier,
                agrees: tier.is_some_and(|t| stated_agrees(*metric, label, t)),
            }
        })
        .collect()
}
