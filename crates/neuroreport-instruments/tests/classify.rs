use neuroreport_core::models::audiogram::{AsymmetryFlag, HearingSeverity};
use neuroreport_core::models::metric::Metric;
use neuroreport_core::models::tier::RiskTier;
use neuroreport_instruments::classify::{classify, classify_metric};
use neuroreport_instruments::hearing::{asymmetry_flag, severity_band};
use neuroreport_instruments::ranges::{topic_group, Direction, TopicGroup};
use neuroreport_instruments::{all_instruments, get_instrument, reference_range};

const EPSILON: f64 = 1e-6;

#[test]
fn every_metric_has_exactly_one_range() {
    for metric in Metric::ALL {
        let owners = all_instruments()
            .iter()
            .filter(|i| i.measures(metric))
            .count();
        assert_eq!(owners, 1, "{metric} should belong to one instrument");
        assert!(reference_range(metric).is_some());
    }
}

#[test]
fn higher_is_worse_boundaries() {
    for metric in Metric::ALL {
        let range = reference_range(metric).unwrap();
        if range.direction != Direction::Higher {
            continue;
        }
        assert_eq!(classify_metric(metric, range.at_risk_value), RiskTier::HighRisk);
        assert_eq!(classify_metric(metric, range.normal_value), RiskTier::Normal);
        assert_eq!(
            classify_metric(metric, range.normal_value - EPSILON),
            RiskTier::Normal
        );
    }
}

#[test]
fn lower_is_worse_boundaries() {
    for metric in Metric::ALL {
        let range = reference_range(metric).unwrap();
        if range.direction != Direction::Lower || metric == Metric::PeakAlphaFrequency {
            continue;
        }
        assert_eq!(classify_metric(metric, range.at_risk_value), RiskTier::HighRisk);
        assert_eq!(classify_metric(metric, range.normal_value), RiskTier::Normal);
        assert_eq!(
            classify_metric(metric, range.normal_value - EPSILON),
            RiskTier::Borderline
        );
    }
}

#[test]
fn accuracy_tiers() {
    assert_eq!(classify("Button Press Accuracy", 96.0), RiskTier::Normal);
    assert_eq!(classify("Button Press Accuracy", 90.0), RiskTier::Borderline);
    assert_eq!(classify("Button Press Accuracy", 78.3), RiskTier::HighRisk);
}

#[test]
fn reaction_time_tiers() {
    assert_eq!(classify("Median Reaction Time", 450.0), RiskTier::Normal);
    assert_eq!(classify("Median Reaction Time", 470.0), RiskTier::Borderline);
    assert_eq!(classify("Median Reaction Time", 520.0), RiskTier::HighRisk);
}

#[test]
fn peak_alpha_below_floor_requires_retest() {
    assert_eq!(classify("Peak Alpha Frequency", 7.9), RiskTier::CriticalRetest);
    // 8.0 is not below the floor, so direction logic applies: <= 8.34 is high risk.
    assert_eq!(classify("Peak Alpha Frequency", 8.0), RiskTier::HighRisk);
    assert_eq!(classify("Peak Alpha Frequency", 9.0), RiskTier::Borderline);
    assert_eq!(classify("Peak Alpha Frequency", 10.1), RiskTier::Normal);
}

#[test]
fn unknown_metric_is_unknown_tier() {
    assert_eq!(classify("Heart Rate", 72.0), RiskTier::Unknown);
    assert_eq!(classify("button press accuracy", 50.0), RiskTier::Unknown);
}

#[test]
fn hearing_bands() {
    assert_eq!(severity_band(25.0), HearingSeverity::Normal);
    assert_eq!(severity_band(26.0), HearingSeverity::Mild);
    assert_eq!(severity_band(40.0), HearingSeverity::Mild);
    assert_eq!(severity_band(55.0), HearingSeverity::Moderate);
    assert_eq!(severity_band(90.0), HearingSeverity::ModerateToSevere);
}

#[test]
fn asymmetry_flag_breakpoints_are_strict() {
    assert_eq!(asymmetry_flag(25.0), AsymmetryFlag::Normal);
    assert_eq!(asymmetry_flag(25.5), AsymmetryFlag::Mild);
    assert_eq!(asymmetry_flag(41.0), AsymmetryFlag::Moderate);
    assert_eq!(asymmetry_flag(55.0), AsymmetryFlag::Moderate);
    assert_eq!(asymmetry_flag(56.0), AsymmetryFlag::Severe);
}

#[test]
fn topic_groups() {
    assert_eq!(
        topic_group(Metric::P3bLatency),
        Some(TopicGroup::CognitiveAttentional)
    );
    assert_eq!(topic_group(Metric::FalseAlarms), Some(TopicGroup::ExecutiveInhibitory));
    assert_eq!(topic_group(Metric::SlowWaveAmplitude), None);
}

#[test]
fn instrument_lookup() {
    let erp = get_instrument("erp").unwrap();
    assert!(erp.measures(Metric::P3bLatency));
    let described = erp.describe_ranges();
    assert!(described.starts_with("## ERP Components"));
    assert!(described.contains("- P3b Latency: normal 396, mild AD 419.6 (higher is worse)"));
    assert!(get_instrument("mmse").is_err());
}
