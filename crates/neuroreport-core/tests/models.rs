use std::collections::BTreeMap;

use neuroreport_core::models::audiogram::{AudiogramData, Ear};
use neuroreport_core::models::metric::Metric;
use neuroreport_core::models::result::{DiscussionMode, ProcessOutcome};
use neuroreport_core::models::tier::RiskTier;

#[test]
fn metric_names_round_trip_through_from_str() {
    for metric in Metric::ALL {
        let parsed: Metric = metric.name().parse().unwrap();
        assert_eq!(parsed, metric);
    }
    assert!("Heart Rate".parse::<Metric>().is_err());
}

#[test]
fn metric_serializes_as_display_name() {
    let json = serde_json::to_string(&Metric::P3bLatency).unwrap();
    assert_eq!(json, "\"P3b Latency\"");
}

#[test]
fn metric_map_keys_follow_report_order() {
    let mut values = BTreeMap::new();
    values.insert(Metric::PeakAlphaFrequency, 9.5);
    values.insert(Metric::ButtonPressAccuracy, 96.0);
    values.insert(Metric::P50Amplitude, 2.1);
    let keys: Vec<_> = values.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            Metric::ButtonPressAccuracy,
            Metric::P50Amplitude,
            Metric::PeakAlphaFrequency
        ]
    );
}

#[test]
fn risk_tier_labels() {
    assert_eq!(RiskTier::HighRisk.to_string(), "High Risk");
    assert_eq!(
        serde_json::to_string(&RiskTier::CriticalRetest).unwrap(),
        "\"CRITICAL - RETEST REQUIRED\""
    );
    assert!(RiskTier::Borderline.is_abnormal());
    assert!(!RiskTier::CriticalRetest.is_abnormal());
}

#[test]
fn failed_outcome_serializes_to_single_error_key() {
    let outcome = ProcessOutcome::extraction_failed();
    let value = serde_json::to_value(&outcome).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["error"], "Could not extract text from PDF");
    assert!(outcome.is_failure());
    assert!(outcome.result().is_none());
}

#[test]
fn audiogram_ears_skip_missing_side() {
    let data = AudiogramData {
        left_ear: None,
        right_ear: Some(BTreeMap::from([(1000, 20.0)])),
    };
    let ears: Vec<_> = data.ears().map(|(ear, _)| ear).collect();
    assert_eq!(ears, vec![Ear::Right]);
    assert!(!data.is_empty());
    assert!(AudiogramData::default().is_empty());
}

#[test]
fn discussion_mode_parses_case_insensitively() {
    assert_eq!(
        "Implications".parse::<DiscussionMode>().unwrap(),
        DiscussionMode::Implications
    );
    assert_eq!(DiscussionMode::default(), DiscussionMode::Itemized);
    assert!("table".parse::<DiscussionMode>().is_err());
}
