use std::collections::BTreeMap;

use neuroreport_audiology::analyzer::{
    analyze_asymmetry, check_compatibility, interpret_audiogram, interpret_hearing_loss,
};
use neuroreport_audiology::source::{
    mentions_hearing_test, AudiogramSource, EstimatedAudiogram, FixedAudiogram, NoAudiogram,
};
use neuroreport_core::models::audiogram::{
    AsymmetryFlag, AudiogramData, Ear, HearingSeverity, STANDARD_FREQUENCIES,
};

fn ears(left: &[(u32, f64)], right: &[(u32, f64)]) -> AudiogramData {
    AudiogramData::new(
        left.iter().copied().collect(),
        right.iter().copied().collect(),
    )
}

#[test]
fn equal_ears_are_symmetric_and_tie_goes_right() {
    let report = analyze_asymmetry(&ears(&[(1000, 20.0)], &[(1000, 20.0)])).unwrap();
    assert_eq!(report.records.len(), 1);
    let record = &report.records[0];
    assert_eq!(record.asymmetry_db, 0.0);
    assert_eq!(record.classification, HearingSeverity::Normal);
    assert_eq!(record.worse_ear, Ear::Right);
    assert_eq!(report.overall_flag, AsymmetryFlag::Normal);
    assert_eq!(
        report.clinical_significance,
        "Ear-to-ear differences within normal limits."
    );
}

#[test]
fn large_left_loss_is_severe_and_concerning() {
    let report = analyze_asymmetry(&ears(&[(1000, 70.0)], &[(1000, 10.0)])).unwrap();
    let record = &report.records[0];
    assert_eq!(record.asymmetry_db, 60.0);
    assert_eq!(record.classification, HearingSeverity::ModerateToSevere);
    assert_eq!(record.worse_ear, Ear::Left);
    assert_eq!(report.concerning_frequencies, vec![1000]);
    assert_eq!(report.overall_flag, AsymmetryFlag::Severe);
    assert_eq!(report.max_asymmetry, 60.0);
}

#[test]
fn concerning_frequencies_listed_once_in_frequency_order() {
    let report = analyze_asymmetry(&ears(
        &[(250, 80.0), (4000, 60.0), (8000, 30.0)],
        &[(250, 10.0), (4000, 15.0), (8000, 10.0)],
    ))
    .unwrap();
    assert_eq!(report.concerning_frequencies, vec![250, 4000]);
    assert_eq!(report.records.len(), 3);
    assert_eq!(report.records[1].classification, HearingSeverity::Moderate);
}

#[test]
fn only_frequencies_in_both_ears_are_compared() {
    let report = analyze_asymmetry(&ears(&[(500, 40.0), (3000, 90.0)], &[(1000, 10.0), (3000, 0.0)]))
        .unwrap();
    assert!(report.records.is_empty());
    assert_eq!(report.max_asymmetry, 0.0);
    assert_eq!(report.overall_flag, AsymmetryFlag::Normal);
}

#[test]
fn asymmetry_requires_both_ears() {
    let data = AudiogramData {
        left_ear: Some(BTreeMap::from([(1000, 70.0)])),
        right_ear: None,
    };
    assert!(analyze_asymmetry(&data).is_none());
}

#[test]
fn single_loud_frequency_breaks_compatibility() {
    let data = AudiogramData {
        left_ear: Some(BTreeMap::from([(4000, 50.0)])),
        right_ear: None,
    };
    let report = check_compatibility(&data);
    assert!(!report.compatible);
    assert!(!report.left_ear_compatible);
    assert!(report.right_ear_compatible);
    assert_eq!(report.issues, vec!["Left Ear: 4000Hz = 50dB (>45dB limit)"]);
}

#[test]
fn threshold_at_limit_is_compatible() {
    let report = check_compatibility(&ears(&[(250, 45.0)], &[(250, 30.0)]));
    assert!(report.compatible);
    assert!(report.issues.is_empty());
}

#[test]
fn issues_list_left_then_right_in_frequency_order() {
    let report = check_compatibility(&ears(&[(8000, 60.0), (250, 50.0)], &[(500, 46.5)]));
    assert_eq!(
        report.issues,
        vec![
            "Left Ear: 250Hz = 50dB (>45dB limit)",
            "Left Ear: 8000Hz = 60dB (>45dB limit)",
            "Right Ear: 500Hz = 46.5dB (>45dB limit)",
        ]
    );
}

#[test]
fn per_frequency_interpretation() {
    let bands = interpret_audiogram(&ears(&[(250, 20.0), (500, 56.0)], &[(250, 41.0)]));
    assert_eq!(bands[&Ear::Left][&250], HearingSeverity::Normal);
    assert_eq!(bands[&Ear::Left][&500], HearingSeverity::ModerateToSevere);
    assert_eq!(bands[&Ear::Right][&250], HearingSeverity::Moderate);
    assert_eq!(interpret_hearing_loss(33.0), HearingSeverity::Mild);
}

#[test]
fn hearing_keywords_are_case_insensitive() {
    assert!(mentions_hearing_test("See attached AUDIOGRAM"));
    assert!(mentions_hearing_test("Hearing Test performed 2024"));
    assert!(!mentions_hearing_test("Auditory oddball paradigm"));
}

#[test]
fn seeded_estimator_is_deterministic() {
    let source = EstimatedAudiogram::seeded(7);
    let first = source.provide("audiogram").unwrap();
    let second = source.provide("audiogram").unwrap();
    assert_eq!(first, second);

    for (_, thresholds) in first.ears() {
        let freqs: Vec<u32> = thresholds.keys().copied().collect();
        assert_eq!(freqs, STANDARD_FREQUENCIES.to_vec());
        assert!(thresholds.values().all(|htl| *htl >= 5.0));
    }
}

#[test]
fn fixed_audiogram_from_json() {
    let source =
        FixedAudiogram::from_json(r#"{"left_ear": {"250": 20, "4000": 50}, "right_ear": {"250": 25}}"#)
            .unwrap();
    let data = source.provide("").unwrap();
    assert_eq!(data.left_ear.unwrap()[&4000], 50.0);
}

#[test]
fn fixed_audiogram_rejects_bad_input() {
    assert!(FixedAudiogram::from_json("{}").is_err());
    assert!(FixedAudiogram::from_json(r#"{"left_ear": {"250": -5}}"#).is_err());
    assert!(FixedAudiogram::from_json("not json").is_err());
}

#[test]
fn no_audiogram_source_provides_nothing() {
    assert!(NoAudiogram.provide("audiogram").is_none());
}
