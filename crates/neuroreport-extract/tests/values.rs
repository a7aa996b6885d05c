use neuroreport_core::models::metric::Metric;
use neuroreport_extract::values::{extract_all_values, number_tokens};

#[test]
fn number_tokens_are_unsigned_decimals() {
    assert_eq!(number_tokens("RT 458 ms, SD 31.5"), vec![458.0, 31.5]);
    assert_eq!(number_tokens("-7.23"), vec![7.23]);
    assert!(number_tokens("no digits").is_empty());
}

#[test]
fn labeled_value_on_same_line() {
    let values = extract_all_values("Button Press Accuracy 78.3");
    assert_eq!(values.len(), 1);
    assert_eq!(values[&Metric::ButtonPressAccuracy], 78.3);
}

#[test]
fn labeled_value_takes_last_number_on_line() {
    let values = extract_all_values("Median Reaction Time (N=40 trials) 512");
    assert_eq!(values[&Metric::MedianReactionTime], 512.0);
}

#[test]
fn labeled_value_on_next_line() {
    let values = extract_all_values("Button Press Accuracy\n78.3\n");
    assert_eq!(values[&Metric::ButtonPressAccuracy], 78.3);
}

#[test]
fn descriptor_on_next_line_is_not_a_value() {
    let values = extract_all_values("Button Press Accuracy\nBorderline 2\n");
    assert!(values.is_empty());
}

#[test]
fn colon_on_next_line_is_not_a_value() {
    let values = extract_all_values("False Alarms\nTrials: 200\n");
    assert!(!values.contains_key(&Metric::FalseAlarms));
}

#[test]
fn later_labeled_line_overrides_earlier() {
    let text = "False Alarms 2\nsummary\nFalse Alarms 6\n";
    assert_eq!(extract_all_values(text)[&Metric::FalseAlarms], 6.0);
}

#[test]
fn absent_metric_is_omitted() {
    let values = extract_all_values("Patient Name: Jane Doe\nDate: 2024-01-01");
    assert!(values.is_empty());
}

const ERP_PAGE: &str = "\
ERP Results
P50
Standard
2.10
uV
2.30
N100
Standard
-8.12
uV
-7.90
P3b
Target
4.05
431.2
4.50
Peak Alpha
9.80
Hz
footer line one
footer line two
footer line three
footer line four
footer line five
";

#[test]
fn erp_values_read_at_fixed_offsets() {
    let values = extract_all_values(ERP_PAGE);
    assert_eq!(values[&Metric::P50Amplitude], 2.10);
    assert_eq!(values[&Metric::N100Amplitude], -8.12);
    assert_eq!(values[&Metric::P3bAmplitude], 4.05);
    assert_eq!(values[&Metric::P3bLatency], 431.2);
    assert_eq!(values[&Metric::PeakAlphaFrequency], 9.80);
    assert!(!values.contains_key(&Metric::P200Amplitude));
}

#[test]
fn average_used_when_primary_unreadable() {
    let text = "P200\nStandard\nn/a\nuV\n4.10\nend\nend\n";
    let values = extract_all_values(text);
    assert_eq!(values[&Metric::P200Amplitude], 4.10);
}

#[test]
fn primary_wins_over_average() {
    let text = "Slow Wave\nStandard\n-2.70\nuV\n-2.40\nend\nend\n";
    let values = extract_all_values(text);
    assert_eq!(values[&Metric::SlowWaveAmplitude], -2.70);
}

#[test]
fn latency_requires_readable_amplitude() {
    let text = "P3b\nTarget\n--\n402.0\n5.10\nend\nend\n";
    let values = extract_all_values(text);
    assert!(!values.contains_key(&Metric::P3bLatency));
    assert_eq!(values[&Metric::P3bAmplitude], 5.10);
}

#[test]
fn anchor_without_marker_line_is_ignored() {
    let text = "P50\nTarget\n2.10\nuV\n2.30\nend\nend\n";
    assert!(extract_all_values(text).is_empty());
}

#[test]
fn anchor_too_close_to_end_is_ignored() {
    let text = "P3a\nStandard\n5.00\nuV\n5.10";
    assert!(extract_all_values(text).is_empty());
}

#[test]
fn extraction_is_deterministic() {
    assert_eq!(extract_all_values(ERP_PAGE), extract_all_values(ERP_PAGE));
}
