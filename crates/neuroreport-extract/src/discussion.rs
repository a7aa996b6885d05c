//! The report's own "Study Discussion" section and the interpretations the
//! reviewing clinician stated in it.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use neuroreport_core::models::metric::Metric;

static SECTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Study Discussion:?\s*").expect("section start pattern"));

static SECTION_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Study Protocol|Test Name|Physician").expect("section end pattern")
});

const AMPLITUDE_LABELS: &str = "High Risk|Low|Normal|High|Borderline";
const TIMING_LABELS: &str = "High Risk|Delayed|Normal|Fast|Borderline";

/// Metrics a clinician typically comments on, with the labels they use.
const STATED_METRICS: [(Metric, &str); 6] = [
    (Metric::ButtonPressAccuracy, AMPLITUDE_LABELS),
    (Metric::MedianReactionTime, TIMING_LABELS),
    (Metric::P50Amplitude, AMPLITUDE_LABELS),
    (Metric::P3bAmplitude, AMPLITUDE_LABELS),
    (Metric::P3bLatency, TIMING_LABELS),
    (Metric::PeakAlphaFrequency, AMPLITUDE_LABELS),
];

static STATED_PATTERNS: LazyLock<Vec<(Metric, Regex)>> = LazyLock::new(|| {
    STATED_METRICS
        .iter()
        .map(|(metric, labels)| {
            let pattern = format!(r"(?i){}[:\s]*({labels})", regex::escape(metric.name()));
            (
                *metric,
                Regex::new(&pattern).expect("stated interpretation pattern"),
            )
        })
        .collect()
});

/// Text of the first "Study Discussion" section, trimmed.
///
/// The section runs to the next "Study Protocol", "Test Name" or
/// "Physician" heading, or to the end of the text. Returns `None` when the
/// report has no such section.
pub fn original_discussion(text: &str) -> Option<&str> {
    let start = SECTION_START.find(text)?;
    let rest = &text[start.end()..];
    let end = SECTION_END.find(rest).map_or(rest.len(), |m| m.start());
    Some(rest[..end].trim())
}

/// Interpretation labels stated for known metrics, verbatim.
pub fn stated_interpretations(discussion: &str) -> BTreeMap<Metric, String> {
    let mut stated = BTreeMap::new();
    for (metric, pattern) in STATED_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(discussion)
            && let Some(label) = caps.get(1)
        {
            debug!(%metric, label = label.as_str(), "found stated interpretation");
            stated.insert(*metric, label.as_str().to_string());
        }
    }
    stated
}
