use neuroreport_core::models::audiogram::{AsymmetryRecord, AsymmetryReport, AudiogramData};
use neuroreport_core::models::metric::Metric;
use neuroreport_core::models::tier::RiskTier;
use neuroreport_instruments::reference_range;

use crate::NarrativeInput;
use crate::grammar::format_frequency;

/// Inter-ear differences (dB) worth calling out in the asymmetry listing.
pub const SIGNIFICANT_ASYMMETRY_DB: f64 = 15.0;
pub const NOTABLE_ASYMMETRY_DB: f64 = 10.0;

pub fn generate(input: &NarrativeInput<'_>) -> String {
    let mut blocks = vec![results_block(input)];
    blocks.extend(input.audiogram.and_then(audiogram_block));
    blocks.extend(input.asymmetry.and_then(asymmetry_block));
    blocks.extend(significance_block(input));
    blocks.join("\n\n")
}

/// "<metric>: <tier> (Value: <v>, Normal: <n>, Mild AD: <m>)"
pub fn metric_line(metric: Metric, value: f64, tier: RiskTier) -> String {
    match reference_range(metric) {
        Some(range) => format!(
            "{metric}: {tier} (Value: {value}, Normal: {}, Mild AD: {})",
            range.normal_value, range.at_risk_value
        ),
        None => format!("{metric}: {tier} (Value: {value})"),
    }
}

fn results_block(input: &NarrativeInput<'_>) -> String {
    let mut lines = vec!["Study Results:".to_string()];
    for (metric, value) in input.values {
        let tier = input
            .interpretations
            .get(metric)
            .copied()
            .unwrap_or(RiskTier::Unknown);
        lines.push(metric_line(*metric, *value, tier));
    }
    if lines.len() == 1 {
        lines.push("No metric values were found in the report.".to_string());
    }
    lines.join("\n")
}

fn audiogram_block(audiogram: &AudiogramData) -> Option<String> {
    if audiogram.is_empty() {
        return None;
    }
    let mut lines = vec!["Audiogram Results:".to_string()];
    for (ear, thresholds) in audiogram.ears() {
        let readings: Vec<String> = thresholds
            .iter()
            .map(|(freq, htl)| format!("{} {htl}dB", format_frequency(*freq)))
            .collect();
        lines.push(format!("{}: {}", ear.label(), readings.join(", ")));
    }
    Some(lines.join("\n"))
}

pub fn asymmetry_line(record: &AsymmetryRecord) -> String {
    let mut line = format!(
        "{}: {}dB",
        format_frequency(record.frequency),
        record.asymmetry_db
    );
    if record.asymmetry_db > 0.0 {
        line.push_str(&format!(" ({} worse)", record.worse_ear.prose()));
    }
    if record.asymmetry_db >= SIGNIFICANT_ASYMMETRY_DB {
        line.push_str(" - SIGNIFICANT");
    } else if record.asymmetry_db >= NOTABLE_ASYMMETRY_DB {
        line.push_str(" - NOTABLE");
    }
    line
}

fn asymmetry_block(asymmetry: &AsymmetryReport) -> Option<String> {
    if asymmetry.records.is_empty() {
        return None;
    }
    let mut lines = vec!["Ear Asymmetry:".to_string()];
    lines.extend(asymmetry.records.iter().map(asymmetry_line));
    Some(lines.join("\n"))
}

/// Explanation of an abnormal metric. Only some metrics have one.
pub fn significance_sentence(metric: Metric, tier: RiskTier) -> Option<String> {
    let degree = match tier {
        RiskTier::HighRisk => "severely",
        RiskTier::Borderline => "moderately",
        _ => return None,
    };
    let sentence = match metric {
        Metric::ButtonPressAccuracy => format!(
            "Button press accuracy is {degree} reduced, indicating diminished sustained attention and target detection."
        ),
        Metric::FalseAlarms => format!(
            "False alarms are {degree} elevated, indicating weakened response inhibition."
        ),
        Metric::MedianReactionTime => format!(
            "Median reaction time is {degree} prolonged, indicating slowed stimulus evaluation and response selection."
        ),
        Metric::P3aAmplitude => format!(
            "P3a amplitude is {degree} reduced, indicating diminished orienting of attention to novel stimuli."
        ),
        Metric::P3bAmplitude => format!(
            "P3b amplitude is {degree} reduced, indicating fewer attentional resources allocated to target processing."
        ),
        Metric::P3bLatency => format!(
            "P3b latency is {degree} delayed, indicating slowed stimulus classification."
        ),
        Metric::PeakAlphaFrequency => format!(
            "Peak alpha frequency is {degree} slowed, indicating altered cortical arousal."
        ),
        Metric::P50Amplitude
        | Metric::N100Amplitude
        | Metric::P200Amplitude
        | Metric::N200Amplitude
        | Metric::SlowWaveAmplitude => return None,
    };
    Some(sentence)
}

fn significance_block(input: &NarrativeInput<'_>) -> Option<String> {
    let sentences: Vec<String> = input
        .interpretations
        .iter()
        .filter_map(|(metric, tier)| significance_sentence(*metric, *tier))
        .map(|s| format!("- {s}"))
        .collect();

    if sentences.is_empty() {
        return None;
    }
    Some(format!("Clinical Significance:\n{}", sentences.join("\n")))
}
