use neuroreport_core::models::audiogram::{AsymmetryReport, AudiogramData, HearingSeverity};
use neuroreport_core::models::metric::Metric;
use neuroreport_core::models::tier::RiskTier;
use neuroreport_instruments::hearing::{NORMAL_MAX_DB, severity_band};

use crate::grammar::join_list;
use crate::{NORMAL_STUDY, NarrativeInput};

const PROCESSING_SPEED: &str = "reduced stimulus processing (including evaluation and classification speed)";
const ATTENTIONAL_RESOURCES: &str = "reduced attentional resources and executive function";
const DEMENTIA_RISK: &str = "These findings suggest increased risk of cognitive dysfunction and premorbid dementia. Clinical correlation is suggested.";

pub fn generate(input: &NarrativeInput<'_>) -> String {
    let high_risk = input.metrics_with(RiskTier::HighRisk);
    let borderline = input.metrics_with(RiskTier::Borderline);

    if high_risk.is_empty() && borderline.is_empty() {
        return NORMAL_STUDY.to_string();
    }

    let mut sentences = vec![format!(
        "This is an abnormal study due to {}.",
        join_list(&finding_phrases(&high_risk, &borderline))
    )];

    let implications = implication_clauses(&high_risk, &borderline);
    if !implications.is_empty() {
        sentences.push(format!(
            "Collectively, study findings suggest {}.",
            implications.join(" as well as ")
        ));
        sentences.push(DEMENTIA_RISK.to_string());
    }

    let mut discussion = sentences.join(" ");
    if let Some(hearing) = hearing_summary(input.audiogram, input.asymmetry) {
        discussion.push_str("\n\n");
        discussion.push_str(&hearing);
    }
    discussion
}

fn high_risk_phrase(metric: Metric) -> Option<&'static str> {
    match metric {
        Metric::ButtonPressAccuracy => Some("low button press accuracy"),
        Metric::MedianReactionTime => Some("delayed median reaction time"),
        Metric::P3bLatency => Some("delayed P3b latency"),
        Metric::P3bAmplitude => Some("reduced P3b amplitude"),
        Metric::PeakAlphaFrequency => Some("reduced peak alpha frequency"),
        Metric::FalseAlarms => Some("elevated false alarms"),
        _ => None,
    }
}

fn borderline_phrase(metric: Metric) -> Option<&'static str> {
    match metric {
        Metric::P3bAmplitude => Some("borderline P3b amplitude"),
        Metric::ButtonPressAccuracy => Some("borderline button press accuracy"),
        _ => None,
    }
}

/// Phrases for the abnormal metrics, high risk first, each group in
/// report order.
///
/// Metrics without a dedicated phrase fall back to "<tier> <metric>" when
/// nothing else would name the abnormality.
pub fn finding_phrases(high_risk: &[Metric], borderline: &[Metric]) -> Vec<String> {
    let phrases: Vec<String> = high_risk
        .iter()
        .filter_map(|m| high_risk_phrase(*m))
        .chain(borderline.iter().filter_map(|m| borderline_phrase(*m)))
        .map(str::to_string)
        .collect();

    if !phrases.is_empty() {
        return phrases;
    }
    high_risk
        .iter()
        .map(|m| format!("high risk {}", m.name().to_lowercase()))
        .chain(
            borderline
                .iter()
                .map(|m| format!("borderline {}", m.name().to_lowercase())),
        )
        .collect()
}

pub fn implication_clauses(high_risk: &[Metric], borderline: &[Metric]) -> Vec<&'static str> {
    let mut clauses = Vec::new();

    let slowed = [
        Metric::ButtonPressAccuracy,
        Metric::MedianReactionTime,
        Metric::P3bLatency,
    ];
    if high_risk.iter().any(|m| slowed.contains(m)) {
        clauses.push(PROCESSING_SPEED);
    }

    let attentional = [Metric::ButtonPressAccuracy, Metric::P3bAmplitude];
    if high_risk
        .iter()
        .chain(borderline)
        .any(|m| attentional.contains(m))
    {
        clauses.push(ATTENTIONAL_RESOURCES);
    }

    clauses
}

/// Ears with at least moderate loss, and any asymmetry above the normal band.
pub fn hearing_summary(
    audiogram: Option<&AudiogramData>,
    asymmetry: Option<&AsymmetryReport>,
) -> Option<String> {
    let audiogram = audiogram?;

    let issues: Vec<String> = audiogram
        .ears()
        .filter_map(|(ear, thresholds)| {
            let worst = thresholds.values().map(|htl| severity_band(*htl)).max()?;
            match worst {
                HearingSeverity::ModerateToSevere => {
                    Some(format!("{} moderate-severe hearing loss", ear.prose()))
                }
                HearingSeverity::Moderate => Some(format!("{} moderate hearing loss", ear.prose())),
                _ => None,
            }
        })
        .collect();

    let max_asymmetry = asymmetry
        .map(|a| a.max_asymmetry)
        .filter(|max| *max > NORMAL_MAX_DB);

    let mut sentences = Vec::new();
    if !issues.is_empty() {
        sentences.push(format!("Audiogram reveals {}.", issues.join(" and ")));
    }
    if let Some(max) = max_asymmetry {
        sentences.push(format!(
            "Significant ear-to-ear asymmetry noted (max {max}dB)."
        ));
    }

    if sentences.is_empty() {
        return None;
    }
    Some(sentences.join(" "))
}
