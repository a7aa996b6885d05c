//! "Study Findings": what is abnormal and what it implies.

use neuroreport_core::models::audiogram::{
    AsymmetryFlag, AsymmetryReport, AudiogramData, CompatibilityReport, EarAudiogram,
    HearingSeverity,
};
use neuroreport_core::models::metric::Metric;
use neuroreport_core::models::tier::RiskTier;
use neuroreport_instruments::hearing::{COMPATIBILITY_LIMIT_DB, severity_band};
use neuroreport_instruments::ranges::{TopicGroup, topic_group};

use crate::grammar::{frequency_list, join_list};
use crate::{NORMAL_STUDY, NarrativeInput};

const ESCALATION: &str = "This pattern is consistent with significant cognitive decline and warrants immediate clinical attention.";

pub fn generate_findings(input: &NarrativeInput<'_>) -> String {
    let high_risk = input.metrics_with(RiskTier::HighRisk);
    let borderline = input.metrics_with(RiskTier::Borderline);

    let mut sentences = vec![topic_sentence(&high_risk, &borderline)];
    if let Some(implications) = implications_sentence(&high_risk) {
        sentences.push(implications);
        sentences.push(ESCALATION.to_string());
    }
    let mut findings = sentences.join(" ");

    if let (Some(audiogram), Some(compatibility)) = (input.audiogram, input.compatibility) {
        findings.push_str("\n\nAudiogram Analysis: ");
        findings.push_str(&audiogram_paragraph(
            audiogram,
            compatibility,
            input.asymmetry,
            input.device_name,
        ));
    }

    findings
}

fn lowercase_names(metrics: &[Metric]) -> Vec<String> {
    metrics.iter().map(|m| m.name().to_lowercase()).collect()
}

pub fn topic_sentence(high_risk: &[Metric], borderline: &[Metric]) -> String {
    if high_risk.is_empty() && borderline.is_empty() {
        return NORMAL_STUDY.to_string();
    }

    let mut causes = Vec::new();
    if !high_risk.is_empty() {
        causes.push(format!("high risk {}", join_list(&lowercase_names(high_risk))));
    }
    if !borderline.is_empty() {
        causes.push(format!("borderline {}", join_list(&lowercase_names(borderline))));
    }
    format!("This is an abnormal study due to {}.", causes.join(" and "))
}

fn group_clause(group: TopicGroup) -> &'static str {
    match group {
        TopicGroup::CognitiveAttentional => {
            "significantly reduced cognitive processing and attentional resources"
        }
        TopicGroup::SensoryGating => "impaired sensory processing and gating mechanisms",
        TopicGroup::ExecutiveInhibitory => "compromised executive function and inhibitory control",
        TopicGroup::AlphaArousal => "altered cortical arousal and attention networks",
    }
}

/// One clause per topic group with a high-risk member, in group order.
pub fn implications_sentence(high_risk: &[Metric]) -> Option<String> {
    let clauses: Vec<&str> = TopicGroup::ALL
        .into_iter()
        .filter(|group| high_risk.iter().any(|m| topic_group(*m) == Some(*group)))
        .map(group_clause)
        .collect();

    if clauses.is_empty() {
        return None;
    }
    Some(format!("These findings suggest {}.", clauses.join(", and ")))
}

/// The most severe hearing-loss band present in one ear, with the
/// frequencies in that band. `None` when every threshold is normal.
pub fn worst_hearing_loss(thresholds: &EarAudiogram) -> Option<(HearingSeverity, Vec<u32>)> {
    let worst = thresholds.values().map(|htl| severity_band(*htl)).max()?;
    if worst == HearingSeverity::Normal {
        return None;
    }
    let frequencies = thresholds
        .iter()
        .filter(|(_, htl)| severity_band(**htl) == worst)
        .map(|(freq, _)| *freq)
        .collect();
    Some((worst, frequencies))
}

pub fn compatibility_statement(compatibility: &CompatibilityReport, device: &str) -> String {
    if compatibility.compatible {
        return format!(
            "Hearing levels are compatible with {device} testing (all frequencies ≤{COMPATIBILITY_LIMIT_DB}dB HTL)."
        );
    }

    let mut statement = format!("Warning: hearing levels may affect {device} test reliability. ");
    if !compatibility.issues.is_empty() {
        statement.push_str(&format!("Issues found: {}. ", compatibility.issues.join("; ")));
    }
    statement.push_str(&format!(
        "{device} can compensate for up to {COMPATIBILITY_LIMIT_DB}dB HTL."
    ));
    statement
}

pub fn hearing_loss_sentence(audiogram: &AudiogramData) -> Option<String> {
    let concerns: Vec<String> = audiogram
        .ears()
        .filter_map(|(ear, thresholds)| {
            let (band, frequencies) = worst_hearing_loss(thresholds)?;
            Some(format!(
                "{}: {} hearing loss at {}",
                ear.prose(),
                band.label().to_lowercase(),
                frequency_list(&frequencies)
            ))
        })
        .collect();

    if concerns.is_empty() {
        return None;
    }
    Some(format!("Hearing loss detected: {}.", concerns.join("; ")))
}

pub fn asymmetry_sentences(asymmetry: &AsymmetryReport) -> Vec<String> {
    if asymmetry.overall_flag == AsymmetryFlag::Normal {
        return Vec::new();
    }
    let mut sentences = vec![asymmetry.clinical_significance.clone()];
    if !asymmetry.concerning_frequencies.is_empty() {
        sentences.push(format!(
            "Significant asymmetries noted at {}.",
            frequency_list(&asymmetry.concerning_frequencies)
        ));
    }
    sentences
}

pub fn audiogram_paragraph(
    audiogram: &AudiogramData,
    compatibility: &CompatibilityReport,
    asymmetry: Option<&AsymmetryReport>,
    device: &str,
) -> String {
    let mut sentences = vec![compatibility_statement(compatibility, device)];
    sentences.extend(hearing_loss_sentence(audiogram));
    if let Some(asymmetry) = asymmetry {
        sentences.extend(asymmetry_sentences(asymmetry));
    }
    sentences.join(" ")
}
