use std::collections::BTreeMap;

use tracing::debug;

use neuroreport_core::models::audiogram::{
    AsymmetryRecord, AsymmetryReport, AudiogramData, CompatibilityReport, Ear, HearingSeverity,
    STANDARD_FREQUENCIES,
};
use neuroreport_instruments::hearing::{
    COMPATIBILITY_LIMIT_DB, CONCERNING_ASYMMETRY_DB, asymmetry_flag, clinical_significance,
    severity_band,
};

pub fn interpret_hearing_loss(htl_db: f64) -> HearingSeverity {
    severity_band(htl_db)
}

/// Hearing-loss band for every tested frequency of every present ear.
pub fn interpret_audiogram(data: &AudiogramData) -> BTreeMap<Ear, BTreeMap<u32, HearingSeverity>> {
    data.ears()
        .map(|(ear, thresholds)| {
            let bands = thresholds
                .iter()
                .map(|(&freq, &htl)| (freq, interpret_hearing_loss(htl)))
                .collect();
            (ear, bands)
        })
        .collect()
}

/// Check each threshold against the device's compensation limit.
///
/// A missing ear counts as compatible.
pub fn check_compatibility(data: &AudiogramData) -> CompatibilityReport {
    let mut report = CompatibilityReport {
        compatible: true,
        left_ear_compatible: true,
        right_ear_compatible: true,
        issues: Vec::new(),
    };

    for (ear, thresholds) in data.ears() {
        for (&freq, &htl) in thresholds {
            if htl <= COMPATIBILITY_LIMIT_DB {
                continue;
            }
            match ear {
                Ear::Left => report.left_ear_compatible = false,
                Ear::Right => report.right_ear_compatible = false,
            }
            report.issues.push(format!(
                "{}: {freq}Hz = {htl}dB (>{COMPATIBILITY_LIMIT_DB}dB limit)",
                ear.label()
            ));
        }
    }

    report.compatible = report.left_ear_compatible && report.right_ear_compatible;
    report
}

/// Compare ears at each standard frequency tested in both.
///
/// Returns `None` unless both ears are present.
pub fn analyze_asymmetry(data: &AudiogramData) -> Option<AsymmetryReport> {
    let left = data.left_ear.as_ref()?;
    let right = data.right_ear.as_ref()?;

    let mut records = Vec::new();
    let mut concerning_frequencies = Vec::new();
    let mut max_asymmetry: f64 = 0.0;

    for freq in STANDARD_FREQUENCIES {
        let (Some(&left_htl), Some(&right_htl)) = (left.get(&freq), right.get(&freq)) else {
            continue;
        };

        let asymmetry_db = (left_htl - right_htl).abs();
        let worse_ear = if left_htl > right_htl {
            Ear::Left
        } else {
            Ear::Right
        };

        max_asymmetry = max_asymmetry.max(asymmetry_db);
        if asymmetry_db > CONCERNING_ASYMMETRY_DB {
            concerning_frequencies.push(freq);
        }

        records.push(AsymmetryRecord {
            frequency: freq,
            left_ear_htl: left_htl,
            right_ear_htl: right_htl,
            asymmetry_db,
            classification: severity_band(asymmetry_db),
            worse_ear,
        });
    }

    let overall_flag = asymmetry_flag(max_asymmetry);
    debug!(
        max_asymmetry,
        concerning = concerning_frequencies.len(),
        ?overall_flag,
        "audiogram asymmetry analyzed"
    );

    Some(AsymmetryReport {
        records,
        max_asymmetry,
        concerning_frequencies,
        overall_flag,
        clinical_significance: clinical_significance(overall_flag).to_string(),
    })
}
