//! Audiometric bands shared by hearing-loss and asymmetry classification.

use neuroreport_core::models::audiogram::{AsymmetryFlag, HearingSeverity};

pub const NORMAL_MAX_DB: f64 = 25.0;
pub const MILD_MAX_DB: f64 = 40.0;
pub const MODERATE_MAX_DB: f64 = 55.0;

/// Highest HTL (dB) the test device compensates for.
pub const COMPATIBILITY_LIMIT_DB: f64 = 45.0;

/// Inter-ear differences above this (dB) are concerning.
pub const CONCERNING_ASYMMETRY_DB: f64 = 40.0;

/// Band for a hearing threshold or an inter-ear difference, in dB.
pub fn severity_band(db: f64) -> HearingSeverity {
    if db <= NORMAL_MAX_DB {
        HearingSeverity::Normal
    } else if db <= MILD_MAX_DB {
        HearingSeverity::Mild
    } else if db <= MODERATE_MAX_DB {
        HearingSeverity::Moderate
    } else {
        HearingSeverity::ModerateToSevere
    }
}

/// Overall asymmetry flag for the largest inter-ear difference.
pub fn asymmetry_flag(max_asymmetry_db: f64) -> AsymmetryFlag {
    if max_asymmetry_db > MODERATE_MAX_DB {
        AsymmetryFlag::Severe
    } else if max_asymmetry_db > MILD_MAX_DB {
        AsymmetryFlag::Moderate
    } else if max_asymmetry_db > NORMAL_MAX_DB {
        AsymmetryFlag::Mild
    } else {
        AsymmetryFlag::Normal
    }
}

pub fn clinical_significance(flag: AsymmetryFlag) -> &'static str {
    match flag {
        AsymmetryFlag::Severe => {
            "Moderate to severe asymmetry detected. Immediate audiological referral recommended."
        }
        AsymmetryFlag::Moderate => "Moderate asymmetry detected. Consider audiological evaluation.",
        AsymmetryFlag::Mild => "Mild asymmetry present. Monitor for progression.",
        AsymmetryFlag::Normal => "Ear-to-ear differences within normal limits.",
    }
}
