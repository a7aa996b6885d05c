//! Where audiogram data comes from.
//!
//! Report text rarely carries machine-readable audiograms, so the pipeline
//! asks an [`AudiogramSource`] for one whenever the report mentions a
//! hearing test.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use neuroreport_core::models::audiogram::{AudiogramData, EarAudiogram};

use crate::error::AudiologyError;

const HEARING_KEYWORDS: [&str; 2] = ["audiogram", "hearing test"];

/// Whether the report text refers to a hearing test.
pub fn mentions_hearing_test(text: &str) -> bool {
    let lower = text.to_lowercase();
    HEARING_KEYWORDS.iter().any(|k| lower.contains(k))
}

pub trait AudiogramSource: Send + Sync {
    /// Audiogram for the subject of `text`, if one can be provided.
    fn provide(&self, text: &str) -> Option<AudiogramData>;
}

impl<T: AudiogramSource + ?Sized> AudiogramSource for Box<T> {
    fn provide(&self, text: &str) -> Option<AudiogramData> {
        (**self).provide(text)
    }
}

/// Never provides an audiogram.
pub struct NoAudiogram;

impl AudiogramSource for NoAudiogram {
    fn provide(&self, _text: &str) -> Option<AudiogramData> {
        None
    }
}

/// Always provides the same audiogram.
#[derive(Debug, Clone)]
pub struct FixedAudiogram(pub AudiogramData);

impl FixedAudiogram {
    /// Load from a JSON file shaped like
    /// `{"left_ear": {"250": 20, ...}, "right_ear": {...}}`.
    pub fn from_path(path: &Path) -> Result<Self, AudiologyError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, AudiologyError> {
        let data: AudiogramData = serde_json::from_str(json)?;
        if data.is_empty() {
            return Err(AudiologyError::Empty);
        }
        for (_, thresholds) in data.ears() {
            validate_thresholds(thresholds)?;
        }
        Ok(Self(data))
    }
}

fn validate_thresholds(thresholds: &EarAudiogram) -> Result<(), AudiologyError> {
    match thresholds.iter().find(|(_, htl)| **htl < 0.0) {
        Some((&frequency, &htl)) => Err(AudiologyError::NegativeThreshold { frequency, htl }),
        None => Ok(()),
    }
}

impl AudiogramSource for FixedAudiogram {
    fn provide(&self, _text: &str) -> Option<AudiogramData> {
        Some(self.0.clone())
    }
}

/// Placeholder estimator that samples a plausible audiogram shape.
///
/// The output is random and carries no information about the subject.
/// With a seed, every call returns the same audiogram.
#[derive(Debug, Clone, Default)]
pub struct EstimatedAudiogram {
    seed: Option<u64>,
}

impl EstimatedAudiogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl AudiogramSource for EstimatedAudiogram {
    fn provide(&self, _text: &str) -> Option<AudiogramData> {
        let data = match self.seed {
            Some(seed) => estimate_typical_pattern(&mut StdRng::seed_from_u64(seed)),
            None => estimate_typical_pattern(&mut rand::thread_rng()),
        };
        info!(seeded = self.seed.is_some(), "estimated audiogram from typical pattern");
        Some(data)
    }
}

/// Low-frequency-weighted loss, worse on the left.
pub fn estimate_typical_pattern<R: Rng>(rng: &mut R) -> AudiogramData {
    let base_left: i32 = rng.gen_range(30..=40);
    let base_right: i32 = rng.gen_range(25..=35);

    let left = [
        (250, base_left + rng.gen_range(15..=25)),
        (500, base_left + rng.gen_range(5..=15)),
        (1000, base_left + rng.gen_range(-5..=5)),
        (2000, (base_left - rng.gen_range(5..=15)).max(15)),
        (4000, (base_left - rng.gen_range(25..=35)).max(5)),
        (8000, (base_left - rng.gen_range(5..=15)).max(20)),
    ];
    let right = [
        (250, base_right + rng.gen_range(10..=20)),
        (500, base_right + rng.gen_range(0..=10)),
        (1000, (base_right - rng.gen_range(0..=10)).max(20)),
        (2000, (base_right - rng.gen_range(0..=10)).max(20)),
        (4000, base_right + rng.gen_range(0..=10)),
        (8000, base_right + rng.gen_range(10..=20)),
    ];

    debug!(base_left, base_right, "sampled audiogram baselines");
    AudiogramData::new(to_ear(&left), to_ear(&right))
}

fn to_ear(points: &[(u32, i32)]) -> EarAudiogram {
    points
        .iter()
        .map(|&(freq, htl)| (freq, f64::from(htl)))
        .collect()
}
