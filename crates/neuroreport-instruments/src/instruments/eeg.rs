use neuroreport_core::models::metric::Metric;

use crate::Instrument;
use crate::ranges::{Direction, ReferenceRange};

/// Resting-state EEG. Peak alpha frequency in Hz.
pub struct RestingEeg;

static RANGES: [ReferenceRange; 1] = [ReferenceRange::new(
    Metric::PeakAlphaFrequency,
    9.39,
    8.34,
    Direction::Lower,
)];

impl Instrument for RestingEeg {
    fn id(&self) -> &str {
        "eeg"
    }

    fn name(&self) -> &str {
        "Resting EEG"
    }

    fn ranges(&self) -> &[ReferenceRange] {
        &RANGES
    }
}
