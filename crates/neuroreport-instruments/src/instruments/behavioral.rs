use neuroreport_core::models::metric::Metric;

use crate::Instrument;
use crate::ranges::{Direction, ReferenceRange};

/// Auditory oddball task performance: button press accuracy, false alarms
/// and median reaction time (ms).
pub struct BehavioralTask;

static RANGES: [ReferenceRange; 3] = [
    ReferenceRange::new(Metric::ButtonPressAccuracy, 94.1, 82.2, Direction::Lower),
    ReferenceRange::new(Metric::FalseAlarms, 1.1, 4.9, Direction::Higher),
    ReferenceRange::new(Metric::MedianReactionTime, 458.0, 499.0, Direction::Higher),
];

impl Instrument for BehavioralTask {
    fn id(&self) -> &str {
        "behavioral"
    }

    fn name(&self) -> &str {
        "Oddball Task Performance"
    }

    fn ranges(&self) -> &[ReferenceRange] {
        &RANGES
    }
}
