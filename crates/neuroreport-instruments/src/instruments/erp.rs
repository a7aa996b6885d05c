use neuroreport_core::models::metric::Metric;

use crate::Instrument;
use crate::ranges::{Direction, ReferenceRange};

/// Event-related potentials recorded during the oddball task.
/// Amplitudes in microvolts, P3b latency in milliseconds.
pub struct ErpComponents;

static RANGES: [ReferenceRange; 8] = [
    ReferenceRange::new(Metric::P50Amplitude, 2.77, 2.95, Direction::Higher),
    ReferenceRange::new(Metric::N100Amplitude, -7.23, -6.00, Direction::Higher),
    ReferenceRange::new(Metric::P200Amplitude, 5.26, 4.64, Direction::Lower),
    ReferenceRange::new(Metric::N200Amplitude, -0.31, -1.10, Direction::Lower),
    ReferenceRange::new(Metric::P3bAmplitude, 6.03, 4.42, Direction::Lower),
    ReferenceRange::new(Metric::P3bLatency, 396.0, 419.6, Direction::Higher),
    ReferenceRange::new(Metric::SlowWaveAmplitude, -2.54, -2.65, Direction::Lower),
    ReferenceRange::new(Metric::P3aAmplitude, 5.88, 3.63, Direction::Lower),
];

impl Instrument for ErpComponents {
    fn id(&self) -> &str {
        "erp"
    }

    fn name(&self) -> &str {
        "ERP Components"
    }

    fn ranges(&self) -> &[ReferenceRange] {
        &RANGES
    }
}
