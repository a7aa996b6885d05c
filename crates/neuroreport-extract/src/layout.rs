//! Fixed positional layout of the ERP and EEG results pages.
//!
//! Each component is printed as a column: the component name on one line,
//! the stimulus condition on the next, then the measured values. Offsets are
//! counted from the component-name line.

use neuroreport_core::models::metric::Metric;

/// A value found at a fixed line offset from an anchor line.
#[derive(Debug, Clone, Copy)]
pub struct PositionalField {
    /// Exact (trimmed) text of the anchor line.
    pub anchor: &'static str,
    /// Exact text required on the line right after the anchor, if any.
    pub marker: Option<&'static str>,
    pub metric: Metric,
    pub value_offset: usize,
    /// Offset of the averaged value, used when the primary one is unreadable.
    pub average_offset: Option<usize>,
    /// Secondary metric read alongside the primary value.
    pub latency: Option<(Metric, usize)>,
}

impl PositionalField {
    const fn amplitude(anchor: &'static str, marker: &'static str, metric: Metric) -> Self {
        Self {
            anchor,
            marker: Some(marker),
            metric,
            value_offset: 2,
            average_offset: Some(4),
            latency: None,
        }
    }

    /// Whether line `index` starts this field's block.
    pub fn is_anchored_at(&self, lines: &[&str], index: usize) -> bool {
        if lines.get(index) != Some(&self.anchor) {
            return false;
        }
        match self.marker {
            Some(marker) => lines.get(index + 1) == Some(&marker),
            None => true,
        }
    }
}

/// Lines that must follow an anchor for it to be considered.
pub const MIN_TRAILING_LINES: usize = 5;

pub static ERP_LAYOUT: [PositionalField; 8] = [
    PositionalField::amplitude("P50", "Standard", Metric::P50Amplitude),
    PositionalField {
        anchor: "P3b",
        marker: Some("Target"),
        metric: Metric::P3bAmplitude,
        value_offset: 2,
        average_offset: Some(4),
        latency: Some((Metric::P3bLatency, 3)),
    },
    PositionalField::amplitude("N100", "Standard", Metric::N100Amplitude),
    PositionalField::amplitude("P200", "Standard", Metric::P200Amplitude),
    PositionalField::amplitude("N200", "Standard", Metric::N200Amplitude),
    PositionalField::amplitude("P3a", "Standard", Metric::P3aAmplitude),
    PositionalField::amplitude("Slow Wave", "Standard", Metric::SlowWaveAmplitude),
    PositionalField {
        anchor: "Peak Alpha",
        marker: None,
        metric: Metric::PeakAlphaFrequency,
        value_offset: 1,
        average_offset: None,
        latency: None,
    },
];
