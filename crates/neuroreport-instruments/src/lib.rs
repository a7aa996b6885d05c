//! neuroreport-instruments
//!
//! Reference tables for the neurocognitive battery. Pure data plus the
//! classifier that reads it. Defines the normative range of every metric,
//! grouped by the instrument that produces it, and the audiometric bands
//! used by the audiogram analyzer.

pub mod classify;
pub mod error;
pub mod hearing;
pub mod instruments;
pub mod ranges;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use neuroreport_core::models::metric::Metric;

use error::InstrumentError;
use ranges::{Direction, ReferenceRange};

/// Trait implemented by each instrument of the battery.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "erp").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "ERP Components").
    fn name(&self) -> &str;

    /// Reference ranges for the metrics this instrument measures.
    fn ranges(&self) -> &[ReferenceRange];

    fn measures(&self, metric: Metric) -> bool {
        self.ranges().iter().any(|r| r.metric == metric)
    }

    /// Format the reference table as Markdown-ish text.
    fn describe_ranges(&self) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for range in self.ranges() {
            let worse = match range.direction {
                Direction::Lower => "lower is worse",
                Direction::Higher => "higher is worse",
            };
            output.push_str(&format!(
                "- {}: normal {}, mild AD {} ({worse})\n",
                range.metric, range.normal_value, range.at_risk_value,
            ));
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::behavioral::BehavioralTask),
        Box::new(instruments::erp::ErpComponents),
        Box::new(instruments::eeg::RestingEeg),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

static REFERENCE_TABLE: LazyLock<BTreeMap<Metric, ReferenceRange>> = LazyLock::new(|| {
    all_instruments()
        .iter()
        .flat_map(|i| i.ranges().iter().copied())
        .map(|r| (r.metric, r))
        .collect()
});

/// The reference range for a metric. Every metric has exactly one.
pub fn reference_range(metric: Metric) -> Option<&'static ReferenceRange> {
    REFERENCE_TABLE.get(&metric)
}

/// The reference range for a metric given by display name.
pub fn reference_range_by_name(name: &str) -> Result<&'static ReferenceRange, InstrumentError> {
    Metric::from_name(name)
        .and_then(reference_range)
        .ok_or_else(|| InstrumentError::UnknownMetric(name.to_string()))
}
