//! Metric value extraction from report text.
//!
//! Two strategies run over the trimmed lines of the report:
//! - labeled metrics are found by their label and the numbers near it;
//! - ERP/EEG metrics are read at fixed offsets from an anchor line
//!   (see [`crate::layout`]).
//!
//! A field that cannot be read is left out of the result.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use neuroreport_core::models::metric::Metric;

use crate::layout::{ERP_LAYOUT, MIN_TRAILING_LINES, PositionalField};

/// Metrics reported as "<label> ... <number>".
pub const LABELED_METRICS: [Metric; 3] = [
    Metric::ButtonPressAccuracy,
    Metric::FalseAlarms,
    Metric::MedianReactionTime,
];

/// Words that mark a line as an interpretation rather than a value.
const DESCRIPTOR_STOPWORDS: [&str; 5] = ["normal", "delayed", "high", "low", "borderline"];

static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("number token pattern"));

/// Unsigned decimal tokens in `line`, in order of appearance.
pub fn number_tokens(line: &str) -> Vec<f64> {
    NUMBER_TOKEN
        .find_iter(line)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Extract every recognizable metric value from `text`.
pub fn extract_all_values(text: &str) -> BTreeMap<Metric, f64> {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();

    let mut values = extract_labeled_values(&lines);
    let positional = extract_positional_values(&lines);

    for (metric, value) in positional.primary {
        values.insert(metric, value);
    }
    for (metric, value) in positional.averages {
        values.entry(metric).or_insert_with(|| {
            debug!(%metric, value, "using averaged value");
            value
        });
    }

    debug!(count = values.len(), "extracted metric values");
    values
}

fn extract_labeled_values(lines: &[&str]) -> BTreeMap<Metric, f64> {
    let mut values = BTreeMap::new();

    for (i, line) in lines.iter().enumerate() {
        for metric in LABELED_METRICS {
            if !line.contains(metric.name()) {
                continue;
            }
            let value = match number_tokens(line).last() {
                Some(&value) => Some(value),
                None => lines
                    .get(i + 1)
                    .filter(|next| is_bare_value_line(next))
                    .and_then(|next| number_tokens(next).first().copied()),
            };
            if let Some(value) = value {
                debug!(%metric, value, line = i, "extracted labeled value");
                values.insert(metric, value);
            }
        }
    }

    values
}

/// A follow-on line may hold a value only if it is not itself a labeled
/// field or an interpretation word.
fn is_bare_value_line(line: &str) -> bool {
    if line.contains(':') {
        return false;
    }
    let lower = line.to_lowercase();
    !DESCRIPTOR_STOPWORDS.iter().any(|word| lower.contains(word))
}

#[derive(Default)]
struct PositionalValues {
    primary: BTreeMap<Metric, f64>,
    averages: BTreeMap<Metric, f64>,
}

fn extract_positional_values(lines: &[&str]) -> PositionalValues {
    let mut found = PositionalValues::default();

    for i in 0..lines.len().saturating_sub(MIN_TRAILING_LINES) {
        for field in &ERP_LAYOUT {
            if field.is_anchored_at(lines, i) {
                read_field(field, lines, i, &mut found);
            }
        }
    }

    found
}

fn read_field(field: &PositionalField, lines: &[&str], anchor: usize, found: &mut PositionalValues) {
    if let Some(value) = value_at(lines, anchor + field.value_offset) {
        found.primary.insert(field.metric, value);
        // The latency column is only trusted when the amplitude beside it parsed.
        if let Some((metric, offset)) = field.latency
            && let Some(latency) = value_at(lines, anchor + offset)
        {
            found.primary.insert(metric, latency);
        }
    }

    if let Some(offset) = field.average_offset
        && let Some(average) = value_at(lines, anchor + offset)
    {
        found.averages.insert(field.metric, average);
    }
}

/// A positional line must be a number in full. ERP amplitudes are signed.
fn value_at(lines: &[&str], index: usize) -> Option<f64> {
    lines
        .get(index)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
