//! neuroreport-extract
//!
//! Recovers metric values and clinician-stated interpretations from the
//! plain text of a neurocognitive study report.

pub mod discussion;
pub mod error;
pub mod layout;
pub mod source;
pub mod values;
