//! neuroreport-audiology
//!
//! Audiogram analysis: per-frequency hearing-loss bands, device
//! compatibility and inter-ear asymmetry. Audiogram data comes from an
//! [`source::AudiogramSource`].

pub mod analyzer;
pub mod error;
pub mod source;
