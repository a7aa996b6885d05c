//! neuroreport-core
//!
//! Pure domain types shared by every neuroreport crate: metrics, risk tiers,
//! audiogram data and the terminal result record. No I/O.

pub mod error;
pub mod models;
