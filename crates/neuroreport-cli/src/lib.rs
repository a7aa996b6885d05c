//! neuroreport-cli library root.
//!
//! Config handling and collaborator selection live here so integration
//! tests can reach them without going through the binary.

pub mod config;
pub mod sources;
