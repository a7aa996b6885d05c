//! "Study Discussion", in one of two renderings.
//!
//! [`itemized`] lists every metric against its reference values and then
//! explains the abnormal ones. [`implications`] is a short prose paragraph.

pub mod implications;
pub mod itemized;
