//! Core pipeline stages between restic's output and the report
//!

pub mod changes;
pub mod correlate;
pub mod listing;
pub mod resolve;
