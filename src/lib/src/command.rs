//! # Anchor Commands - entry point for all anchor commands
//!
//! Top level commands you are likely to run against a restic repository
//!

pub mod report;

pub use crate::command::report::report;
