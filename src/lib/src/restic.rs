//! Everything that talks to the restic binary
//!
//! Thin wrappers over the JSON subcommands the pipeline needs, plus the
//! environment presence check restic itself depends on.
//!

pub mod diff;
pub mod env;
pub mod ls;
pub mod process;
pub mod snapshots;
