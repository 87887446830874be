//! ⚓ libanchor
//!
//! Find the files that made a restic backup grow.
//!
//! Drives restic's JSON subcommands, correlates the diff between two
//! snapshots with the newer snapshot's file listing, and produces a report
//! of every added or modified path sorted by size.
//!
//! # Examples
//!
//! Compare the two most recent snapshots:
//!
//! ```
//! use libanchor::command;
//! use libanchor::opts::ReportOpts;
//!
//! // Resolve the window, diff it, size everything
//! let report = command::report(&ReportOpts::default())?;
//! println!("{}", report.to_table_string(false));
//! println!("Total: {}", report.total_display(false));
//! ```
//!
//! Compare two specific snapshots with human readable sizes:
//!
//! ```
//! use libanchor::command;
//! use libanchor::opts::ReportOpts;
//!
//! let opts = ReportOpts {
//!     snapshot_id_1: Some("79766175".to_string()),
//!     snapshot_id_2: Some("bdbd3439".to_string()),
//!     human_readable: true,
//! };
//! let report = command::report(&opts)?;
//! ```

pub mod command;
pub mod constants;
pub mod core;
pub mod error;
pub mod model;
pub mod opts;
pub mod restic;
pub mod util;
