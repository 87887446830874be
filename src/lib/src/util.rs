//! Various utility functions
//!

pub mod bytes;
pub mod progress_bar;
