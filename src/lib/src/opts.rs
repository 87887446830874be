pub mod report_opts;

pub use crate::opts::report_opts::ReportOpts;
