//! # ikemark-report
//!
//! Turns a finished run plus its analysis into consumable output: a
//! versioned JSON summary report on disk and a sectioned plain-text
//! summary on stdout. Everything here is presentation; no statistics are
//! computed beyond the stability score derived for the network section.

pub mod console;
mod error;
pub mod summary;

pub use console::print_summary;
pub use error::ReportError;
pub use summary::SummaryReport;
