//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod report;
pub mod usage;

// Re-export main command functions
pub use report::{execute_report, load_report, load_table, validate_args, ReportArgs};
pub use usage::{display_usage, is_usage_request};
