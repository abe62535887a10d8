//! Report rendering.
//!
//! This module handles:
//! - Human-readable byte sizes
//! - The plain-text report printed to stdout
//! - Optional JSON export

pub mod json;
pub mod size;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_output_path, write_report, ReportDocument};
pub use size::format_size;
pub use text::{format_row, format_totals, report_to_string, write_report_text};
