//! Aggregation of compilation records into per-function statistics.
//!
//! This module transforms classified trace lines into:
//! - One accumulator per function identifier
//! - Module ordinals for display names
//! - A sorted report with TurboFan totals

pub mod record;
pub mod registry;
pub mod report;
pub mod table;

// Re-export main types and functions
pub use record::FunctionRecord;
pub use registry::ModuleRegistry;
pub use report::{build_report, calculate_totals, Report, ReportRow, Totals};
pub use table::CompilationTable;
