//! Sorted report rows and TurboFan totals.

use super::record::FunctionRecord;
use super::table::CompilationTable;
use log::debug;
use serde::{Deserialize, Serialize};

/// One printed function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Display name (`#6`, `m1#6`)
    pub name: String,

    #[serde(flatten)]
    pub record: FunctionRecord,
}

/// Sums over every function, unset values included
///
/// Wider than the per-function fields so that summing any number of
/// parsed `i64` values cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub turbofan_time_ms: i128,
    pub turbofan_code_size_bytes: i128,
}

/// Report ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Ascending optimizing time, first-seen order among equals
    pub rows: Vec<ReportRow>,
    pub totals: Totals,
}

/// Build the report from a complete table
///
/// **Public** - main entry point of the reporting stage
///
/// Must only be called once the whole trace has been read: display names
/// depend on how many modules the trace references in total.
pub fn build_report(table: &CompilationTable) -> Report {
    let mut records = table.functions().to_vec();
    // Stable: functions with equal time keep first-seen order
    records.sort_by_key(|record| record.optimized_time_ms);

    let totals = calculate_totals(&records);
    debug!(
        "Report: {} functions, TurboFan time {} ms, size {}",
        records.len(),
        totals.turbofan_time_ms,
        totals.turbofan_code_size_bytes
    );

    let registry = table.registry();
    let rows = records
        .into_iter()
        .map(|record| ReportRow {
            name: registry.display_name(&record.identifier),
            record,
        })
        .collect();

    Report { rows, totals }
}

/// Sum optimizing time and code size
///
/// Functions never compiled by TurboFan contribute their `-1` placeholders.
pub fn calculate_totals(records: &[FunctionRecord]) -> Totals {
    records.iter().fold(Totals::default(), |acc, record| Totals {
        turbofan_time_ms: acc.turbofan_time_ms + i128::from(record.optimized_time_ms),
        turbofan_code_size_bytes: acc.turbofan_code_size_bytes
            + i128::from(record.optimized_code_size_bytes),
    })
}
