//! Plain-text report, one line per function followed by the totals.

use super::size::format_size;
use crate::aggregator::{Report, ReportRow, Totals};
use std::io::{self, Write};

/// Render one function line
pub fn format_row(row: &ReportRow) -> String {
    let r = &row.record;
    format!(
        "{}: time {} {} mem {} {} {} size {} {} {} name {}",
        row.name,
        r.baseline_time_ms,
        r.optimized_time_ms,
        format_size(r.baseline_memory_bytes),
        format_size(r.optimized_memory_max_bytes),
        format_size(r.optimized_memory_total_bytes),
        format_size(r.wasm_size_bytes),
        format_size(r.baseline_code_size_bytes),
        format_size(r.optimized_code_size_bytes),
        r.source_name
    )
}

/// Render the two closing lines
pub fn format_totals(totals: &Totals) -> [String; 2] {
    [
        format!("Total TF time: {}", totals.turbofan_time_ms),
        format!("Total TF size: {}", totals.turbofan_code_size_bytes),
    ]
}

/// Write the whole report
pub fn write_report_text<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    for row in &report.rows {
        writeln!(out, "{}", format_row(row))?;
    }
    for line in format_totals(&report.totals) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Report as a string (for tests and logging)
pub fn report_to_string(report: &Report) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail
    let _ = write_report_text(report, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}
