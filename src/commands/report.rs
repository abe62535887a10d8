//! Report command implementation.
//!
//! The report command:
//! 1. Reads the trace
//! 2. Aggregates compilation records per function
//! 3. Sorts and totals them
//! 4. Prints the text report
//! 5. Writes the JSON report (if requested)

use crate::aggregator::{build_report, CompilationTable, Report};
use crate::output::{validate_output_path, write_report, write_report_text, ReportDocument};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Trace produced with --trace-wasm-compilation-times
    pub trace_path: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written to `out` unless the whole trace parses.
///
/// # Errors
/// * The trace cannot be opened or read
/// * Any malformed compilation record
/// * JSON write errors
pub fn execute_report<W: Write>(args: &ReportArgs, out: &mut W) -> Result<()> {
    let start_time = Instant::now();

    info!("Processing trace: {}", args.trace_path.display());

    info!("Step 1/3: Reading trace...");
    let table = load_table(&args.trace_path)?;

    info!("Step 2/3: Sorting {} functions...", table.functions().len());
    let report = build_report(&table);

    info!("Step 3/3: Writing report...");
    write_report_text(&report, out).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;

    if let Some(json_path) = &args.output_json {
        let document = ReportDocument::new(report, &args.trace_path);
        write_report(&document, json_path).context("Failed to write JSON report")?;
        info!("✓ JSON report written to: {}", json_path.display());
    }

    info!(
        "Processed {} lines ({} compilation records, {} functions, {} modules) in {:.2}s",
        table.lines_read(),
        table.compiled_lines(),
        table.functions().len(),
        table.registry().module_count(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Read and aggregate a trace file
///
/// **Public** - useful for tests and library consumers
///
/// The file is closed when this returns, whether or not parsing succeeded.
pub fn load_table(path: &Path) -> Result<CompilationTable> {
    let file = File::open(path)?;
    debug!("Opened trace: {}", path.display());

    let table = CompilationTable::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid trace {}", path.display()))?;

    Ok(table)
}

/// Read a trace file and build its report
pub fn load_report(path: &Path) -> Result<Report> {
    Ok(build_report(&load_table(path)?))
}

/// Validate report arguments
///
/// **Public** - called before execution to fail fast
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.trace_path.as_os_str().is_empty() {
        bail!("Trace path cannot be empty");
    }

    if let Some(json_path) = &args.output_json {
        validate_output_path(json_path).context("Invalid --json path")?;
        if json_path == &args.trace_path {
            bail!("JSON output would overwrite the trace: {}", json_path.display());
        }
    }

    Ok(())
}
