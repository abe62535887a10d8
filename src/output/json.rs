//! JSON report writer.
//!
//! Writes the same rows and totals as the text report, with the source
//! trace and a timestamp, so results can be compared across runs.

use crate::aggregator::Report;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the report was built from
    pub source: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    #[serde(flatten)]
    pub report: Report,
}

impl ReportDocument {
    pub fn new(report: Report, source: &Path) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.display().to_string(),
            generated_at: Utc::now().to_rfc3339(),
            report,
        }
    }
}

/// Write a report document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(
    document: &ReportDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON report to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, document).map_err(OutputError::SerializationFailed)?;

    debug!("JSON report written ({} functions)", document.report.rows.len());

    Ok(())
}

/// Validate that output path is writable
///
/// **Public** - also used to reject bad arguments before parsing
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Read a report document from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ReportDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let document: ReportDocument =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{FunctionRecord, ReportRow, Totals};
    use tempfile::NamedTempFile;

    fn create_test_document() -> ReportDocument {
        let mut record = FunctionRecord::new("#6");
        record.has_optimized = true;
        record.optimized_time_ms = 4;
        record.optimized_code_size_bytes = 24;
        record.source_name = "wasm-function#6".to_string();

        let report = Report {
            rows: vec![ReportRow {
                name: "#6".to_string(),
                record,
            }],
            totals: Totals {
                turbofan_time_ms: 4,
                turbofan_code_size_bytes: 24,
            },
        };
        ReportDocument::new(report, Path::new("trace.txt"))
    }

    #[test]
    fn test_write_and_read_report() {
        let document = create_test_document();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_report(&document, path).unwrap();
        let loaded = read_report(path).unwrap();

        assert_eq!(loaded.version, SCHEMA_VERSION);
        assert_eq!(loaded.source, "trace.txt");
        assert_eq!(loaded.report, document.report);
    }

    #[test]
    fn test_unset_fields_are_kept_verbatim() {
        let document = create_test_document();
        let json = serde_json::to_value(&document).unwrap();

        let row = &json["rows"][0];
        assert_eq!(row["name"], "#6");
        assert_eq!(row["baseline_time_ms"], -1);
        assert_eq!(row["has_baseline"], false);
        assert_eq!(json["totals"]["turbofan_time_ms"], 4);
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        write_report(&create_test_document(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
