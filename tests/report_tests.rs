use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use wasm_compile_times::commands::{execute_report, load_report, ReportArgs};
use wasm_compile_times::output::read_report;

const TRACE: &str = "\
Compiled function #6 using TurboFan, took 0 ms and 14440 / 44656 max/total bytes, codesize 24 name wasm-function#6
Compiled function #6 using Liftoff, took 0 ms and 968 bytes; bodysize 4 codesize 68
";

fn trace_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &ReportArgs) -> (anyhow::Result<()>, String) {
    let mut out = Vec::new();
    let result = execute_report(args, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_end_to_end() {
    let file = trace_file(TRACE);
    let args = ReportArgs {
        trace_path: file.path().to_path_buf(),
        output_json: None,
    };

    let (result, stdout) = run(&args);
    result.unwrap();
    assert_eq!(
        stdout,
        "#6: time 0 0 mem 968 14K 43K size 4 68 24 name wasm-function#6\n\
         Total TF time: 0\n\
         Total TF size: 24\n"
    );
}

#[test]
fn test_interleaved_output_is_ignored() {
    let trace = format!(
        "Loading module...\n\n{}[wasm] done\nCompiled\tfunction noise\n",
        TRACE
    );
    let file = trace_file(&trace);

    let report = load_report(file.path()).unwrap();
    assert_eq!(report.rows.len(), 1);
    assert!(report.rows[0].record.has_baseline);
    assert!(report.rows[0].record.has_optimized);
}

#[test]
fn test_format_error_prints_nothing() {
    let trace = format!(
        "{}Compiled function #6 using Liftoff, took 1 ms and 968 bytes; bodysize 4 codesize 68\n",
        TRACE
    );
    let file = trace_file(&trace);
    let args = ReportArgs {
        trace_path: file.path().to_path_buf(),
        output_json: None,
    };

    let (result, stdout) = run(&args);
    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("duplicate Liftoff line for #6"));
    assert!(stdout.is_empty());
}

#[test]
fn test_missing_trace() {
    let args = ReportArgs {
        trace_path: PathBuf::from("/no/such/trace.txt"),
        output_json: None,
    };
    let (result, stdout) = run(&args);
    assert!(result.is_err());
    assert!(stdout.is_empty());
}

#[test]
fn test_json_export() {
    let file = trace_file(TRACE);
    let out_dir = tempfile::tempdir().unwrap();
    let json_path = out_dir.path().join("reports/trace.json");
    let args = ReportArgs {
        trace_path: file.path().to_path_buf(),
        output_json: Some(json_path.clone()),
    };

    let (result, stdout) = run(&args);
    result.unwrap();
    assert!(stdout.ends_with("Total TF size: 24\n"));

    let document = read_report(&json_path).unwrap();
    assert_eq!(document.report.rows.len(), 1);
    assert_eq!(document.report.rows[0].name, "#6");
    assert_eq!(document.report.rows[0].record.source_name, "wasm-function#6");
    assert_eq!(document.report.totals.turbofan_code_size_bytes, 24);
    assert_eq!(document.source, file.path().display().to_string());
}
