//! Integration tests for the wasm-compile-times binary.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const USAGE_LINE: &str =
    "Pass output file (generated with --trace-wasm-compilation-times) as argument\n";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wasm-compile-times"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run wasm-compile-times")
}

fn trace_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"Compiled function #6 using Liftoff, took 0 ms and 968 bytes; bodysize 4 codesize 68\n",
    )
    .unwrap();
    file
}

#[test]
fn test_usage_without_arguments() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE_LINE);
}

#[test]
fn test_usage_for_help_aliases() {
    for alias in ["-h", "--help", "help"] {
        let output = run(&[alias]);
        assert_eq!(output.status.code(), Some(1), "exit code for {}", alias);
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            USAGE_LINE,
            "stdout for {}",
            alias
        );
    }
}

#[test]
fn test_report_on_stdout() {
    let file = trace_file();
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "#6: time 0 -1 mem 968 -1 -1 size 4 68 -1 name \n\
         Total TF time: -1\n\
         Total TF size: -1\n"
    );
}

#[test]
fn test_extra_arguments_are_ignored() {
    let file = trace_file();
    let output = run(&[file.path().to_str().unwrap(), "extra", "more"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).ends_with("Total TF size: -1\n"));
}

#[test]
fn test_missing_trace_fails() {
    let output = run(&["/nonexistent/path/to/trace.txt"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
