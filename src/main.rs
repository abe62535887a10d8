//! Wasm Compile Times CLI
//!
//! Summarizes `--trace-wasm-compilation-times` output per function.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::ffi::OsString;
use std::path::PathBuf;

use wasm_compile_times::commands::{
    display_usage, execute_report, is_usage_request, validate_args, ReportArgs,
};

/// Wasm Compile Times - per-function compilation report
///
/// Built-in help is disabled: `-h`, `--help` and `help` reach the
/// positional argument and print the usage line instead.
#[derive(Parser, Debug)]
#[command(name = "wasm-compile-times")]
#[command(about, long_about = None, disable_help_flag = true)]
struct Cli {
    /// Trace file generated with --trace-wasm-compilation-times
    #[arg(allow_hyphen_values = true)]
    trace: Option<PathBuf>,

    /// Anything after the trace path is ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    _ignored: Vec<OsString>,

    /// Also write the report as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if is_usage_request(cli.trace.as_deref().map(|p| p.as_os_str())) {
        display_usage();
        std::process::exit(1);
    }

    let args = ReportArgs {
        trace_path: cli.trace.unwrap_or_default(),
        output_json: cli.json,
    };

    validate_args(&args)?;

    let stdout = std::io::stdout();
    execute_report(&args, &mut stdout.lock())?;

    Ok(())
}
