//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// First token of every compilation record in the trace
pub const COMPILED_MARKER: &str = "Compiled";

// Compiler tags as they appear at token 4, trailing comma included
pub const TURBOFAN_TAG: &str = "TurboFan,";
pub const LIFTOFF_TAG: &str = "Liftoff,";

/// Token positions shared by every compilation record
pub const IDENTIFIER_SLOT: usize = 2;
pub const COMPILER_SLOT: usize = 4;

/// Separator between module name and function index in an identifier
pub const IDENTIFIER_SEPARATOR: char = '#';

/// Value of every numeric field that was never observed
pub const UNSET: i64 = -1;

/// Arguments that request the usage text instead of a report
pub const HELP_ARGS: &[&str] = &["-h", "--help", "help"];

pub const USAGE: &str =
    "Pass output file (generated with --trace-wasm-compilation-times) as argument";
