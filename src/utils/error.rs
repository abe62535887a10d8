//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::parser::Compiler;
use thiserror::Error;

/// Errors that can occur while reading a compilation trace.
///
/// Every variant is fatal: the trace is expected to be well-formed and no
/// partial report is produced.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: truncated compilation record ({tokens} tokens)")]
    Truncated { line: usize, tokens: usize },

    #[error("line {line}: malformed function identifier '{identifier}'")]
    MalformedIdentifier { line: usize, identifier: String },

    #[error("line {line}: unknown compiler: {tag} (function {identifier})")]
    UnknownCompiler {
        line: usize,
        identifier: String,
        tag: String,
    },

    #[error("line {line}: missing {field} at token {slot} for {identifier} ({compiler})")]
    MissingField {
        line: usize,
        identifier: String,
        compiler: Compiler,
        field: &'static str,
        slot: usize,
    },

    #[error("line {line}: invalid {field} '{value}' for {identifier} ({compiler}): {source}")]
    InvalidNumber {
        line: usize,
        identifier: String,
        compiler: Compiler,
        field: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("line {line}: {compiler} record layout has no {field}")]
    UnmappedField {
        line: usize,
        compiler: Compiler,
        field: &'static str,
    },

    #[error("line {line}: duplicate {compiler} line for {identifier}")]
    Duplicate {
        line: usize,
        identifier: String,
        compiler: Compiler,
    },

    #[error("line {line}: wrong function: expected {expected}, found {found}")]
    IdentifierMismatch {
        line: usize,
        expected: String,
        found: String,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
