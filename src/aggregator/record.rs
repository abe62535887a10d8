//! Per-function accumulator.

use crate::parser::{BaselineStats, CompiledLine, Compiler, Observation, OptimizedStats};
use crate::utils::config::UNSET;
use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};

/// Compilation statistics of one function
///
/// Numeric fields hold `-1` until the matching observation arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub identifier: String,

    pub has_baseline: bool,
    pub has_optimized: bool,

    pub baseline_time_ms: i64,
    pub optimized_time_ms: i64,

    pub baseline_memory_bytes: i64,
    pub optimized_memory_max_bytes: i64,
    pub optimized_memory_total_bytes: i64,

    /// Name reported by the optimizing compiler
    pub source_name: String,

    pub wasm_size_bytes: i64,
    pub baseline_code_size_bytes: i64,
    pub optimized_code_size_bytes: i64,
}

impl FunctionRecord {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            has_baseline: false,
            has_optimized: false,
            baseline_time_ms: UNSET,
            optimized_time_ms: UNSET,
            baseline_memory_bytes: UNSET,
            optimized_memory_max_bytes: UNSET,
            optimized_memory_total_bytes: UNSET,
            source_name: String::new(),
            wasm_size_bytes: UNSET,
            baseline_code_size_bytes: UNSET,
            optimized_code_size_bytes: UNSET,
        }
    }

    /// Absorb one compilation record
    ///
    /// # Errors
    /// * `ParseError::IdentifierMismatch` - the line belongs to another function
    /// * `ParseError::Duplicate` - this compiler was already observed
    pub fn absorb(&mut self, line: &CompiledLine) -> Result<(), ParseError> {
        if line.identifier != self.identifier {
            return Err(ParseError::IdentifierMismatch {
                line: line.line_number,
                expected: self.identifier.clone(),
                found: line.identifier.clone(),
            });
        }

        let already_seen = match line.observation.compiler() {
            Compiler::TurboFan => self.has_optimized,
            Compiler::Liftoff => self.has_baseline,
        };
        if already_seen {
            return Err(ParseError::Duplicate {
                line: line.line_number,
                identifier: self.identifier.clone(),
                compiler: line.observation.compiler(),
            });
        }

        match &line.observation {
            Observation::Optimized(stats) => self.set_optimized(stats),
            Observation::Baseline(stats) => self.set_baseline(stats),
        }
        Ok(())
    }

    fn set_optimized(&mut self, stats: &OptimizedStats) {
        self.has_optimized = true;
        self.optimized_time_ms = stats.time_ms;
        self.optimized_memory_max_bytes = stats.memory_max_bytes;
        self.optimized_memory_total_bytes = stats.memory_total_bytes;
        self.optimized_code_size_bytes = stats.code_size_bytes;
        self.source_name = stats.source_name.clone();
    }

    fn set_baseline(&mut self, stats: &BaselineStats) {
        self.has_baseline = true;
        self.baseline_time_ms = stats.time_ms;
        self.baseline_memory_bytes = stats.memory_bytes;
        self.wasm_size_bytes = stats.wasm_size_bytes;
        self.baseline_code_size_bytes = stats.code_size_bytes;
    }
}
