//! Function table built from a trace.
//!
//! Records are kept in first-seen order so that later sorting is
//! deterministic for functions with equal optimizing time.

use super::record::FunctionRecord;
use super::registry::ModuleRegistry;
use crate::parser::classify_line;
use crate::utils::error::ParseError;
use log::debug;
use std::collections::HashMap;
use std::io::BufRead;

/// All functions observed in a trace, plus the modules they belong to
#[derive(Debug, Clone, Default)]
pub struct CompilationTable {
    /// Identifier -> position in `functions`
    positions: HashMap<String, usize>,
    functions: Vec<FunctionRecord>,
    registry: ModuleRegistry,
    lines_read: usize,
    compiled_lines: usize,
}

impl CompilationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a whole trace
    ///
    /// **Public** - main entry point for aggregation
    ///
    /// # Errors
    /// * `ParseError::Io` - the reader failed
    /// * any format error raised by a compilation record
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut table = Self::new();
        for line in reader.lines() {
            let line = line?;
            table.ingest_line(&line)?;
        }
        debug!(
            "Read {} lines, {} compilation records, {} functions in {} modules",
            table.lines_read,
            table.compiled_lines,
            table.functions.len(),
            table.registry.module_count()
        );
        Ok(table)
    }

    /// Feed one trace line
    ///
    /// Returns `true` when the line was a compilation record.
    pub fn ingest_line(&mut self, line: &str) -> Result<bool, ParseError> {
        self.lines_read += 1;
        let Some(compiled) = classify_line(self.lines_read, line)? else {
            return Ok(false);
        };
        self.compiled_lines += 1;

        self.registry.register(compiled.module());

        let position = match self.positions.get(&compiled.identifier) {
            Some(&position) => position,
            None => {
                let position = self.functions.len();
                self.functions.push(FunctionRecord::new(compiled.identifier.clone()));
                self.positions.insert(compiled.identifier.clone(), position);
                position
            }
        };

        self.functions[position].absorb(&compiled)?;
        Ok(true)
    }

    /// Records in first-seen order
    pub fn functions(&self) -> &[FunctionRecord] {
        &self.functions
    }

    pub fn get(&self, identifier: &str) -> Option<&FunctionRecord> {
        self.positions
            .get(identifier)
            .map(|&position| &self.functions[position])
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Number of lines fed so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Number of compilation records among them
    pub fn compiled_lines(&self) -> usize {
        self.compiled_lines
    }
}
