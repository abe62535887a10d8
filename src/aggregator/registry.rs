//! Module ordinals for display names.
//!
//! Modules are numbered in the order they first appear in the trace. The
//! numbering only shows up in the report when the trace covers more than
//! one module, so names must be resolved after the whole trace is read.

use crate::parser::split_identifier;
use log::debug;
use std::collections::HashMap;

/// Run-scoped mapping from module name to first-seen ordinal
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    ordinals: HashMap<String, usize>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module, returning its ordinal
    ///
    /// Registering a known module returns the ordinal it already has.
    pub fn register(&mut self, module: &str) -> usize {
        if let Some(&ordinal) = self.ordinals.get(module) {
            return ordinal;
        }
        let ordinal = self.ordinals.len();
        debug!("Module '{}' registered as m{}", module, ordinal);
        self.ordinals.insert(module.to_string(), ordinal);
        ordinal
    }

    pub fn ordinal(&self, module: &str) -> Option<usize> {
        self.ordinals.get(module).copied()
    }

    /// Number of distinct modules seen
    pub fn module_count(&self) -> usize {
        self.ordinals.len()
    }

    /// Render the report name of a function identifier
    ///
    /// `#<index>` when the whole trace references a single module,
    /// `m<ordinal>#<index>` otherwise.
    pub fn display_name(&self, identifier: &str) -> String {
        let (module, index) = split_identifier(identifier).unwrap_or((identifier, ""));
        if self.module_count() == 1 {
            return format!("#{}", index);
        }
        match self.ordinal(module) {
            Some(ordinal) => format!("m{}#{}", ordinal, index),
            None => format!("m?#{}", index),
        }
    }
}
