//! Trace parsing and record layouts.
//!
//! This module handles:
//! - Recognizing compilation records among other trace output
//! - Mapping token positions to fields per compiler
//! - Validating numeric fields

pub mod schema;
pub mod trace_line;

// Re-export main types
pub use schema::{Compiler, Field, FieldKind, FieldSlot, LIFTOFF_SCHEMA, TURBOFAN_SCHEMA};
pub use trace_line::{
    classify_line, split_identifier, BaselineStats, CompiledLine, Observation, OptimizedStats,
};
