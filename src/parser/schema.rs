//! Token layouts of compilation records.
//!
//! Each compiler writes a fixed, space-delimited sentence. The tables below
//! map token positions to the fields they carry so that a line can be
//! validated in one pass before anything is stored.

use crate::utils::config::{LIFTOFF_TAG, TURBOFAN_TAG};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compiler that produced a compilation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compiler {
    /// Optimizing tier
    TurboFan,
    /// Baseline tier
    Liftoff,
}

impl Compiler {
    /// Resolve the tag found at the compiler slot (e.g. `"TurboFan,"`)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            TURBOFAN_TAG => Some(Self::TurboFan),
            LIFTOFF_TAG => Some(Self::Liftoff),
            _ => None,
        }
    }

    /// Token layout of this compiler's records
    pub fn schema(self) -> &'static [FieldSlot] {
        match self {
            Self::TurboFan => TURBOFAN_SCHEMA,
            Self::Liftoff => LIFTOFF_SCHEMA,
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurboFan => write!(f, "TurboFan"),
            Self::Liftoff => write!(f, "Liftoff"),
        }
    }
}

/// A value carried by a compilation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TimeMs,
    MemoryBytes,
    MemoryMaxBytes,
    MemoryTotalBytes,
    WasmSizeBytes,
    CodeSizeBytes,
    SourceName,
}

impl Field {
    /// Name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Self::TimeMs => "time",
            Self::MemoryBytes => "memory",
            Self::MemoryMaxBytes => "max memory",
            Self::MemoryTotalBytes => "total memory",
            Self::WasmSizeBytes => "body size",
            Self::CodeSizeBytes => "code size",
            Self::SourceName => "name",
        }
    }
}

/// How the token at a slot is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
}

/// One entry of a token layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    pub index: usize,
    pub field: Field,
    pub kind: FieldKind,
}

const fn slot(index: usize, field: Field, kind: FieldKind) -> FieldSlot {
    FieldSlot { index, field, kind }
}

// 0        1        2  3     4         5    6 7  8   9     10 11
// Compiled function #6 using TurboFan, took 0 ms and 14440 / 44656
// 12        13     14       15 16   17
// max/total bytes, codesize 24 name wasm-function#6
pub const TURBOFAN_SCHEMA: &[FieldSlot] = &[
    slot(6, Field::TimeMs, FieldKind::Integer),
    slot(9, Field::MemoryMaxBytes, FieldKind::Integer),
    slot(11, Field::MemoryTotalBytes, FieldKind::Integer),
    slot(15, Field::CodeSizeBytes, FieldKind::Integer),
    slot(17, Field::SourceName, FieldKind::Text),
];

// 0        1        2  3     4        5    6 7  8   9   10     11       12
// Compiled function #6 using Liftoff, took 0 ms and 968 bytes; bodysize 4
// 13       14
// codesize 68
pub const LIFTOFF_SCHEMA: &[FieldSlot] = &[
    slot(6, Field::TimeMs, FieldKind::Integer),
    slot(9, Field::MemoryBytes, FieldKind::Integer),
    slot(12, Field::WasmSizeBytes, FieldKind::Integer),
    slot(14, Field::CodeSizeBytes, FieldKind::Integer),
];
