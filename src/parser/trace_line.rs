//! Line classifier for `--trace-wasm-compilation-times` output.
//!
//! Only lines whose first token is `Compiled` are compilation records.
//! Everything else in the trace is ignored.

use super::schema::{Compiler, Field, FieldKind, FieldSlot};
use crate::utils::config::{COMPILED_MARKER, COMPILER_SLOT, IDENTIFIER_SEPARATOR, IDENTIFIER_SLOT};
use crate::utils::error::ParseError;
use log::trace;

/// Values reported by the optimizing compiler for one function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedStats {
    pub time_ms: i64,
    pub memory_max_bytes: i64,
    pub memory_total_bytes: i64,
    pub code_size_bytes: i64,
    pub source_name: String,
}

/// Values reported by the baseline compiler for one function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineStats {
    pub time_ms: i64,
    pub memory_bytes: i64,
    pub wasm_size_bytes: i64,
    pub code_size_bytes: i64,
}

/// What a single compilation record reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    Optimized(OptimizedStats),
    Baseline(BaselineStats),
}

impl Observation {
    pub fn compiler(&self) -> Compiler {
        match self {
            Self::Optimized(_) => Compiler::TurboFan,
            Self::Baseline(_) => Compiler::Liftoff,
        }
    }
}

/// A classified compilation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledLine {
    /// 1-based line number in the trace
    pub line_number: usize,

    /// Function identifier (`<module>#<index>`)
    pub identifier: String,

    pub observation: Observation,
}

impl CompiledLine {
    /// Module portion of the identifier
    pub fn module(&self) -> &str {
        split_identifier(&self.identifier)
            .map(|(module, _)| module)
            .unwrap_or_default()
    }
}

/// Split an identifier into its module name and function index.
///
/// The module is everything before the first separator; the index runs up
/// to the next separator, if any. Returns `None` when there is no separator.
pub fn split_identifier(identifier: &str) -> Option<(&str, &str)> {
    let (module, rest) = identifier.split_once(IDENTIFIER_SEPARATOR)?;
    let index = rest.split(IDENTIFIER_SEPARATOR).next().unwrap_or(rest);
    Some((module, index))
}

/// Classify one trace line
///
/// **Public** - main entry point of the classifier
///
/// # Returns
/// * `Ok(None)` - not a compilation record
/// * `Ok(Some(line))` - a fully validated compilation record
///
/// # Errors
/// Any deviation from the expected layout of a `Compiled` line.
pub fn classify_line(line_number: usize, line: &str) -> Result<Option<CompiledLine>, ParseError> {
    let tokens: Vec<&str> = line.trim().split(' ').collect();
    if tokens.first() != Some(&COMPILED_MARKER) {
        return Ok(None);
    }

    let truncated = || ParseError::Truncated {
        line: line_number,
        tokens: tokens.len(),
    };

    let identifier = *tokens.get(IDENTIFIER_SLOT).ok_or_else(truncated)?;
    if split_identifier(identifier).is_none() {
        return Err(ParseError::MalformedIdentifier {
            line: line_number,
            identifier: identifier.to_string(),
        });
    }

    let tag = *tokens.get(COMPILER_SLOT).ok_or_else(truncated)?;
    let compiler = Compiler::from_tag(tag).ok_or_else(|| ParseError::UnknownCompiler {
        line: line_number,
        identifier: identifier.to_string(),
        tag: tag.to_string(),
    })?;

    let fields = read_fields(line_number, identifier, compiler, &tokens)?;
    let observation = match compiler {
        Compiler::TurboFan => Observation::Optimized(OptimizedStats {
            time_ms: fields.integer(Field::TimeMs)?,
            memory_max_bytes: fields.integer(Field::MemoryMaxBytes)?,
            memory_total_bytes: fields.integer(Field::MemoryTotalBytes)?,
            code_size_bytes: fields.integer(Field::CodeSizeBytes)?,
            source_name: fields.text(Field::SourceName)?.to_string(),
        }),
        Compiler::Liftoff => Observation::Baseline(BaselineStats {
            time_ms: fields.integer(Field::TimeMs)?,
            memory_bytes: fields.integer(Field::MemoryBytes)?,
            wasm_size_bytes: fields.integer(Field::WasmSizeBytes)?,
            code_size_bytes: fields.integer(Field::CodeSizeBytes)?,
        }),
    };

    trace!("line {}: {} record for {}", line_number, compiler, identifier);

    Ok(Some(CompiledLine {
        line_number,
        identifier: identifier.to_string(),
        observation,
    }))
}

#[derive(Debug, Clone, Copy)]
enum FieldValue<'a> {
    Integer(i64),
    Text(&'a str),
}

/// Field values of one line, already checked against its schema
///
/// Asking for a field the schema does not map, or with the wrong kind, is
/// an error rather than a default.
#[derive(Debug)]
struct FieldValues<'a> {
    line: usize,
    compiler: Compiler,
    values: Vec<(Field, FieldValue<'a>)>,
}

impl<'a> FieldValues<'a> {
    fn get(&self, field: Field) -> Option<FieldValue<'a>> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| *value)
    }

    fn unmapped(&self, field: Field) -> ParseError {
        ParseError::UnmappedField {
            line: self.line,
            compiler: self.compiler,
            field: field.name(),
        }
    }

    fn integer(&self, field: Field) -> Result<i64, ParseError> {
        match self.get(field) {
            Some(FieldValue::Integer(value)) => Ok(value),
            _ => Err(self.unmapped(field)),
        }
    }

    fn text(&self, field: Field) -> Result<&'a str, ParseError> {
        match self.get(field) {
            Some(FieldValue::Text(value)) => Ok(value),
            _ => Err(self.unmapped(field)),
        }
    }
}

/// Validate every slot of `compiler`'s schema and collect the values
///
/// **Private** - internal helper for classify_line
fn read_fields<'a>(
    line_number: usize,
    identifier: &str,
    compiler: Compiler,
    tokens: &[&'a str],
) -> Result<FieldValues<'a>, ParseError> {
    let schema = compiler.schema();
    let mut values = FieldValues {
        line: line_number,
        compiler,
        values: Vec::with_capacity(schema.len()),
    };

    for FieldSlot { index, field, kind } in schema.iter().copied() {
        let token = *tokens.get(index).ok_or_else(|| ParseError::MissingField {
            line: line_number,
            identifier: identifier.to_string(),
            compiler,
            field: field.name(),
            slot: index,
        })?;

        match kind {
            FieldKind::Integer => {
                let value = token.parse::<i64>().map_err(|source| ParseError::InvalidNumber {
                    line: line_number,
                    identifier: identifier.to_string(),
                    compiler,
                    field: field.name(),
                    value: token.to_string(),
                    source,
                })?;
                values.values.push((field, FieldValue::Integer(value)));
            }
            FieldKind::Text => {
                values.values.push((field, FieldValue::Text(token)));
            }
        }
    }

    Ok(values)
}
