//! Line-oriented spec parser
//!
//! The grammar is deliberately forgiving: blank lines and `#` comments are
//! skipped, `MESSAGE <name>` opens a message (finalizing any open one),
//! `FIELD <name> <type>` appends a field to the open message, and anything
//! else is skipped. Skipped lines are not swallowed silently — each one is
//! recorded as a [`Diagnostic`] so a typo'd keyword can still be detected
//! by callers that care.

use crate::error::{SpecError, SpecResult};
use crate::schema::{FieldSpec, FieldType, MessageSpec, Schema};
use std::fs;
use std::path::Path;

/// Keyword that opens a message definition.
const KW_MESSAGE: &str = "MESSAGE";
/// Keyword that declares a field inside the open message.
const KW_FIELD: &str = "FIELD";
/// Comment marker; lines starting with it are skipped without diagnostics.
const COMMENT_MARKER: char = '#';

/// A spec line that was skipped by the lenient grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the spec source.
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
    /// Why the line was skipped.
    pub reason: String,
}

/// Result of parsing a spec source: the schema plus any skipped-line
/// diagnostics. Parsing itself cannot fail.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub schema: Schema,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse the full text of a schema source.
///
/// Output preserves line order exactly: messages appear in the schema in
/// declaration order, fields in source order. At end of input any message
/// still open is finalized.
pub fn parse_spec(source: &str) -> ParseOutcome {
    let mut schema = Schema::new();
    let mut diagnostics = Vec::new();
    let mut current: Option<MessageSpec> = None;

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(KW_MESSAGE) => match tokens.next() {
                Some(name) => {
                    if let Some(finished) = current.replace(MessageSpec::new(name)) {
                        schema.push(finished);
                    }
                }
                None => skip(&mut diagnostics, idx, line, "MESSAGE without a name"),
            },
            Some(KW_FIELD) => match (&mut current, tokens.next(), tokens.next()) {
                (Some(message), Some(name), Some(tag)) => {
                    message
                        .fields
                        .push(FieldSpec::new(name, FieldType::from_tag(tag)));
                }
                (None, _, _) => skip(&mut diagnostics, idx, line, "FIELD outside any message"),
                _ => skip(&mut diagnostics, idx, line, "FIELD missing name or type"),
            },
            _ => skip(&mut diagnostics, idx, line, "unrecognized line"),
        }
    }

    if let Some(finished) = current {
        schema.push(finished);
    }

    ParseOutcome {
        schema,
        diagnostics,
    }
}

/// Read a spec source from disk.
///
/// Callers that also need the raw text (the naming strategy hashes it) use
/// this directly and feed the result to [`parse_spec`].
pub fn read_spec(path: impl AsRef<Path>) -> SpecResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| SpecError::MalformedSpec {
        path: path.display().to_string(),
        source,
    })
}

/// Parse a spec file from disk.
///
/// The only fatal condition is a file-level read failure; the grammar
/// itself never fails.
pub fn parse_spec_file(path: impl AsRef<Path>) -> SpecResult<ParseOutcome> {
    Ok(parse_spec(&read_spec(path)?))
}

fn skip(diagnostics: &mut Vec<Diagnostic>, idx: usize, line: &str, reason: &str) {
    let line_no = idx + 1;
    tracing::warn!(line = line_no, content = line, "skipping spec line: {reason}");
    diagnostics.push(Diagnostic {
        line: line_no,
        content: line.to_string(),
        reason: reason.to_string(),
    });
}
