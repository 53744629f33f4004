//! protoforge-core - Schema model, spec parser, and reference wire codec
//!
//! This crate provides the foundational types for the protoforge generator:
//! - [`Schema`], [`MessageSpec`], and [`FieldSpec`] for the in-memory schema
//! - [`parse_spec`] / [`parse_spec_file`] for the line-oriented spec grammar
//! - [`SpecError`] for error handling
//! - [`wire`] for the reference implementation of the delimited wire format

mod error;
mod parser;
mod schema;
pub mod wire;

pub use error::{SpecError, SpecResult};
pub use parser::{Diagnostic, ParseOutcome, parse_spec, parse_spec_file, read_spec};
pub use schema::{FieldSpec, FieldType, MessageSpec, Schema};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Diagnostic, FieldSpec, FieldType, MessageSpec, ParseOutcome, Schema, SpecError,
        SpecResult, parse_spec, parse_spec_file, read_spec,
    };
}
