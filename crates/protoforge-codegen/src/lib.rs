//! protoforge-codegen - C structure and codec emitters
//!
//! Takes a parsed [`Schema`](protoforge_core::Schema) and produces, entirely
//! in memory:
//! - one guarded declarations header ([`header`])
//! - per message, an encoder, a decoder, and a free routine ([`codec`])
//! - deterministic, hash-derived artifact names ([`naming`])
//!
//! [`generate`] orchestrates the emitters; writing artifacts to disk is the
//! caller's concern.

mod config;
mod generator;

pub mod codec;
pub mod header;
pub mod naming;
pub mod types;

pub use config::GeneratorConfig;
pub use generator::{Artifact, GeneratedSet, UnitArtifact, generate};
pub use naming::UnitKind;
