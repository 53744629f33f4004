//! Generator orchestration
//!
//! Runs the emitters over a parsed schema and collects the results as
//! in-memory artifacts. Writing them to disk is the caller's concern, so
//! a failure while emitting one artifact cannot roll back others.

use crate::codec;
use crate::config::GeneratorConfig;
use crate::header;
use crate::naming::{self, UnitKind, UnitNamer};
use protoforge_core::Schema;

/// One generated file: its name and full contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
}

/// One generated implementation unit, tagged with its message and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitArtifact {
    pub file_name: String,
    pub contents: String,
    pub message: String,
    pub kind: UnitKind,
}

/// Everything one generator run produces.
#[derive(Debug, Clone)]
pub struct GeneratedSet {
    pub header: Artifact,
    pub units: Vec<UnitArtifact>,
    /// Content tag the header name and guard derive from.
    pub tag: String,
    /// Digest of the seed alone, scattering the unit names.
    pub seed_digest: String,
}

/// Generate all artifacts for a schema.
///
/// Deterministic: the same `(spec_text, seed)` pair always yields the same
/// artifact names and contents.
pub fn generate(
    schema: &Schema,
    spec_text: &str,
    seed: i64,
    config: &GeneratorConfig,
) -> GeneratedSet {
    let tag = naming::content_tag(spec_text, seed);
    let header_name = naming::header_file_name(&config.header_prefix, &tag);
    let guard = naming::header_guard(&config.header_prefix, &tag);
    tracing::debug!(%tag, header = %header_name, "deriving artifact identities");

    let header = Artifact {
        contents: header::generate_header(schema, &guard),
        file_name: header_name.clone(),
    };

    let mut namer = UnitNamer::new(config.unit_prefix.as_str(), seed);
    let mut units = Vec::with_capacity(schema.len() * UnitKind::ALL.len());
    for (index, message) in schema.into_iter().enumerate() {
        for kind in UnitKind::ALL {
            let contents = match kind {
                UnitKind::Encode => codec::generate_encoder(message, &header_name),
                UnitKind::Decode => codec::generate_decoder(message, &header_name),
                UnitKind::Free => codec::generate_free(message, &header_name),
            };
            let file_name = namer.assign(index, kind);
            tracing::debug!(message = %message.name, file = %file_name, "generated {kind} unit");
            units.push(UnitArtifact {
                file_name,
                contents,
                message: message.name.clone(),
                kind,
            });
        }
    }

    GeneratedSet {
        header,
        units,
        tag,
        seed_digest: naming::seed_digest(seed),
    }
}
