//! Hash-based naming strategy for generated artifacts
//!
//! Artifact identity is derived from content hashes: the header name from
//! the spec text plus the caller's seed, the implementation unit names from
//! the seed alone. The scheme is deterministic for a given `(spec_text,
//! seed)` pair and collision-free via a numeric suffix; it is an identity
//! mechanism only and carries no security property.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Number of digest characters kept for the header tag.
pub const TAG_LEN: usize = 8;

/// The three implementation units emitted per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Encode,
    Decode,
    Free,
}

impl UnitKind {
    pub const ALL: [UnitKind; 3] = [UnitKind::Encode, UnitKind::Decode, UnitKind::Free];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitKind::Encode => "encode",
            UnitKind::Decode => "decode",
            UnitKind::Free => "free",
        }
    }

    fn offset(self) -> usize {
        match self {
            UnitKind::Encode => 0,
            UnitKind::Decode => 1,
            UnitKind::Free => 2,
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn sha256_hex(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

/// Short opaque tag over the spec text and seed; basis of the header name
/// and include guard.
pub fn content_tag(spec_text: &str, seed: i64) -> String {
    sha256_hex(&format!("{spec_text}{seed}"))[..TAG_LEN].to_string()
}

/// Digest of the seed alone; scatters implementation unit names.
pub fn seed_digest(seed: i64) -> String {
    sha256_hex(&seed.to_string())
}

/// Header file name for a tag, e.g. `protocol_ab12cd34.h`.
pub fn header_file_name(prefix: &str, tag: &str) -> String {
    format!("{prefix}_{tag}.h")
}

/// Include guard for a tag, e.g. `PROTOCOL_AB12CD34_H`.
pub fn header_guard(prefix: &str, tag: &str) -> String {
    format!(
        "{}_{}_H",
        prefix.to_uppercase(),
        tag.to_uppercase()
    )
}

/// Assigns deterministic, collision-free file names to implementation units.
///
/// The unit for message index `i` and kind `k` takes the seed-digest
/// character at `(3*i + offset(k)) mod digest_len`. A name already handed
/// out gets a numeric suffix instead.
pub struct UnitNamer {
    prefix: String,
    digest: Vec<char>,
    used: HashSet<String>,
}

impl UnitNamer {
    pub fn new(prefix: impl Into<String>, seed: i64) -> Self {
        Self {
            prefix: prefix.into(),
            digest: seed_digest(seed).chars().collect(),
            used: HashSet::new(),
        }
    }

    /// Assign the file name for one unit. Never returns the same name twice.
    pub fn assign(&mut self, message_index: usize, kind: UnitKind) -> String {
        let ch = self.digest[(message_index * 3 + kind.offset()) % self.digest.len()];
        let base = format!("{}_{}_{}", self.prefix, ch, kind.as_str());

        let mut name = format!("{base}.c");
        let mut counter = 0;
        while !self.used.insert(name.clone()) {
            counter += 1;
            name = format!("{base}_{counter}.c");
        }
        name
    }
}
