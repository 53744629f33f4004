//! Generator configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a generator run.
///
/// Every field has a default matching the tool's conventional layout; a
/// JSON config file or CLI flags may override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Path to the protocol spec source
    #[serde(default = "default_spec_path")]
    pub spec_path: PathBuf,

    /// Directory receiving the declarations header
    #[serde(default = "default_header_dir")]
    pub header_dir: PathBuf,

    /// Directory receiving the per-message implementation units
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File-name prefix of the declarations header
    #[serde(default = "default_header_prefix")]
    pub header_prefix: String,

    /// File-name prefix of the implementation units
    #[serde(default = "default_unit_prefix")]
    pub unit_prefix: String,
}

fn default_spec_path() -> PathBuf {
    PathBuf::from("protocol.spec")
}

fn default_header_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("proto_impl")
}

fn default_header_prefix() -> String {
    "protocol".to_string()
}

fn default_unit_prefix() -> String {
    "proto".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            spec_path: default_spec_path(),
            header_dir: default_header_dir(),
            output_dir: default_output_dir(),
            header_prefix: default_header_prefix(),
            unit_prefix: default_unit_prefix(),
        }
    }
}

impl GeneratorConfig {
    /// Create configuration from JSON bytes; empty input yields defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }
}
