//! Error types for spec handling

use thiserror::Error;

/// Result type alias for spec operations
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading a protocol spec.
///
/// The grammar itself is forgiving: unrecognized lines become diagnostics,
/// never errors. The only fatal condition is a spec file that cannot be read.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Spec file missing or unreadable.
    #[error("malformed spec: cannot read {path}: {source}")]
    MalformedSpec {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn SpecError___malformed_spec___displays_path_and_cause() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SpecError::MalformedSpec {
            path: "protocol.spec".to_string(),
            source: io_err,
        };

        let msg = err.to_string();

        assert!(msg.contains("malformed spec"));
        assert!(msg.contains("protocol.spec"));
    }
}
