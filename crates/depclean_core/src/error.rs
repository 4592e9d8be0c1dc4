use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while reading project inputs.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The project manifest is absent; nothing can be compared without it.
    #[error("File {} does not exist", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed header in {}: {source}", path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: HeaderError,
    },
}

/// Errors raised by the type definition header parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("missing 'Type definitions for' header")]
    Missing,

    #[error("missing library version in '{0}'")]
    MissingVersion(String),

    #[error("invalid library version '{0}'")]
    InvalidVersion(String),

    #[error("expected a '{0}' line")]
    MissingField(&'static str),
}

pub type Result<T, E = ScanError> = std::result::Result<T, E>;
