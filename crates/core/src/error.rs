//! Error types for descriptor packaging operations.

use std::path::PathBuf;

/// Errors from reading, packaging, and parsing signature descriptors.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// The file could not be read from disk.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read in text mode but is not valid UTF-8.
    #[error("{path} is not valid UTF-8 text")]
    NotUtf8 { path: PathBuf },

    /// The descriptor JSON could not be parsed.
    #[error("invalid descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A base64 field of the descriptor could not be decoded.
    #[error("invalid base64 in field '{field}': {source}")]
    Base64 {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    /// The digest algorithm name is not supported.
    #[error("unsupported digest algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The digest algorithm tag byte is not known.
    #[error("unknown digest algorithm tag: {0}")]
    UnknownAlgorithmTag(u8),
}

pub type Result<T, E = DescriptorError> = std::result::Result<T, E>;
