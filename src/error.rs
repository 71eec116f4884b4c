//! Error types for shadow object models

use crate::asset::AssetKind;
use thiserror::Error;

/// Main error type for shadow object models
#[derive(Error, Debug)]
pub enum ShadowError {
    #[error("Kind mismatch: expected {expected}, found {actual}")]
    KindMismatch {
        expected: AssetKind,
        actual: AssetKind,
    },

    #[error("No matching candidate for {kind} among [{}]", format_kinds(.candidates))]
    NoMatchingCandidate {
        kind: AssetKind,
        candidates: Vec<AssetKind>,
    },

    #[error("Unknown asset kind: {0}")]
    UnknownKind(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

fn format_kinds(kinds: &[AssetKind]) -> String {
    kinds
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for shadow object model operations
pub type Result<T> = std::result::Result<T, ShadowError>;
