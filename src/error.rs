//! Error types for loading and walking result documents.

use std::path::PathBuf;

/// Failure to turn a `result.json` path into a JSON document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The timepoint was not produced; the dataset is skipped.
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    /// The file exists but is not valid JSON; the dataset is skipped.
    #[error("Error decoding JSON in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other read failure. Fatal.
    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A parseable document that does not have the CRISPRCasFinder shape.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("missing key '{key}' at {at}")]
    MissingKey { key: &'static str, at: String },

    #[error("expected {expected} at {at}")]
    WrongKind { expected: &'static str, at: String },
}
