//! Error types for the skinning library

use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong asset kind where a soft asset was required
    #[error("Asset error: {0}")]
    Asset(String),

    /// Cluster binding data inconsistent with the asset or transform snapshot
    #[error("Binding error: {0}")]
    Binding(String),

    /// Malformed data in a text export file
    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
