//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the agent-definition document.
///
/// Parsing itself cannot fail; only reading the document can.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the agent-definition document from disk.
    #[error("Failed to read agent definitions at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Type alias for Result with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
