//! Error types for knowledge lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a knowledge document.
///
/// The display text is what clients see in the tool payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeError {
    /// No candidate file exists for the requested key.
    #[error("Knowledge file '{knowledge_type}.md' not found in {directory} directory")]
    NotFound {
        /// The key as requested, not the attempted variants.
        knowledge_type: String,
        directory: String,
    },

    /// A candidate exists but could not be read.
    #[error("Failed to read knowledge file: {message}")]
    Read { path: PathBuf, message: String },
}

/// Type alias for Result with KnowledgeError.
pub type KnowledgeResult<T> = Result<T, KnowledgeError>;
