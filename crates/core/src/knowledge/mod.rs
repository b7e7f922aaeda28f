//! Knowledge resolver: locates project knowledge documents by type key.

pub mod error;
pub mod store;

pub use error::{KnowledgeError, KnowledgeResult};
pub use store::{candidate_names, FsKnowledgeStore, KnowledgeStore};
