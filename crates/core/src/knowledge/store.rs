//! Knowledge document lookup.
//!
//! Knowledge documents live in `<project-root>/<knowledge-dir>/<type>.md`
//! (the directory defaults to `.ai`). Keys are matched tolerantly: a request
//! for `project-context` finds `project_context.md` and vice versa.

use crate::knowledge::error::{KnowledgeError, KnowledgeResult};
use async_trait::async_trait;
use bmad_protocol::tool_models::KnowledgeDocument;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::debug;

/// Source of knowledge documents, looked up by type key.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Resolve `knowledge_type` to a document.
    async fn resolve(&self, knowledge_type: &str) -> KnowledgeResult<KnowledgeDocument>;
}

/// File names tried for a key, in order: as given, `-` → `_`, `_` → `-`.
pub fn candidate_names(knowledge_type: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(3);
    for stem in [
        knowledge_type.to_string(),
        knowledge_type.replace('-', "_"),
        knowledge_type.replace('_', "-"),
    ] {
        let name = format!("{stem}.md");
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Keys that would escape the knowledge directory are never resolved.
fn is_plain_key(knowledge_type: &str) -> bool {
    !knowledge_type.is_empty()
        && knowledge_type != ".."
        && !knowledge_type.contains(['/', '\\'])
}

/// Knowledge store backed by a directory of Markdown files.
#[derive(Debug, Clone)]
pub struct FsKnowledgeStore {
    directory: PathBuf,
    directory_name: String,
}

impl FsKnowledgeStore {
    /// Store reading from `<project_root>/<knowledge_dir>`.
    pub fn new(project_root: &Path, knowledge_dir: &str) -> Self {
        Self {
            directory: project_root.join(knowledge_dir),
            directory_name: knowledge_dir.to_string(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Candidate paths for a key, in lookup order.
    pub fn candidates(&self, knowledge_type: &str) -> Vec<PathBuf> {
        candidate_names(knowledge_type)
            .into_iter()
            .map(|name| self.directory.join(name))
            .collect()
    }

    async fn locate(&self, knowledge_type: &str) -> Option<PathBuf> {
        if !is_plain_key(knowledge_type) {
            return None;
        }
        for candidate in self.candidates(knowledge_type) {
            if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
                return Some(candidate);
            }
        }
        None
    }

    async fn read(path: &Path) -> std::io::Result<(String, f64)> {
        let content = tokio::fs::read_to_string(path).await?;
        let modified = tokio::fs::metadata(path).await?.modified()?;
        let last_modified = modified
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or_default();
        Ok((content, last_modified))
    }
}

#[async_trait]
impl KnowledgeStore for FsKnowledgeStore {
    async fn resolve(&self, knowledge_type: &str) -> KnowledgeResult<KnowledgeDocument> {
        let path = self
            .locate(knowledge_type)
            .await
            .ok_or_else(|| KnowledgeError::NotFound {
                knowledge_type: knowledge_type.to_string(),
                directory: self.directory_name.clone(),
            })?;

        debug!(knowledge_type, path = %path.display(), "Resolved knowledge file");

        let (content, last_modified) =
            Self::read(&path)
                .await
                .map_err(|e| KnowledgeError::Read {
                    path: path.clone(),
                    message: e.to_string(),
                })?;

        Ok(KnowledgeDocument {
            knowledge_type: knowledge_type.to_string(),
            file_path: path.display().to_string(),
            content,
            last_modified,
        })
    }
}
