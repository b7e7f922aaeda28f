//! Loads the agent catalog from the agent-definition document on disk.

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::models::AgentCatalog;
use crate::catalog::parser::parse;
use std::path::Path;
use tracing::{debug, error, info};

/// Read and parse the agent-definition document at `path`.
///
/// # Errors
///
/// Returns [`CatalogError::FileRead`] if the file cannot be read. Malformed
/// sections inside a readable file are not errors; they are skipped.
///
/// # Example
///
/// ```rust,no_run
/// use bmad_core::catalog::load_catalog;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = load_catalog(Path::new("bmad-agent/ide-bmad-orchestrator.cfg.md")).await?;
/// println!("Loaded {} agents", catalog.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_catalog(path: &Path) -> CatalogResult<AgentCatalog> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(bytes = content.len(), path = %path.display(), "Read agent definitions");

    let catalog = parse(&content);
    info!("Loaded {} BMAD agents", catalog.len());
    Ok(catalog)
}

/// Load the catalog, falling back to an empty one when the document cannot
/// be read. The failure is logged; the server still starts.
pub async fn load_catalog_or_empty(path: &Path) -> AgentCatalog {
    match load_catalog(path).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load agents: {e}");
            AgentCatalog::new()
        }
    }
}
