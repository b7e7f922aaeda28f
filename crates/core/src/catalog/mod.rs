//! Agent catalog: parsing the agent-definition document into an immutable
//! id → record mapping.

pub mod error;
pub mod loader;
pub mod models;
pub mod parser;
pub mod scanner;

pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog, load_catalog_or_empty};
pub use models::AgentCatalog;
pub use parser::parse;
