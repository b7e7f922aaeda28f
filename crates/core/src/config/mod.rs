//! Server configuration.
//!
//! The server needs two external inputs: the agent-definition document and
//! the project root used to find knowledge documents.

pub mod error;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use models::{ServerConfig, DEFAULT_KNOWLEDGE_DIR, DEFAULT_LOG_LEVEL};
