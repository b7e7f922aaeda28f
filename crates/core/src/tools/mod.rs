//! Tool registry and tool call execution.

pub mod error;
pub mod executor;
pub mod registry;

pub use error::{ToolError, ToolResult};
pub use executor::ToolExecutor;
