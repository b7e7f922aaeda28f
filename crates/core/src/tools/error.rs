//! Domain errors raised by tool calls.
//!
//! These never become transport errors. The dispatcher reports them inside a
//! successful `tools/call` envelope as `{"error": "<display text>"}`.

use crate::knowledge::KnowledgeError;
use bmad_protocol::tool_models::ToolName;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: ToolName, reason: String },

    #[error("Agent '{0}' not found")]
    AgentNotFound(String),

    #[error("Task '{task}' not found for agent '{agent}'")]
    TaskNotFound { task: String, agent: String },

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error("Failed to encode tool result: {0}")]
    Encode(String),
}

/// Type alias for Result with ToolError.
pub type ToolResult<T> = Result<T, ToolError>;
