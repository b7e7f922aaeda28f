//! Tool descriptors, call parameters and the payloads each tool returns.
//!
//! Tool results travel as JSON text inside a successful `tools/call`
//! envelope. Domain failures (unknown agent, missing knowledge file, ...)
//! are encoded as [`ToolErrorPayload`] in the same place, never as a
//! transport error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use ts_rs::TS;

/// The closed set of tools exposed by the server.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    ListBmadAgents,
    ExecuteBmadTask,
    GetBmadKnowledge,
}

impl ToolName {
    /// All tools, in registry order.
    pub const ALL: [ToolName; 3] = [
        ToolName::ListBmadAgents,
        ToolName::ExecuteBmadTask,
        ToolName::GetBmadKnowledge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::ListBmadAgents => "list_bmad_agents",
            ToolName::ExecuteBmadTask => "execute_bmad_task",
            ToolName::GetBmadKnowledge => "get_bmad_knowledge",
        }
    }

    /// Look up a tool by its wire name. Returns `None` for unknown tools.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema of a single tool parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl PropertySchema {
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            kind: "string".to_string(),
            description: description.into(),
        }
    }
}

/// JSON-schema-shaped description of a tool's arguments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: BTreeMap<String, PropertySchema>,
    pub required: Vec<String>,
}

impl InputSchema {
    /// An object schema without parameters.
    pub fn empty() -> Self {
        Self {
            kind: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Add a required parameter.
    pub fn with_required(mut self, name: &str, schema: PropertySchema) -> Self {
        self.properties.insert(name.to_string(), schema);
        self.required.push(name.to_string());
        self
    }
}

/// Static declaration of a callable tool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

/// `result` of a `tools/list` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ListToolsResult {
    pub tools: Vec<ToolDescriptor>,
}

/// `params` of a `tools/call` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct CallToolParams {
    pub name: String,

    /// Usually an object. Absent and `null` both mean no arguments; any
    /// other shape is rejected by the tool that reads it.
    #[serde(default)]
    #[ts(type = "unknown")]
    pub arguments: Value,
}

/// One item of a tool call result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
}

/// `result` of a `tools/call` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct CallToolResult {
    pub content: Vec<ContentBlock>,
}

impl CallToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Concatenated text of all text blocks.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|block| match block {
                ContentBlock::Text { text } => text.as_str(),
            })
            .collect()
    }
}

/// Arguments of `execute_bmad_task`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ExecuteTaskArgs {
    /// Agent id as listed by `list_bmad_agents`.
    pub agent: String,
    pub task: String,
    /// Echoed back unchanged, whatever its JSON type.
    #[ts(type = "unknown")]
    pub input: Value,
}

/// Arguments of `get_bmad_knowledge`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct KnowledgeArgs {
    pub knowledge_type: String,
}

/// Payload of `list_bmad_agents`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentListing {
    pub agents: Vec<crate::agent_models::AgentSummary>,
    pub total_count: usize,
}

/// Lifecycle state reported for an acknowledged task.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Queued,
}

/// Payload of `execute_bmad_task`.
///
/// The server does not run tasks; it acknowledges them for the client's
/// own agent runtime.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct TaskAcknowledgement {
    /// Declared agent name (not the id).
    pub agent: String,
    pub task: String,
    pub task_file: String,
    #[ts(type = "unknown")]
    pub input: Value,
    pub status: TaskStatus,
    pub message: String,
    pub next_steps: Vec<String>,
}

/// Payload of `get_bmad_knowledge`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct KnowledgeDocument {
    /// The key as requested, before any hyphen/underscore substitution.
    pub knowledge_type: String,
    pub file_path: String,
    pub content: String,
    /// Modification time in seconds since the Unix epoch.
    pub last_modified: f64,
}

/// Payload of any failed tool call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ToolErrorPayload {
    pub error: String,
}
