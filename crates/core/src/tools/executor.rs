//! Tool call execution against the agent catalog and knowledge store.

use crate::catalog::AgentCatalog;
use crate::knowledge::KnowledgeStore;
use crate::tools::error::{ToolError, ToolResult};
use bmad_protocol::agent_models::AgentSummary;
use bmad_protocol::tool_models::{
    AgentListing, ExecuteTaskArgs, KnowledgeArgs, KnowledgeDocument, TaskAcknowledgement,
    TaskStatus, ToolErrorPayload, ToolName,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error};

/// Follow-up steps reported with every acknowledged task.
pub const NEXT_STEPS: [&str; 3] = [
    "Review task requirements",
    "Execute with BMAD agent system",
    "Return results to OpenCode",
];

/// Executes tool calls.
///
/// Owns the immutable catalog and a handle to the knowledge store. Nothing
/// here mutates state, so calls can be answered in any order.
pub struct ToolExecutor {
    catalog: AgentCatalog,
    knowledge: Arc<dyn KnowledgeStore>,
}

impl ToolExecutor {
    pub fn new(catalog: AgentCatalog, knowledge: Arc<dyn KnowledgeStore>) -> Self {
        Self { catalog, knowledge }
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    /// Run the tool called `name` and return its JSON payload.
    ///
    /// Domain failures are folded into an `{"error": ...}` payload; this
    /// method itself does not fail. `arguments` of `null` count as `{}`.
    pub async fn call(&self, name: &str, arguments: &Value) -> Value {
        match self.try_call(name, arguments).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("Tool execution error: {e}");
                encode(&ToolErrorPayload {
                    error: e.to_string(),
                })
                .unwrap_or_else(|_| Value::Object(Map::new()))
            }
        }
    }

    async fn try_call(&self, name: &str, arguments: &Value) -> ToolResult<Value> {
        let tool = ToolName::parse(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        debug!(%tool, "Calling tool");

        match tool {
            ToolName::ListBmadAgents => encode(&self.list_agents()),
            ToolName::ExecuteBmadTask => {
                let args: ExecuteTaskArgs = parse_args(tool, arguments)?;
                encode(&self.execute_task(&args)?)
            }
            ToolName::GetBmadKnowledge => {
                let args: KnowledgeArgs = parse_args(tool, arguments)?;
                encode(&self.get_knowledge(&args.knowledge_type).await?)
            }
        }
    }

    /// Every agent in catalog order.
    pub fn list_agents(&self) -> AgentListing {
        let agents: Vec<AgentSummary> = self.catalog.iter().map(AgentSummary::from).collect();
        AgentListing {
            total_count: agents.len(),
            agents,
        }
    }

    /// Validate the agent and task and acknowledge the request.
    ///
    /// Nothing is run; the acknowledgement tells the client the task is
    /// queued for its own agent runtime.
    pub fn execute_task(&self, args: &ExecuteTaskArgs) -> ToolResult<TaskAcknowledgement> {
        let agent = self
            .catalog
            .get(&args.agent)
            .ok_or_else(|| ToolError::AgentNotFound(args.agent.clone()))?;

        let task = agent
            .find_task(&args.task)
            .ok_or_else(|| ToolError::TaskNotFound {
                task: args.task.clone(),
                agent: args.agent.clone(),
            })?;

        Ok(TaskAcknowledgement {
            agent: agent.name.clone(),
            task: args.task.clone(),
            task_file: task.file.clone(),
            input: args.input.clone(),
            status: TaskStatus::Queued,
            message: format!(
                "Task '{}' has been queued for execution by {} ({})",
                args.task, agent.name, agent.title
            ),
            next_steps: NEXT_STEPS.iter().map(|step| step.to_string()).collect(),
        })
    }

    pub async fn get_knowledge(&self, knowledge_type: &str) -> ToolResult<KnowledgeDocument> {
        Ok(self.knowledge.resolve(knowledge_type).await?)
    }
}

fn parse_args<T: DeserializeOwned>(tool: ToolName, arguments: &Value) -> ToolResult<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(Map::new()),
        Value::Object(_) => arguments.clone(),
        _ => {
            return Err(ToolError::InvalidArguments {
                tool,
                reason: "arguments must be an object".to_string(),
            })
        }
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
        tool,
        reason: e.to_string(),
    })
}

fn encode<T: Serialize>(payload: &T) -> ToolResult<Value> {
    serde_json::to_value(payload).map_err(|e| ToolError::Encode(e.to_string()))
}
