//! The static tool registry.
//!
//! The registry does not depend on the loaded catalog: the same three tools
//! are advertised whether or not any agents were parsed.

use bmad_protocol::tool_models::{InputSchema, PropertySchema, ToolDescriptor, ToolName};

/// Descriptor for a single tool.
pub fn descriptor(tool: ToolName) -> ToolDescriptor {
    let (description, input_schema) = match tool {
        ToolName::ListBmadAgents => (
            "List all available BMAD agents and their capabilities",
            InputSchema::empty(),
        ),
        ToolName::ExecuteBmadTask => (
            "Execute a specific task with a BMAD agent",
            InputSchema::empty()
                .with_required(
                    "agent",
                    PropertySchema::string("Agent name (e.g., 'wendy', 'bill', 'timmy')"),
                )
                .with_required("task", PropertySchema::string("Task to execute"))
                .with_required("input", PropertySchema::string("Input/prompt for the task")),
        ),
        ToolName::GetBmadKnowledge => (
            "Access BMAD project knowledge from .ai directory",
            InputSchema::empty().with_required(
                "knowledge_type",
                PropertySchema::string(
                    "Type of knowledge (project-context, tech-stack, data-models, etc.)",
                ),
            ),
        ),
    };

    ToolDescriptor {
        name: tool.as_str().to_string(),
        description: description.to_string(),
        input_schema,
    }
}

/// All tools: agent listing, task execution, knowledge lookup.
pub fn list() -> Vec<ToolDescriptor> {
    ToolName::ALL.into_iter().map(descriptor).collect()
}
