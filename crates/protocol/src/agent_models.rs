//! Agent catalog models parsed from the agent-definition document.
//!
//! An agent-definition document is a Markdown file made of repeated
//! `## Title: ` blocks. Each block becomes one [`AgentRecord`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A task an agent can perform, declared as `- [name](file)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct TaskRef {
    /// Display name of the task.
    pub name: String,

    /// Path or identifier of the file describing the task.
    pub file: String,
}

impl TaskRef {
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// A named persona with descriptive text and an ordered list of tasks.
///
/// # Example
///
/// ```markdown
/// ## Title: Product Manager
///
/// - Name: John
/// - Customize: ""
/// - Description: "Drafts product requirements"
/// - Persona: "personas#pm"
/// - Tasks:
///   - [Create PRD](create-prd.md)
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentRecord {
    /// Catalog key derived from `name`: lowercased, spaces replaced by `_`.
    pub id: String,

    /// Section heading text following `## Title: `.
    pub title: String,

    /// Agent name exactly as declared.
    pub name: String,

    /// Customization text. May be empty but is always declared.
    pub customize: String,

    pub description: String,

    pub persona: String,

    /// Tasks in document order.
    #[serde(default)]
    pub tasks: Vec<TaskRef>,
}

impl AgentRecord {
    /// Derive a catalog id from an agent name.
    ///
    /// ```
    /// use bmad_protocol::AgentRecord;
    ///
    /// assert_eq!(AgentRecord::id_for("Alice Smith"), "alice_smith");
    /// ```
    pub fn id_for(name: &str) -> String {
        name.to_lowercase().replace(' ', "_")
    }

    /// Find a task by name, ignoring case.
    pub fn find_task(&self, name: &str) -> Option<&TaskRef> {
        let wanted = name.to_lowercase();
        self.tasks
            .iter()
            .find(|task| task.name.to_lowercase() == wanted)
    }

    /// Names of all tasks, in document order.
    pub fn task_names(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.name.clone()).collect()
    }
}

/// The public view of an agent returned by `list_bmad_agents`.
///
/// The persona and task files are intentionally absent; clients only see
/// what they need to pick an agent and a task.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub customize: String,
    pub available_tasks: Vec<String>,
}

impl From<&AgentRecord> for AgentSummary {
    fn from(record: &AgentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            customize: record.customize.clone(),
            available_tasks: record.task_names(),
        }
    }
}
