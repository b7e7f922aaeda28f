//! Test fixtures for agent documents and project directories.

use bmad_core::config::ServerConfig;
use std::path::Path;
use tempfile::TempDir;

/// An orchestrator document with three well-formed agents and one section
/// missing its persona.
pub const AGENT_DOCUMENT: &str = r#"# Configuration for IDE Agents

## Data Resolution

agent-root: (project-root)/bmad-agent
checklists: (agent-root)/checklists

## Title: Analyst

- Name: Mary
- Customize: ""
- Description: "Research assistant, brain storming coach, requirements gathering, project briefs."
- Persona: "analyst.md"
- Tasks:
  - [Brainstorming](In Analyst Memory Already)
  - [Deep Research Prompt Generation](create-deep-research-prompt.md)
  - [Create Project Brief](create-doc.md)

## Title: Product Manager (PM)

- Name: John
- Customize: ""
- Description: "For PRDs, project planning, PM checklists and potential replans."
- Persona: "pm.md"
- Tasks:
  - [Create PRD](create-prd.md)
  - [Correct Course](correct-course.md)

## Title: Broken Agent

- Name: Nobody
- Customize: ""
- Description: "Has no persona line."
- Tasks:
  - [Nothing](nothing.md)

## Title: Architect

- Name: Fred Van Der Berg
- Customize: "Keeps diagrams current"
- Description: "For system architecture, technical design, architecture checklists."
- Persona: "architect.md"
- Tasks:
  - [Create Architecture](create-architecture.md)
"#;

/// Ids of the agents in [`AGENT_DOCUMENT`], in document order.
#[allow(dead_code)]
pub const AGENT_IDS: [&str; 3] = ["mary", "john", "fred_van_der_berg"];

/// Create a temporary project with the agent document and a `.ai`
/// knowledge directory.
///
/// Layout:
/// - `bmad-agent/ide-bmad-orchestrator.cfg.md`
/// - `.ai/tech-stack.md`
/// - `.ai/project_context.md`
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();

    std::fs::create_dir_all(root.join("bmad-agent"))?;
    std::fs::write(root.join("bmad-agent/ide-bmad-orchestrator.cfg.md"), AGENT_DOCUMENT)?;

    std::fs::create_dir_all(root.join(".ai"))?;
    std::fs::write(root.join(".ai/tech-stack.md"), "# Tech Stack\n\nRust, tokio, serde.\n")?;
    std::fs::write(
        root.join(".ai/project_context.md"),
        "# Project Context\n\nA stdio tool server.\n",
    )?;

    Ok(temp_dir)
}

/// Server configuration pointing into a project made by
/// [`create_test_project`].
#[allow(dead_code)]
pub fn config_for(root: &Path) -> ServerConfig {
    ServerConfig::new(
        Some(root.join("bmad-agent/ide-bmad-orchestrator.cfg.md")),
        Some(root.to_path_buf()),
    )
    .expect("both paths are set")
}
