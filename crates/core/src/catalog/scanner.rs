//! Line scanner for a single `## Title: ` section.
//!
//! The scanner is a small state machine fed one line at a time:
//!
//! ```text
//! Title --(first line)--> Metadata --("- Tasks:")--> Tasks --(dedent)--> Done
//! ```
//!
//! - `Title`: the first line is the section title.
//! - `Metadata`: labelled lines fill in name, customize, description and
//!   persona. Unrecognised lines are ignored.
//! - `Tasks`: indented `- [name](file)` lines become task references.
//!   Blank lines and indented lines that do not match are ignored.
//! - `Done`: reached on the first non-empty line that is not indented.
//!   Further input is ignored.

use bmad_protocol::agent_models::{AgentRecord, TaskRef};
use regex::Regex;
use std::sync::LazyLock;

const NAME_PREFIX: &str = "- Name: ";
const CUSTOMIZE_PREFIX: &str = "- Customize: \"";
const DESCRIPTION_PREFIX: &str = "- Description: \"";
const PERSONA_PREFIX: &str = "- Persona: \"";
const TASKS_MARKER: &str = "- Tasks:";

static TASK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[(.+?)\]\((.+?)\)").expect("task line pattern is valid"));

/// Where the scanner is within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Title,
    Metadata,
    Tasks,
    Done,
}

/// Raw values collected from one section, before validation.
///
/// `customize` distinguishes a declared empty string (`Some("")`) from a
/// missing line (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFields {
    pub title: String,
    pub name: Option<String>,
    pub customize: Option<String>,
    pub description: Option<String>,
    pub persona: Option<String>,
    pub tasks: Vec<TaskRef>,
}

impl SectionFields {
    /// Names of required fields that are missing or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.as_deref().is_none_or(str::is_empty) {
            missing.push("name");
        }
        if self.customize.is_none() {
            missing.push("customize");
        }
        if self.description.as_deref().is_none_or(str::is_empty) {
            missing.push("description");
        }
        if self.persona.as_deref().is_none_or(str::is_empty) {
            missing.push("persona");
        }
        missing
    }

    /// Build a record, or return the list of missing fields.
    pub fn into_record(self) -> Result<AgentRecord, Vec<&'static str>> {
        let missing = self.missing_fields();
        match (self.name, self.customize, self.description, self.persona) {
            (Some(name), Some(customize), Some(description), Some(persona))
                if missing.is_empty() =>
            {
                Ok(AgentRecord {
                    id: AgentRecord::id_for(&name),
                    title: self.title,
                    name,
                    customize,
                    description,
                    persona,
                    tasks: self.tasks,
                })
            }
            _ => Err(missing),
        }
    }
}

/// Incremental scanner over the lines of one section.
#[derive(Debug, Clone)]
pub struct SectionScanner {
    state: ScanState,
    fields: SectionFields,
}

impl Default for SectionScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionScanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Title,
            fields: SectionFields::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Feed the next raw line and return the resulting state.
    pub fn feed(&mut self, line: &str) -> ScanState {
        self.state = match self.state {
            ScanState::Title => {
                self.fields.title = line.trim().to_string();
                ScanState::Metadata
            }
            ScanState::Metadata => self.scan_metadata(line.trim()),
            ScanState::Tasks => self.scan_task(line),
            ScanState::Done => ScanState::Done,
        };
        self.state
    }

    /// Consume the scanner and return what it collected.
    pub fn finish(self) -> SectionFields {
        self.fields
    }

    fn scan_metadata(&mut self, line: &str) -> ScanState {
        if let Some(value) = line.strip_prefix(NAME_PREFIX) {
            self.fields.name = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(CUSTOMIZE_PREFIX) {
            self.fields.customize = Some(unquote(value));
        } else if let Some(value) = line.strip_prefix(DESCRIPTION_PREFIX) {
            self.fields.description = Some(unquote(value));
        } else if let Some(value) = line.strip_prefix(PERSONA_PREFIX) {
            self.fields.persona = Some(unquote(value));
        } else if line.starts_with(TASKS_MARKER) {
            return ScanState::Tasks;
        }
        ScanState::Metadata
    }

    fn scan_task(&mut self, line: &str) -> ScanState {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ScanState::Tasks;
        }
        if !line.starts_with(char::is_whitespace) {
            return ScanState::Done;
        }
        if let Some(captures) = TASK_LINE.captures(trimmed) {
            self.fields
                .tasks
                .push(TaskRef::new(&captures[1], &captures[2]));
        }
        ScanState::Tasks
    }
}

/// Strip the closing quote(s). A value without one is kept as-is.
fn unquote(value: &str) -> String {
    value.trim_end_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(lines: &[&str]) -> (ScanState, SectionFields) {
        let mut scanner = SectionScanner::new();
        for line in lines {
            scanner.feed(line);
        }
        (scanner.state(), scanner.finish())
    }

    #[test]
    fn test_first_line_is_title() {
        let mut scanner = SectionScanner::new();
        assert_eq!(scanner.state(), ScanState::Title);
        assert_eq!(scanner.feed("  Product Owner  "), ScanState::Metadata);
        assert_eq!(scanner.finish().title, "Product Owner");
    }

    #[test]
    fn test_metadata_fields() {
        let (state, fields) = scan(&[
            "Analyst",
            "",
            "- Name: Mary ",
            "- Customize: \"\"",
            "- Description: \"Researches the market\"",
            "- Persona: \"personas#analyst\"",
        ]);

        assert_eq!(state, ScanState::Metadata);
        assert_eq!(fields.name.as_deref(), Some("Mary"));
        assert_eq!(fields.customize.as_deref(), Some(""));
        assert_eq!(fields.description.as_deref(), Some("Researches the market"));
        assert_eq!(fields.persona.as_deref(), Some("personas#analyst"));
        assert!(fields.missing_fields().is_empty());
    }

    #[test]
    fn test_unterminated_quote_keeps_raw_value() {
        let (_, fields) = scan(&["T", "- Description: \"no closing quote"]);
        assert_eq!(fields.description.as_deref(), Some("no closing quote"));
    }

    #[test]
    fn test_tasks_marker_switches_state() {
        let mut scanner = SectionScanner::new();
        scanner.feed("T");
        assert_eq!(scanner.feed("- Tasks:"), ScanState::Tasks);
    }

    #[test]
    fn test_metadata_after_tasks_marker_is_not_read() {
        let (_, fields) = scan(&["T", "- Tasks:", "  - Persona: \"late\""]);
        assert!(fields.persona.is_none());
        assert!(fields.tasks.is_empty());
    }

    #[test]
    fn test_task_lines_collected_in_order() {
        let (state, fields) = scan(&[
            "T",
            "- Tasks:",
            "  - [Write Stories](stories.md)",
            "  - not a task link",
            "",
            "    - [Review](review.md)",
        ]);

        assert_eq!(state, ScanState::Tasks);
        assert_eq!(
            fields.tasks,
            vec![
                TaskRef::new("Write Stories", "stories.md"),
                TaskRef::new("Review", "review.md"),
            ]
        );
    }

    #[test]
    fn test_dedent_ends_task_list() {
        let (state, fields) = scan(&[
            "T",
            "- Tasks:",
            "  - [One](one.md)",
            "Unrelated paragraph",
            "  - [Two](two.md)",
        ]);

        assert_eq!(state, ScanState::Done);
        assert_eq!(fields.tasks, vec![TaskRef::new("One", "one.md")]);
    }

    #[test]
    fn test_unindented_task_link_ends_task_list() {
        let (state, fields) = scan(&["T", "- Tasks:", "- [One](one.md)"]);
        assert_eq!(state, ScanState::Done);
        assert!(fields.tasks.is_empty());
    }

    #[test]
    fn test_tab_indentation_counts_as_indented() {
        let (_, fields) = scan(&["T", "- Tasks:", "\t- [Tabbed](tab.md)"]);
        assert_eq!(fields.tasks, vec![TaskRef::new("Tabbed", "tab.md")]);
    }

    #[test]
    fn test_missing_fields_reported() {
        let (_, fields) = scan(&["T", "- Name: Bob", "- Description: \"D\""]);
        assert_eq!(fields.missing_fields(), vec!["customize", "persona"]);
        assert_eq!(fields.into_record(), Err(vec!["customize", "persona"]));
    }

    #[test]
    fn test_empty_description_is_missing() {
        let (_, fields) = scan(&[
            "T",
            "- Name: Bob",
            "- Customize: \"\"",
            "- Description: \"\"",
            "- Persona: \"P\"",
        ]);
        assert_eq!(fields.missing_fields(), vec!["description"]);
    }

    #[test]
    fn test_into_record_derives_id() {
        let (_, fields) = scan(&[
            "Architect",
            "- Name: Alice Smith",
            "- Customize: \"Be terse\"",
            "- Description: \"D\"",
            "- Persona: \"P\"",
        ]);
        let record = fields.into_record().expect("record");
        assert_eq!(record.id, "alice_smith");
        assert_eq!(record.title, "Architect");
        assert_eq!(record.customize, "Be terse");
    }
}
