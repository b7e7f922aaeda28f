//! Agent-definition document parser.
//!
//! The document is a sequence of `## Title: ` sections. Everything before the
//! first section marker is ignored. Malformed sections are skipped with a
//! warning; parsing itself never fails.

use crate::catalog::models::AgentCatalog;
use crate::catalog::scanner::{ScanState, SectionScanner};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// A section needs a title plus four metadata lines.
const MIN_SECTION_LINES: usize = 5;

static SECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## Title: ").expect("section marker pattern is valid"));

/// Parse an agent-definition document into an [`AgentCatalog`].
///
/// # Example
///
/// ```
/// use bmad_core::catalog::parse;
///
/// let doc = "# Agents\n\n## Title: Analyst\n\n- Name: Mary\n- Customize: \"\"\n\
///            - Description: \"Researches\"\n- Persona: \"analyst.md\"\n";
/// let catalog = parse(doc);
/// assert_eq!(catalog.len(), 1);
/// assert!(catalog.get("mary").is_some());
/// ```
pub fn parse(document: &str) -> AgentCatalog {
    let mut catalog = AgentCatalog::new();

    for section in SECTION_MARKER.split(document).skip(1) {
        let lines: Vec<&str> = section.trim().lines().collect();
        if lines.len() < MIN_SECTION_LINES {
            debug!(
                lines = lines.len(),
                "Skipping agent section with too few lines"
            );
            continue;
        }

        let mut scanner = SectionScanner::new();
        for line in &lines {
            if scanner.feed(line) == ScanState::Done {
                break;
            }
        }

        let fields = scanner.finish();
        let title = fields.title.clone();
        match fields.into_record() {
            Ok(record) => {
                debug!(id = %record.id, title = %record.title, "Added agent");
                if let Some(previous) = catalog.insert(record) {
                    debug!(id = %previous.id, "Agent id redefined, keeping the later section");
                }
            }
            Err(missing) => {
                warn!(missing = ?missing, "Skipping agent {title} - missing required fields");
            }
        }
    }

    catalog
}
