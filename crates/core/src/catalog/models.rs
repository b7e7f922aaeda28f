//! The in-memory agent catalog.

use bmad_protocol::agent_models::AgentRecord;
use indexmap::IndexMap;

/// Mapping from agent id to [`AgentRecord`], in document order.
///
/// Built once from one agent-definition document and never mutated
/// afterwards. When two sections produce the same id the later record
/// replaces the earlier one but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentCatalog {
    agents: IndexMap<String, AgentRecord>,
}

impl AgentCatalog {
    /// An empty catalog. A server with no agents is valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its id, returning the record it replaced.
    pub(crate) fn insert(&mut self, record: AgentRecord) -> Option<AgentRecord> {
        self.agents.insert(record.id.clone(), record)
    }

    pub fn get(&self, id: &str) -> Option<&AgentRecord> {
        self.agents.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.agents.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentRecord> {
        self.agents.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(String::as_str)
    }
}

impl FromIterator<AgentRecord> for AgentCatalog {
    fn from_iter<I: IntoIterator<Item = AgentRecord>>(iter: I) -> Self {
        let mut catalog = AgentCatalog::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, description: &str) -> AgentRecord {
        AgentRecord {
            id: AgentRecord::id_for(name),
            title: format!("{name} title"),
            name: name.to_string(),
            customize: String::new(),
            description: description.to_string(),
            persona: "persona".to_string(),
            tasks: Vec::new(),
        }
    }

    #[test]
    fn test_colliding_id_replaces_in_place() {
        let catalog: AgentCatalog = vec![
            record("Wendy", "first"),
            record("Bill", "second"),
            record("wendy", "third"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["wendy", "bill"]);
        assert_eq!(catalog.get("wendy").map(|a| a.description.as_str()), Some("third"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = AgentCatalog::new();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("anyone"));
        assert!(catalog.get("anyone").is_none());
    }
}
