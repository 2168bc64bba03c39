use std::fmt;

use crate::types::Kind;

// ---------------------------------------------------------------------------
// SelectionKey
// ---------------------------------------------------------------------------

/// Composite identity of a selected item: the kind plus the item id,
/// written `kind:id`. Ids are only unique within a kind, so the kind is
/// part of the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionKey {
    pub kind: Kind,
    pub id: String,
}

impl SelectionKey {
    pub fn new(kind: Kind, id: impl Into<String>) -> Self {
        SelectionKey {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl std::str::FromStr for SelectionKey {
    type Err = crate::error::SoukError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::error::SoukError::InvalidSelectionKey(s.to_string());
        let (kind, id) = s.split_once(':').ok_or_else(invalid)?;
        if id.is_empty() {
            return Err(invalid());
        }
        let kind = kind.parse::<Kind>().map_err(|_| invalid())?;
        Ok(SelectionKey::new(kind, id))
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The set of items the user has picked, in the order they were picked.
/// Toggling is the only way in or out; there is no direct insert.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    keys: Vec<SelectionKey>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Adds the key if absent, removes it if present.
    pub fn toggle(&mut self, kind: Kind, id: impl Into<String>) {
        let id = id.into();
        match self.position(kind, &id) {
            Some(i) => {
                self.keys.remove(i);
            }
            None => self.keys.push(SelectionKey::new(kind, id)),
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, kind: Kind, id: &str) -> bool {
        self.position(kind, id).is_some()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All keys in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectionKey> {
        self.keys.iter()
    }

    /// Ids of one kind, in insertion order.
    pub fn ids_for(&self, kind: Kind) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter(move |k| k.kind == kind)
            .map(|k| k.id.as_str())
    }

    /// The key at the given insertion-order position, if any.
    pub fn get(&self, index: usize) -> Option<&SelectionKey> {
        self.keys.get(index)
    }

    fn position(&self, kind: Kind, id: &str) -> Option<usize> {
        self.keys.iter().position(|k| k.kind == kind && k.id == id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = Selection::new();
        sel.toggle(Kind::Plugin, "observability-pack");
        assert!(sel.contains(Kind::Plugin, "observability-pack"));
        assert_eq!(sel.len(), 1);

        sel.toggle(Kind::Plugin, "observability-pack");
        assert!(!sel.contains(Kind::Plugin, "observability-pack"));
        assert!(sel.is_empty());
    }

    #[test]
    fn same_id_under_different_kinds_are_distinct() {
        let mut sel = Selection::new();
        sel.toggle(Kind::Agent, "linter");
        sel.toggle(Kind::Command, "linter");
        assert_eq!(sel.len(), 2);

        sel.toggle(Kind::Agent, "linter");
        assert!(!sel.contains(Kind::Agent, "linter"));
        assert!(sel.contains(Kind::Command, "linter"));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut sel = Selection::new();
        sel.toggle(Kind::Hook, "secret-scan");
        sel.toggle(Kind::Plugin, "web-dev-suite");
        sel.toggle(Kind::Agent, "test-writer");

        let keys: Vec<String> = sel.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            keys,
            vec!["hook:secret-scan", "plugin:web-dev-suite", "agent:test-writer"]
        );
    }

    #[test]
    fn ids_for_filters_by_kind_in_order() {
        let mut sel = Selection::new();
        sel.toggle(Kind::Agent, "code-reviewer");
        sel.toggle(Kind::Plugin, "security-toolkit");
        sel.toggle(Kind::Agent, "docs-author");

        let agents: Vec<&str> = sel.ids_for(Kind::Agent).collect();
        assert_eq!(agents, vec!["code-reviewer", "docs-author"]);
        assert_eq!(sel.ids_for(Kind::Hook).count(), 0);
    }

    #[test]
    fn clear_empties_everything() {
        let mut sel = Selection::new();
        sel.toggle(Kind::Plugin, "a");
        sel.toggle(Kind::Hook, "b");
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.iter().count(), 0);
    }

    #[test]
    fn key_display_and_parse_roundtrip() {
        use std::str::FromStr;
        let key = SelectionKey::new(Kind::Command, "audit-deps");
        assert_eq!(key.to_string(), "command:audit-deps");
        assert_eq!(SelectionKey::from_str("command:audit-deps").unwrap(), key);
    }

    #[test]
    fn key_parse_keeps_colons_in_id() {
        use std::str::FromStr;
        let key = SelectionKey::from_str("agent:ns:tool").unwrap();
        assert_eq!(key.kind, Kind::Agent);
        assert_eq!(key.id, "ns:tool");
    }

    #[test]
    fn key_parse_rejects_bad_input() {
        use std::str::FromStr;
        assert!(SelectionKey::from_str("no-colon").is_err());
        assert!(SelectionKey::from_str("widget:x").is_err());
        assert!(SelectionKey::from_str("plugin:").is_err());
        assert!(SelectionKey::from_str("").is_err());
    }
}
