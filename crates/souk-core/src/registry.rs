use serde::{Deserialize, Serialize};

use crate::error::{Result, SoukError};
use crate::types::Kind;

/// Registry JSON bundled into the binary, used when no other source loads.
const BUILTIN_REGISTRY: &str = include_str!("../assets/builtin_registry.json");

// ---------------------------------------------------------------------------
// RegistryItem
// ---------------------------------------------------------------------------

/// Per-plugin counts of the components it bundles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    #[serde(default)]
    pub agents: u32,
    #[serde(default)]
    pub commands: u32,
    #[serde(default)]
    pub hooks: u32,
}

impl ComponentSummary {
    pub fn summary(&self) -> String {
        fn part(n: u32, noun: &str) -> String {
            format!("{} {}{}", n, noun, if n == 1 { "" } else { "s" })
        }
        format!(
            "{} · {} · {}",
            part(self.agents, "agent"),
            part(self.commands, "command"),
            part(self.hooks, "hook")
        )
    }
}

/// One entry in the registry. The `name` doubles as the install identifier.
///
/// Every field except `name` is optional in the source JSON; missing fields
/// deserialize to empty values rather than failing the whole registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryItem {
    #[serde(default, alias = "id")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentSummary>,
}

impl RegistryItem {
    /// Lowercased haystack the search matches against: name, description,
    /// and tags joined by single spaces.
    pub fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.name, self.description);
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }

    /// The item's own icon, or the kind's fallback glyph.
    pub fn display_icon(&self, kind: Kind) -> &str {
        self.icon.as_deref().unwrap_or(kind.glyph())
    }

    /// Up to the first three tags, rendered as `#tag` markers.
    pub fn tag_line(&self) -> String {
        self.tags
            .iter()
            .take(3)
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// The full marketplace catalog, one array per kind. A registry missing any
/// of the four arrays (or all of them) is still valid; absent arrays are
/// simply empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub plugins: Vec<RegistryItem>,
    #[serde(default)]
    pub agents: Vec<RegistryItem>,
    #[serde(default)]
    pub commands: Vec<RegistryItem>,
    #[serde(default)]
    pub hooks: Vec<RegistryItem>,
}

impl Registry {
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// The compiled-in fallback catalog.
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_REGISTRY).unwrap_or_default()
    }

    /// Items of one kind, in registry order.
    pub fn items(&self, kind: Kind) -> &[RegistryItem] {
        match kind {
            Kind::Plugin => &self.plugins,
            Kind::Agent => &self.agents,
            Kind::Command => &self.commands,
            Kind::Hook => &self.hooks,
        }
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.items(kind).len()
    }

    pub fn total(&self) -> usize {
        Kind::all().iter().map(|k| self.count(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn get(&self, kind: Kind, id: &str) -> Result<&RegistryItem> {
        self.items(kind)
            .iter()
            .find(|item| item.name == id)
            .ok_or_else(|| SoukError::ItemNotFound {
                kind,
                id: id.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
