use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Plugin,
    Agent,
    Command,
    Hook,
}

impl Kind {
    /// All kinds in display and generation order.
    pub fn all() -> &'static [Kind] {
        &[Kind::Plugin, Kind::Agent, Kind::Command, Kind::Hook]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Plugin => "plugin",
            Kind::Agent => "agent",
            Kind::Command => "command",
            Kind::Hook => "hook",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Kind::Plugin => "plugins",
            Kind::Agent => "agents",
            Kind::Command => "commands",
            Kind::Hook => "hooks",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Kind::Plugin => "Plugins",
            Kind::Agent => "Agents",
            Kind::Command => "Commands",
            Kind::Hook => "Hooks",
        }
    }

    /// Fallback glyph for items that do not carry their own icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Plugin => "📦",
            Kind::Agent => "🤖",
            Kind::Command => "⚡",
            Kind::Hook => "🪝",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = crate::error::SoukError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plugin" | "plugins" => Ok(Kind::Plugin),
            "agent" | "agents" => Ok(Kind::Agent),
            "command" | "commands" => Ok(Kind::Command),
            "hook" | "hooks" => Ok(Kind::Hook),
            _ => Err(crate::error::SoukError::UnknownKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// CategoryFilter
// ---------------------------------------------------------------------------

/// The kind gate: either every kind passes, or exactly one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Kind),
}

impl CategoryFilter {
    /// All filters in the order the category tabs cycle through.
    pub fn all() -> &'static [CategoryFilter] {
        &[
            CategoryFilter::All,
            CategoryFilter::Only(Kind::Plugin),
            CategoryFilter::Only(Kind::Agent),
            CategoryFilter::Only(Kind::Command),
            CategoryFilter::Only(Kind::Hook),
        ]
    }

    pub fn admits(self, kind: Kind) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(k) => k == kind,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(k) => k.plural(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(k) => k.title(),
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = crate::error::SoukError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Kind>()
            .map(CategoryFilter::Only)
            .map_err(|_| crate::error::SoukError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep registry order.
    #[default]
    None,
    Name,
    Category,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Name => "name",
            SortKey::Category => "category",
        }
    }

    /// The next key in the cycle the sort toggle walks through.
    pub fn next(self) -> SortKey {
        match self {
            SortKey::None => SortKey::Name,
            SortKey::Name => SortKey::Category,
            SortKey::Category => SortKey::None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = crate::error::SoukError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SortKey::None),
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            _ => Err(crate::error::SoukError::UnknownSortKey(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrip() {
        use std::str::FromStr;
        for kind in Kind::all() {
            let parsed = Kind::from_str(kind.as_str()).unwrap();
            assert_eq!(*kind, parsed);
            let parsed = Kind::from_str(kind.plural()).unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn kind_order_is_generation_order() {
        assert_eq!(
            Kind::all(),
            &[Kind::Plugin, Kind::Agent, Kind::Command, Kind::Hook]
        );
    }

    #[test]
    fn kind_rejects_unknown() {
        assert!("widget".parse::<Kind>().is_err());
        assert!("".parse::<Kind>().is_err());
    }

    #[test]
    fn category_filter_admits() {
        assert!(CategoryFilter::All.admits(Kind::Plugin));
        assert!(CategoryFilter::All.admits(Kind::Hook));
        assert!(CategoryFilter::Only(Kind::Agent).admits(Kind::Agent));
        assert!(!CategoryFilter::Only(Kind::Agent).admits(Kind::Command));
    }

    #[test]
    fn category_filter_parses_tab_names() {
        use std::str::FromStr;
        assert_eq!(CategoryFilter::from_str("all").unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_str("plugins").unwrap(),
            CategoryFilter::Only(Kind::Plugin)
        );
        assert_eq!(
            CategoryFilter::from_str("hooks").unwrap(),
            CategoryFilter::Only(Kind::Hook)
        );
        assert!(CategoryFilter::from_str("everything").is_err());
    }

    #[test]
    fn sort_key_cycle_returns_home() {
        let start = SortKey::None;
        assert_eq!(start.next(), SortKey::Name);
        assert_eq!(start.next().next(), SortKey::Category);
        assert_eq!(start.next().next().next(), SortKey::None);
    }

    #[test]
    fn sort_key_default_keeps_registry_order() {
        assert_eq!(SortKey::default(), SortKey::None);
    }

    #[test]
    fn sort_key_roundtrip() {
        use std::str::FromStr;
        for key in [SortKey::None, SortKey::Name, SortKey::Category] {
            assert_eq!(SortKey::from_str(key.as_str()).unwrap(), key);
        }
        assert!(SortKey::from_str("date").is_err());
    }
}
