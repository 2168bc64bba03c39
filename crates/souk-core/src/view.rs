use crate::registry::{Registry, RegistryItem};
use crate::types::{CategoryFilter, Kind, SortKey};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// What the user is currently looking at: one category filter, one search
/// needle, one sort key. The needle is kept lowercased so matching never has
/// to fold case twice.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub category: CategoryFilter,
    pub sort: SortKey,
    search: String,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, needle: &str) {
        self.search = needle.to_lowercase();
    }

    pub fn push_search(&mut self, c: char) {
        self.search.extend(c.to_lowercase());
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn matches_search(&self, item: &RegistryItem) -> bool {
        self.search.is_empty() || item.search_text().contains(&self.search)
    }
}

// ---------------------------------------------------------------------------
// Filtering and sorting
// ---------------------------------------------------------------------------

/// Applies the view to one kind's items: the category gate first, then the
/// search, then the sort. Returns borrowed items; the registry itself is
/// never reordered.
///
/// Sorting is stable, so items that compare equal keep registry order.
pub fn filter_and_sort<'a>(
    items: &'a [RegistryItem],
    kind: Kind,
    view: &ViewState,
) -> Vec<&'a RegistryItem> {
    if !view.category.admits(kind) {
        return Vec::new();
    }
    let mut out: Vec<&RegistryItem> = items
        .iter()
        .filter(|item| view.matches_search(item))
        .collect();
    match view.sort {
        SortKey::None => {}
        SortKey::Name => out.sort_by_key(|item| item.name.to_lowercase()),
        SortKey::Category => {
            out.sort_by_key(|item| item.category.as_deref().unwrap_or("").to_lowercase())
        }
    }
    out
}

/// Total number of items visible under the view, across all kinds.
pub fn result_count(registry: &Registry, view: &ViewState) -> usize {
    Kind::all()
        .iter()
        .filter(|kind| view.category.admits(**kind))
        .map(|kind| {
            registry
                .items(*kind)
                .iter()
                .filter(|item| view.matches_search(item))
                .count()
        })
        .sum()
}

pub fn result_label(count: usize) -> String {
    format!("{} result{}", count, if count == 1 { "" } else { "s" })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, description: &str, tags: &[&str]) -> RegistryItem {
        RegistryItem {
            name: name.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn fixture() -> Registry {
        Registry {
            plugins: vec![
                item("observability-pack", "Metrics dashboards", &["monitoring"]),
                item("security-toolkit", "Dependency audits", &["scanning"]),
            ],
            agents: vec![
                item("code-reviewer", "Reviews diffs", &["review"]),
                item("secret-scanner", "Finds leaked keys", &[]),
                item("docs-author", "Writes documentation", &["docs"]),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn empty_search_matches_everything() {
        let registry = fixture();
        let view = ViewState::new();
        assert_eq!(
            filter_and_sort(&registry.plugins, Kind::Plugin, &view).len(),
            2
        );
        assert_eq!(result_count(&registry, &view), 5);
    }

    #[test]
    fn category_gate_empties_other_kinds() {
        let registry = fixture();
        let mut view = ViewState::new();
        view.category = CategoryFilter::Only(Kind::Agent);

        assert!(filter_and_sort(&registry.plugins, Kind::Plugin, &view).is_empty());
        assert_eq!(
            filter_and_sort(&registry.agents, Kind::Agent, &view).len(),
            3
        );
        assert_eq!(result_count(&registry, &view), 3);
    }

    #[test]
    fn search_spans_name_description_and_tags() {
        let registry = fixture();
        let mut view = ViewState::new();

        view.set_search("scan");
        let plugins = filter_and_sort(&registry.plugins, Kind::Plugin, &view);
        let agents = filter_and_sort(&registry.agents, Kind::Agent, &view);
        assert_eq!(plugins[0].name, "security-toolkit"); // via tag
        assert_eq!(agents[0].name, "secret-scanner"); // via name
        assert_eq!(result_count(&registry, &view), 2);

        view.set_search("leaked keys");
        assert_eq!(result_count(&registry, &view), 1); // via description
    }

    #[test]
    fn search_is_case_insensitive_both_ways() {
        let registry = Registry {
            commands: vec![item("Audit-Deps", "Walks the TREE", &[])],
            ..Default::default()
        };
        let mut view = ViewState::new();
        view.set_search("AUDIT");
        assert_eq!(result_count(&registry, &view), 1);
        view.set_search("tree");
        assert_eq!(result_count(&registry, &view), 1);
    }

    #[test]
    fn search_edits_keep_needle_lowercased() {
        let mut view = ViewState::new();
        view.push_search('S');
        view.push_search('c');
        view.push_search('A');
        assert_eq!(view.search(), "sca");
        view.pop_search();
        assert_eq!(view.search(), "sc");
        view.clear_search();
        assert_eq!(view.search(), "");
    }

    #[test]
    fn sort_none_keeps_registry_order() {
        let items = vec![
            item("zeta", "", &[]),
            item("alpha", "", &[]),
            item("mid", "", &[]),
        ];
        let view = ViewState::new();
        let out = filter_and_sort(&items, Kind::Command, &view);
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let items = vec![
            item("beta", "", &[]),
            item("Alpha", "", &[]),
            item("gamma", "", &[]),
        ];
        let mut view = ViewState::new();
        view.sort = SortKey::Name;
        let out = filter_and_sort(&items, Kind::Agent, &view);
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let items = vec![
            item("dup", "first", &[]),
            item("dup", "second", &[]),
            item("aaa", "", &[]),
        ];
        let mut view = ViewState::new();
        view.sort = SortKey::Name;
        let out = filter_and_sort(&items, Kind::Hook, &view);
        assert_eq!(out[0].name, "aaa");
        assert_eq!(out[1].description, "first");
        assert_eq!(out[2].description, "second");
    }

    #[test]
    fn sort_by_category_puts_missing_first() {
        let mut a = item("a", "", &[]);
        a.category = Some("tools".to_string());
        let b = item("b", "", &[]);
        let mut c = item("c", "", &[]);
        c.category = Some("ai".to_string());

        let items = vec![a, b, c];
        let mut view = ViewState::new();
        view.sort = SortKey::Category;
        let out = filter_and_sort(&items, Kind::Plugin, &view);
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let items = vec![
            item("beta", "", &[]),
            item("Alpha", "", &[]),
        ];
        let mut view = ViewState::new();
        view.sort = SortKey::Name;
        let once: Vec<String> = filter_and_sort(&items, Kind::Agent, &view)
            .iter()
            .map(|i| i.name.clone())
            .collect();
        let twice: Vec<String> = filter_and_sort(&items, Kind::Agent, &view)
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn switching_sorts_never_touches_the_input() {
        let mut b = item("beta", "", &[]);
        b.category = Some("tools".to_string());
        let mut a = item("Alpha", "", &[]);
        a.category = Some("ai".to_string());
        let items = vec![b, a];

        let mut view = ViewState::new();
        view.sort = SortKey::Name;
        let by_name: Vec<String> = filter_and_sort(&items, Kind::Agent, &view)
            .iter()
            .map(|i| i.name.clone())
            .collect();

        view.sort = SortKey::Category;
        let _ = filter_and_sort(&items, Kind::Agent, &view);

        view.sort = SortKey::Name;
        let by_name_again: Vec<String> = filter_and_sort(&items, Kind::Agent, &view)
            .iter()
            .map(|i| i.name.clone())
            .collect();

        assert_eq!(by_name, by_name_again);
        // The registry slice itself keeps its load order throughout.
        assert_eq!(items[0].name, "beta");
        assert_eq!(items[1].name, "Alpha");
    }

    #[test]
    fn result_label_pluralizes() {
        assert_eq!(result_label(0), "0 results");
        assert_eq!(result_label(1), "1 result");
        assert_eq!(result_label(2), "2 results");
    }

    #[test]
    fn search_narrows_across_kinds_to_two_results() {
        // Two plugins and three agents; a needle that leaves one of each.
        let registry = fixture();
        let mut view = ViewState::new();
        view.set_search("secur");
        assert!(result_count(&registry, &view) <= 2);

        view.set_search("s");
        let before = result_count(&registry, &view);
        view.set_search("scan");
        let after = result_count(&registry, &view);
        assert!(after < before);
        assert_eq!(after, 2);
        assert_eq!(result_label(after), "2 results");
    }

    #[test]
    fn tag_search_then_generate_emits_one_plugin_line() {
        use crate::install;
        use crate::selection::Selection;

        // A tag shared by exactly one plugin and one agent.
        let registry = Registry {
            plugins: vec![
                item("observability-pack", "Metrics dashboards", &["monitoring"]),
                item("security-toolkit", "Dependency audits", &["devsec"]),
            ],
            agents: vec![
                item("code-reviewer", "Reviews diffs", &["review"]),
                item("secret-scanner", "Finds leaked keys", &["devsec"]),
                item("docs-author", "Writes documentation", &["docs"]),
            ],
            ..Default::default()
        };
        let mut view = ViewState::new();
        view.set_search("devsec");

        assert_eq!(result_label(result_count(&registry, &view)), "2 results");
        let plugins = filter_and_sort(&registry.plugins, Kind::Plugin, &view);
        assert_eq!(plugins.len(), 1);

        let mut selection = Selection::new();
        selection.toggle(Kind::Plugin, plugins[0].name.as_str());
        assert_eq!(
            install::generate(&selection),
            "/plugin install security-toolkit"
        );
    }
}
