use crate::cmd::load_registry;
use crate::output::{clip, print_json, print_table};
use souk_core::types::{CategoryFilter, Kind, SortKey};
use souk_core::view::{self, ViewState};
use std::path::Path;

pub fn run(
    registry_spec: Option<&str>,
    config_path: Option<&Path>,
    kind: Option<&str>,
    search: Option<&str>,
    sort: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let (registry, _source, _config) = load_registry(registry_spec, config_path)?;

    let mut view = ViewState::new();
    if let Some(kind) = kind {
        view.category = kind.parse::<CategoryFilter>()?;
    }
    if let Some(needle) = search {
        view.set_search(needle);
    }
    if let Some(sort) = sort {
        view.sort = sort.parse::<SortKey>()?;
    }

    let count = view::result_count(&registry, &view);

    if json {
        let pick = |kind: Kind| view::filter_and_sort(registry.items(kind), kind, &view);
        let out = serde_json::json!({
            "plugins": pick(Kind::Plugin),
            "agents": pick(Kind::Agent),
            "commands": pick(Kind::Command),
            "hooks": pick(Kind::Hook),
            "count": count,
        });
        return print_json(&out);
    }

    if count == 0 {
        println!("No matching items.");
        return Ok(());
    }

    let mut first = true;
    for &kind in Kind::all() {
        let items = view::filter_and_sort(registry.items(kind), kind, &view);
        if items.is_empty() {
            continue;
        }
        if !first {
            println!();
        }
        first = false;

        println!("{} ({})", kind.title(), items.len());
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    item.category.clone().unwrap_or_default(),
                    item.tag_line(),
                    clip(&item.description),
                ]
            })
            .collect();
        print_table(&["NAME", "CATEGORY", "TAGS", "DESCRIPTION"], &rows);
    }

    println!();
    println!("{}", view::result_label(count));
    Ok(())
}
