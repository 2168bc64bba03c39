use crate::cmd::load_registry;
use crate::output::print_json;
use souk_core::install;
use souk_core::types::Kind;
use std::path::Path;

pub fn run(
    registry_spec: Option<&str>,
    config_path: Option<&Path>,
    kind: &str,
    id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let (registry, source, _config) = load_registry(registry_spec, config_path)?;
    let kind = kind.parse::<Kind>()?;
    let item = registry.get(kind, id)?;

    if json {
        return print_json(item);
    }

    println!("{} {}", item.display_icon(kind), item.name);
    println!("Kind:        {kind}");
    if let Some(category) = &item.category {
        println!("Category:    {category}");
    }
    if !item.description.is_empty() {
        println!("Description: {}", item.description);
    }
    if !item.tags.is_empty() {
        println!("Tags:        {}", item.tags.join(", "));
    }
    if let Some(components) = &item.components {
        println!("Bundles:     {}", components.summary());
    }
    println!("Source:      {source}");
    println!();
    println!("Install:     {}", install::install_line(kind, id));
    Ok(())
}
