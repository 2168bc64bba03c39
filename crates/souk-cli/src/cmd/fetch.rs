use crate::output::print_json;
use anyhow::Context;
use souk_core::config::Config;
use souk_core::loader::{self, RegistrySource};
use souk_core::types::Kind;
use std::path::Path;

/// Unlike the browsing commands, fetch does not fall back to the builtin
/// catalog; an unreachable or malformed registry is reported as an error.
pub fn run(
    registry_spec: Option<&str>,
    config_path: Option<&Path>,
    out: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(config_path).context("failed to load config")?;
    let source = RegistrySource::resolve(registry_spec, &config);
    let registry = loader::fetch(&source)
        .with_context(|| format!("failed to fetch registry from {source}"))?;

    if let Some(path) = out {
        let data = serde_json::to_string_pretty(&registry)?;
        std::fs::write(path, data)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if json {
        return print_json(&serde_json::json!({
            "source": source.to_string(),
            "total": registry.total(),
            "plugins": registry.count(Kind::Plugin),
            "agents": registry.count(Kind::Agent),
            "commands": registry.count(Kind::Command),
            "hooks": registry.count(Kind::Hook),
        }));
    }

    println!(
        "Fetched {} item{} from {}",
        registry.total(),
        if registry.total() == 1 { "" } else { "s" },
        source
    );
    for &kind in Kind::all() {
        println!("  {:<9} {}", kind.plural(), registry.count(kind));
    }
    if let Some(path) = out {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
