use crate::cmd::load_registry;
use crate::tui;
use std::path::Path;

pub fn run(registry_spec: Option<&str>, config_path: Option<&Path>) -> anyhow::Result<()> {
    let (registry, source, config) = load_registry(registry_spec, config_path)?;
    tui::run(registry, source.to_string(), &config)
}
