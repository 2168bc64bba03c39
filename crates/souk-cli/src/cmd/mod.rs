pub mod browse;
pub mod fetch;
pub mod generate;
pub mod list;
pub mod show;

use anyhow::Context;
use souk_core::config::Config;
use souk_core::loader::{self, RegistrySource};
use souk_core::registry::Registry;
use std::path::Path;

/// Shared front half of every registry-reading command: load the config,
/// settle on a source, and load the registry with builtin fallback.
pub fn load_registry(
    registry_spec: Option<&str>,
    config_path: Option<&Path>,
) -> anyhow::Result<(Registry, RegistrySource, Config)> {
    let config = Config::load(config_path).context("failed to load config")?;
    let source = RegistrySource::resolve(registry_spec, &config);
    let registry = loader::load(&source);
    Ok((registry, source, config))
}
