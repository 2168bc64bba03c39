use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::registry::Registry;

/// Filename looked for in the working directory when nothing else names a source.
pub const DEFAULT_REGISTRY_FILE: &str = "registry.json";

// ---------------------------------------------------------------------------
// RegistrySource
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    Url(String),
    Path(PathBuf),
    Builtin,
}

impl RegistrySource {
    /// A URL if the value looks like one, otherwise a file path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            RegistrySource::Url(raw.to_string())
        } else {
            RegistrySource::Path(PathBuf::from(raw))
        }
    }

    /// Picks the source by precedence: an explicit flag or environment
    /// value, then the config file, then `registry.json` in the working
    /// directory, then the compiled-in catalog.
    pub fn resolve(explicit: Option<&str>, config: &Config) -> Self {
        Self::resolve_in(Path::new(""), explicit, config)
    }

    fn resolve_in(dir: &Path, explicit: Option<&str>, config: &Config) -> Self {
        if let Some(raw) = explicit {
            return RegistrySource::parse(raw);
        }
        if let Some(raw) = config.registry.source.as_deref() {
            return RegistrySource::parse(raw);
        }
        let default = dir.join(DEFAULT_REGISTRY_FILE);
        if default.exists() {
            return RegistrySource::Path(default);
        }
        RegistrySource::Builtin
    }
}

impl fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrySource::Url(url) => f.write_str(url),
            RegistrySource::Path(path) => write!(f, "{}", path.display()),
            RegistrySource::Builtin => f.write_str("builtin"),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Fetches and parses the registry from the source. Unlike [`load`], this
/// reports failures instead of falling back.
pub fn fetch(source: &RegistrySource) -> Result<Registry> {
    match source {
        RegistrySource::Url(url) => {
            let body = ureq::get(url).call().map_err(Box::new)?.into_string()?;
            Registry::from_json(&body)
        }
        RegistrySource::Path(path) => {
            let data = std::fs::read_to_string(path)?;
            Registry::from_json(&data)
        }
        RegistrySource::Builtin => Ok(Registry::builtin()),
    }
}

/// Loads the registry for browsing. Any failure, from an unreachable host to
/// malformed JSON, drops to the compiled-in catalog; the cause goes to the
/// log and nowhere else, so callers always get a usable registry.
pub fn load(source: &RegistrySource) -> Registry {
    match fetch(source) {
        Ok(registry) => {
            tracing::debug!(source = %source, items = registry.total(), "registry loaded");
            registry
        }
        Err(err) => {
            tracing::warn!(
                source = %source,
                error = %err,
                "registry load failed, using builtin catalog"
            );
            Registry::builtin()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
