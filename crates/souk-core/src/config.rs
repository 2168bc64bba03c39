use crate::error::{Result, SoukError};
use crate::types::SortKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".souk";
pub const CONFIG_FILE: &str = "config.yaml";

// ---------------------------------------------------------------------------
// RegistryConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// URL or file path of the registry to browse. Overridden by the
    /// `--registry` flag and the `SOUK_REGISTRY` environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Sort applied when the browser opens.
    #[serde(default)]
    pub sort: SortKey,
    /// Event poll interval for the browser, in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    200
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            tick_ms: default_tick_ms(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            registry: RegistryConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Default location: `~/.souk/config.yaml`.
    pub fn default_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or(SoukError::HomeNotFound)?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the config file. An explicit path must exist and parse; the
    /// default path is allowed to be absent, in which case defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Self::default_path()?;
                if !p.exists() {
                    return Ok(Config::default());
                }
                p
            }
        };
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.version, 1);
        assert!(cfg.registry.source.is_none());
        assert_eq!(cfg.ui.sort, SortKey::None);
        assert_eq!(cfg.ui.tick_ms, 200);
    }

    #[test]
    fn minimal_yaml_backward_compat() {
        // A config carrying only a version must still deserialize.
        let cfg: Config = serde_yaml::from_str("version: 1\n").unwrap();
        assert!(cfg.registry.source.is_none());
        assert_eq!(cfg.ui.sort, SortKey::None);
    }

    #[test]
    fn registry_source_roundtrip() {
        let yaml = "registry:\n  source: https://example.com/registry.json\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            cfg.registry.source.as_deref(),
            Some("https://example.com/registry.json")
        );

        let out = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed.registry.source, cfg.registry.source);
    }

    #[test]
    fn absent_source_is_not_serialized() {
        let out = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(!out.contains("source"));
    }

    #[test]
    fn ui_sort_parses_sort_keys() {
        let cfg: Config = serde_yaml::from_str("ui:\n  sort: name\n").unwrap();
        assert_eq!(cfg.ui.sort, SortKey::Name);
        let cfg: Config = serde_yaml::from_str("ui:\n  sort: category\n").unwrap();
        assert_eq!(cfg.ui.sort, SortKey::Category);
        assert!(serde_yaml::from_str::<Config>("ui:\n  sort: stars\n").is_err());
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"version: 1\nui:\n  sort: name\n  tick_ms: 50\n")
            .unwrap();

        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg.ui.sort, SortKey::Name);
        assert_eq!(cfg.ui.tick_ms, 50);
    }

    #[test]
    fn load_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn load_explicit_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "ui: [not, a, mapping]").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn default_path_is_under_home() {
        match Config::default_path() {
            Ok(p) => assert!(p.ends_with(Path::new(CONFIG_DIR).join(CONFIG_FILE))),
            Err(e) => assert!(matches!(e, SoukError::HomeNotFound)),
        }
    }
}
