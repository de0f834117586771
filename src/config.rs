mod defaults;

pub use defaults::ARBITRARY_VARIANT_ORDER;

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use toml_scaffold::TomlScaffold;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "tailwind-sorter.toml";

/// Resolved sorter configuration.
///
/// Built once at startup and shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Utility prefixes, earlier entries sort first
    pub class_order: Vec<String>,
    /// Variant keyword to priority
    pub variant_order: HashMap<String, u32>,
    /// File extensions (`.html`) or glob patterns selecting files to scan
    pub file_patterns: Vec<String>,
    /// Attribute names whose quoted values hold class lists
    pub class_attributes: Vec<String>,
}

/// Root of the TOML file, `[tool.tailwind_sorter]`
#[derive(Deserialize, Serialize, Debug, Default, JsonSchema, TomlScaffold)]
pub struct TomlRoot {
    /// Tool sections
    #[serde(default)]
    pub tool: ToolSelection,
}

#[derive(Deserialize, Serialize, Debug, Default, JsonSchema, TomlScaffold)]
pub struct ToolSelection {
    /// Tailwind class sorter settings
    #[serde(default)]
    pub tailwind_sorter: UserConfig,
}

/// User-facing settings. Non-empty lists replace the built-in defaults.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema, TomlScaffold)]
pub struct UserConfig {
    /// File extensions (e.g. ".html") or glob patterns (e.g. "templates/**/*.jinja") to scan
    #[serde(default)]
    pub file_patterns: Vec<String>,
    /// Attribute names holding class lists (e.g. "class", "className")
    #[serde(default)]
    pub class_attributes: Vec<String>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            file_patterns: to_strings(defaults::DEFAULT_FILE_PATTERNS),
            class_attributes: to_strings(defaults::DEFAULT_CLASS_ATTRIBUTES),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            class_order: to_strings(defaults::CLASS_ORDER),
            variant_order: defaults::VARIANT_ORDER
                .iter()
                .map(|(name, order)| (name.to_string(), *order))
                .collect(),
            file_patterns: to_strings(defaults::DEFAULT_FILE_PATTERNS),
            class_attributes: to_strings(defaults::DEFAULT_CLASS_ATTRIBUTES),
        }
    }
}

impl Config {
    /// Load the config, falling back to `tailwind-sorter.toml` in the working
    /// directory and then to the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.is_file().then_some(default)
            }
        };

        let Some(path) = path else {
            debug!("No config file, using defaults");
            return Ok(config);
        };

        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| e.to_string());
        if let Err(message) = content.and_then(|content| config.merge_str(&content)) {
            return Err(Error::ConfigFile { path, message });
        }

        Ok(config)
    }

    fn merge_str(&mut self, content: &str) -> std::result::Result<(), String> {
        let root: TomlRoot = toml::from_str(content).map_err(|e| e.to_string())?;
        self.merge(root.tool.tailwind_sorter);
        Ok(())
    }

    fn merge(&mut self, user: UserConfig) {
        if !user.file_patterns.is_empty() {
            self.file_patterns = user.file_patterns;
        }
        if !user.class_attributes.is_empty() {
            self.class_attributes = user.class_attributes;
        }
    }

    /// Render a commented config file holding the default user settings
    pub fn scaffold() -> anyhow::Result<String> {
        TomlRoot::default()
            .to_scaffold()
            .map_err(|e| anyhow::anyhow!("failed to render config scaffold: {}", e))
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let config = Config::default();
        assert_eq!(config.class_order[0], "skeleton");
        assert_eq!(config.variant_order["sm"], 0);
        assert_eq!(config.variant_order["hover"], 40);
        assert_eq!(config.variant_order["active"], 44);
        assert_eq!(config.file_patterns, vec![".html"]);
        assert_eq!(config.class_attributes, vec!["class"]);
    }

    #[test]
    fn test_merge_replaces_non_empty_lists() {
        let mut config = Config::default();
        config
            .merge_str(
                r#"
[tool.tailwind_sorter]
file_patterns = [".html", ".jsx"]
"#,
            )
            .unwrap();
        assert_eq!(config.file_patterns, vec![".html", ".jsx"]);
        assert_eq!(config.class_attributes, vec!["class"]);
    }

    #[test]
    fn test_merge_empty_file_keeps_defaults() {
        let mut config = Config::default();
        config.merge_str("").unwrap();
        assert_eq!(config.file_patterns, vec![".html"]);
        assert_eq!(config.class_attributes, vec!["class"]);
    }

    #[test]
    fn test_merge_invalid_toml() {
        let mut config = Config::default();
        assert!(config.merge_str("[tool.tailwind_sorter\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[tool.tailwind_sorter]\nclass_attributes = [\"class\", \"className\"]\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.class_attributes, vec!["class", "className"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = Config::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, Error::ConfigFile { .. }));
    }
}
