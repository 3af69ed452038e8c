use pagecraft_document::Resolver;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Component names registered with the editor
    #[serde(default = "default_components")]
    pub components: Vec<String>,

    /// Extension of stored content files when scanning directories
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_components() -> Vec<String> {
    vec!["Container".to_string(), "Text".to_string()]
}

fn default_extension() -> String {
    "json".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path(cwd: &Path) -> PathBuf {
        cwd.join(DEFAULT_CONFIG_NAME)
    }

    /// Resolver for the configured components plus any extras from the command line
    pub fn resolver(&self, extra: &[String]) -> Resolver {
        Resolver::with_components(self.components.iter().chain(extra).cloned())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components: default_components(),
            extension: default_extension(),
        }
    }
}
