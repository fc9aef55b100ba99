use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscographConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Development mode: error pages include the error detail.
    #[serde(default = "default_dev")]
    pub dev: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_dev() -> bool {
    false
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            dev: default_dev(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Optional YAML seed file replacing the built-in catalog.
    #[serde(default)]
    pub seed: Option<String>,
}

impl DiscographConfig {
    /// Load the config from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: DiscographConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from("discograph.yml")
    }

    pub fn seed_path(&self) -> Option<PathBuf> {
        self.catalog.seed.as_ref().map(PathBuf::from)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
