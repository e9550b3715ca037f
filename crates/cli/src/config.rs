//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Defaults {
    /// Prime characteristic used when `--prime` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prime: Option<u64>,

    /// Modulus coefficients, lowest degree first, used when `--modulus` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modulus: Option<Vec<i64>>,

    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            prime: None,
            modulus: None,
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "table".to_string()
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    fn load_default() -> Result<Self> {
        let config_paths = [
            dirs::config_dir().map(|d| d.join("fieldlog").join("config.toml")),
            Some(PathBuf::from("fieldlog.toml")),
            Some(PathBuf::from(".fieldlog.toml")),
        ];

        for config_path in config_paths.into_iter().flatten() {
            if config_path.exists() {
                log::debug!("loading configuration from {}", config_path.display());
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Self::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    #[cfg(test)]
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
