// Persistent configuration: tool invocation plus the stored encoder settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::engine::{NvidiaSmi, SettingValue, Settings};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,

    /// Encoder settings keyed by option name (e.g. `preset = "p4"`)
    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Device listing command
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments for the device listing command
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Encoder used when printing full command lines
    #[serde(default = "default_encoder")]
    pub encoder: String,
}

fn default_program() -> String {
    "nvidia-smi".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-L".to_string()]
}

fn default_encoder() -> String {
    "h264_nvenc".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            encoder: default_encoder(),
        }
    }
}

impl ToolConfig {
    pub fn device_source(&self) -> NvidiaSmi {
        NvidiaSmi {
            program: self.program.clone(),
            args: self.args.clone(),
        }
    }
}

impl Settings for Config {
    fn get_setting(&self, key: &str) -> Option<SettingValue> {
        self.settings.get(key).cloned()
    }

    fn set_setting(&mut self, key: &str, value: SettingValue) {
        self.settings.insert(key.to_string(), value);
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("nvencfg")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("nvencfg")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from `path`, or create default if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

            Ok(config)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            // (e.g., if the directory isn't writable)
            if let Err(e) = config.save_to(path) {
                warn!(
                    path = %path.display(),
                    "Could not create default config file ({:#}); using built-in defaults", e
                );
            }

            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Create a default config file at `path` if it doesn't exist.
    /// Returns whether a file was written.
    pub fn ensure_default(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Config::default().save_to(path)?;
        Ok(true)
    }
}
