//! Configuration file handling.
//!
//! The note layout lives in a JSON file:
//! - `--config <path>` on the command line wins
//! - then `STANDUP_CONFIG`
//! - then `<config dir>/standup/config.json`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use standup_core::models::NoteConfig;

const APP_NAME: &str = "standup";
const CONFIG_FILE: &str = "config.json";
pub const CONFIG_ENV: &str = "STANDUP_CONFIG";

/// Location of the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the file from an explicit path, the environment, or the
    /// user's config directory.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Ok(Self::new(path));
            }
        }
        let mut path =
            config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load and validate the configuration. A missing file yields defaults.
    pub fn load(&self) -> Result<NoteConfig> {
        if !self.exists() {
            tracing::debug!("No config at {}, using defaults", self.path.display());
            return Ok(NoteConfig::default());
        }

        let content = fs::read_to_string(&self.path).context("Failed to read config file")?;
        let config: NoteConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        config.validate().context("Invalid config file")?;

        Ok(config)
    }

    /// Like [`load`](Self::load) but falls back to defaults on any error.
    pub fn load_or_default(&self) -> NoteConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                NoteConfig::default()
            }
        }
    }

    pub fn save(&self, config: &NoteConfig) -> Result<()> {
        config.validate().context("Refusing to save invalid config")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.path, content).context("Failed to write config file")?;

        tracing::info!("Saved config to {}", self.path.display());
        Ok(())
    }
}
