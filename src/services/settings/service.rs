use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::SchedulerConfig;

const CONFIG_FILE_NAME: &str = "scheduler.toml";

/// Loads and saves [`SchedulerConfig`] as a TOML file.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the per-user config location, if the platform has one
    pub fn with_default_path() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "RustScheduler", "Scheduler")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration; a missing file yields the defaults
    pub fn load(&self) -> Result<SchedulerConfig> {
        if !self.path.exists() {
            log::info!(
                "No scheduler config at {}, using defaults",
                self.path.display()
            );
            return Ok(SchedulerConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config from {}", self.path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("failed to parse config from {}", self.path.display()))?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<SchedulerConfig> {
        let config: SchedulerConfig = toml::from_str(content)?;
        config
            .validate()
            .map_err(|e| anyhow!("Invalid scheduler config: {}", e))?;
        Ok(config)
    }

    /// Save settings, creating the parent directory when needed
    pub fn save(&self, config: &SchedulerConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid scheduler config: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }

    /// Reset the file to defaults
    pub fn reset(&self) -> Result<()> {
        self.save(&SchedulerConfig::default())
    }
}
