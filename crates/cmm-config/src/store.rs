//! Load and persist the proxy config document

use crate::error::ConfigError;
use crate::io::{atomic_write, read_json};
use crate::paths::Paths;
use crate::types::CcrConfig;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    paths: Paths,
}

impl ConfigStore {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }

    pub fn path(&self) -> &Path {
        &self.paths.config_file
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    pub fn load(&self) -> Result<CcrConfig, ConfigError> {
        let config: CcrConfig = read_json(self.path())?;
        tracing::info!(
            path = %self.path().display(),
            providers = config.providers().len(),
            "loaded router config"
        );
        Ok(config)
    }

    /// Pretty-printed with two-space indentation, replaced atomically
    pub fn save(&self, config: &CcrConfig) -> Result<(), ConfigError> {
        let mut json = serde_json::to_string_pretty(config)?;
        json.push('\n');
        atomic_write(self.path(), json.as_bytes())?;
        tracing::info!(path = %self.path().display(), "saved router config");
        Ok(())
    }
}
