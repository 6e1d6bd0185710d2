//! Path resolution for the proxy config file

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = ".claude-code-router";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Location of the proxy config document. Passed explicitly to every
/// command; nothing in the workspace reads a global path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub config_file: PathBuf,
}

impl Paths {
    /// Default location under the user's home directory
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(Self::under_home(&home))
    }

    pub fn under_home(home: &Path) -> Self {
        Self {
            config_file: home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        }
    }

    pub fn with_config_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: path.into(),
        }
    }

    /// Use the override when given, otherwise the default location
    pub fn resolve(config_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        match config_override {
            Some(path) => Ok(Self::with_config_file(path)),
            None => Self::new(),
        }
    }
}
