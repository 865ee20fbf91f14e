//! App Configuration
//!
//! Optional `config.json` in the app config directory. A missing file means
//! defaults; unknown keys are ignored.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::DomainResult;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file name inside the app data directory
    pub db_file_name: String,
    /// Log file stem inside the app log directory
    pub log_app_name: String,
    /// Write stock and shopping list through to the database
    pub persist: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_file_name: "fridge_control.db".into(),
            log_app_name: "FridgeControl".into(),
            persist: true,
        }
    }
}

impl AppConfig {
    pub fn config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    pub fn load(config_dir: &Path) -> DomainResult<Self> {
        let config_path = Self::config_path(config_dir);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: AppConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, config_dir: &Path) -> DomainResult<()> {
        std::fs::create_dir_all(config_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::config_path(config_dir), content)?;
        Ok(())
    }

    /// Database location inside `data_dir`
    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.db_file_name)
    }
}
