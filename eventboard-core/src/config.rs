//! Global eventboard configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::blob::FileBlobStore;
use crate::error::{EventBoardError, EventBoardResult};
use crate::store::EventStore;

static DEFAULT_DATA_DIR: &str = "~/.local/share/eventboard";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/eventboard/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    #[serde(
        default = "default_data_dir",
        skip_serializing_if = "is_default_data_dir"
    )]
    pub data_dir: PathBuf,
}

impl BoardConfig {
    pub fn load() -> EventBoardResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: BoardConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| EventBoardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventBoardError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn config_path() -> EventBoardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventBoardError::Config("Could not determine config directory".into()))?
            .join("eventboard");

        Ok(config_dir.join("config.toml"))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Open the event store over the configured data directory.
    pub fn open_store(&self) -> EventStore {
        EventStore::new(Box::new(FileBlobStore::new(self.data_path())))
    }

    /// Save the current config to ~/.config/eventboard/config.toml
    pub fn save(&self) -> EventBoardResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| EventBoardError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| EventBoardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &std::path::Path) -> EventBoardResult<()> {
        let contents = format!(
            "\
# eventboard configuration

# Where the event list is stored:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventBoardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventBoardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_path_expands_tilde() {
        let Some(home) = dirs::home_dir() else { return };

        let config = BoardConfig {
            data_dir: PathBuf::from("~/events"),
        };

        assert_eq!(config.data_path(), home.join("events"));
    }

    #[test]
    fn test_data_path_keeps_absolute_paths() {
        let config = BoardConfig {
            data_dir: PathBuf::from("/var/lib/eventboard"),
        };

        assert_eq!(config.data_path(), PathBuf::from("/var/lib/eventboard"));
    }
}
