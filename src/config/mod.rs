//! Persisted user configuration.
//!
//! The configuration is a small JSON file in the user's home directory
//! holding the database URL and the name of the logged-in user. All reads
//! and writes go through a [`FileAccess`] so the logic is testable without a
//! real filesystem.

mod error;
mod filesystem;
mod paths;

pub use error::ConfigError;
pub use filesystem::{FileAccess, MemoryFileAccess, OsFileAccess};
pub use paths::{CONFIG_FILE_NAME, ConfigPaths};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Permission bits for the config file: `rw-r--r--`.
const CONFIG_FILE_MODE: u32 = 0o644;

/// Main configuration structure for gator.
///
/// Serialized with the keys `db_url` and `current_user_name`, in that order.
/// Keys missing from the file default to an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Connection string for the user database.
    #[serde(default)]
    pub db_url: String,

    /// Name of the currently logged-in user. Empty when nobody has logged in.
    #[serde(default)]
    pub current_user_name: String,
}

impl Config {
    /// Loads the config from `~/.gatorconfig.json`.
    ///
    /// # Errors
    /// - [`ConfigError::PathResolution`] if the home directory cannot be resolved
    /// - [`ConfigError::Read`] if the file is missing or unreadable
    /// - [`ConfigError::Parse`] if the file is not valid config JSON
    #[instrument(skip(fs))]
    pub fn load(fs: &dyn FileAccess) -> Result<Self, ConfigError> {
        let path = ConfigPaths::config_file(fs)?;

        let bytes = fs.read_file(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config = serde_json::from_slice(&bytes)
            .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Writes the config to `~/.gatorconfig.json` as indented JSON.
    ///
    /// # Errors
    /// - [`ConfigError::PathResolution`] if the home directory cannot be resolved
    /// - [`ConfigError::Serialize`] if encoding fails
    /// - [`ConfigError::Write`] if the file cannot be written
    #[instrument(skip(self, fs))]
    pub fn save(&self, fs: &dyn FileAccess) -> Result<(), ConfigError> {
        let path = ConfigPaths::config_file(fs)?;

        let data = serde_json::to_vec_pretty(self).map_err(ConfigError::Serialize)?;

        fs.write_file(&path, &data, CONFIG_FILE_MODE)
            .map_err(|source| ConfigError::Write {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Sets the current user and persists the config.
    ///
    /// An empty `username` is rejected before anything is touched. Otherwise
    /// the field is updated first and then saved, so on a save failure the
    /// in-memory value no longer matches the file. Call [`Config::load`] to
    /// reconcile if that matters.
    ///
    /// # Errors
    /// - [`ConfigError::NoUsernameSupplied`] if `username` is empty
    /// - any error from [`Config::save`]
    pub fn set_user(&mut self, fs: &dyn FileAccess, username: &str) -> Result<(), ConfigError> {
        if username.is_empty() {
            return Err(ConfigError::NoUsernameSupplied);
        }

        self.current_user_name = username.to_string();
        self.save(fs)
    }
}

#[cfg(test)]
mod tests;
