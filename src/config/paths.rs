use std::path::PathBuf;

use super::{ConfigError, FileAccess};

/// Name of the config file inside the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".gatorconfig.json";

/// Utility struct for locating the configuration file
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the path to the config file: `<home>/.gatorconfig.json`
    ///
    /// The home directory is resolved through `fs`, never from the process
    /// environment directly.
    ///
    /// # Errors
    /// Returns [`ConfigError::PathResolution`] if the home directory cannot be determined
    pub fn config_file(fs: &dyn FileAccess) -> Result<PathBuf, ConfigError> {
        let home = fs
            .home_dir()
            .map_err(|source| ConfigError::PathResolution { source })?;

        Ok(home.join(CONFIG_FILE_NAME))
    }
}
