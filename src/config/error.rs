use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while resolving, loading, or saving the configuration file.
///
/// Each I/O variant keeps the original [`io::Error`] as its source so callers
/// can inspect the [`io::ErrorKind`] instead of matching on messages.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `set_user` was called with an empty name.
    #[error("no username supplied")]
    NoUsernameSupplied,

    /// The directory holding the config file could not be determined.
    #[error("failed to resolve config file path: {source}")]
    PathResolution {
        /// Underlying directory lookup error
        #[source]
        source: io::Error,
    },

    /// The config file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The config file is not valid JSON of the expected shape.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory config could not be encoded.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The config file could not be written.
    #[error("failed to write config file '{path}': {source}")]
    Write {
        /// Path that was written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Returns the I/O error kind behind this error, if it came from the filesystem.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ConfigError::PathResolution { source }
            | ConfigError::Read { source, .. }
            | ConfigError::Write { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
